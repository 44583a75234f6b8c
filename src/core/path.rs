//! Shortest-route search over the maze grid.

use std::collections::VecDeque;

use thiserror::Error;

use super::compass::Compass;
use super::maze::{Coord, Grid};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PathError {
    #[error("no open route from {start:?} to {goal:?}")]
    Unreachable { start: Coord, goal: Coord },
}

/// BFS de 4 direcciones sobre celdas abiertas. En un maze perfecto siempre
/// hay ruta entre cuartos, pero un grid desconectado responde con un error
/// explícito, nunca con una ruta vacía. Cada llamada parte de cero.
pub fn shortest_path(grid: &Grid, start: Coord, goal: Coord) -> Result<Vec<Coord>, PathError> {
    if !grid.is_open(start) || !grid.is_open(goal) {
        return Err(PathError::Unreachable { start, goal });
    }
    if start == goal {
        return Ok(vec![start]);
    }

    let width = grid.width();
    let index = |c: Coord| c.y as usize * width + c.x as usize;
    let mut prev: Vec<Option<Coord>> = vec![None; width * grid.height()];
    let mut queue = VecDeque::from([start]);
    prev[index(start)] = Some(start);

    while let Some(current) = queue.pop_front() {
        if current == goal {
            break;
        }
        for dir in Compass::ALL {
            let (dx, dy) = dir.map_step();
            let next = Coord::new(current.x + dx, current.y + dy);
            if !grid.is_open(next) || prev[index(next)].is_some() {
                continue;
            }
            prev[index(next)] = Some(current);
            queue.push_back(next);
        }
    }

    if prev[index(goal)].is_none() {
        return Err(PathError::Unreachable { start, goal });
    }

    // retroceder por los padres desde la meta hasta el inicio
    let mut route = vec![goal];
    let mut current = goal;
    while current != start {
        if let Some(parent) = prev[index(current)] {
            current = parent;
            route.push(current);
        } else {
            break;
        }
    }
    route.reverse();
    Ok(route)
}
