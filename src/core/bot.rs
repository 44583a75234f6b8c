//! Autopilot that walks a precomputed route one tick at a time.

use std::collections::VecDeque;

use super::actor::{Actor, normalize_turn};
use super::compass::Compass;
use super::maze::Coord;

/// Ticks de avance extra al llegar a una celda, para asentarse visualmente
/// en el centro antes de elegir el siguiente objetivo.
const CENTER_TICKS: u32 = 16;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum BotStatus {
    Running,
    Finished,
}

/// Máquina de estados por tick: girar hasta alinear, avanzar hasta la
/// siguiente celda, centrarse y repetir; `Finished` es terminal.
pub struct Bot {
    remaining: VecDeque<Coord>,
    next_pos: Coord,
    next_dir: f32,
    turn_left: bool,
    turn_right: bool,
    center: bool,
    center_moves: u32,
    finished: bool,
}

impl Bot {
    /// Parks the actor at the route head facing south and aims the state
    /// machine at the second cell. A one-cell route is already finished.
    pub fn new(route: Vec<Coord>, actor: &mut Actor) -> Self {
        assert!(!route.is_empty(), "bot route must contain at least the start cell");
        let mut remaining: VecDeque<Coord> = route.into();
        let first = remaining.pop_front().expect("route checked non-empty");
        actor.place_at(first, 0.0);

        let mut bot = Self {
            remaining,
            next_pos: first,
            next_dir: 0.0,
            turn_left: false,
            turn_right: false,
            center: false,
            center_moves: 0,
            finished: false,
        };
        match bot.remaining.pop_front() {
            Some(next) => {
                bot.next_pos = next;
                bot.next_dir = find_facing(actor.pos, next);
            }
            None => bot.finished = true,
        }
        bot
    }

    /// Un tick de la máquina. El orden de los bloques importa: durante el
    /// centrado el avance normal sigue corriendo si ya está alineado.
    pub fn update(&mut self, actor: &mut Actor) -> BotStatus {
        if self.finished {
            return BotStatus::Finished;
        }

        if actor.direction != self.next_dir && !self.center {
            // heurística de dos ramas: izquierda solo cuando un cuarto de
            // vuelta a la izquierda cae exacto en el rumbo y nada se ha
            // decidido aún; todo lo demás gira a la derecha
            if normalize_turn(actor.direction + 90.0) == self.next_dir
                && !self.turn_left
                && !self.turn_right
            {
                self.turn_left = true;
            } else {
                self.turn_right = true;
            }
            if self.turn_left {
                actor.turn_left();
            } else {
                actor.turn_right();
            }
        }

        if actor.pos != self.next_pos && actor.direction == self.next_dir {
            actor.move_forward();
            actor.sync_cell();
        }

        if actor.pos == self.next_pos && !self.center {
            match self.remaining.pop_front() {
                Some(next) => {
                    self.center = true;
                    self.next_pos = next;
                    self.next_dir = find_facing(actor.pos, next);
                    self.turn_left = false;
                    self.turn_right = false;
                }
                None => {
                    self.finished = true;
                    return BotStatus::Finished;
                }
            }
        }

        if self.center {
            if self.center_moves < CENTER_TICKS {
                actor.move_forward();
                self.center_moves += 1;
            } else {
                self.center = false;
                self.center_moves = 0;
            }
        }

        BotStatus::Running
    }
}

/// Rumbo hacia una celda vecina según la brújula; 0 si no son vecinas.
fn find_facing(from: Coord, to: Coord) -> f32 {
    for dir in Compass::ALL {
        let (dx, dy) = dir.map_step();
        if Coord::new(from.x + dx, from.y + dy) == to {
            return dir.heading();
        }
    }
    0.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::maze::{Coord, Maze};
    use crate::core::path::shortest_path;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn coords(cells: &[(i32, i32)]) -> Vec<Coord> {
        cells.iter().map(|&(x, y)| Coord::new(x, y)).collect()
    }

    #[test]
    fn quarter_turn_to_the_left_commits_left() {
        // al este desde heading 0: normalize(0 + 90) == 90
        let mut actor = Actor::at_cell(Coord::new(1, 1), 0.0);
        let mut bot = Bot::new(coords(&[(1, 1), (2, 1)]), &mut actor);
        bot.update(&mut actor);
        assert_eq!(actor.direction, 2.0);
    }

    #[test]
    fn any_other_turn_commits_right() {
        // al oeste desde heading 0 hay que llegar a 270
        let mut actor = Actor::at_cell(Coord::new(1, 1), 0.0);
        let mut bot = Bot::new(coords(&[(1, 1), (0, 1)]), &mut actor);
        bot.update(&mut actor);
        assert_eq!(actor.direction, 358.0);
    }

    #[test]
    fn single_cell_route_is_finished_immediately() {
        let mut actor = Actor::at_cell(Coord::new(1, 1), 0.0);
        let mut bot = Bot::new(coords(&[(1, 1)]), &mut actor);
        assert_eq!(bot.update(&mut actor), BotStatus::Finished);
        assert_eq!(actor.pos, Coord::new(1, 1));
        // terminal: más ticks no mueven nada
        assert_eq!(bot.update(&mut actor), BotStatus::Finished);
        assert_eq!(actor.pos, Coord::new(1, 1));
    }

    #[test]
    fn straight_route_terminates_at_the_last_cell() {
        let route = coords(&[(1, 1), (1, 2), (1, 3)]);
        let mut actor = Actor::at_cell(Coord::new(1, 1), 0.0);
        let mut bot = Bot::new(route.clone(), &mut actor);
        let mut ticks = 0;
        while bot.update(&mut actor) == BotStatus::Running {
            ticks += 1;
            assert!(ticks < 200 * route.len(), "bot never finished");
        }
        assert_eq!(actor.pos, Coord::new(1, 3));
    }

    #[test]
    fn generated_maze_route_is_walked_to_the_goal() {
        for seed in [1_u64, 9, 23] {
            let maze = Maze::generate(5, 5, &mut StdRng::seed_from_u64(seed));
            let route = shortest_path(&maze.grid, maze.start, maze.goal).unwrap();
            let last = route[route.len() - 1];

            let mut actor = Actor::at_cell(maze.start, 0.0);
            let mut bot = Bot::new(route.clone(), &mut actor);
            let mut ticks = 0;
            while bot.update(&mut actor) == BotStatus::Running {
                ticks += 1;
                assert!(ticks < 200 * route.len(), "seed {seed}: bot never finished");
            }
            assert_eq!(actor.pos, last, "seed {seed}");
            assert_eq!(last, maze.goal, "seed {seed}");
        }
    }
}
