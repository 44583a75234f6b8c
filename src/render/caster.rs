use crate::core::{Cell, Coord, Grid};

/// Paso de marcha del rayo, en unidades de mundo.
const STEP: f32 = 0.1;

pub struct RayHit {
    pub distance: f32,
    /// Distancia a la que el rayo cruzó por primera vez la celda meta,
    /// si lo hizo antes de pegar con el muro.
    pub goal_dist: Option<f32>,
}

/// Marcha desde `(ox, oy)` a lo largo de `angle` (radianes) hasta caer en
/// una celda de muro. `None` si ningún muro aparece dentro de `max_len`;
/// el grid responde `Wall` fuera de rango, así que nunca se indexa afuera.
pub fn cast_ray(
    grid: &Grid,
    goal: Coord,
    ox: f32,
    oy: f32,
    angle: f32,
    cell_size: f32,
    max_len: f32,
) -> Option<RayHit> {
    let sin = angle.sin();
    let cos = angle.cos();
    let mut length = 0.0_f32;
    let mut goal_dist = None;

    loop {
        length += STEP;
        if length > max_len {
            return None;
        }
        let cx = ((ox + length * sin) / cell_size).floor() as i32;
        let cy = ((oy + length * cos) / cell_size).floor() as i32;
        if goal_dist.is_none() && Coord::new(cx, cy) == goal {
            goal_dist = Some(length);
        }
        if grid.get(cx, cy) == Cell::Wall {
            return Some(RayHit { distance: length, goal_dist });
        }
    }
}

/// Largo máximo útil de un rayo: la diagonal del grid en unidades de mundo.
pub fn ray_limit(grid: &Grid, cell_size: f32) -> f32 {
    let w = grid.width() as f32 * cell_size;
    let h = grid.height() as f32 * cell_size;
    (w * w + h * h).sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::maze::Grid;

    /// Corredor de 3x1 cuartos conectados en línea.
    fn corridor() -> Grid {
        let mut grid = Grid::walled(3, 1);
        grid.carve(2, 1);
        grid.carve(4, 1);
        grid
    }

    #[test]
    fn head_on_ray_measures_the_marched_distance() {
        let grid = corridor();
        // centrado en el cuarto (1,1), mirando al este por el corredor;
        // el muro empieza en x = 192, o sea a 144 unidades
        let (ox, oy) = (48.0, 48.0);
        let angle = 90.0_f32.to_radians(); // sin=1, cos=0 → avanza en +x
        let hit = cast_ray(&grid, Coord::new(5, 1), ox, oy, angle, 32.0, 1000.0).unwrap();
        assert!((hit.distance - 144.0).abs() < 0.2, "distance {}", hit.distance);
        // con ángulo relativo cero la corrección coseno es 1
        let adjusted = hit.distance * 0.0_f32.cos();
        assert_eq!(adjusted, hit.distance);
    }

    #[test]
    fn goal_crossing_is_recorded_before_the_wall() {
        let grid = corridor();
        let angle = 90.0_f32.to_radians();
        let hit = cast_ray(&grid, Coord::new(3, 1), 48.0, 48.0, angle, 32.0, 1000.0).unwrap();
        let goal_dist = hit.goal_dist.expect("ray crosses the goal cell");
        // la celda (3,1) empieza en x = 96, a 48 unidades del origen del rayo
        assert!((goal_dist - 48.0).abs() < 0.2, "goal_dist {goal_dist}");
        assert!(goal_dist < hit.distance);
    }

    #[test]
    fn ray_away_from_the_goal_records_nothing() {
        let grid = corridor();
        let angle = 270.0_f32.to_radians(); // hacia -x, pega con el borde
        let hit = cast_ray(&grid, Coord::new(5, 1), 48.0, 48.0, angle, 32.0, 1000.0).unwrap();
        assert!(hit.goal_dist.is_none());
        assert!((hit.distance - 16.0).abs() < 0.2, "distance {}", hit.distance);
    }

    #[test]
    fn short_budget_returns_the_no_wall_sentinel() {
        let grid = corridor();
        let angle = 90.0_f32.to_radians();
        assert!(cast_ray(&grid, Coord::new(5, 1), 48.0, 48.0, angle, 32.0, 20.0).is_none());
    }

    #[test]
    fn ray_limit_covers_the_whole_grid() {
        let grid = corridor();
        let limit = ray_limit(&grid, 32.0);
        assert!(limit > 7.0 * 32.0);
        let angle = 90.0_f32.to_radians();
        assert!(cast_ray(&grid, Coord::new(5, 1), 48.0, 48.0, angle, 32.0, limit).is_some());
    }
}
