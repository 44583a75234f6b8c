use raylib::prelude::*;

use crate::core::{Actor, Cell, Coord, Grid};
use crate::framebuffer::Framebuffer;

/// Píxeles por celda en el minimapa.
const TILE: i32 = 16;
const MARKER_RADIUS: i32 = 5;

const BACKGROUND: Color = Color::new(0, 0, 0, 255);
const OPEN: Color = Color::new(255, 255, 255, 255);
const ROUTE: Color = Color::new(0, 255, 0, 255);
const VIEWER: Color = Color::new(255, 0, 0, 255);
const GOAL: Color = Color::new(0, 0, 255, 255);

/// Pasada 2D: celdas abiertas como cuadros, la ruta activa encima, y el
/// jugador y la meta como círculos. Función pura de sus entradas.
pub fn render_2d(
    fb: &mut Framebuffer,
    grid: &Grid,
    route: Option<&[Coord]>,
    goal: Coord,
    actor: &Actor,
) {
    fill_rect(fb, 0, 0, fb.width as i32, fb.height as i32, BACKGROUND);

    for y in 0..grid.height() as i32 {
        for x in 0..grid.width() as i32 {
            if grid.get(x, y) == Cell::Open {
                fill_rect(fb, x * TILE, y * TILE, TILE, TILE, OPEN);
            }
        }
    }

    if let Some(route) = route {
        for cell in route {
            fill_rect(fb, cell.x * TILE, cell.y * TILE, TILE, TILE, ROUTE);
        }
    }

    // mundo a minimapa: 32 unidades por celda contra 16 px por celda
    fill_circle(fb, (actor.x / 2.0) as i32, (actor.y / 2.0) as i32, MARKER_RADIUS, VIEWER);
    fill_circle(
        fb,
        goal.x * TILE + TILE / 2,
        goal.y * TILE + TILE / 2,
        MARKER_RADIUS,
        GOAL,
    );
}

fn fill_rect(fb: &mut Framebuffer, x0: i32, y0: i32, w: i32, h: i32, color: Color) {
    fb.set_current_color(color);
    for y in y0..y0 + h {
        for x in x0..x0 + w {
            if x >= 0 && y >= 0 {
                fb.set_pixel(x as u32, y as u32);
            }
        }
    }
}

fn fill_circle(fb: &mut Framebuffer, cx: i32, cy: i32, r: i32, color: Color) {
    fb.set_current_color(color);
    for y in cy - r..=cy + r {
        for x in cx - r..=cx + r {
            let (dx, dy) = (x - cx, y - cy);
            if dx * dx + dy * dy <= r * r && x >= 0 && y >= 0 {
                fb.set_pixel(x as u32, y as u32);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::maze::Grid;

    fn corridor() -> Grid {
        let mut grid = Grid::walled(3, 1);
        grid.carve(2, 1);
        grid.carve(4, 1);
        grid
    }

    fn pixel(fb: &Framebuffer, x: i32, y: i32) -> Color {
        fb.color_buffer[(y as u32 * fb.width + x as u32) as usize]
    }

    #[test]
    fn open_cells_walls_and_markers_land_where_expected() {
        let grid = corridor();
        let mut fb = Framebuffer::new(160, 80);
        let actor = Actor::at_cell(Coord::new(1, 1), 0.0);
        render_2d(&mut fb, &grid, None, Coord::new(5, 1), &actor);

        // (3,1) es corredor abierto, (3,0) es muro
        assert_eq!(pixel(&fb, 3 * TILE + 8, TILE + 8), OPEN);
        assert_eq!(pixel(&fb, 3 * TILE + 8, 8), BACKGROUND);
        // jugador en el centro de (1,1): mundo (48,48) → mapa (24,24)
        assert_eq!(pixel(&fb, 24, 24), VIEWER);
        // meta centrada en su celda
        assert_eq!(pixel(&fb, 5 * TILE + 8, TILE + 8), GOAL);
    }

    #[test]
    fn route_overlay_paints_on_top_of_open_cells() {
        let grid = corridor();
        let mut fb = Framebuffer::new(160, 80);
        let actor = Actor::at_cell(Coord::new(1, 1), 0.0);
        let route = [Coord::new(1, 1), Coord::new(2, 1), Coord::new(3, 1)];
        render_2d(&mut fb, &grid, Some(&route), Coord::new(5, 1), &actor);

        assert_eq!(pixel(&fb, 2 * TILE + 8, TILE + 8), ROUTE);
        // la celda abierta fuera de la ruta sigue blanca
        assert_eq!(pixel(&fb, 4 * TILE + 8, TILE + 8), OPEN);
    }
}
