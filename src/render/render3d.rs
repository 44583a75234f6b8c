use raylib::prelude::*;

use crate::core::{Actor, Coord, Grid};
use crate::framebuffer::Framebuffer;

use super::Camera;
use super::caster::{cast_ray, ray_limit};

/// Colores
const SKY: Color = Color::new(0, 255, 255, 255);
const FLOOR: Color = Color::new(255, 175, 175, 255);
const PORTAL: Color = Color::new(0, 0, 255, 255);

/// Media altura del portal en unidades de mundo (un "muro" chiquito).
const PORTAL_HALF: f32 = 8.0;

/// Pasada en primera persona: cielo y suelo planos, una línea vertical por
/// columna sombreada por distancia, y el portal de la meta encima cuando el
/// rayo la cruzó antes del muro. Función pura de (grid, pose, meta).
pub fn render_3d(fb: &mut Framebuffer, cam: &Camera, grid: &Grid, goal: Coord, actor: &Actor) {
    let w = cam.width;
    let half = cam.height / 2;

    fb.set_current_color(SKY);
    for y in 0..half {
        for x in 0..w {
            fb.set_pixel(x as u32, y as u32);
        }
    }
    fb.set_current_color(FLOOR);
    for y in half..cam.height {
        for x in 0..w {
            fb.set_pixel(x as u32, y as u32);
        }
    }

    let max_len = ray_limit(grid, cam.cell_size);
    for i in -(w / 2)..(w / 2) {
        let angle = (actor.direction + i as f32 * cam.angle_inc).to_radians();
        let Some(hit) = cast_ray(grid, goal, actor.x, actor.y, angle, cam.cell_size, max_len)
        else {
            // sin muro dentro del rango: columna sin dibujar
            continue;
        };

        // corrección de ojo de pez
        let relative = actor.direction.to_radians() - angle;
        let adjusted = hit.distance * relative.cos();
        let wall_height = cam.cell_size * cam.proj_dist / adjusted;

        let intensity = (adjusted.round() as i32).clamp(0, 255);
        let shade = (255 - intensity) as u8;
        let x = (w - 1) - (i + w / 2);

        vline(
            fb,
            x,
            half as f32 - wall_height,
            half as f32 + wall_height,
            Color::new(shade, 0, shade, 255),
        );

        // el portal se asoma solo si quedó delante del muro de esta columna
        if let Some(goal_dist) = hit.goal_dist {
            if adjusted > goal_dist {
                let goal_height = PORTAL_HALF * cam.proj_dist / goal_dist;
                vline(
                    fb,
                    x,
                    half as f32 - goal_height,
                    half as f32 + goal_height,
                    PORTAL,
                );
            }
        }
    }
}

fn vline(fb: &mut Framebuffer, x: i32, top: f32, bottom: f32, color: Color) {
    let y0 = top.max(0.0) as i32;
    let y1 = bottom.min(fb.height as f32 - 1.0) as i32;
    fb.set_current_color(color);
    for y in y0..=y1 {
        fb.set_pixel(x as u32, y as u32);
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

    #[test]
    fn frame_gets_sky_floor_and_a_wall_column() {
        let grid = corridor();
        let cam = Camera::new(64, 48, 75.0, 32.0);
        let mut fb = Framebuffer::new(64, 48);
        let actor = Actor::at_cell(Coord::new(1, 1), 90.0);
        render_3d(&mut fb, &cam, &grid, Coord::new(5, 1), &actor);

        // columna central: el muro queda lejos, así que arriba y abajo
        // sobreviven cielo y suelo
        assert_eq!(fb.color_buffer[32], SKY);
        assert_eq!(fb.color_buffer[(47 * 64 + 32) as usize], FLOOR);
        // la franja central debe tener columnas de muro (tinte magenta)
        let mid_row = &fb.color_buffer[(24 * 64) as usize..(25 * 64) as usize];
        assert!(
            mid_row.iter().any(|c| c.g == 0 && c.r == c.b && c.r < 255),
            "no wall column on the center row"
        );
    }
}
