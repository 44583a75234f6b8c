//! Software-rendered views of the maze.
//!
//! Re-exports:
//! - `caster`: bounded ray march with goal detection
//! - `render3d`: first-person column pass
//! - `render2d`: top-down map pass

pub mod caster;
pub mod render2d;
pub mod render3d;

pub use caster::{RayHit, cast_ray};
pub use render2d::render_2d;
pub use render3d::render_3d;

/// Parámetros de proyección, fijos al construir.
pub struct Camera {
    pub width: i32,
    pub height: i32,
    pub angle_inc: f32, // grados por columna
    pub proj_dist: f32,
    pub cell_size: f32,
}

impl Camera {
    pub fn new(width: i32, height: i32, fov_degrees: f32, cell_size: f32) -> Self {
        Self {
            width,
            height,
            angle_inc: fov_degrees / width as f32,
            proj_dist: (height as f32 * 0.5) / (fov_degrees * 0.5).to_radians().tan(),
            cell_size,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn projection_constants_follow_the_fov() {
        let cam = Camera::new(1024, 768, 75.0, 32.0);
        assert_eq!(cam.angle_inc, 75.0 / 1024.0);
        let expected = 384.0 / (37.5_f32.to_radians().tan());
        assert!((cam.proj_dist - expected).abs() < 1e-3);
    }
}
