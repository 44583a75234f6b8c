//! Continuous pose and motion shared by the player and the bot.

use super::maze::Coord;

/// Unidades de mundo por celda del grid.
pub const CELL: f32 = 32.0;

const MOVE_SPEED: f32 = 1.0;
const ROT_SPEED: f32 = 2.0;

/// Posición continua más heading en grados `[0, 360)`. Quién lo maneja
/// (teclado o bot) decide afuera; acá solo vive el modelo de movimiento.
/// No hay colisión: el caller toma snapshot, mueve, prueba la celda y
/// revierte si cayó en muro.
pub struct Actor {
    pub x: f32,
    pub y: f32,
    pub direction: f32,
    /// Celda discretizada, refrescada con `sync_cell`.
    pub pos: Coord,
    start_x: f32,
    start_y: f32,
    time: f32,
}

impl Actor {
    /// Spawn en el centro de `cell` mirando `direction`.
    pub fn at_cell(cell: Coord, direction: f32) -> Self {
        let x = cell.x as f32 * CELL + CELL * 0.5;
        let y = cell.y as f32 * CELL + CELL * 0.5;
        Self {
            x,
            y,
            direction: normalize_turn(direction),
            pos: cell,
            start_x: x,
            start_y: y,
            time: 0.0,
        }
    }

    /// Teletransporta al centro de `cell` sin tocar el timer.
    pub fn place_at(&mut self, cell: Coord, direction: f32) {
        self.x = cell.x as f32 * CELL + CELL * 0.5;
        self.y = cell.y as f32 * CELL + CELL * 0.5;
        self.direction = normalize_turn(direction);
        self.pos = cell;
    }

    pub fn turn_left(&mut self) {
        self.direction = normalize_turn(self.direction + ROT_SPEED);
    }

    pub fn turn_right(&mut self) {
        self.direction = normalize_turn(self.direction - ROT_SPEED);
    }

    // heading 0 avanza hacia +y; el marco de trig hereda el `dir + 90`
    // del juego original
    pub fn move_forward(&mut self) {
        let a = (self.direction + 90.0).to_radians();
        self.x -= a.cos() * MOVE_SPEED;
        self.y += a.sin() * MOVE_SPEED;
    }

    pub fn move_backward(&mut self) {
        let a = (self.direction + 90.0).to_radians();
        self.x += a.cos() * MOVE_SPEED;
        self.y -= a.sin() * MOVE_SPEED;
    }

    /// Refresca la celda discretizada desde la posición continua.
    pub fn sync_cell(&mut self) {
        self.pos = cell_at(self.x, self.y);
    }

    /// Vuelve al spawn, mirando al sur, con el timer en cero.
    pub fn reset(&mut self) {
        self.x = self.start_x;
        self.y = self.start_y;
        self.direction = 0.0;
        self.time = 0.0;
        self.sync_cell();
    }

    pub fn add_time(&mut self, dt: f32) {
        self.time += dt;
    }

    /// Segundos corridos en el maze actual.
    pub fn time(&self) -> f32 {
        self.time
    }
}

/// Celda bajo una posición de mundo.
pub fn cell_at(x: f32, y: f32) -> Coord {
    Coord::new((x / CELL).floor() as i32, (y / CELL).floor() as i32)
}

/// Lleva cualquier ángulo a `[0, 360)`.
pub fn normalize_turn(angle: f32) -> f32 {
    let a = angle % 360.0;
    if a < 0.0 { a + 360.0 } else { a }
}
