use raylib::prelude::*;

use crate::core::{Actor, Grid, cell_at};

/// Estado lógico de entrada por tick; el core solo ve estos flags, nunca
/// códigos de tecla.
#[derive(Clone, Copy, Default)]
pub struct InputState {
    pub forward: bool,
    pub backward: bool,
    pub turn_left: bool,
    pub turn_right: bool,
    pub reset: bool,
    pub toggle_map: bool,
    pub to_menu: bool,
}

/// WASD + flechas; M mapa, R reinicio, ESC al menú.
pub fn poll_input(rl: &RaylibHandle) -> InputState {
    InputState {
        forward: rl.is_key_down(KeyboardKey::KEY_W) || rl.is_key_down(KeyboardKey::KEY_UP),
        backward: rl.is_key_down(KeyboardKey::KEY_S) || rl.is_key_down(KeyboardKey::KEY_DOWN),
        turn_left: rl.is_key_down(KeyboardKey::KEY_A) || rl.is_key_down(KeyboardKey::KEY_LEFT),
        turn_right: rl.is_key_down(KeyboardKey::KEY_D) || rl.is_key_down(KeyboardKey::KEY_RIGHT),
        reset: rl.is_key_pressed(KeyboardKey::KEY_R),
        toggle_map: rl.is_key_pressed(KeyboardKey::KEY_M),
        to_menu: rl.is_key_pressed(KeyboardKey::KEY_ESCAPE),
    }
}

/// Aplica los flags al jugador. Los avances usan el protocolo de snapshot:
/// mover, probar la celda discretizada y revertir si cayó en muro.
pub fn apply_input(actor: &mut Actor, grid: &Grid, input: InputState) {
    if input.forward {
        try_step(actor, grid, Actor::move_forward);
    }
    if input.backward {
        try_step(actor, grid, Actor::move_backward);
    }
    if input.turn_left {
        actor.turn_left();
    }
    if input.turn_right {
        actor.turn_right();
    }
    if input.reset {
        actor.reset();
    }
}

fn try_step(actor: &mut Actor, grid: &Grid, step: fn(&mut Actor)) {
    let (prev_x, prev_y) = (actor.x, actor.y);
    step(actor);
    if grid.is_open(cell_at(actor.x, actor.y)) {
        actor.sync_cell();
    } else {
        actor.x = prev_x;
        actor.y = prev_y;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::maze::{Coord, Grid};

    fn corridor() -> Grid {
        let mut grid = Grid::walled(3, 1);
        grid.carve(2, 1);
        grid.carve(4, 1);
        grid
    }

    #[test]
    fn forward_into_a_wall_reverts_the_move() {
        let grid = corridor();
        // pegado al muro sur del corredor, mirando hacia él (heading 0 → +y)
        let mut actor = Actor::at_cell(Coord::new(1, 1), 0.0);
        actor.y = 63.5;
        let input = InputState { forward: true, ..Default::default() };
        apply_input(&mut actor, &grid, input);
        assert_eq!(actor.y, 63.5);
        assert_eq!(actor.pos, Coord::new(1, 1));
    }

    #[test]
    fn forward_in_the_clear_advances_and_syncs_the_cell() {
        let grid = corridor();
        let mut actor = Actor::at_cell(Coord::new(1, 1), 90.0); // hacia +x
        for _ in 0..40 {
            let input = InputState { forward: true, ..Default::default() };
            apply_input(&mut actor, &grid, input);
        }
        assert_eq!(actor.pos, Coord::new(2, 1));
    }
}
