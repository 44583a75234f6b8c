use raylib::prelude::*;

/// Tamaños de maze del menú original: fácil y difícil.
pub const EASY_ROOMS: usize = 10;
pub const HARD_ROOMS: usize = 17;

const MENU_BG: Color = Color::new(0, 255, 255, 255);
const INK: Color = Color::new(20, 20, 40, 255);
const DIM: Color = Color::new(90, 90, 110, 255);

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum MenuAction {
    Easy,
    Hard,
    BotReplay,
    Quit,
}

/// Selección por teclado: 1/2/3, ESC para salir.
pub fn poll_menu(rl: &RaylibHandle) -> Option<MenuAction> {
    if rl.is_key_pressed(KeyboardKey::KEY_ONE) {
        Some(MenuAction::Easy)
    } else if rl.is_key_pressed(KeyboardKey::KEY_TWO) {
        Some(MenuAction::Hard)
    } else if rl.is_key_pressed(KeyboardKey::KEY_THREE) {
        Some(MenuAction::BotReplay)
    } else if rl.is_key_pressed(KeyboardKey::KEY_ESCAPE) {
        Some(MenuAction::Quit)
    } else {
        None
    }
}

/// Pantalla de título con texto plano; `status` trae el resultado de la
/// última corrida y `has_maze` habilita la opción del bot.
pub fn draw_menu(d: &mut RaylibDrawHandle, width: i32, status: Option<&str>, has_maze: bool) {
    d.clear_background(MENU_BG);

    let center = width / 2;
    d.draw_text("Labyrinthian", center - 160, 120, 48, INK);

    d.draw_text("[1] Run an easy maze", center - 140, 240, 20, INK);
    d.draw_text("[2] Run a hard maze", center - 140, 280, 20, INK);
    let (bot_color, bot_hint) = if has_maze {
        (INK, "[3] Fastest route for previous maze")
    } else {
        (DIM, "[3] Fastest route (run a maze first)")
    };
    d.draw_text(bot_hint, center - 140, 320, 20, bot_color);
    d.draw_text("[ESC] Exit", center - 140, 360, 20, INK);

    d.draw_text("W/S move, A/D turn, M map, R restart", center - 180, 440, 18, DIM);

    if let Some(status) = status {
        d.draw_text(status, center - 220, 500, 20, INK);
    }
}
