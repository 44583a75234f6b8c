// main.rs
mod audio_manager;
mod core;
mod framebuffer;
mod process_events;
mod render;
mod title;

use std::thread;
use std::time::{Duration, Instant};

use raylib::prelude::*;

use audio_manager::AudioManager;
use crate::core::{Actor, Bot, BotStatus, CELL, Coord, Maze, shortest_path};
use framebuffer::Framebuffer;
use process_events::{apply_input, poll_input};
use render::{Camera, render_2d, render_3d};
use title::{EASY_ROOMS, HARD_ROOMS, MenuAction, draw_menu, poll_menu};

const WINDOW_WIDTH: i32 = 1024;
const WINDOW_HEIGHT: i32 = 768;
const FOV_DEGREES: f32 = 75.0;
const FPS: u64 = 60;

enum Driver {
    Human,
    Autopilot(Bot),
}

/// Estado de una corrida activa; al terminar, el maze vuelve a `previous`
/// para que el bot pueda repetirlo desde el menú.
struct Run {
    maze: Maze,
    actor: Actor,
    driver: Driver,
    /// Ruta activa del bot, para el overlay del mapa 2D.
    route: Option<Vec<Coord>>,
    show_map: bool,
}

enum Mode {
    Menu,
    Playing(Run),
}

fn new_run(rooms: usize, rng: &mut impl rand::Rng) -> Run {
    let maze = Maze::generate(rooms, rooms, rng);
    log::info!(
        "generated {rooms}x{rooms} maze, start {:?}, goal {:?}",
        maze.start,
        maze.goal
    );
    let actor = Actor::at_cell(maze.start, 0.0);
    Run {
        maze,
        actor,
        driver: Driver::Human,
        route: None,
        show_map: false,
    }
}

fn new_bot_run(maze: Maze) -> Result<Run, Maze> {
    match shortest_path(&maze.grid, maze.start, maze.goal) {
        Ok(route) => {
            log::info!("bot route computed: {} cells", route.len());
            let mut actor = Actor::at_cell(maze.start, 0.0);
            let bot = Bot::new(route.clone(), &mut actor);
            Ok(Run {
                maze,
                actor,
                driver: Driver::Autopilot(bot),
                route: Some(route),
                show_map: false,
            })
        }
        Err(e) => {
            log::error!("{e}");
            Err(maze)
        }
    }
}

fn main() {
    env_logger::init();

    let (mut rl, raylib_thread) = raylib::init()
        .size(WINDOW_WIDTH, WINDOW_HEIGHT)
        .title("Labyrinthian")
        .build();
    // ESC vuelve al menú, no cierra la ventana
    rl.set_exit_key(None);

    let mut framebuffer = Framebuffer::new(WINDOW_WIDTH as u32, WINDOW_HEIGHT as u32);
    framebuffer.set_background_color(Color::BLACK);
    let blank = Image::gen_image_color(WINDOW_WIDTH, WINDOW_HEIGHT, Color::BLACK);
    let mut screen = rl
        .load_texture_from_image(&raylib_thread, &blank)
        .expect("framebuffer texture");

    let mut audio = AudioManager::new();
    match audio.as_mut() {
        Some(audio) => {
            audio.load_sfx_auto();
            audio.play_music_loop_auto();
        }
        None => log::warn!("audio device unavailable, continuing silent"),
    }

    let camera = Camera::new(WINDOW_WIDTH, WINDOW_HEIGHT, FOV_DEGREES, CELL);
    let mut rng = rand::thread_rng();

    let mut mode = Mode::Menu;
    let mut previous: Option<Maze> = None;
    let mut last_result: Option<String> = None;

    let budget = Duration::from_millis(1000 / FPS);
    let tick_seconds = 1.0 / FPS as f32;

    while !rl.window_should_close() {
        let tick_start = Instant::now();

        mode = match mode {
            Mode::Menu => {
                let action = poll_menu(&rl);
                {
                    let mut d = rl.begin_drawing(&raylib_thread);
                    draw_menu(
                        &mut d,
                        WINDOW_WIDTH,
                        last_result.as_deref(),
                        previous.is_some(),
                    );
                }
                match action {
                    Some(MenuAction::Easy) => Mode::Playing(new_run(EASY_ROOMS, &mut rng)),
                    Some(MenuAction::Hard) => Mode::Playing(new_run(HARD_ROOMS, &mut rng)),
                    Some(MenuAction::BotReplay) => match previous.take() {
                        Some(maze) => match new_bot_run(maze) {
                            Ok(run) => Mode::Playing(run),
                            Err(maze) => {
                                previous = Some(maze);
                                Mode::Menu
                            }
                        },
                        None => {
                            last_result = Some("Please run a map first!".to_string());
                            Mode::Menu
                        }
                    },
                    Some(MenuAction::Quit) => break,
                    None => Mode::Menu,
                }
            }
            Mode::Playing(mut run) => {
                let input = poll_input(&rl);
                if input.to_menu {
                    previous = Some(run.maze);
                    Mode::Menu
                } else {
                    if input.toggle_map {
                        run.show_map = !run.show_map;
                    }
                    match &mut run.driver {
                        Driver::Human => apply_input(&mut run.actor, &run.maze.grid, input),
                        Driver::Autopilot(bot) => {
                            if bot.update(&mut run.actor) == BotStatus::Finished {
                                log::debug!("autopilot finished its route");
                            }
                        }
                    }
                    run.actor.add_time(tick_seconds);

                    if run.actor.pos == run.maze.goal {
                        let seconds = run.actor.time() as i32;
                        let by_bot = matches!(run.driver, Driver::Autopilot(_));
                        let message = if by_bot {
                            format!("Bot completion of map in {seconds} seconds.")
                        } else {
                            format!("You did it! You finished the map in {seconds} seconds!")
                        };
                        log::info!("{message}");
                        last_result = Some(message);
                        if let Some(audio) = audio.as_ref() {
                            audio.play_victory();
                        }
                        previous = Some(run.maze);
                        Mode::Menu
                    } else {
                        framebuffer.clear();
                        if run.show_map {
                            render_2d(
                                &mut framebuffer,
                                &run.maze.grid,
                                run.route.as_deref(),
                                run.maze.goal,
                                &run.actor,
                            );
                        } else {
                            render_3d(
                                &mut framebuffer,
                                &camera,
                                &run.maze.grid,
                                run.maze.goal,
                                &run.actor,
                            );
                        }
                        framebuffer.upload_to_texture(&mut screen);

                        let seconds = run.actor.time() as i32;
                        {
                            let mut d = rl.begin_drawing(&raylib_thread);
                            d.clear_background(Color::BLACK);
                            d.draw_texture(&screen, 0, 0, Color::WHITE);
                            d.draw_text(
                                &format!("Time: {seconds}"),
                                WINDOW_WIDTH / 32,
                                WINDOW_HEIGHT / 16,
                                36,
                                Color::WHITE,
                            );
                        }
                        Mode::Playing(run)
                    }
                }
            }
        };

        // tick de paso fijo: dormir lo que sobre del presupuesto, nada si
        // el frame se pasó
        let elapsed = tick_start.elapsed();
        if elapsed < budget {
            thread::sleep(budget - elapsed);
        }
    }
}
