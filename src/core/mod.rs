//! Core game logic (data, search, motion, autopilot).
//!
//! Re-exports:
//! - `compass`: cardinal directions shared by carving, BFS and the bot
//! - `maze`: grid data and maze generation
//! - `path`: shortest-route search
//! - `actor`: continuous pose and motion
//! - `bot`: autopilot that walks a route

pub mod actor;
pub mod bot;
pub mod compass;
pub mod maze;
pub mod path;

pub use actor::{Actor, CELL, cell_at, normalize_turn};
pub use bot::{Bot, BotStatus};
pub use compass::Compass;
pub use maze::{Cell, Coord, Grid, Maze};
pub use path::{PathError, shortest_path};
