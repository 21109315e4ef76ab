//! Grid-based Snake: a tick-driven simulation core plus a thin terminal
//! front end that feeds it input and draws its snapshots.

pub mod collision;
pub mod config;
pub mod consumable;
pub mod error;
pub mod field;
pub mod game;
pub mod input;
pub mod renderer;
pub mod snake;
pub mod terminal_runtime;
pub mod ui;
