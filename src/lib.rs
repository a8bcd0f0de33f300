//! Toroidal Snake: a deterministic game engine plus a ratatui front end.
//!
//! The engine (`board`, `snake`, `food`, `game`) has no terminal or
//! rendering dependency; everything else drives or draws it.

pub mod board;
pub mod clock;
pub mod config;
pub mod food;
pub mod game;
pub mod input;
pub mod renderer;
pub mod settings;
pub mod snake;
pub mod terminal_runtime;
pub mod ui;
