//! Toroidal grid Snake.
//!
//! The simulation core (`clock`, `placer`, `snake`, `board`, `collision`,
//! `score`, `session`) has no terminal dependencies and talks to the outside
//! world only through the traits in [`sinks`]. The remaining modules are the
//! terminal frontend used by the `grid-snake` binary.

pub mod board;
pub mod clock;
pub mod collision;
pub mod config;
pub mod error;
pub mod high_score;
pub mod input;
pub mod placer;
pub mod renderer;
pub mod score;
pub mod session;
pub mod sinks;
pub mod snake;
pub mod terminal_runtime;
pub mod ui;
