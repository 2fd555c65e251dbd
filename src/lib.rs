//! Classic grid Snake: a fixed-tick movement engine behind a ratatui front end.
//!
//! The gameplay core (`snake`, `food`, `game`) is pure state manipulation:
//! it is driven entirely by elapsed-time values and directional samples
//! supplied per call, and never blocks, sleeps, or reads the terminal.
//! `input`, `renderer`, and the binary wrap that core for the terminal.

pub mod config;
pub mod food;
pub mod game;
pub mod input;
pub mod renderer;
pub mod snake;
