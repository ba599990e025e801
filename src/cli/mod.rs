//! CLI module for the Pomodoro Timer.
//!
//! This module provides the command-line interface:
//! - `commands`: Command-line definition using clap derive
//! - `input`: Input reader that turns stdin lines into commands
//! - `display`: Output formatting and display logic

pub mod commands;
pub mod display;
pub mod input;

pub use commands::Cli;
pub use display::Display;
pub use input::InputReader;
