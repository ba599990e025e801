//! Command-line definition for the Pomodoro Timer.
//!
//! Uses clap derive macro for argument parsing. The timer itself is
//! controlled by commands typed on standard input, not by flags.

use clap::Parser;

// ============================================================================
// CLI Structure
// ============================================================================

/// Pomodoro Timer CLI - alternating work and rest periods in the terminal
#[derive(Parser, Debug)]
#[command(
    name = "pomodoro",
    version,
    about = "Interactive Pomodoro timer",
    long_about = "Alternates work and rest periods and plays a cue when each one ends.\n\
                  While running, type pause, next, restart [MM:SS], help or quit."
)]
pub struct Cli {
    /// Enable verbose output for debugging
    #[arg(short, long)]
    pub verbose: bool,
}

// ============================================================================
// Tests
// ============================================================================
