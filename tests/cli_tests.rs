//! End-to-end tests for the `pomodoro` binary.
//!
//! The binary is driven through piped standard input, so every test ends the
//! session with `quit` or end of input and never waits for a real period.

use std::time::Duration;

use assert_cmd::Command;
use predicates::prelude::*;

/// Upper bound for a session that quits right away.
const SESSION_TIMEOUT: Duration = Duration::from_secs(10);

fn pomodoro() -> Command {
    let mut cmd = Command::cargo_bin("pomodoro").unwrap();
    cmd.timeout(SESSION_TIMEOUT).env_remove("RUST_LOG");
    cmd
}

#[test]
fn quit_prints_banner_and_first_period() {
    pomodoro()
        .write_stdin("quit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Pomodoro Timer start, enter \"quit\" to end the timer",
        ))
        .stdout(predicate::str::contains("[WORK] Start:"))
        .stdout(predicate::str::contains("(25:00)"))
        .stdout(predicate::str::contains("Quitting timer"));
}

#[test]
fn help_lists_commands() {
    pomodoro()
        .write_stdin("help\nquit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("[Commands]"))
        .stdout(predicate::str::contains("pause - "))
        .stdout(predicate::str::contains("next - "))
        .stdout(predicate::str::contains("restart (MM:SS) - "))
        .stdout(predicate::str::contains("quit - "))
        .stdout(predicate::str::contains("help - "));
}

#[test]
fn quit_ignores_surrounding_whitespace() {
    // Commands are case sensitive, so the uppercase line is plain text
    pomodoro()
        .write_stdin("QUIT\n   quit   \n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Quitting timer"));
}

#[test]
fn end_of_input_quits() {
    pomodoro()
        .write_stdin("")
        .assert()
        .success()
        .stdout(predicate::str::contains("Quitting timer"));
}

#[test]
fn restart_with_time_prints_restarted_period() {
    pomodoro()
        .write_stdin("restart 5:30\nquit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("[WORK] Restarted:"))
        .stdout(predicate::str::contains("(05:30)"));
}

#[test]
fn next_moves_to_rest() {
    pomodoro()
        .write_stdin("next\nquit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("[REST] Start:"))
        .stdout(predicate::str::contains("(05:00)"));
}

#[test]
fn pause_prints_prompt() {
    pomodoro()
        .write_stdin("pause\nquit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("[WORK] Period paused ("))
        .stdout(predicate::str::contains("press enter to resume"));
}

#[test]
fn version_flag() {
    pomodoro()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("pomodoro"));
}

#[test]
fn rejects_unexpected_argument() {
    pomodoro()
        .arg("25")
        .write_stdin("quit\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("unexpected argument"));
}
