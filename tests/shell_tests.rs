//! Integration tests for the shell helpers.
//!
//! These run real child processes against the current PATH, so they stick
//! to commands that exist everywhere (`touch`, `true`).

use std::env;
use std::process::Command;

use cli_utils::shell::{check_command, open_editor, run_interactive};
use tempfile::tempdir;

#[test]
fn test_run_interactive_runs_real_child() {
    let dir = tempdir().unwrap();
    let target = dir.path().join("touched");

    let mut command = Command::new("touch");
    command.arg(&target);
    run_interactive(command).unwrap();

    assert!(target.exists());
}

#[test]
fn test_open_editor_uses_editor_from_environment() {
    let dir = tempdir().unwrap();
    let target = dir.path().join("edited");

    // `touch` stands in for an editor: it exits immediately and leaves
    // evidence that it was handed the right path.
    env::set_var("EDITOR", "touch");
    open_editor(target.to_str().unwrap()).unwrap();

    assert!(target.exists());
}

#[test]
fn test_check_command_against_real_path() {
    assert!(check_command("true"));
    assert!(!check_command("surely-not-installed-anywhere"));
}
