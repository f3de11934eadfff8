//! Process lookup, replacement, and synchronous execution.

use std::env;
use std::os::unix::process::CommandExt;
use std::process::{Command, Stdio};

use log::{debug, info};

use super::DEFAULT_EDITOR;
use crate::error::{Error, Result};

/// Returns whether `command` resolves to an executable on the `PATH`.
#[must_use]
pub fn check_command(command: &str) -> bool {
    which::which(command).is_ok()
}

/// Replaces the current process image with `program`.
///
/// The new image inherits the current environment and file descriptors.
/// On success this function never returns, so the only possible return
/// value is the error reported by the OS.
///
/// # Errors
///
/// Returns an error if the process image could not be replaced, for
/// example because `program` does not exist.
pub fn exec_replace(program: &str, args: &[String]) -> Result<()> {
    debug!("Replacing current process with `{}`", program);

    let err = Command::new(program).args(args).exec();
    Err(Error::SubProcess(err))
}

/// Runs a child command synchronously with the current terminal's
/// stdin/stdout/stderr piped through to it.
///
/// # Errors
///
/// Returns an error if the child could not be spawned or exited with
/// non-success status.
pub fn run_interactive(mut command: Command) -> Result<()> {
    let command = command
        .stdin(Stdio::inherit())
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit());

    let subprocess_exit_success = command.spawn()?.wait()?.success();

    if subprocess_exit_success {
        Ok(())
    } else {
        Err(Error::SubProcessExit)
    }
}

/// Opens `path` in the user's editor and waits for the editor to exit.
///
/// The editor is taken from `$EDITOR`, falling back to `vi` when unset.
/// A `~` in `path` is expanded before launching.
///
/// # Errors
///
/// Returns an error if the editor could not be run or exited with
/// non-success status.
pub fn open_editor(path: &str) -> Result<()> {
    let editor = env::var("EDITOR").unwrap_or_else(|_| DEFAULT_EDITOR.to_string());
    let expanded_path = shellexpand::tilde(path);
    info!("Opening `{}` with `{}`", expanded_path, editor);

    let mut command = Command::new(editor);
    command.arg(expanded_path.as_ref());
    run_interactive(command)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_command_found() {
        assert!(check_command("ls"));
    }

    #[test]
    fn test_check_command_not_found() {
        assert!(!check_command("not-a-command"));
    }

    #[test]
    fn test_run_interactive_success() {
        assert!(run_interactive(Command::new("true")).is_ok());
    }

    #[test]
    fn test_run_interactive_failing_child() {
        let result = run_interactive(Command::new("false"));
        assert!(matches!(result, Err(Error::SubProcessExit)));
    }

    #[test]
    fn test_run_interactive_missing_program() {
        let result = run_interactive(Command::new("not-a-command"));
        assert!(matches!(result, Err(Error::SubProcess(_))));
    }
}
