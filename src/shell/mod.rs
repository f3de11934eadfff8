//! Shell and process helpers.
//!
//! This module collects the small process-level building blocks the crate
//! provides:
//!
//! - **PATH Lookup**: check whether a named executable is available
//! - **Process Replacement**: swap the current process image for another
//! - **Interactive Execution**: run a child with the terminal piped through
//! - **Editor Launching**: open a file in the user's `$EDITOR`
//! - **Fuzzy Selection**: pick one of a list of labeled candidates

pub mod exec;
pub mod select;

// Re-exports for convenience
pub use exec::{check_command, exec_replace, open_editor, run_interactive};
pub use select::fuzzy_select;

/// Editor used when `$EDITOR` is not set.
pub const DEFAULT_EDITOR: &str = "vi";
