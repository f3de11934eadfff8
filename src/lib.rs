//! CLI Utility Helpers
//!
//! This crate provides small, focused helpers for building interactive
//! command-line tools: a string prompt, shell and process helpers, fuzzy
//! selection over labeled candidates, and an embeddable version
//! subcommand.
//!
//! # Key Features
//!
//! - **Fuzzy Selection**: Pick one item from a list via an interactive
//!   fuzzy finder, getting the original index back
//! - **Process Helpers**: PATH lookup, process replacement, and
//!   synchronous interactive child execution
//! - **Editor Launching**: Open a file in the user's `$EDITOR`
//! - **Prompting**: Single-line text prompt with an explicit
//!   empty-response error
//! - **Error Handling**: One error type covering all failure modes
//!
//! # Examples
//!
//! Selecting one of several labeled options:
//!
//! ```no_run
//! use cli_utils::shell::fuzzy_select;
//!
//! let branches = vec!["main", "develop", "release/1.2"];
//! let index = fuzzy_select(&branches, "")?;
//! println!("Switching to {}", branches[index]);
//! # Ok::<(), cli_utils::error::Error>(())
//! ```

pub mod error;
pub mod prompt;
pub mod shell;
pub mod version;
