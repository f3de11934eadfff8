//! Embeddable version subcommand.

use clap::Parser;

/// The static version string printed by [`VersionCommand`].
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// A no-argument subcommand that prints the crate version.
///
/// Hosts embed this in their own command tree and call [`run`] when it
/// is selected.
///
/// [`run`]: VersionCommand::run
#[derive(Parser, Debug)]
#[command(name = "version", about = "Print the version")]
pub struct VersionCommand {}

impl VersionCommand {
    /// Prints the version string to stdout.
    pub fn run(&self) {
        println!("{VERSION}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_is_set() {
        assert!(!VERSION.is_empty());
    }

    #[test]
    fn test_version_command_takes_no_arguments() {
        assert!(VersionCommand::try_parse_from(["version"]).is_ok());
        assert!(VersionCommand::try_parse_from(["version", "extra"]).is_err());
    }
}
