//! Command-line interface argument parsing and definitions
//!
//! This module defines the CLI structure using clap's derive API. There
//! are no subcommands: the tool does one thing, so the two positional
//! arguments live directly on the top-level parser.

use clap::Parser;
use is_terminal::IsTerminal;
use std::path::PathBuf;

/// Pkgdocs CLI - documentation-template generation from package schemas
///
/// Reads a JSON package schema, imports it into a validated package
/// model, and writes the generated documentation templates under the
/// output directory.
#[derive(Parser, Debug)]
#[command(
    name = "pkgdocs",
    version,
    author,
    about,
    long_about = None
)]
pub struct Cli {
    /// Directory the generated files are written under
    #[arg(value_name = "OUT_DIR")]
    pub out_dir: PathBuf,

    /// Path to the package schema file (JSON)
    #[arg(value_name = "SCHEMA_FILE")]
    pub schema_file: PathBuf,

    /// Enable verbose output (can be used multiple times for increased verbosity)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress all non-essential output
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,
}

impl Cli {
    /// Get the effective verbosity level (considering quiet flag)
    pub fn verbosity_level(&self) -> u8 {
        if self.quiet {
            0
        } else {
            self.verbose
        }
    }

    /// Check if colored output should be used. Diagnostics go to
    /// stderr, so that is the stream that decides.
    pub fn use_color(&self) -> bool {
        !self.no_color && std::io::stderr().is_terminal()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn verify_cli() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_two_positional_arguments() {
        let cli = Cli::try_parse_from(["pkgdocs", "out", "schema.json"]).unwrap();
        assert_eq!(cli.out_dir, PathBuf::from("out"));
        assert_eq!(cli.schema_file, PathBuf::from("schema.json"));
        assert_eq!(cli.verbosity_level(), 0);
    }

    #[test]
    fn fewer_than_two_arguments_is_a_usage_error() {
        assert!(Cli::try_parse_from(["pkgdocs"]).is_err());
        assert!(Cli::try_parse_from(["pkgdocs", "out"]).is_err());
    }

    #[test]
    fn quiet_wins_over_verbose_count() {
        let cli = Cli::try_parse_from(["pkgdocs", "-vv", "out", "schema.json"]).unwrap();
        assert_eq!(cli.verbosity_level(), 2);

        let cli = Cli::try_parse_from(["pkgdocs", "--quiet", "out", "schema.json"]).unwrap();
        assert_eq!(cli.verbosity_level(), 0);
    }
}
