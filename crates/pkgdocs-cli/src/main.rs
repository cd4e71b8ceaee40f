//! Pkgdocs CLI - generate documentation templates from a package schema
//!
//! This is the main entry point: parse the two positional arguments,
//! load and import the schema, and write the generated template tree
//! under the output directory. All diagnostics go to stderr; every
//! failure exits with status 1.

mod cli;
mod error;
mod generate;
mod logging;

use clap::error::ErrorKind;
use clap::Parser;
use cli::Cli;
use colored::control;
use error::Result;
use logging::LoggingConfig;
use std::process;

fn main() {
    // Parse command-line arguments. Usage errors print to stderr and
    // exit 1; --help/--version print to stdout and exit 0.
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let _ = e.print();
            match e.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => process::exit(0),
                _ => process::exit(1),
            }
        }
    };

    // Set up colored output
    control::set_override(cli.use_color());

    // Initialize logging
    if let Err(e) = init_logging(&cli) {
        eprintln!("failed to initialize logging: {}", e);
    }

    // Run the application
    match run(&cli) {
        Ok(()) => {
            process::exit(0);
        }
        Err(e) => {
            eprintln!("{}", error::format_error(&e, cli.use_color()));
            process::exit(1);
        }
    }
}

/// Main application logic
fn run(cli: &Cli) -> Result<()> {
    tracing::info!(
        out_dir = %cli.out_dir.display(),
        schema_file = %cli.schema_file.display(),
        "generating documentation templates"
    );
    generate::handle_generate(&cli.out_dir, &cli.schema_file)
}

/// Initialize the logging system
fn init_logging(cli: &Cli) -> Result<()> {
    let mut config = LoggingConfig::from_verbosity(cli.verbosity_level());

    // Quiet mode surfaces errors only.
    if cli.quiet {
        config.level = "error".to_string();
    }

    logging::init_logging(config)
}
