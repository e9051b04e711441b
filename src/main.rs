//! Crossroot CLI - cross-architecture sysroot builder
//!
//! Entry point for the crossroot command-line application.

use anyhow::Result;
use clap::Parser;

use crossroot::cli::output::status;
use crossroot::cli::Cli;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing subscriber; -v/-q adjust the default level
    let default_level = if cli.quiet {
        tracing::Level::ERROR
    } else {
        match cli.verbose {
            0 => tracing::Level::WARN,
            1 => tracing::Level::INFO,
            _ => tracing::Level::DEBUG,
        }
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(default_level.into()),
        )
        .init();

    // Run the command and handle errors
    match cli.run() {
        Ok(()) => Ok(()),
        Err(e) => {
            eprintln!("{} {e:#}", status::ERROR);
            std::process::exit(1);
        }
    }
}
