//! mediastore CLI binary.
//!
//! This binary provides command-line access to mediastore's functionality:
//! - Run the guided demo of every API
//! - Build media files from paths and inspect them
//! - Load and list files through configured storage backends

use clap::Parser;
use mediastore::report;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

mod cli;

use cli::{Cli, Commands};

fn main() -> ExitCode {
    // Parse command-line arguments
    let cli = Cli::parse();

    // Initialize tracing; RUST_LOG wins over --verbose
    let default_level = if cli.verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let config_path = cli.config.as_deref();
    let mut out = std::io::stdout().lock();

    // Execute the requested command
    match cli.command {
        Commands::Demo => {
            mediastore::demo::run(&mut out)?;
        }

        Commands::Inspect {
            path,
            size,
            owner,
            format,
        } => {
            report::inspect(&mut out, &path, size, owner, format)?;
        }

        Commands::Load {
            path,
            size,
            backend,
            format,
        } => {
            let config = report::load_config(config_path)?;
            report::load(&mut out, &config, &path, size, backend.as_deref(), format)?;
        }

        Commands::List { directory, backend } => {
            let config = report::load_config(config_path)?;
            report::list(&mut out, &config, &directory, backend.as_deref())?;
        }

        Commands::Backends => {
            let config = report::load_config(config_path)?;
            report::backends(&mut out, &config)?;
        }
    }

    Ok(())
}
