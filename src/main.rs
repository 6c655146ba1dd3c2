//! aros CLI entry point.

use std::process::ExitCode;

use aros::cli::{Cli, DoctorCommand};
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize the tracing subscriber for logging.
///
/// Logs go to stderr so stdout carries only the report. `RUST_LOG` overrides
/// the default `aros=warn` filter.
fn init_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("aros=warn"));

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing();

    tracing::debug!("aros starting with args: {:?}", cli);

    let project_root = cli.resolved_project_root();
    let command = DoctorCommand::new(&project_root);

    match command.execute(&mut std::io::stdout()) {
        Ok(code) => ExitCode::from(code as u8),
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::from(1)
        }
    }
}
