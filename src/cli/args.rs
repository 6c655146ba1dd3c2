//! CLI argument definitions.
//!
//! The main entry point is the [`Cli`] struct.

use clap::Parser;
use std::path::PathBuf;

/// aros - Environment diagnostics for Agent Runtime OS.
#[derive(Debug, Parser)]
#[command(name = "aros")]
#[command(author, version, about = "Run environment checks for Agent Runtime OS", long_about = None)]
pub struct Cli {
    /// Project root to scan for documentation and other assets (defaults to current directory)
    #[arg(long, value_name = "PATH")]
    pub project_root: Option<PathBuf>,
}

impl Cli {
    /// The project root, falling back to the current directory.
    pub fn resolved_project_root(&self) -> PathBuf {
        self.project_root
            .clone()
            .unwrap_or_else(|| std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")))
    }
}
