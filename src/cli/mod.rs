//! Command-line interface for aros.
//!
//! - [`args`] - Argument definitions using clap's derive macros
//! - [`doctor`] - The diagnostic command

pub mod args;
pub mod doctor;

pub use args::Cli;
pub use doctor::DoctorCommand;
