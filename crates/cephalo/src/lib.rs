//! # cephalo
//!
//! **CLI Binary**
//!
//! Entry point for the `cephalo` command-line application.
//!
//! ## Responsibilities
//! * Parse command line arguments
//! * Load the TOML config and merge norm overrides
//! * Dispatch to the analysis, calibration and norm commands
//!
//! Analysis logic lives in the library crates; this crate only wires them up.

mod cli;
mod commands;
mod config;

pub use cli::{Cli, Commands};
pub use config::CephaloConfig;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    commands::dispatch(cli)
}

fn init_logging(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default)),
        )
        .with_writer(std::io::stderr)
        .try_init();
}
