//! # `goldcheck`
//!
//! `goldcheck` is a command-line golden-file test harness. It reads commands
//! from `test_commands.txt`, one per line, and records or checks the standard
//! output of each against a baseline file named after its position
//! (`test01.dat`, `test02.dat`, ...).
//!
//! ## Usage
//!
//! **Record baselines:**
//! ```sh
//! goldcheck record
//! ```
//!
//! **Check every test, or only the second one:**
//! ```sh
//! goldcheck check
//! goldcheck check 2
//! ```
//!
//! See `goldcheck --help` for more options.

use clap::Parser as _;
use goldcheck::cli::Args;
use goldcheck::error::GoldenError;
use tracing::error;
use tracing_subscriber::{EnvFilter, fmt};

fn main() {
    let args = Args::parse();

    let log_level = if args.verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    // Diagnostics go to stderr so stdout carries only test results and diffs
    fmt()
        .with_target(false)
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .init();

    match goldcheck::run(&args) {
        Ok(()) => std::process::exit(0),
        Err(err) => {
            error!("{:#}", err);
            std::process::exit(
                err.downcast_ref::<GoldenError>()
                    .map_or(1, GoldenError::exit_code),
            );
        }
    }
}
