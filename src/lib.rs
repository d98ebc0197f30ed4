//! `goldcheck` - A golden-file test harness for command output
//!
//! This library reads a list of commands from a text file, runs each one, and
//! either records its standard output as a baseline (`testNN.dat`) or checks
//! live output against the recorded baseline, reporting a unified diff on
//! mismatch.

pub mod cli;
pub mod config;
pub mod error;
pub mod operations;
pub mod system;
pub mod utils;

use anyhow::Result;
use cli::{Args, Mode};
use config::Settings;
use system::RealSystem;

/// Main entry point for the goldcheck library
pub fn run(args: &Args) -> Result<()> {
    let system = RealSystem;
    let settings = Settings::resolve(&system, args)?;

    match args.mode {
        Mode::Record(ref record) => operations::record::run(&system, &settings, record),
        Mode::Check(ref check) => operations::compare::run(&system, &settings, check),
        Mode::List => operations::list::run(&system, &settings),
    }
}
