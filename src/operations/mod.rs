//! Operations module
//!
//! Loads command files, runs commands, and records or checks their baselines

pub mod baseline;
pub mod compare;
pub mod exec;
pub mod list;
pub mod loader;
pub mod record;

pub use baseline::{discover_baselines, read_baseline, write_baseline};
pub use compare::{CheckReport, TestOutcome, TestReport, TestResult, compare_output, unified_diff};
pub use exec::{capture_stdout, capture_text};
pub use list::{ListEntry, ListReport, list_suite};
pub use loader::{CommandSpec, load_commands, parse_commands, select_command};
pub use record::{RecordEntry, RecordReport, record_concurrent, record_one, record_sequential};
