use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Command-line arguments for goldcheck
#[derive(Parser, Debug, Clone)]
#[command(name = "goldcheck")]
#[command(about = "A golden-file test harness for command output")]
#[command(long_about = None)]
#[command(version)]
pub struct Args {
    /// Run as if started in DIR; commands under test also run there
    #[arg(short = 'C', long, value_name = "DIR", global = true)]
    pub directory: Option<PathBuf>,

    /// Command file path [default: test_commands.txt]
    #[arg(long, value_name = "PATH", global = true, env = "GOLDCHECK_COMMANDS")]
    pub commands: Option<String>,

    /// Directory holding the testNN.dat baselines [default: suite directory]
    #[arg(long, value_name = "DIR", global = true, env = "GOLDCHECK_BASELINE_DIR")]
    pub baseline_dir: Option<String>,

    /// Configuration file path [default: goldcheck.yaml when present]
    #[arg(long, value_name = "PATH", global = true)]
    pub config: Option<String>,

    /// Enable verbose logging output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub mode: Mode,
}

impl Args {
    /// Worker count requested on the command line, if any
    #[must_use]
    pub fn jobs_override(&self) -> Option<usize> {
        match self.mode {
            Mode::Record(ref record) => record.jobs,
            Mode::Check(_) | Mode::List => None,
        }
    }

    /// Whether `--fail-fast` was passed
    #[must_use]
    pub fn fail_fast_override(&self) -> bool {
        match self.mode {
            Mode::Check(ref check) => check.fail_fast,
            Mode::Record(_) | Mode::List => false,
        }
    }
}

/// What to do with the command file
#[derive(Subcommand, Debug, Clone)]
pub enum Mode {
    /// Run commands and save their output as baselines
    Record(RecordArgs),

    /// Run commands and compare their output against the baselines
    Check(CheckArgs),

    /// List commands and the state of their baselines
    List,
}

/// Arguments for `goldcheck record`
#[derive(clap::Args, Debug, Clone, Default)]
pub struct RecordArgs {
    /// Record only the test with this 1-based id
    #[arg(value_name = "ID")]
    pub id: Option<usize>,

    /// Run commands one at a time in file order, stopping at the first error
    #[arg(long, conflicts_with = "jobs")]
    pub sequential: bool,

    /// Number of recording workers [default: available parallelism]
    #[arg(short, long, value_name = "N")]
    pub jobs: Option<usize>,
}

/// Arguments for `goldcheck check`
#[derive(clap::Args, Debug, Clone, Default)]
pub struct CheckArgs {
    /// Check only the test with this 1-based id
    #[arg(value_name = "ID")]
    pub id: Option<usize>,

    /// Stop at the first failing test instead of reporting all of them
    #[arg(long)]
    pub fail_fast: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_check_with_id() {
        let args = Args::try_parse_from(["goldcheck", "check", "2"]).unwrap();
        match args.mode {
            Mode::Check(ref check) => {
                assert_eq!(check.id, Some(2));
                assert!(!check.fail_fast);
            }
            _ => panic!("expected check mode"),
        }
        assert_eq!(args.jobs_override(), None);
    }

    #[test]
    fn test_global_options_after_subcommand() {
        let args = Args::try_parse_from([
            "goldcheck",
            "record",
            "--jobs",
            "3",
            "-C",
            "suite",
            "--baseline-dir",
            "golden",
        ])
        .unwrap();

        assert_eq!(args.directory, Some(PathBuf::from("suite")));
        assert_eq!(args.baseline_dir.as_deref(), Some("golden"));
        assert_eq!(args.jobs_override(), Some(3));
        assert!(!args.fail_fast_override());
    }

    #[test]
    fn test_sequential_conflicts_with_jobs() {
        let result = Args::try_parse_from(["goldcheck", "record", "--sequential", "-j", "2"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_id_must_be_a_number() {
        assert!(Args::try_parse_from(["goldcheck", "check", "two"]).is_err());
    }
}
