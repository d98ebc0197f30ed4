//! Command execution with captured standard output

use crate::error::GoldenError;
use crate::operations::loader::CommandSpec;
use anyhow::Result;
use std::io;
use std::path::Path;
use std::process::{Command, Stdio};
use tracing::debug;

/// Run `spec` in `working_dir` and return its raw standard output
///
/// The program is started directly, without a shell. Standard input is
/// connected to the null device and standard error is captured so it can be
/// reported if the command fails.
///
/// # Errors
///
/// Returns an error if:
/// - The program cannot be started ([`GoldenError::Spawn`])
/// - The program exits unsuccessfully ([`GoldenError::ChildProcess`])
pub fn capture_stdout(spec: &CommandSpec, working_dir: &Path) -> Result<Vec<u8>> {
    debug!("Running test {}: {}", spec.label(), spec);

    let output = Command::new(spec.program())
        .args(spec.args())
        .current_dir(working_dir)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .output()
        .map_err(|e| GoldenError::spawn(spec.index(), spawn_message(spec, &e)))?;

    if !output.status.success() {
        let exit = output
            .status
            .code()
            .map_or_else(|| "a signal".to_owned(), |code| format!("exit code {code}"));
        let mut message = format!("`{spec}` (line {}) failed with {exit}", spec.line());

        let stderr = String::from_utf8_lossy(&output.stderr);
        if !stderr.trim().is_empty() {
            message.push_str(&format!("\nError output:\n{}", stderr.trim()));
        }

        return Err(GoldenError::child_process(spec.index(), message).into());
    }

    debug!(
        "Test {} produced {} byte(s) of output",
        spec.label(),
        output.stdout.len()
    );
    Ok(output.stdout)
}

/// Run `spec` and return its standard output decoded as text
///
/// Invalid UTF-8 sequences are replaced rather than rejected.
///
/// # Errors
///
/// See [`capture_stdout`].
pub fn capture_text(spec: &CommandSpec, working_dir: &Path) -> Result<String> {
    let stdout = capture_stdout(spec, working_dir)?;
    Ok(String::from_utf8_lossy(&stdout).into_owned())
}

fn spawn_message(spec: &CommandSpec, error: &io::Error) -> String {
    if error.kind() == io::ErrorKind::NotFound {
        return format!(
            "program `{}` was not found (line {})",
            spec.program(),
            spec.line()
        );
    }
    format!("failed to start `{spec}` (line {}): {error}", spec.line())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn spec(tokens: &[&str]) -> CommandSpec {
        spec_at_line(1, tokens)
    }

    fn spec_at_line(line: usize, tokens: &[&str]) -> CommandSpec {
        CommandSpec::new(1, line, tokens.iter().map(|t| (*t).to_owned()).collect()).unwrap()
    }

    #[test]
    fn test_capture_stdout_returns_raw_output() {
        let temp_dir = TempDir::new().unwrap();
        let output = capture_stdout(&spec(&["echo", "hello"]), temp_dir.path()).unwrap();
        assert_eq!(output, b"hello\n");
    }

    #[test]
    fn test_runs_in_working_directory() {
        let temp_dir = TempDir::new().unwrap();
        std::fs::write(temp_dir.path().join("marker.txt"), "").unwrap();

        let output = capture_text(&spec(&["ls"]), temp_dir.path()).unwrap();
        assert!(output.contains("marker.txt"));
    }

    #[test]
    fn test_missing_program_is_a_spawn_error() {
        let temp_dir = TempDir::new().unwrap();
        let err = capture_stdout(&spec(&["goldcheck-no-such-program"]), temp_dir.path())
            .unwrap_err();
        assert!(matches!(
            err.downcast_ref::<GoldenError>(),
            Some(GoldenError::Spawn { index: 1, .. })
        ));
        assert!(err.to_string().contains("was not found"));
    }

    #[test]
    fn test_nonzero_exit_is_a_child_process_error() {
        let temp_dir = TempDir::new().unwrap();
        let err = capture_stdout(&spec(&["sh", "-c", "echo oops >&2; exit 3"]), temp_dir.path())
            .unwrap_err();
        let golden = err.downcast_ref::<GoldenError>().unwrap();
        assert_eq!(golden.exit_code(), 4);
        let message = golden.to_string();
        assert!(message.contains("exit code 3"));
        assert!(message.contains("oops"));
    }

    #[test]
    fn test_failure_messages_name_the_command_file_line() {
        let temp_dir = TempDir::new().unwrap();

        let err = capture_stdout(&spec_at_line(7, &["goldcheck-no-such-program"]), temp_dir.path())
            .unwrap_err();
        assert!(err.to_string().contains("(line 7)"));

        let err = capture_stdout(&spec_at_line(4, &["false"]), temp_dir.path()).unwrap_err();
        assert!(err.to_string().contains("`false` (line 4) failed with exit code 1"));
    }
}
