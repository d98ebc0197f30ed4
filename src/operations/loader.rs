//! Command file loading
//!
//! A command file holds one command per line. Lines are trimmed and split on
//! runs of whitespace: the first token is the program, the rest are its
//! arguments. There is no quoting, escaping or comment syntax, so an argument
//! containing a space cannot be expressed. Blank lines are skipped and do not
//! consume a test index.

use crate::error::GoldenError;
use crate::system::System;
use crate::utils::naming::{baseline_file_name, test_label};
use anyhow::Result;
use std::fmt;
use std::path::Path;
use tracing::debug;

/// One command under test
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandSpec {
    index: usize,
    line: usize,
    tokens: Vec<String>,
}

impl CommandSpec {
    /// Build a command from its tokens
    ///
    /// Returns `None` when `tokens` is empty, since there is no program to run.
    #[must_use]
    pub fn new(index: usize, line: usize, tokens: Vec<String>) -> Option<Self> {
        if tokens.is_empty() {
            return None;
        }
        Some(Self {
            index,
            line,
            tokens,
        })
    }

    /// 1-based position among the commands of the file
    #[must_use]
    #[inline]
    pub const fn index(&self) -> usize {
        self.index
    }

    /// 1-based line of the command file this command was read from
    #[must_use]
    #[inline]
    pub const fn line(&self) -> usize {
        self.line
    }

    /// Executable name
    #[must_use]
    #[inline]
    pub fn program(&self) -> &str {
        &self.tokens[0]
    }

    /// Positional arguments
    #[must_use]
    #[inline]
    pub fn args(&self) -> &[String] {
        &self.tokens[1..]
    }

    /// Program followed by its arguments
    #[must_use]
    #[inline]
    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    /// Two-digit label used in messages and baseline names
    #[must_use]
    #[inline]
    pub fn label(&self) -> String {
        test_label(self.index)
    }

    /// Name of the baseline file this command is checked against
    #[must_use]
    #[inline]
    pub fn baseline_file_name(&self) -> String {
        baseline_file_name(self.index)
    }
}

impl fmt::Display for CommandSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.tokens.join(" "))
    }
}

/// Parse command file contents into ordered commands
#[must_use]
pub fn parse_commands(content: &str) -> Vec<CommandSpec> {
    content
        .lines()
        .enumerate()
        .filter_map(|(line_index, line)| {
            let tokens: Vec<String> = line.split_whitespace().map(str::to_owned).collect();
            (!tokens.is_empty()).then_some((line_index + 1, tokens))
        })
        .enumerate()
        .filter_map(|(position, (line, tokens))| CommandSpec::new(position + 1, line, tokens))
        .collect()
}

/// Load the command file at `path`
///
/// # Errors
///
/// Returns a [`GoldenError::Load`] if the file does not exist or cannot be read.
pub fn load_commands(system: &dyn System, path: &Path) -> Result<Vec<CommandSpec>> {
    if !system.is_file(path) {
        return Err(GoldenError::load(format!(
            "Command file not found: {}",
            path.display()
        ))
        .into());
    }

    let content = system.read_to_string(path).map_err(|e| {
        GoldenError::load(format!(
            "Failed to read command file {}: {e}",
            path.display()
        ))
    })?;

    let commands = parse_commands(&content);
    debug!(
        "Loaded {} command(s) from {}",
        commands.len(),
        path.display()
    );
    Ok(commands)
}

/// Find the command with the given 1-based id
///
/// # Errors
///
/// Returns a [`GoldenError::UnknownTest`] when no command has that index.
pub fn select_command(commands: &[CommandSpec], id: usize) -> Result<&CommandSpec> {
    id.checked_sub(1)
        .and_then(|position| commands.get(position))
        .ok_or_else(|| {
            GoldenError::UnknownTest {
                id,
                available: commands.len(),
            }
            .into()
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_splits_on_whitespace_runs() {
        let commands = parse_commands("  ls   -la\t/tmp  \n");
        assert_eq!(commands.len(), 1);
        assert_eq!(commands[0].program(), "ls");
        assert_eq!(commands[0].args(), ["-la", "/tmp"]);
        assert_eq!(commands[0].to_string(), "ls -la /tmp");
    }

    #[test]
    fn test_blank_lines_do_not_consume_an_index() {
        let commands = parse_commands("echo one\n\n   \necho two\n");
        let indexes: Vec<usize> = commands.iter().map(CommandSpec::index).collect();
        let lines: Vec<usize> = commands.iter().map(CommandSpec::line).collect();
        assert_eq!(indexes, vec![1, 2]);
        assert_eq!(lines, vec![1, 4]);
        assert_eq!(commands[1].baseline_file_name(), "test02.dat");
    }

    #[test]
    fn test_quotes_are_not_interpreted() {
        let commands = parse_commands("echo \"hello world\"");
        assert_eq!(commands[0].args(), ["\"hello", "world\""]);
    }

    #[test]
    fn test_empty_tokens_are_rejected() {
        assert!(CommandSpec::new(1, 1, Vec::new()).is_none());
    }

    #[test]
    fn test_select_command_bounds() {
        let commands = parse_commands("echo a\necho b\necho c\n");
        assert_eq!(select_command(&commands, 2).unwrap().args(), ["b"]);
        assert!(select_command(&commands, 0).is_err());

        let err = select_command(&commands, 4).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<GoldenError>(),
            Some(GoldenError::UnknownTest {
                id: 4,
                available: 3
            })
        ));
    }
}
