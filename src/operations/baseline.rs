//! Baseline file storage

use crate::error::GoldenError;
use crate::system::System;
use crate::utils::naming::{baseline_path, parse_baseline_index};
use anyhow::Result;
use std::path::{Path, PathBuf};

/// Read the baseline for `index`
///
/// # Errors
///
/// Returns an error if:
/// - No baseline file exists ([`GoldenError::BaselineMissing`])
/// - The file exists but cannot be read as UTF-8 text ([`GoldenError::Filesystem`])
pub fn read_baseline(system: &dyn System, baseline_dir: &Path, index: usize) -> Result<String> {
    let path = baseline_path(baseline_dir, index);
    if !system.is_file(&path) {
        return Err(GoldenError::baseline_missing(index, &path).into());
    }

    system.read_to_string(&path).map_err(|e| {
        GoldenError::filesystem(format!(
            "Failed to read baseline {}: {e}",
            path.display()
        ))
        .into()
    })
}

/// Write `contents` as the baseline for `index`, replacing any existing file
///
/// The baseline directory is created when missing.
///
/// # Errors
///
/// Returns a [`GoldenError::Filesystem`] if the directory or file cannot be written.
pub fn write_baseline(
    system: &dyn System,
    baseline_dir: &Path,
    index: usize,
    contents: &str,
) -> Result<PathBuf> {
    if !system.is_dir(baseline_dir) {
        system.create_dir_all(baseline_dir).map_err(|e| {
            GoldenError::filesystem(format!(
                "Failed to create baseline directory {}: {e}",
                baseline_dir.display()
            ))
        })?;
    }

    let path = baseline_path(baseline_dir, index);
    system.write(&path, contents.as_bytes()).map_err(|e| {
        GoldenError::filesystem(format!(
            "Failed to write baseline {}: {e}",
            path.display()
        ))
    })?;
    Ok(path)
}

/// Indexes of every baseline file in `baseline_dir`, ascending
///
/// A missing directory holds no baselines.
///
/// # Errors
///
/// Returns a [`GoldenError::Filesystem`] if the directory cannot be listed.
pub fn discover_baselines(system: &dyn System, baseline_dir: &Path) -> Result<Vec<usize>> {
    if !system.is_dir(baseline_dir) {
        return Ok(Vec::new());
    }

    let entries = system.read_dir(baseline_dir).map_err(|e| {
        GoldenError::filesystem(format!(
            "Failed to list baseline directory {}: {e}",
            baseline_dir.display()
        ))
    })?;

    let mut indexes: Vec<usize> = entries
        .iter()
        .filter(|path| system.is_file(path))
        .filter_map(|path| path.file_name()?.to_str().and_then(parse_baseline_index))
        .collect();
    indexes.sort_unstable();
    Ok(indexes)
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "This is a test module")]
mod tests {
    use super::*;
    use crate::system::MockSystem;

    #[test]
    fn test_write_creates_directory_and_keeps_output_untrimmed() {
        let system = MockSystem::new();
        let dir = Path::new("/suite/golden");

        let path = write_baseline(&system, dir, 3, "  hello\n\n").unwrap();
        assert_eq!(path, PathBuf::from("/suite/golden/test03.dat"));
        assert_eq!(read_baseline(&system, dir, 3).unwrap(), "  hello\n\n");
    }

    #[test]
    fn test_missing_baseline() {
        let system = MockSystem::new().with_dir("/suite").unwrap();
        let err = read_baseline(&system, Path::new("/suite"), 2).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<GoldenError>(),
            Some(GoldenError::BaselineMissing { index: 2, .. })
        ));
    }

    #[test]
    fn test_discover_ignores_other_files() {
        let system = MockSystem::new()
            .with_file("/suite/test02.dat", b"b")
            .unwrap()
            .with_file("/suite/test01.dat", b"a")
            .unwrap()
            .with_file("/suite/test_commands.txt", b"echo a\n")
            .unwrap()
            .with_dir("/suite/test03.dat")
            .unwrap();

        let indexes = discover_baselines(&system, Path::new("/suite")).unwrap();
        assert_eq!(indexes, vec![1, 2]);
        assert!(
            discover_baselines(&system, Path::new("/elsewhere"))
                .unwrap()
                .is_empty()
        );
    }
}
