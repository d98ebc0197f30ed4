//! Baseline file naming
//!
//! Baselines are named `test{NN}.dat`, where `NN` is the 1-based command
//! index zero-padded to two digits. Indexes of 100 and above are written in
//! full (`test100.dat`).

use regex::Regex;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

static BASELINE_NAME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^test(\d{2,})\.dat$").expect("baseline name pattern is valid"));

/// Format a test index as its two-digit label (`3` -> `"03"`)
#[must_use]
#[inline]
pub fn test_label(index: usize) -> String {
    format!("{index:02}")
}

/// File name of the baseline for the given 1-based index
#[must_use]
#[inline]
pub fn baseline_file_name(index: usize) -> String {
    format!("test{}.dat", test_label(index))
}

/// Full path of the baseline for `index` inside `baseline_dir`
#[must_use]
#[inline]
pub fn baseline_path(baseline_dir: &Path, index: usize) -> PathBuf {
    baseline_dir.join(baseline_file_name(index))
}

/// Recover the test index from a baseline file name
///
/// Returns `None` for anything that is not a baseline file, including
/// single-digit names such as `test1.dat` that the recorder never produces.
#[must_use]
pub fn parse_baseline_index(file_name: &str) -> Option<usize> {
    let captures = BASELINE_NAME.captures(file_name)?;
    let index: usize = captures.get(1)?.as_str().parse().ok()?;
    if index == 0 || baseline_file_name(index) != file_name {
        return None;
    }
    Some(index)
}
