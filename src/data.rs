//! # Data — Static Puzzle Input Loading
//!
//! A few solvers read a small bundled text file (a numeric triangle, a list
//! of 50-digit numbers, a word list). Inputs are plain newline- or
//! comma-delimited text; parsing beyond that is solver-specific. A missing
//! or malformed file is a fatal error for the affected solver — these are
//! one-shot batch computations with no partial-failure mode, so there is
//! nothing to retry.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

/// Read a file as non-empty lines.
pub fn read_lines(path: &Path) -> Result<Vec<String>> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("reading puzzle input {}", path.display()))?;
    Ok(text
        .lines()
        .filter(|line| !line.trim().is_empty())
        .map(str::to_owned)
        .collect())
}

/// Read a file of comma-separated, double-quoted words ("MARY","PATRICIA",...)
/// into unquoted words.
pub fn read_quoted_words(path: &Path) -> Result<Vec<String>> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("reading puzzle input {}", path.display()))?;
    Ok(text
        .split(',')
        .map(|word| word.trim().trim_matches('"').to_owned())
        .filter(|word| !word.is_empty())
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn temp_file(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn read_lines_drops_empty_lines() {
        let file = temp_file("75\n\n95 64\n17 47 82\n\n");
        let lines = read_lines(file.path()).unwrap();
        assert_eq!(lines, vec!["75", "95 64", "17 47 82"]);
    }

    #[test]
    fn read_lines_missing_file_is_fatal() {
        let err = read_lines(Path::new("data/no_such_input.txt")).unwrap_err();
        assert!(err.to_string().contains("no_such_input.txt"));
    }

    #[test]
    fn read_quoted_words_unquotes_and_splits() {
        let file = temp_file("\"MARY\",\"PATRICIA\",\"LINDA\"");
        let words = read_quoted_words(file.path()).unwrap();
        assert_eq!(words, vec!["MARY", "PATRICIA", "LINDA"]);
    }

    #[test]
    fn read_quoted_words_tolerates_trailing_newline() {
        let file = temp_file("\"A\",\"ABILITY\"\n");
        let words = read_quoted_words(file.path()).unwrap();
        assert_eq!(words, vec!["A", "ABILITY"]);
    }
}
