//! Case-insensitive pattern matching over file contents

use std::fs;
use std::io;
use std::path::Path;

use regex::{Regex, RegexBuilder};

use crate::error::{Result, TreeError};

/// Compiled search pattern.
///
/// Patterns are regular expressions matched case-insensitively. Counts are
/// the number of non-overlapping matches found in one left-to-right scan.
#[derive(Debug, Clone)]
pub struct PatternMatcher {
    regex: Regex,
}

impl PatternMatcher {
    pub fn new(pattern: &str) -> Result<Self> {
        let regex = RegexBuilder::new(pattern)
            .case_insensitive(true)
            .build()
            .map_err(|source| TreeError::InvalidPattern {
                pattern: pattern.to_string(),
                source,
            })?;
        Ok(Self { regex })
    }

    /// The pattern as given by the caller.
    pub fn as_str(&self) -> &str {
        self.regex.as_str()
    }

    pub fn count_matches(&self, haystack: &str) -> usize {
        self.regex.find_iter(haystack).count()
    }

    /// Count matches in a file's content.
    ///
    /// Content is decoded as Latin-1, so any byte sequence is searchable and
    /// only I/O failures are reported.
    pub fn count_in_file(&self, path: &Path) -> io::Result<usize> {
        let bytes = fs::read(path)?;
        Ok(self.count_matches(&decode_latin1(&bytes)))
    }
}

/// Decode bytes as ISO-8859-1: every byte becomes the code point of the same value.
pub fn decode_latin1(bytes: &[u8]) -> String {
    bytes.iter().map(|&b| char::from(b)).collect()
}
