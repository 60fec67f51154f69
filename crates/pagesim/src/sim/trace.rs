//! Trace loading.
//!
//! A trace is a text file with one decimal page number per line. Blank lines
//! are skipped and every other line is read with `atoi` rules, so a line with
//! no leading digits counts as page 0. Lines are handled as raw bytes and need
//! not be valid UTF-8.

use std::fs;
use std::path::Path;

use crate::error::{Result, SimError};

/// One page reference and the 1-based line it came from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TraceEntry {
    pub line: usize,
    pub page: i64,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Trace {
    entries: Vec<TraceEntry>,
}

impl Trace {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read(path).map_err(|source| SimError::TraceIo {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self::parse_bytes(&content))
    }

    pub fn parse(content: &str) -> Self {
        Self::parse_bytes(content.as_bytes())
    }

    /// Splits on `\n`, dropping a trailing `\r` from each line.
    pub fn parse_bytes(content: &[u8]) -> Self {
        let entries = content
            .split(|&b| b == b'\n')
            .enumerate()
            .filter_map(|(idx, line)| {
                let line = line.strip_suffix(b"\r").unwrap_or(line);
                if line.iter().all(u8::is_ascii_whitespace) {
                    return None;
                }
                Some(TraceEntry {
                    line: idx + 1,
                    page: parse_leading_int(line),
                })
            })
            .collect();
        Self { entries }
    }

    /// Builds a trace directly from page numbers, numbering lines from 1.
    pub fn from_pages<I: IntoIterator<Item = i64>>(pages: I) -> Self {
        let entries = pages
            .into_iter()
            .enumerate()
            .map(|(idx, page)| TraceEntry {
                line: idx + 1,
                page,
            })
            .collect();
        Self { entries }
    }

    pub fn entries(&self) -> &[TraceEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Leading integer of `s`: optional whitespace, optional sign, then digits.
/// Stops at the first non-digit, yields 0 when there are no digits, and
/// saturates instead of overflowing.
pub fn parse_leading_int(s: &[u8]) -> i64 {
    let start = s
        .iter()
        .position(|b| !b.is_ascii_whitespace())
        .unwrap_or(s.len());
    let s = &s[start..];
    let (negative, digits) = match s.first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };

    let mut value: i64 = 0;
    for &b in digits.iter().take_while(|b| b.is_ascii_digit()) {
        let d = i64::from(b - b'0');
        value = if negative {
            value.saturating_mul(10).saturating_sub(d)
        } else {
            value.saturating_mul(10).saturating_add(d)
        };
    }
    value
}
