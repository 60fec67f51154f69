//! Error types for the page replacement simulator.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Result type alias using [`SimError`].
pub type Result<T> = std::result::Result<T, SimError>;

/// Everything that can abort a simulation run.
///
/// None of these are recoverable mid-run: the first error ends the run and
/// no partial statistics are reported.
#[derive(Debug, Error)]
pub enum SimError {
    /// Policy name other than `LRU` or `LFU`.
    #[error("unknown replacement policy '{0}', must be either LRU or LFU")]
    UnknownPolicy(String),

    /// A run needs at least one frame to place pages in.
    #[error("number of frames must be at least 1")]
    NoFrames,

    /// The page address space must hold at least one page.
    #[error("maximum page count must be at least 1")]
    NoPages,

    /// The trace file could not be opened or read.
    #[error("failed to read trace file {}: {source}", .path.display())]
    TraceIo {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A referenced page lies outside `0..max_pages`.
    #[error("no page {page} in current page file (valid pages are 0..{max_pages}){}", line_suffix(.line))]
    PageOutOfRange {
        page: i64,
        max_pages: usize,
        line: Option<usize>,
    },

    /// The policy was asked for a victim while no frame was occupied.
    #[error("replacement policy found no occupied frame to evict")]
    NoVictim,
}

fn line_suffix(line: &Option<usize>) -> String {
    match *line {
        Some(n) => format!(" at trace line {}", n),
        None => String::new(),
    }
}
