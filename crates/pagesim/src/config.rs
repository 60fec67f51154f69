//! Simulation configuration.
//!
//! A [`SimConfig`] fixes the three knobs of a run: how many physical frames
//! exist, how large the page address space is, and which replacement policy
//! chooses victims once every frame is occupied.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Result, SimError};

/// Number of distinct pages a trace may reference unless overridden.
pub const MAX_PAGES: usize = 1024;

/// Replacement policy selector.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PolicyKind {
    /// Evict the page with the oldest last access.
    #[serde(rename = "LRU")]
    Lru,
    /// Evict the page with the fewest accesses since it was loaded.
    #[serde(rename = "LFU")]
    Lfu,
}

impl PolicyKind {
    pub fn as_str(self) -> &'static str {
        match self {
            PolicyKind::Lru => "LRU",
            PolicyKind::Lfu => "LFU",
        }
    }
}

impl FromStr for PolicyKind {
    type Err = SimError;

    /// Exact, case-sensitive match on `LRU` or `LFU`.
    fn from_str(s: &str) -> Result<Self> {
        match s {
            "LRU" => Ok(PolicyKind::Lru),
            "LFU" => Ok(PolicyKind::Lfu),
            other => Err(SimError::UnknownPolicy(other.to_string())),
        }
    }
}

impl fmt::Display for PolicyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

fn default_max_pages() -> usize {
    MAX_PAGES
}

/// Parameters of a single simulation run.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimConfig {
    /// Number of physical frames.
    pub frames: usize,
    /// Victim selection once all frames are occupied.
    pub policy: PolicyKind,
    /// Size of the page address space; pages are `0..max_pages`.
    #[serde(default = "default_max_pages")]
    pub max_pages: usize,
}

impl SimConfig {
    pub fn new(frames: usize, policy: PolicyKind) -> Self {
        Self {
            frames,
            policy,
            max_pages: MAX_PAGES,
        }
    }

    pub fn with_max_pages(mut self, max_pages: usize) -> Self {
        self.max_pages = max_pages;
        self
    }

    /// Rejects configurations the simulator cannot run.
    ///
    /// # Errors
    /// [`SimError::NoFrames`] for zero frames, since a fault would then have
    /// neither a free frame nor a victim. [`SimError::NoPages`] for an empty
    /// address space.
    pub fn validate(&self) -> Result<()> {
        validate_dimensions(self.frames, self.max_pages)
    }
}

/// Frame and page counts a simulator can be built with.
pub(crate) fn validate_dimensions(frames: usize, max_pages: usize) -> Result<()> {
    if frames == 0 {
        return Err(SimError::NoFrames);
    }
    if max_pages == 0 {
        return Err(SimError::NoPages);
    }
    Ok(())
}
