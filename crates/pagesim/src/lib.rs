//! Single-level virtual memory simulator.
//!
//! Replays a trace of page references against a fixed number of physical
//! frames and counts page faults. Once every frame is occupied, a fault evicts
//! the page chosen by the configured [`policies::ReplacementPolicy`], either
//! least recently used or least frequently used.
//!
//! ```no_run
//! use pagesim::{AccessSimulator, PolicyKind, SimConfig, Trace};
//!
//! let config = SimConfig::new(3, PolicyKind::Lru);
//! let trace = Trace::from_file("trace.txt")?;
//! let stats = AccessSimulator::new(&config)?.run(&trace)?;
//! println!("{} page faults encountered during simulation", stats.faults);
//! # Ok::<(), pagesim::SimError>(())
//! ```

/// Run parameters and the policy selector.
pub mod config;

/// Error type shared by every fallible operation.
pub mod error;

/// Page table and frame table.
pub mod mem;

/// LRU and LFU victim selection.
pub mod policies;

/// The access state machine and trace loading.
pub mod sim;

/// Fault and hit counters.
pub mod stats;

pub use crate::config::{MAX_PAGES, PolicyKind, SimConfig};
pub use crate::error::{Result, SimError};
pub use crate::sim::trace::{Trace, TraceEntry};
pub use crate::sim::{AccessOutcome, AccessSimulator};
pub use crate::stats::SimStats;
