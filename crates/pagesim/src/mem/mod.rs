//! Page table and frame table: the two halves of the simulated memory state.
//!
//! Invariant maintained by [`crate::sim::AccessSimulator`]: a page records
//! `Some(f)` in the page table iff frame `f` of the frame table holds that page.

pub use self::frame_table::FrameTable;
pub use self::page_table::{PageRecord, PageTable};

mod frame_table;
mod page_table;

/// Index into the page table.
pub type PageId = usize;

/// Index into the frame table.
pub type FrameId = usize;
