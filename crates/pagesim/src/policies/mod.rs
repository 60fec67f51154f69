//! Victim selection for a full frame table.
//!
//! Policies are pure functions of the current frame and page tables. They are
//! only consulted when no frame is free, and ties go to the lowest frame index.

use crate::config::PolicyKind;
use crate::mem::{FrameId, FrameTable, PageRecord, PageTable};

/// Frame chosen for eviction, along with the metadata value that decided it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Victim {
    pub frame: FrameId,
    /// `last_used` for LRU, `use_count` for LFU.
    pub key: u64,
}

pub trait ReplacementPolicy {
    fn name(&self) -> &'static str;
    fn get_victim(&self, frames: &FrameTable, pages: &PageTable) -> Option<Victim>;
}

pub use self::lfu::LfuPolicy;
pub use self::lru::LruPolicy;

mod lfu;
mod lru;

pub fn build_policy(kind: PolicyKind) -> Box<dyn ReplacementPolicy> {
    match kind {
        PolicyKind::Lru => Box::new(LruPolicy),
        PolicyKind::Lfu => Box::new(LfuPolicy),
    }
}

/// Occupied frame whose page has the smallest `key`; first frame wins ties.
fn min_by_record<F>(frames: &FrameTable, pages: &PageTable, key: F) -> Option<Victim>
where
    F: Fn(&PageRecord) -> u64,
{
    frames
        .occupied()
        .filter_map(|(frame, page)| {
            let rec = pages.get(page)?;
            Some(Victim {
                frame,
                key: key(rec),
            })
        })
        .min_by_key(|v| v.key)
}
