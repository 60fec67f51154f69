use super::{ReplacementPolicy, Victim, min_by_record};
use crate::mem::{FrameTable, PageTable};

/// Least frequently used. With equal counts, as after a cold start, this
/// falls back to evicting the lowest frame index.
#[derive(Clone, Copy, Debug, Default)]
pub struct LfuPolicy;

impl ReplacementPolicy for LfuPolicy {
    fn name(&self) -> &'static str {
        "LFU"
    }

    fn get_victim(&self, frames: &FrameTable, pages: &PageTable) -> Option<Victim> {
        min_by_record(frames, pages, |rec| rec.use_count)
    }
}
