use super::{ReplacementPolicy, Victim, min_by_record};
use crate::mem::{FrameTable, PageTable};

#[derive(Clone, Copy, Debug, Default)]
pub struct LruPolicy;

impl ReplacementPolicy for LruPolicy {
    fn name(&self) -> &'static str {
        "LRU"
    }

    fn get_victim(&self, frames: &FrameTable, pages: &PageTable) -> Option<Victim> {
        min_by_record(frames, pages, |rec| rec.last_used)
    }
}
