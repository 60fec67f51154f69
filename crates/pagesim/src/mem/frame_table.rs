use super::{FrameId, PageId};

/// Physical frames, each either free or holding exactly one page.
#[derive(Clone, Debug)]
pub struct FrameTable {
    slots: Vec<Option<PageId>>,
}

impl FrameTable {
    pub fn new(frames: usize) -> Self {
        Self {
            slots: vec![None; frames],
        }
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// First free frame in ascending index order.
    pub fn find_free(&self) -> Option<FrameId> {
        self.slots.iter().position(Option::is_none)
    }

    pub fn occupant(&self, frame: FrameId) -> Option<PageId> {
        self.slots.get(frame).copied().flatten()
    }

    /// Places `page` in `frame`, replacing any previous occupant.
    ///
    /// # Panics
    /// If `frame` is past the end of the table.
    pub fn occupy(&mut self, frame: FrameId, page: PageId) {
        self.slots[frame] = Some(page);
    }

    /// Frees `frame`, returning the page that held it.
    ///
    /// # Panics
    /// If `frame` is past the end of the table.
    pub fn vacate(&mut self, frame: FrameId) -> Option<PageId> {
        self.slots[frame].take()
    }

    /// Iterator over `(frame, page)` for occupied frames, in frame order.
    pub fn occupied(&self) -> impl Iterator<Item = (FrameId, PageId)> + '_ {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(frame, slot)| slot.map(|p| (frame, p)))
    }
}
