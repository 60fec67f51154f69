use super::{FrameId, PageId};

/// Residency and usage metadata for one page.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PageRecord {
    /// Frame currently holding the page, `None` when not resident.
    pub frame: Option<FrameId>,
    /// Logical clock value of the most recent access.
    pub last_used: u64,
    /// Accesses since the page was last loaded.
    pub use_count: u64,
}

impl PageRecord {
    pub fn is_resident(&self) -> bool {
        self.frame.is_some()
    }
}

/// Fixed-size table with one record per page of the address space.
#[derive(Clone, Debug)]
pub struct PageTable {
    records: Vec<PageRecord>,
}

impl PageTable {
    /// Creates a table of `capacity` non-resident pages.
    pub fn new(capacity: usize) -> Self {
        Self {
            records: vec![PageRecord::default(); capacity],
        }
    }

    pub fn capacity(&self) -> usize {
        self.records.len()
    }

    pub fn contains(&self, page: PageId) -> bool {
        page < self.records.len()
    }

    /// Record for `page`, or `None` outside the address space.
    pub fn get(&self, page: PageId) -> Option<&PageRecord> {
        self.records.get(page)
    }

    pub fn is_resident(&self, page: PageId) -> bool {
        self.records.get(page).is_some_and(PageRecord::is_resident)
    }

    pub fn frame_of(&self, page: PageId) -> Option<FrameId> {
        self.records.get(page).and_then(|r| r.frame)
    }

    /// Marks an access at logical time `time`.
    ///
    /// # Panics
    /// If `page` is outside the table.
    pub fn record_access(&mut self, page: PageId, time: u64) {
        let rec = &mut self.records[page];
        rec.use_count += 1;
        rec.last_used = time;
    }

    /// Makes `page` resident in `frame` with a fresh use count.
    ///
    /// # Panics
    /// If `page` is outside the table.
    pub fn load(&mut self, page: PageId, frame: FrameId) {
        let rec = &mut self.records[page];
        rec.frame = Some(frame);
        rec.use_count = 0;
    }

    /// Marks `page` non-resident. Usage metadata is left in place.
    ///
    /// # Panics
    /// If `page` is outside the table.
    pub fn evict(&mut self, page: PageId) {
        self.records[page].frame = None;
    }

    /// Iterator over `(page, frame)` for every resident page, in page order.
    pub fn resident_pages(&self) -> impl Iterator<Item = (PageId, FrameId)> + '_ {
        self.records
            .iter()
            .enumerate()
            .filter_map(|(page, rec)| rec.frame.map(|f| (page, f)))
    }
}
