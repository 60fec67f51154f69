//! Access simulation.
//!
//! [`AccessSimulator`] owns the page table, frame table, logical clock and
//! counters for one run, and applies page references to them one at a time.

pub mod trace;

use log::{debug, info, trace};

use crate::config::{SimConfig, validate_dimensions};
use crate::error::{Result, SimError};
use crate::mem::{FrameId, FrameTable, PageId, PageTable};
use crate::policies::{ReplacementPolicy, build_policy};
use crate::stats::SimStats;

use self::trace::{Trace, TraceEntry};

/// What a single access did to the memory state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AccessOutcome {
    /// Page was already resident in `frame`.
    Hit { frame: FrameId },
    /// Fault served by the free frame `frame`.
    Loaded { frame: FrameId },
    /// Fault served by evicting `evicted` from `frame`. `key` is the policy
    /// metadata value that made it the victim.
    Replaced {
        frame: FrameId,
        evicted: PageId,
        key: u64,
    },
}

impl AccessOutcome {
    pub fn is_fault(&self) -> bool {
        !matches!(self, AccessOutcome::Hit { .. })
    }

    pub fn frame(&self) -> FrameId {
        match *self {
            AccessOutcome::Hit { frame }
            | AccessOutcome::Loaded { frame }
            | AccessOutcome::Replaced { frame, .. } => frame,
        }
    }
}

pub struct AccessSimulator {
    pages: PageTable,
    frames: FrameTable,
    policy: Box<dyn ReplacementPolicy>,
    clock: u64,
    stats: SimStats,
}

impl AccessSimulator {
    /// Builds a simulator with every page non-resident and every frame free.
    ///
    /// # Errors
    /// Whatever [`SimConfig::validate`] rejects.
    pub fn new(config: &SimConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::build(
            config.frames,
            config.max_pages,
            build_policy(config.policy),
        ))
    }

    /// Like [`AccessSimulator::new`] but with a caller-supplied policy.
    pub fn with_policy(
        frames: usize,
        max_pages: usize,
        policy: Box<dyn ReplacementPolicy>,
    ) -> Result<Self> {
        validate_dimensions(frames, max_pages)?;
        Ok(Self::build(frames, max_pages, policy))
    }

    fn build(frames: usize, max_pages: usize, policy: Box<dyn ReplacementPolicy>) -> Self {
        info!(
            "simulating {} frames over {} pages with {}",
            frames,
            max_pages,
            policy.name()
        );
        Self {
            pages: PageTable::new(max_pages),
            frames: FrameTable::new(frames),
            policy,
            clock: 0,
            stats: SimStats::default(),
        }
    }

    pub fn page_table(&self) -> &PageTable {
        &self.pages
    }

    pub fn frame_table(&self) -> &FrameTable {
        &self.frames
    }

    /// Current logical clock, equal to the number of accesses so far.
    pub fn clock(&self) -> u64 {
        self.clock
    }

    pub fn stats(&self) -> &SimStats {
        &self.stats
    }

    pub fn policy_name(&self) -> &'static str {
        self.policy.name()
    }

    /// Applies one page reference.
    ///
    /// # Errors
    /// [`SimError::PageOutOfRange`] if `page` is outside the address space,
    /// in which case no state changes. [`SimError::NoVictim`] if the policy
    /// fails to name an occupied frame.
    pub fn access(&mut self, page: PageId) -> Result<AccessOutcome> {
        if !self.pages.contains(page) {
            return Err(SimError::PageOutOfRange {
                page: i64::try_from(page).unwrap_or(i64::MAX),
                max_pages: self.pages.capacity(),
                line: None,
            });
        }

        let outcome = match self.pages.frame_of(page) {
            Some(frame) => {
                self.stats.hits += 1;
                AccessOutcome::Hit { frame }
            }
            None => self.handle_fault(page)?,
        };

        self.touch(page);
        trace!("page {} -> {:?}", page, outcome);
        Ok(outcome)
    }

    /// Applies a trace entry, tagging range errors with its line number.
    pub fn access_entry(&mut self, entry: &TraceEntry) -> Result<AccessOutcome> {
        let out_of_range = || SimError::PageOutOfRange {
            page: entry.page,
            max_pages: self.pages.capacity(),
            line: Some(entry.line),
        };
        let page = usize::try_from(entry.page).map_err(|_| out_of_range())?;
        if !self.pages.contains(page) {
            return Err(out_of_range());
        }
        self.access(page)
    }

    /// Runs a whole trace and returns the final counters.
    ///
    /// Stops at the first failing entry.
    pub fn run(&mut self, trace: &Trace) -> Result<SimStats> {
        self.run_with(trace, |_, _| {})
    }

    /// Runs a whole trace, calling `observe` after every access.
    pub fn run_with<F>(&mut self, trace: &Trace, mut observe: F) -> Result<SimStats>
    where
        F: FnMut(&TraceEntry, &AccessOutcome),
    {
        for entry in trace.entries() {
            let outcome = self.access_entry(entry)?;
            observe(entry, &outcome);
        }
        info!(
            "{} accesses, {} faults, {} replacements",
            self.stats.accesses, self.stats.faults, self.stats.replacements
        );
        Ok(self.stats)
    }

    /// Places a non-resident page, evicting a victim if no frame is free.
    fn handle_fault(&mut self, page: PageId) -> Result<AccessOutcome> {
        let outcome = match self.frames.find_free() {
            Some(frame) => {
                self.stats.compulsory_faults += 1;
                AccessOutcome::Loaded { frame }
            }
            None => {
                let victim = self
                    .policy
                    .get_victim(&self.frames, &self.pages)
                    .ok_or(SimError::NoVictim)?;
                let evicted = self
                    .frames
                    .occupant(victim.frame)
                    .ok_or(SimError::NoVictim)?;
                self.frames.vacate(victim.frame);
                self.pages.evict(evicted);
                self.stats.replacements += 1;
                debug!(
                    "{}: page {} replaces page {} in frame {} (key {})",
                    self.policy.name(),
                    page,
                    evicted,
                    victim.frame,
                    victim.key
                );
                AccessOutcome::Replaced {
                    frame: victim.frame,
                    evicted,
                    key: victim.key,
                }
            }
        };

        let frame = outcome.frame();
        self.frames.occupy(frame, page);
        self.pages.load(page, frame);
        self.stats.faults += 1;
        Ok(outcome)
    }

    /// Bookkeeping shared by hits and faults, run once residency is settled.
    fn touch(&mut self, page: PageId) {
        let now = self.clock;
        self.clock += 1;
        self.pages.record_access(page, now);
        self.stats.accesses += 1;
    }
}
