//! Run statistics.

use serde::Serialize;

/// Counters accumulated over a run.
///
/// `faults` counts every access to a non-resident page. It splits into
/// `compulsory_faults` (served by a free frame) and `replacements` (served by
/// evicting another page).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct SimStats {
    pub accesses: u64,
    pub hits: u64,
    pub faults: u64,
    pub compulsory_faults: u64,
    pub replacements: u64,
}

impl SimStats {
    pub fn hit_ratio(&self) -> f64 {
        if self.accesses == 0 {
            0.0
        } else {
            self.hits as f64 / self.accesses as f64
        }
    }

    pub fn print(&self) {
        println!("\n==========================================");
        println!("  Accesses            {:>12}", self.accesses);
        println!("  Hits                {:>12}", self.hits);
        println!("  Faults              {:>12}", self.faults);
        println!("    compulsory        {:>12}", self.compulsory_faults);
        println!("    replacements      {:>12}", self.replacements);
        println!("  Hit ratio           {:>11.2}%", self.hit_ratio() * 100.0);
        println!("==========================================");
    }
}
