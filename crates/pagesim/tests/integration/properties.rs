//! Invariants over random traces.

use pagesim::{AccessOutcome, AccessSimulator, PolicyKind, SimConfig};
use proptest::prelude::*;
use std::collections::HashSet;

fn policy() -> impl Strategy<Value = PolicyKind> {
    prop_oneof![Just(PolicyKind::Lru), Just(PolicyKind::Lfu)]
}

fn trace() -> impl Strategy<Value = Vec<usize>> {
    prop::collection::vec(0usize..16, 0..200)
}

proptest! {
    #[test]
    fn runs_are_deterministic(frames in 1usize..8, policy in policy(), pages in trace()) {
        let run = || {
            let mut sim = AccessSimulator::new(&SimConfig::new(frames, policy)).unwrap();
            pages.iter().map(|&p| sim.access(p).unwrap()).collect::<Vec<_>>()
        };
        prop_assert_eq!(run(), run());
    }

    #[test]
    fn tables_stay_consistent(frames in 1usize..8, policy in policy(), pages in trace()) {
        let mut sim = AccessSimulator::new(&SimConfig::new(frames, policy)).unwrap();
        for &page in &pages {
            sim.access(page).unwrap();

            let frame_view: HashSet<_> =
                sim.frame_table().occupied().map(|(f, p)| (p, f)).collect();
            let page_view: HashSet<_> = sim.page_table().resident_pages().collect();
            prop_assert_eq!(&frame_view, &page_view);
            prop_assert!(sim.page_table().is_resident(page));
        }
    }

    #[test]
    fn evictions_only_after_frames_fill(frames in 1usize..8, policy in policy(), pages in trace()) {
        let mut sim = AccessSimulator::new(&SimConfig::new(frames, policy)).unwrap();
        let mut seen = HashSet::new();
        for &page in &pages {
            let first_touch = seen.insert(page);
            let outcome = sim.access(page).unwrap();
            if first_touch {
                prop_assert!(outcome.is_fault());
            }
            if let AccessOutcome::Replaced { .. } = outcome {
                prop_assert!(seen.len() > frames);
            }
        }
        let distinct = seen.len() as u64;
        prop_assert!(sim.stats().faults >= distinct);
        prop_assert_eq!(sim.stats().compulsory_faults, distinct.min(frames as u64));
    }

    #[test]
    fn victim_has_smallest_key(frames in 1usize..6, policy in policy(), pages in trace()) {
        let mut sim = AccessSimulator::new(&SimConfig::new(frames, policy)).unwrap();
        for &page in &pages {
            let keys: Vec<(usize, u64)> = sim
                .frame_table()
                .occupied()
                .map(|(f, p)| {
                    let rec = sim.page_table().get(p).unwrap();
                    let key = match policy {
                        PolicyKind::Lru => rec.last_used,
                        PolicyKind::Lfu => rec.use_count,
                    };
                    (f, key)
                })
                .collect();

            if let AccessOutcome::Replaced { frame, key, .. } = sim.access(page).unwrap() {
                let min = keys.iter().map(|&(_, k)| k).min().unwrap();
                prop_assert_eq!(key, min);
                let first = keys.iter().find(|&&(_, k)| k == min).unwrap().0;
                prop_assert_eq!(frame, first);
            }
        }
    }
}
