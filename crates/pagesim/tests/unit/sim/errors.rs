use crate::common::{feed, simulator};
use pagesim::{AccessSimulator, MAX_PAGES, PolicyKind, SimConfig, SimError, Trace};

#[test]
fn zero_frames_is_a_config_error() {
    let result = AccessSimulator::new(&SimConfig::new(0, PolicyKind::Lru));
    assert!(matches!(result, Err(SimError::NoFrames)));
}

#[test]
fn zero_pages_is_a_config_error() {
    let result = AccessSimulator::new(&SimConfig::new(2, PolicyKind::Lfu).with_max_pages(0));
    assert!(matches!(result, Err(SimError::NoPages)));
}

#[test]
fn page_at_bound_is_rejected_without_side_effects() {
    let mut sim = simulator(2, PolicyKind::Lru);
    feed(&mut sim, &[1]);

    let err = sim.access(MAX_PAGES).unwrap_err();
    assert!(matches!(
        err,
        SimError::PageOutOfRange {
            page,
            max_pages: MAX_PAGES,
            line: None
        } if page == MAX_PAGES as i64
    ));
    assert_eq!(sim.clock(), 1);
    assert_eq!(sim.stats().faults, 1);
}

#[test]
fn last_page_is_accepted() {
    let mut sim = simulator(1, PolicyKind::Lru);
    assert!(sim.access(MAX_PAGES - 1).is_ok());
}

#[test]
fn run_aborts_on_first_bad_entry() {
    let config = SimConfig::new(2, PolicyKind::Lru).with_max_pages(8);
    let mut sim = AccessSimulator::new(&config).unwrap();
    let trace = Trace::parse("1\n2\n8\n3\n");

    let err = sim.run(&trace).unwrap_err();
    assert!(matches!(
        err,
        SimError::PageOutOfRange {
            page: 8,
            max_pages: 8,
            line: Some(3)
        }
    ));
    assert_eq!(sim.stats().accesses, 2);
    assert!(!sim.page_table().is_resident(3));
}

#[test]
fn negative_page_is_out_of_range() {
    let mut sim = simulator(2, PolicyKind::Lfu);
    let err = sim.run(&Trace::parse("-4\n")).unwrap_err();
    assert!(matches!(
        err,
        SimError::PageOutOfRange {
            page: -4,
            line: Some(1),
            ..
        }
    ));
    assert!(err.to_string().contains("no page -4"));
}
