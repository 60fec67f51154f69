use pagesim::mem::{PageRecord, PageTable};
use pretty_assertions::assert_eq;

#[test]
fn new_table_has_nothing_resident() {
    let table = PageTable::new(16);
    assert_eq!(table.capacity(), 16);
    assert!((0..16).all(|p| !table.is_resident(p)));
    assert_eq!(table.resident_pages().count(), 0);
    assert_eq!(table.get(3), Some(&PageRecord::default()));
}

#[test]
fn out_of_range_lookups_are_none() {
    let table = PageTable::new(4);
    assert!(!table.contains(4));
    assert!(!table.is_resident(4));
    assert_eq!(table.get(4), None);
    assert_eq!(table.frame_of(100), None);
}

#[test]
fn load_then_access_updates_metadata() {
    let mut table = PageTable::new(8);
    table.load(5, 2);
    table.record_access(5, 10);
    table.record_access(5, 11);

    let rec = table.get(5).unwrap();
    assert_eq!(rec.frame, Some(2));
    assert_eq!(rec.last_used, 11);
    assert_eq!(rec.use_count, 2);
    assert_eq!(table.resident_pages().collect::<Vec<_>>(), vec![(5, 2)]);
}

#[test]
fn evict_keeps_metadata_and_reload_resets_count() {
    let mut table = PageTable::new(8);
    table.load(1, 0);
    table.record_access(1, 0);
    table.record_access(1, 1);

    table.evict(1);
    assert!(!table.is_resident(1));
    assert_eq!(table.get(1).unwrap().use_count, 2);
    assert_eq!(table.get(1).unwrap().last_used, 1);

    table.load(1, 3);
    assert_eq!(table.frame_of(1), Some(3));
    assert_eq!(table.get(1).unwrap().use_count, 0);
}

#[test]
#[should_panic]
fn record_access_outside_table_panics() {
    PageTable::new(2).record_access(2, 0);
}
