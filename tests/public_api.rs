//! Integration tests for the public API.
//!
//! These walk the documented scenarios end-to-end through the re-exports of
//! the `carbon` crate.

use carbon::{
    HashMap, IndexOutOfRange, MapEntry, ReadonlyMap, ReadonlySlice, copy_map, copy_map_mut,
    copy_slice, copy_slice_mut, readonly_map, readonly_slice,
};
use pretty_assertions::assert_eq;

#[test]
fn test_map_scenario() {
    let map: HashMap<i32, &str> =
        HashMap::from([(0, "zero"), (1, "one"), (2, "two"), (3, "three")]);
    let view = readonly_map(&map);

    assert_eq!(view.len(), 4);
    assert_eq!(view.lookup(&2), ("two", true));
    assert_eq!(view.lookup(&9), ("", false));

    let mut entries = view.entries();
    entries.sort_by_key(|e| e.key);
    assert_eq!(
        entries,
        vec![
            MapEntry::new(0, "zero"),
            MapEntry::new(1, "one"),
            MapEntry::new(2, "two"),
            MapEntry::new(3, "three"),
        ]
    );
}

#[test]
fn test_slice_scenario() {
    let slice = vec!["zero", "one", "two", "three"];
    let view = readonly_slice(&slice);

    assert_eq!(view.len(), 4);
    assert_eq!(view.get(2), "two");
    assert_eq!(view.try_get(4), Err(IndexOutOfRange { index: 4, len: 4 }));
}

#[test]
#[should_panic(expected = "index out of range")]
fn test_slice_scenario_out_of_range() {
    let slice = vec!["zero", "one", "two", "three"];
    readonly_slice(&slice).get(4);
}

#[test]
fn test_copies_round_trip() {
    let map: HashMap<i32, &str> = HashMap::from([(0, "zero"), (1, "one")]);
    let slice = vec!["zero", "one"];

    assert_eq!(copy_map_mut(&readonly_map(&map)), map);
    assert_eq!(copy_slice_mut(&readonly_slice(&slice)), slice);

    let map_copy = copy_map(&readonly_map(&map));
    let slice_copy = copy_slice(&readonly_slice(&slice));
    drop((map, slice));

    assert_eq!(map_copy.get(&1), Some("one"));
    assert_eq!(slice_copy.get(1), "one");
}
