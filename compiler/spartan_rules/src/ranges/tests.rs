use pretty_assertions::assert_eq;
use spartan_ir::Span;

use super::*;

const fn s(start: u32, end: u32) -> Span {
    Span::new(start, end)
}

#[test]
fn overlapping_ranges_merge() {
    assert!(overlaps(s(1, 5), s(4, 10)));
    assert_eq!(merge(s(1, 5), s(4, 10)), s(1, 10));
}

#[test]
fn disjoint_ranges_stay_apart() {
    assert!(!overlaps(s(1, 5), s(6, 10)));
    assert!(!overlaps(s(6, 10), s(1, 5)));
    let set: RangeSet = [s(1, 5), s(6, 10)].into_iter().collect();
    assert_eq!(set.as_slice(), &[s(1, 5), s(6, 10)]);
}

#[test]
fn touching_endpoints_overlap() {
    assert!(overlaps(s(1, 5), s(5, 9)));
    assert!(overlaps(s(3, 3), s(3, 3)));
}

#[test]
fn containment_overlaps() {
    assert!(overlaps(s(0, 20), s(4, 6)));
    assert_eq!(merge(s(0, 20), s(4, 6)), s(0, 20));
}

#[test]
fn union_into_reports_no_overlap() {
    assert_eq!(union_into(&[s(0, 2), s(10, 12)], s(5, 7)), None);
    assert_eq!(union_into(&[], s(5, 7)), None);
}

#[test]
fn union_into_merges_every_overlapping_entry() {
    // A single-match merge would leave [0, 12] next to [10, 20].
    let merged = union_into(&[s(0, 3), s(10, 20), s(30, 40)], s(2, 12));
    assert_eq!(merged, Some(vec![s(0, 20), s(30, 40)]));
}

#[test]
fn union_into_follows_the_growing_range() {
    let merged = union_into(&[s(2, 3), s(5, 7)], s(3, 5));
    assert_eq!(merged, Some(vec![s(2, 7)]));
}

#[test]
fn range_set_stays_sorted() {
    let mut set = RangeSet::new();
    assert!(set.is_empty());
    set.insert(s(20, 25));
    set.insert(s(0, 3));
    set.insert(s(10, 12));
    assert_eq!(set.as_slice(), &[s(0, 3), s(10, 12), s(20, 25)]);

    set.insert(s(11, 21));
    assert_eq!(set.len(), 2);
    assert_eq!(set.clone().into_vec(), vec![s(0, 3), s(10, 25)]);

    set.extend([s(3, 10)]);
    assert_eq!(set.iter().copied().collect::<Vec<_>>(), vec![s(0, 25)]);
}
