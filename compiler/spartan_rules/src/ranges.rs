//! Merging highlighted ranges.
//!
//! Opportunities are reported as [`Span`]s and often nest or touch: a chain
//! and its parent both want highlighting. [`RangeSet`] keeps the minimal
//! set of ranges covering everything inserted.
//!
//! Overlap is inclusive: `[1, 5]` and `[5, 9]` merge, `[1, 5]` and `[6, 9]`
//! do not.

use spartan_ir::Span;

/// True if `a` and `b` share at least one endpoint position.
#[inline]
pub fn overlaps(a: Span, b: Span) -> bool {
    a.start <= b.end && b.start <= a.end
}

/// Smallest range covering both.
#[inline]
pub fn merge(a: Span, b: Span) -> Span {
    a.merge(b)
}

/// Merge `r` into `list`.
///
/// Every entry overlapping `r` is merged with it, and so is every entry the
/// growing range comes to overlap, so the result has no two overlapping
/// entries if `list` had none. Returns `None` when nothing in `list`
/// overlaps `r`; the caller then appends `r` itself.
pub fn union_into(list: &[Span], r: Span) -> Option<Vec<Span>> {
    if !list.iter().any(|&entry| overlaps(entry, r)) {
        return None;
    }
    let mut merged = r;
    let mut rest: Vec<Span> = list.to_vec();
    loop {
        let before = rest.len();
        rest.retain(|&entry| {
            if overlaps(entry, merged) {
                merged = merge(entry, merged);
                false
            } else {
                true
            }
        });
        if rest.len() == before {
            break;
        }
    }
    let at = rest.partition_point(|entry| entry.start < merged.start);
    rest.insert(at, merged);
    Some(rest)
}

/// Ordered, pairwise non-overlapping ranges.
#[derive(Clone, Default, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct RangeSet {
    ranges: Vec<Span>,
}

impl RangeSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `r`, merging it with whatever it overlaps.
    pub fn insert(&mut self, r: Span) {
        match union_into(&self.ranges, r) {
            Some(merged) => self.ranges = merged,
            None => {
                let at = self.ranges.partition_point(|entry| entry.start < r.start);
                self.ranges.insert(at, r);
            }
        }
    }

    pub fn as_slice(&self) -> &[Span] {
        &self.ranges
    }

    pub fn into_vec(self) -> Vec<Span> {
        self.ranges
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Span> {
        self.ranges.iter()
    }

    pub fn len(&self) -> usize {
        self.ranges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ranges.is_empty()
    }
}

impl FromIterator<Span> for RangeSet {
    fn from_iter<I: IntoIterator<Item = Span>>(iter: I) -> Self {
        let mut set = RangeSet::new();
        for r in iter {
            set.insert(r);
        }
        set
    }
}

impl Extend<Span> for RangeSet {
    fn extend<I: IntoIterator<Item = Span>>(&mut self, iter: I) {
        for r in iter {
            self.insert(r);
        }
    }
}

impl<'a> IntoIterator for &'a RangeSet {
    type Item = &'a Span;
    type IntoIter = std::slice::Iter<'a, Span>;

    fn into_iter(self) -> Self::IntoIter {
        self.ranges.iter()
    }
}

#[cfg(test)]
mod tests;
