use std::ops::RangeInclusive;

use crate::interpreter::Glue;
use crate::value::{Row, Split};

/// Emits the fields at the given 1-based positions, `""` where missing.
#[derive(Debug, Clone)]
pub struct Pick {
    indices: Vec<usize>,
}

impl Pick {
    pub fn new(indices: Vec<usize>) -> Self {
        Self { indices }
    }
}

impl Glue for Pick {
    fn apply(&self, split: &Split, out: &mut Row) {
        pick_into(split, self.indices.iter().copied(), out);
    }
}

/// Emits an inclusive range of fields.
///
/// A missing start means the first field and a missing end means the last
/// field of the split at hand, so open ranges widen or narrow per line. A
/// bound of `0` counts as missing.
#[derive(Debug, Clone)]
pub struct PickRange {
    start: Option<usize>,
    end: Option<usize>,
}

impl PickRange {
    pub fn new(start: Option<usize>, end: Option<usize>) -> Self {
        Self { start, end }
    }

    /// Positions covered by this range for one split.
    pub fn resolve(&self, split: &Split) -> RangeInclusive<usize> {
        resolve_range(self.start, self.end, split)
    }
}

impl Glue for PickRange {
    fn apply(&self, split: &Split, out: &mut Row) {
        pick_into(split, self.resolve(split), out);
    }
}

pub(super) fn resolve_range(
    start: Option<usize>,
    end: Option<usize>,
    split: &Split,
) -> RangeInclusive<usize> {
    let start = start.filter(|&s| s != 0).unwrap_or(1);
    let end = end.filter(|&e| e != 0).unwrap_or(split.len());
    start..=end
}

pub(super) fn pick_into(split: &Split, indices: impl IntoIterator<Item = usize>, out: &mut Row) {
    out.extend(indices.into_iter().map(|i| split.field(i).to_string()));
}
