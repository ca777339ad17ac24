use crate::interpreter::{Glue, Pipeline, Selector};
use crate::value::{Row, Split};

/// Re-blends every string a source glue emits.
///
/// `2[split:-:1,2]` takes field 2 of the outer split, splits it again on `-`
/// and emits its first two sub-fields in place.
#[derive(Debug)]
pub struct Nested {
    source: Box<Selector>,
    blend: Pipeline,
}

impl Nested {
    pub fn new(source: Selector, blend: Pipeline) -> Self {
        Self {
            source: Box::new(source),
            blend,
        }
    }
}

impl Glue for Nested {
    fn apply(&self, split: &Split, out: &mut Row) {
        let mut picked = Row::new();
        self.source.apply(split, &mut picked);
        for value in &picked {
            self.blend.extend_row(value, out);
        }
    }
}
