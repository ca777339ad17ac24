use crate::interpreter::Glue;
use crate::value::{Row, Split};

use super::pick::{pick_into, resolve_range};

/// Joins the picked fields into exactly one string.
#[derive(Debug, Clone)]
pub struct Concat {
    indices: Vec<usize>,
    delimiter: String,
}

impl Concat {
    pub fn new(indices: Vec<usize>, delimiter: String) -> Self {
        Self { indices, delimiter }
    }
}

impl Glue for Concat {
    fn apply(&self, split: &Split, out: &mut Row) {
        let mut picked = Row::with_capacity(self.indices.len());
        pick_into(split, self.indices.iter().copied(), &mut picked);
        out.push(picked.join(&self.delimiter));
    }
}

/// Joins an inclusive range of fields into exactly one string.
///
/// Always joins with the empty delimiter; unlike `Concat` there is no way to
/// choose one.
#[derive(Debug, Clone)]
pub struct ConcatRange {
    start: Option<usize>,
    end: Option<usize>,
}

impl ConcatRange {
    pub fn new(start: Option<usize>, end: Option<usize>) -> Self {
        Self { start, end }
    }
}

impl Glue for ConcatRange {
    fn apply(&self, split: &Split, out: &mut Row) {
        let mut picked = Row::new();
        pick_into(split, resolve_range(self.start, self.end, split), &mut picked);
        out.push(picked.concat());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interpreter::Chop;
    use crate::operators::SplitAnyOf;

    fn apply(glue: &impl Glue, text: &str) -> Row {
        let mut out = Row::new();
        glue.apply(&SplitAnyOf::new(" ").chop(text), &mut out);
        out
    }

    #[test]
    fn concat_without_delimiter() {
        let glue = Concat::new(vec![5, 4, 5, 1], String::new());
        assert_eq!(apply(&glue, "a b c d e"), ["edea"]);
    }

    #[test]
    fn concat_missing_fields_are_empty() {
        let glue = Concat::new(vec![1, 2, 3], String::new());
        assert_eq!(apply(&glue, "a"), ["a"]);
    }

    #[test]
    fn concat_with_delimiter() {
        let glue = Concat::new(vec![1, 3], " ".to_string());
        assert_eq!(apply(&glue, "a b c"), ["a c"]);
        let glue = Concat::new(vec![1, 4, 2], "::".to_string());
        assert_eq!(apply(&glue, "a b c"), ["a::::b"]);
    }

    #[test]
    fn concat_always_emits_one_string() {
        let glue = Concat::new(vec![], "-".to_string());
        assert_eq!(apply(&glue, "a b"), [""]);
    }

    #[test]
    fn concat_range_closed() {
        assert_eq!(apply(&ConcatRange::new(Some(2), Some(3)), "a b c d"), ["bc"]);
    }

    #[test]
    fn concat_range_open_ends() {
        assert_eq!(apply(&ConcatRange::new(Some(2), None), "a b c d"), ["bcd"]);
        assert_eq!(apply(&ConcatRange::new(None, Some(3)), "a b c d"), ["abc"]);
        assert_eq!(apply(&ConcatRange::new(None, None), "a b c d"), ["abcd"]);
    }

    #[test]
    fn concat_range_past_end() {
        assert_eq!(apply(&ConcatRange::new(Some(2), Some(3)), "a b"), ["b"]);
        assert_eq!(apply(&ConcatRange::new(Some(1), None), "a b"), ["ab"]);
        assert_eq!(apply(&ConcatRange::new(None, Some(3)), "a b"), ["ab"]);
    }

    #[test]
    fn concat_range_zero_bound_is_default() {
        assert_eq!(apply(&ConcatRange::new(Some(0), Some(2)), "a b c"), ["ab"]);
        assert_eq!(apply(&ConcatRange::new(Some(2), Some(0)), "a b c"), ["bc"]);
        assert_eq!(apply(&ConcatRange::new(Some(0), None), "a b c"), ["abc"]);
    }

    #[test]
    fn concat_range_inverted_still_emits_one_string() {
        assert_eq!(apply(&ConcatRange::new(Some(3), Some(1)), "a b c"), [""]);
    }
}
