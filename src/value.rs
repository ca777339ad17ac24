//! Data model for the selector engine.
//!
//! The core types are:
//! - `Split`: a tokenized line, fields alternating with the separator runs
//!   between them
//! - `Row`: the strings emitted for one input line

use std::fmt;

use serde::Serialize;

/// The strings emitted for one input line, in glue order.
pub type Row = Vec<String>;

/// A tokenized string.
///
/// Fields and junk strictly alternate, starting and ending with a field, so
/// `junk.len() == fields.len() - 1` and `fields` is never empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Split {
    fields: Vec<String>,
    junk: Vec<String>,
}

impl Split {
    /// Build a split from runs already known to alternate.
    pub(crate) fn from_runs(fields: Vec<String>, junk: Vec<String>) -> Self {
        debug_assert_eq!(junk.len() + 1, fields.len());
        Self { fields, junk }
    }

    /// A split holding the whole string as its only field.
    pub fn whole(s: &str) -> Self {
        Self {
            fields: vec![s.to_string()],
            junk: Vec::new(),
        }
    }

    /// Field at a 1-based position. Out-of-range positions are empty.
    pub fn field(&self, index: usize) -> &str {
        index
            .checked_sub(1)
            .and_then(|i| self.fields.get(i))
            .map_or("", String::as_str)
    }

    /// All fields in order.
    pub fn fields(&self) -> &[String] {
        &self.fields
    }

    /// The separator runs between fields.
    pub fn junk(&self) -> &[String] {
        &self.junk
    }

    /// Number of fields (never zero).
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Never true: a split always holds at least one field.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

/// Reassembles the original string.
impl fmt::Display for Split {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, field) in self.fields.iter().enumerate() {
            if i > 0 {
                f.write_str(&self.junk[i - 1])?;
            }
            f.write_str(field)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn split(fields: &[&str], junk: &[&str]) -> Split {
        Split::from_runs(
            fields.iter().map(|s| s.to_string()).collect(),
            junk.iter().map(|s| s.to_string()).collect(),
        )
    }

    #[test]
    fn field_is_one_based() {
        let s = split(&["a", "b", "c"], &[" ", " "]);
        assert_eq!(s.field(1), "a");
        assert_eq!(s.field(3), "c");
    }

    #[test]
    fn field_out_of_range_is_empty() {
        let s = split(&["a", "b"], &[" "]);
        assert_eq!(s.field(0), "");
        assert_eq!(s.field(3), "");
        assert_eq!(s.field(usize::MAX), "");
    }

    #[test]
    fn whole_has_one_field() {
        let s = Split::whole("a b");
        assert_eq!(s.len(), 1);
        assert!(s.junk().is_empty());
        assert!(!s.is_empty());
    }

    #[test]
    fn display_reassembles() {
        let s = split(&["ab", "12", ""], &["-", " \t"]);
        assert_eq!(s.to_string(), "ab-12 \t");
    }
}
