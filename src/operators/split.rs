use crate::interpreter::Chop;
use crate::value::Split;

/// Splits around maximal runs of any of a set of separator characters.
///
/// The separator set is one character class: `"a- b"` split on `"- "` has a
/// single junk run `"- "`, not two.
#[derive(Debug, Clone)]
pub struct SplitAnyOf {
    separators: Vec<char>,
}

impl SplitAnyOf {
    pub fn new(separators: &str) -> Self {
        let mut separators: Vec<char> = separators.chars().collect();
        separators.sort_unstable();
        separators.dedup();
        Self { separators }
    }

    fn is_separator(&self, c: char) -> bool {
        self.separators.binary_search(&c).is_ok()
    }
}

impl Chop for SplitAnyOf {
    fn chop(&self, text: &str) -> Split {
        if self.separators.is_empty() {
            return Split::whole(text);
        }

        let mut fields = Vec::new();
        let mut junk = Vec::new();
        let mut in_junk = false;
        let mut start = 0;

        for (i, c) in text.char_indices() {
            let is_sep = self.is_separator(c);
            if is_sep != in_junk {
                let run = text[start..i].to_string();
                if in_junk {
                    junk.push(run);
                } else {
                    fields.push(run);
                }
                in_junk = is_sep;
                start = i;
            }
        }

        let rest = text[start..].to_string();
        if in_junk {
            // A trailing separator run still ends on a (empty) field.
            junk.push(rest);
            fields.push(String::new());
        } else {
            fields.push(rest);
        }

        Split::from_runs(fields, junk)
    }
}
