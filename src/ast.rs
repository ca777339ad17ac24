use serde::Serialize;

/// Separators used when an expression does not name its own tokenization.
pub const DEFAULT_SEPARATORS: &str = " \t\n\r";

/// A blend tokenizes a line once and runs every glue over the same split.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename = "blend")]
pub struct Blend {
    pub chop: Chop,
    pub glues: Vec<Glue>,
}

impl Blend {
    /// Blend over the default whitespace separators.
    pub fn whitespace(glues: Vec<Glue>) -> Self {
        Self {
            chop: Chop::Split {
                args: DEFAULT_SEPARATORS.to_string(),
            },
            glues,
        }
    }
}

/// How a line is tokenized.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Chop {
    /// `[split:<chars>:...]` - split around runs of any of `args`
    Split { args: String },
}

impl Chop {
    /// Resolve a chop kind by name. Unknown kinds fall back to `split`.
    pub fn from_kind(kind: &str, args: &str) -> Self {
        if kind != "split" {
            tracing::warn!(kind, "unknown chop kind, falling back to split");
        }
        Chop::Split {
            args: args.to_string(),
        }
    }
}

/// A glue maps one split to zero or more output strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Glue {
    /// `N` - fields at the given 1-based positions
    Pick { indices: Vec<usize> },
    /// `A-B`, `A-`, `-B`, `-` - inclusive range of fields
    PickRange {
        start: Option<usize>,
        end: Option<usize>,
    },
    /// `N+M+...` - fields joined into one string
    Concat {
        indices: Vec<usize>,
        delimiter: String,
    },
    /// Inclusive range joined into one string with no delimiter
    ConcatRange {
        start: Option<usize>,
        end: Option<usize>,
    },
    /// `<glue>[kind:args:glues]` - re-blend every string emitted by `source`
    Nested { source: Box<Glue>, blend: Box<Blend> },
}

impl Glue {
    pub fn pick(index: usize) -> Self {
        Glue::Pick {
            indices: vec![index],
        }
    }

    pub fn pick_range(start: Option<usize>, end: Option<usize>) -> Self {
        Glue::PickRange { start, end }
    }

    pub fn concat(indices: Vec<usize>, delimiter: impl Into<String>) -> Self {
        Glue::Concat {
            indices,
            delimiter: delimiter.into(),
        }
    }

    pub fn concat_range(start: Option<usize>, end: Option<usize>) -> Self {
        Glue::ConcatRange { start, end }
    }

    pub fn nested(source: Glue, blend: Blend) -> Self {
        Glue::Nested {
            source: Box::new(source),
            blend: Box::new(blend),
        }
    }
}
