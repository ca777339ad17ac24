//! Interpreter for selection expressions.
//!
//! A parsed `ast::Blend` is compiled once into a `Pipeline`, which is then
//! applied to every input line. Each line is tokenized exactly once and every
//! selector of the blend reads that same split, so open ranges agree on the
//! field count of the line.

use crate::ast;
use crate::operators::{Concat, ConcatRange, Nested, Pick, PickRange, SplitAnyOf};
use crate::value::{Row, Split};

/// A chop tokenizes a string into fields and junk.
pub trait Chop {
    fn chop(&self, text: &str) -> Split;
}

/// A glue reads a split and appends its output strings to a row.
///
/// Glues never fail: out-of-range positions and inverted ranges have defined
/// outputs.
pub trait Glue {
    fn apply(&self, split: &Split, out: &mut Row);
}

/// Every compiled tokenization strategy.
#[derive(Debug)]
pub enum Tokenizer {
    Split(SplitAnyOf),
}

impl Chop for Tokenizer {
    fn chop(&self, text: &str) -> Split {
        match self {
            Tokenizer::Split(s) => s.chop(text),
        }
    }
}

/// Every compiled selector.
#[derive(Debug)]
pub enum Selector {
    Pick(Pick),
    PickRange(PickRange),
    Concat(Concat),
    ConcatRange(ConcatRange),
    Nested(Nested),
}

impl Glue for Selector {
    fn apply(&self, split: &Split, out: &mut Row) {
        match self {
            Selector::Pick(g) => g.apply(split, out),
            Selector::PickRange(g) => g.apply(split, out),
            Selector::Concat(g) => g.apply(split, out),
            Selector::ConcatRange(g) => g.apply(split, out),
            Selector::Nested(g) => g.apply(split, out),
        }
    }
}

/// A compiled blend: one tokenizer and the selectors that share its output.
#[derive(Debug)]
pub struct Pipeline {
    tokenizer: Tokenizer,
    selectors: Vec<Selector>,
}

impl Pipeline {
    pub fn new(tokenizer: Tokenizer, selectors: Vec<Selector>) -> Self {
        Self {
            tokenizer,
            selectors,
        }
    }

    /// Run the pipeline over one line.
    pub fn apply(&self, line: &str) -> Row {
        let mut row = Row::new();
        self.extend_row(line, &mut row);
        row
    }

    /// Run the pipeline over one string, appending to an existing row.
    pub fn extend_row(&self, text: &str, row: &mut Row) {
        let split = self.tokenizer.chop(text);
        for selector in &self.selectors {
            selector.apply(&split, row);
        }
    }

    /// Run the pipeline over a sequence of lines, one row per line.
    pub fn rows<I>(&self, lines: I) -> impl Iterator<Item = Row>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        lines.into_iter().map(|line| self.apply(line.as_ref()))
    }
}

/// Compile a parsed blend into a pipeline.
pub fn compile(blend: &ast::Blend) -> Pipeline {
    tracing::debug!(glues = blend.glues.len(), "compiling blend");
    Pipeline::new(
        compile_chop(&blend.chop),
        blend.glues.iter().map(compile_glue).collect(),
    )
}

fn compile_chop(chop: &ast::Chop) -> Tokenizer {
    match chop {
        ast::Chop::Split { args } => Tokenizer::Split(SplitAnyOf::new(args)),
    }
}

fn compile_glue(glue: &ast::Glue) -> Selector {
    match glue {
        ast::Glue::Pick { indices } => Selector::Pick(Pick::new(indices.clone())),
        ast::Glue::PickRange { start, end } => Selector::PickRange(PickRange::new(*start, *end)),
        ast::Glue::Concat { indices, delimiter } => {
            Selector::Concat(Concat::new(indices.clone(), delimiter.clone()))
        }
        ast::Glue::ConcatRange { start, end } => {
            Selector::ConcatRange(ConcatRange::new(*start, *end))
        }
        ast::Glue::Nested { source, blend } => {
            Selector::Nested(Nested::new(compile_glue(source), compile(blend)))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::{Blend, Glue as G};
    use crate::error::Error;
    use crate::parser::parse_expression;

    const EXAMPLE: &str = "ab-12 cd-34 ab-56 cd-78";
    const LISTING: &str =
        "lrwxr-xr-- 1 user group    123 May 25 16:24 'cpu info' -> /proc/cpuinfo";

    fn blend(separators: &str, glues: Vec<G>) -> Blend {
        Blend {
            chop: ast::Chop::Split {
                args: separators.to_string(),
            },
            glues,
        }
    }

    #[test]
    fn glues_share_one_split() {
        let pipeline = compile(&blend(
            "- ",
            vec![G::concat(vec![2, 4], ""), G::concat(vec![4, 2], "")],
        ));
        assert_eq!(pipeline.apply(EXAMPLE), ["1234", "3412"]);
    }

    #[test]
    fn whitespace_pick_range() {
        let pipeline = compile(&Blend::whitespace(vec![G::pick_range(Some(1), Some(12))]));
        assert_eq!(
            pipeline.apply(LISTING),
            [
                "lrwxr-xr--",
                "1",
                "user",
                "group",
                "123",
                "May",
                "25",
                "16:24",
                "'cpu",
                "info'",
                "->",
                "/proc/cpuinfo"
            ]
        );
    }

    #[test]
    fn explicit_end_past_fields_pads_with_empty() {
        let pipeline = compile(&blend(" ", vec![G::pick_range(Some(1), Some(12))]));
        let row = pipeline.apply(EXAMPLE);
        assert_eq!(row.len(), 12);
        assert_eq!(row[..4], ["ab-12", "cd-34", "ab-56", "cd-78"]);
        assert!(row[4..].iter().all(String::is_empty));
    }

    #[test]
    fn nested_blend_splices_in_place() {
        let pipeline = compile(&blend(
            " ",
            vec![
                G::pick(1),
                G::nested(G::pick(2), blend("-", vec![G::Pick { indices: vec![1, 2] }])),
                G::Pick { indices: vec![3, 4] },
            ],
        ));
        assert_eq!(
            pipeline.apply(EXAMPLE),
            ["ab-12", "cd", "34", "ab-56", "cd-78"]
        );
    }

    #[test]
    fn concat_range_compiles() {
        let pipeline = compile(&blend(" ", vec![G::concat_range(Some(2), None)]));
        assert_eq!(pipeline.apply("a b c"), ["bc"]);
    }

    #[test]
    fn one_row_per_line() {
        let pipeline = compile(&Blend::whitespace(vec![G::pick_range(Some(3), Some(1))]));
        let lines = ["", "a", "a b c", "   ", "x"];
        let rows: Vec<Row> = pipeline.rows(lines).collect();
        assert_eq!(rows.len(), lines.len());
        assert!(rows.iter().all(Vec::is_empty));
    }

    #[test]
    fn open_range_width_varies_per_line() {
        let pipeline = compile(&Blend::whitespace(vec![G::pick_range(Some(2), None)]));
        let rows: Vec<Row> = pipeline.rows(["a b c", "a", "a b"]).collect();
        assert_eq!(rows, vec![vec!["b", "c"], vec![], vec!["b"]]);
    }

    #[test]
    fn listing_with_concatenated_date() {
        let pipeline = compile(&parse_expression("1-5,6+7+8,9-12").unwrap());
        assert_eq!(
            pipeline.apply(LISTING),
            [
                "lrwxr-xr--",
                "1",
                "user",
                "group",
                "123",
                "May 25 16:24",
                "'cpu",
                "info'",
                "->",
                "/proc/cpuinfo"
            ]
        );
    }

    #[test]
    fn parsed_bracketed_range() {
        let pipeline = compile(&parse_expression("[split: :1-12]").unwrap());
        let row = pipeline.apply(EXAMPLE);
        assert_eq!(row.len(), 12);
        assert_eq!(row[..4], ["ab-12", "cd-34", "ab-56", "cd-78"]);
    }

    #[test]
    fn parsed_nested_blend() {
        let pipeline = compile(&parse_expression("1,2[split:-:1,2],3-4").unwrap());
        assert_eq!(
            pipeline.apply(EXAMPLE),
            ["ab-12", "cd", "34", "ab-56", "cd-78"]
        );
    }

    #[test]
    fn parsed_zero_bounds_and_spaces() {
        let pipeline = compile(&parse_expression("0-2, 3 - 0").unwrap());
        assert_eq!(pipeline.apply("a b c d"), ["a", "b", "c", "d"]);
    }

    #[test]
    fn malformed_expression_reads_no_lines() {
        let lines = ["a b", "c d"]
            .into_iter()
            .inspect(|line| panic!("read {line:?} with a malformed expression"));
        let result = parse_expression("[split:x]").map(|blend| compile(&blend).rows(lines).count());
        assert!(matches!(result, Err(Error::MalformedExpression { .. })));
    }

    #[test]
    fn rows_accepts_owned_lines() {
        let pipeline = compile(&Blend::whitespace(vec![G::pick(2)]));
        let lines = vec!["a b".to_string(), "c d".to_string()];
        let rows: Vec<Row> = pipeline.rows(lines).collect();
        assert_eq!(rows, vec![vec!["b"], vec!["d"]]);
    }
}
