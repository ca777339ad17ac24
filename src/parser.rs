use winnow::ModalResult;
use winnow::ascii::{digit1, space0};
use winnow::combinator::{alt, cut_err, delimited, eof, fail, opt, separated, terminated};
use winnow::error::{StrContext, StrContextValue};
use winnow::prelude::*;
use winnow::stream::Stream;
use winnow::token::take_till;

use crate::ast::{Blend, Chop, Glue};
use crate::error::{Error, Result};

/// Parse a complete selection expression.
///
/// A bare glue list such as `1-5,6+7+8` splits on whitespace; a bracketed
/// expression `[split:<chars>:<glues>]` names its own separators.
pub fn parse_expression(input: &str) -> Result<Blend> {
    expression.parse(input).map_err(|e| {
        let message = e
            .inner()
            .context()
            .find_map(|ctx| match ctx {
                StrContext::Label(label) => Some(format!("expected {}", label)),
                StrContext::Expected(StrContextValue::Description(desc)) => {
                    Some(format!("expected {}", desc))
                }
                _ => None,
            })
            .unwrap_or_else(|| "unexpected character".to_string());
        Error::malformed(input, e.offset(), message)
    })
}

/// Most bracketed blends an expression may nest inside one another.
pub const MAX_NESTING: usize = 64;

/// Parser for the full expression.
fn expression(input: &mut &str) -> ModalResult<Blend> {
    terminated(
        alt((|i: &mut &str| bracketed_blend(i, 1), bare_blend)),
        eof,
    )
    .context(StrContext::Expected(StrContextValue::Description(
        "',' or end of expression",
    )))
    .parse_next(input)
}

/// Parser for a glue list over the default whitespace separators.
fn bare_blend(input: &mut &str) -> ModalResult<Blend> {
    (|i: &mut &str| glue_list(i, 0))
        .map(Blend::whitespace)
        .parse_next(input)
}

/// Parser for `[<kind>:<separators>:<glues>]`, the `depth`-th bracket from
/// the outside.
fn bracketed_blend(input: &mut &str, depth: usize) -> ModalResult<Blend> {
    let start = input.checkpoint();
    '['.parse_next(input)?;
    if depth > MAX_NESTING {
        input.reset(&start);
        return cut_err(fail)
            .context(StrContext::Expected(StrContextValue::Description(
                "fewer nested blends (nesting too deep)",
            )))
            .parse_next(input);
    }
    let kind: &str = take_till(0.., ':').parse_next(input)?;
    cut_err(':')
        .context(StrContext::Expected(StrContextValue::Description(
            "':' after chop kind",
        )))
        .parse_next(input)?;
    let separators: &str = take_till(0.., ':').parse_next(input)?;
    cut_err(':')
        .context(StrContext::Expected(StrContextValue::Description(
            "':' after separators",
        )))
        .parse_next(input)?;
    let glues = glue_list(input, depth)?;
    cut_err(']')
        .context(StrContext::Expected(StrContextValue::Description(
            "closing ']'",
        )))
        .parse_next(input)?;
    Ok(Blend {
        chop: Chop::from_kind(kind, separators),
        glues,
    })
}

/// Parser for a comma-separated list of glues.
fn glue_list(input: &mut &str, depth: usize) -> ModalResult<Vec<Glue>> {
    separated(1.., |i: &mut &str| glue(i, depth), ',').parse_next(input)
}

/// Parser for one glue, optionally followed by a nested blend.
///
/// The segment up to the next `,`, `[` or `]` is classified as a whole:
/// any `-` makes it a range, otherwise any `+` makes it a concat, otherwise
/// it is a single pick. `1+2-3` is therefore a (malformed) range.
fn glue(input: &mut &str, depth: usize) -> ModalResult<Glue> {
    let start = input.checkpoint();
    let segment: &str = take_till(0.., (',', '[', ']')).parse_next(input)?;
    let parsed = if segment.contains('-') {
        pick_range.parse(segment)
    } else if segment.contains('+') {
        concat.parse(segment)
    } else {
        pick.parse(segment)
    };
    let Ok(base) = parsed else {
        input.reset(&start);
        return cut_err(fail)
            .context(StrContext::Expected(StrContextValue::Description(
                "selector (N, A-B or N+M)",
            )))
            .parse_next(input);
    };
    let nested = opt(|i: &mut &str| bracketed_blend(i, depth + 1)).parse_next(input)?;
    Ok(match nested {
        Some(blend) => Glue::nested(base, blend),
        None => base,
    })
}

/// Parser for `A-B` with either side optional.
fn pick_range(input: &mut &str) -> ModalResult<Glue> {
    (opt(index), '-', opt(index))
        .map(|(start, _, end)| Glue::pick_range(start, end))
        .parse_next(input)
}

/// Parser for `N1+N2+...`, joined with a single space.
fn concat(input: &mut &str) -> ModalResult<Glue> {
    separated(2.., index, '+')
        .map(|indices| Glue::concat(indices, " "))
        .parse_next(input)
}

/// Parser for a single `N`.
fn pick(input: &mut &str) -> ModalResult<Glue> {
    index.map(Glue::pick).parse_next(input)
}

/// Parser for a 1-based field index, spaces and tabs around it allowed.
fn index(input: &mut &str) -> ModalResult<usize> {
    delimited(space0, digit1.try_map(str::parse::<usize>), space0).parse_next(input)
}
