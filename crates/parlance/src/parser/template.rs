//! Template scanner using winnow.
//!
//! Splits a template string into literal runs and `{...}` tag matches. The
//! first `}` after a `{` closes the tag, so braces do not nest; a `{` that is
//! never closed is literal text.

use winnow::combinator::{alt, delimited, repeat};
use winnow::error::{ContextError, ErrMode};
use winnow::prelude::*;
use winnow::token::take_till;

use super::ast::{Segment, Template};

/// Scan a template string into segments.
///
/// Scanning never fails: anything that is not a complete tag is literal.
///
/// ```
/// use parlance::parser::{Segment, scan};
///
/// let template = scan("hi {name}!");
/// assert_eq!(
///     template.segments,
///     vec![
///         Segment::Literal("hi "),
///         Segment::Tag("{name}"),
///         Segment::Literal("!"),
///     ]
/// );
/// ```
pub fn scan(content: &str) -> Template<'_> {
    let mut remaining = content;
    let segments: Vec<Segment<'_>> = repeat(0.., segment)
        .parse_next(&mut remaining)
        .unwrap_or_else(|_: ErrMode<ContextError>| vec![Segment::Literal(content)]);
    Template {
        segments: merge_literals(content, segments),
    }
}

/// Merge adjacent literal segments into single slices of `source`.
fn merge_literals<'a>(source: &'a str, segments: Vec<Segment<'a>>) -> Vec<Segment<'a>> {
    let mut result: Vec<Segment<'a>> = Vec::with_capacity(segments.len());
    for segment in segments {
        if let (Some(Segment::Literal(prev)), Segment::Literal(next)) = (result.last_mut(), segment)
        {
            let start = offset_in(source, *prev);
            let end = offset_in(source, next) + next.len();
            *prev = &source[start..end];
            continue;
        }
        result.push(segment);
    }
    result
}

/// Byte offset of `part` within `source`; `part` must be a slice of `source`.
fn offset_in(source: &str, part: &str) -> usize {
    part.as_ptr() as usize - source.as_ptr() as usize
}

/// Parse a single segment (tag, literal run, or unterminated brace).
fn segment<'i>(input: &mut &'i str) -> ModalResult<Segment<'i>> {
    alt((tag, literal_run, stray_brace)).parse_next(input)
}

/// Parse a tag: `{` up to the first `}`.
fn tag<'i>(input: &mut &'i str) -> ModalResult<Segment<'i>> {
    delimited('{', take_till(0.., '}'), '}')
        .take()
        .map(Segment::Tag)
        .parse_next(input)
}

/// Parse a run of text up to the next `{`.
fn literal_run<'i>(input: &mut &'i str) -> ModalResult<Segment<'i>> {
    take_till(1.., '{').map(Segment::Literal).parse_next(input)
}

/// A `{` with no closing brace after it.
fn stray_brace<'i>(input: &mut &'i str) -> ModalResult<Segment<'i>> {
    "{".map(Segment::Literal).parse_next(input)
}
