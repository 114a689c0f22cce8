//! Public AST types for template strings and tags.
//!
//! These types are public to enable external tooling (linters, coverage
//! reports) to inspect content without rendering it.

/// A scanned template string, borrowing from its source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template<'a> {
    pub segments: Vec<Segment<'a>>,
}

impl<'a> Template<'a> {
    /// The raw tag matches, braces included, in source order.
    pub fn tags(&self) -> impl Iterator<Item = &'a str> + '_ {
        self.segments.iter().filter_map(|segment| match segment {
            Segment::Tag(raw) => Some(*raw),
            Segment::Literal(_) => None,
        })
    }

    /// Whether the template contains at least one tag.
    pub fn has_tags(&self) -> bool {
        self.tags().next().is_some()
    }
}

/// A segment within a template.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Segment<'a> {
    /// Literal text, copied to the output unchanged.
    Literal(&'a str),
    /// A `{...}` match, braces included.
    Tag(&'a str),
}

/// A classified tag key.
#[derive(Debug, Clone, PartialEq)]
pub enum Tag {
    /// `{key}`: substitute the value stored under `key`.
    Simple(String),
    /// `{prefix*}`: pick one key starting with `prefix`.
    Wildcard(String),
    /// `{base:condition:matched[:unmatched]}`.
    Compound(CompoundTag),
}

/// A conditional tag choosing between two output branches.
#[derive(Debug, Clone, PartialEq)]
pub struct CompoundTag {
    /// Data key whose value the condition is evaluated against.
    pub base: String,
    pub condition: Condition,
    /// Output used when the condition matches.
    pub matched: String,
    /// Output used otherwise; empty for the three-segment form.
    pub unmatched: String,
    /// Segments past the fourth. Ignored when rendering.
    pub extra_segments: usize,
}

/// The condition clause of a compound tag.
///
/// Variants are listed in dispatch priority order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Condition {
    /// `any`: the base value is present and non-null.
    Any,
    /// `>0`: the base value parses as an integer greater than zero.
    Positive,
    /// `>0.0`: the base value parses as a float greater than zero.
    PositiveFloat,
    /// `lhs!=rhs`: the base value is not the string `rhs`.
    NotEqual(String),
    /// `yes`: the base value is boolean true.
    Yes,
    /// `no`: the base value is boolean false.
    No,
    /// Anything else: the base value's display form equals the literal.
    Equals(String),
}
