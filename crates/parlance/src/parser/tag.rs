//! Tag key classification.
//!
//! A tag's inner key is one of three shapes, checked in this order:
//! - wildcard: the key ends in `*`
//! - compound: the key has at least three `:`-separated segments
//! - simple: anything else

use super::ast::{CompoundTag, Condition, Tag};

/// Remove every `{` and `}` from a tag match.
pub fn strip_braces(raw: &str) -> String {
    raw.chars().filter(|c| !matches!(c, '{' | '}')).collect()
}

/// A wildcard key ends in `*`.
pub fn is_wildcard(key: &str) -> bool {
    key.ends_with('*')
}

/// A compound key has at least three colon-delimited segments.
pub fn is_compound(key: &str) -> bool {
    key.split(':').nth(2).is_some()
}

/// The data key a compound key is conditioned on.
pub fn base_key_of(key: &str) -> &str {
    key.split(':').next().unwrap_or(key)
}

/// Classify a raw tag match such as `{n:>0:some:none}`.
///
/// ```
/// use parlance::parser::{Condition, Tag, parse_tag};
///
/// assert_eq!(parse_tag("{name}"), Tag::Simple("name".to_string()));
/// assert_eq!(parse_tag("{greet-*}"), Tag::Wildcard("greet-".to_string()));
/// let Tag::Compound(tag) = parse_tag("{n:>0:some:none}") else {
///     panic!("expected a compound tag");
/// };
/// assert_eq!(tag.condition, Condition::Positive);
/// ```
pub fn parse_tag(raw: &str) -> Tag {
    classify_key(&strip_braces(raw))
}

/// Classify a tag key that has already had its braces removed.
pub fn classify_key(key: &str) -> Tag {
    if let Some(prefix) = key.strip_suffix('*') {
        return Tag::Wildcard(prefix.to_string());
    }
    if is_compound(key) {
        return Tag::Compound(parse_compound(key));
    }
    Tag::Simple(key.to_string())
}

/// Split a compound key into its parts. The key must have three or more
/// segments.
fn parse_compound(key: &str) -> CompoundTag {
    let mut parts = key.split(':');
    let base = parts.next().unwrap_or_default().to_string();
    let condition = Condition::parse(parts.next().unwrap_or_default());
    let matched = parts.next().unwrap_or_default().to_string();
    let unmatched = parts.next().unwrap_or_default().to_string();
    CompoundTag {
        base,
        condition,
        matched,
        unmatched,
        extra_segments: parts.count(),
    }
}

impl Condition {
    /// Parse a condition clause. Every string is a valid condition; the
    /// fallback is literal equality.
    pub fn parse(clause: &str) -> Self {
        match clause {
            "any" => Condition::Any,
            ">0" => Condition::Positive,
            ">0.0" => Condition::PositiveFloat,
            _ => {
                if let Some((_, rhs)) = clause.split_once("!=") {
                    Condition::NotEqual(rhs.to_string())
                } else if clause == "yes" {
                    Condition::Yes
                } else if clause == "no" {
                    Condition::No
                } else {
                    Condition::Equals(clause.to_string())
                }
            }
        }
    }
}
