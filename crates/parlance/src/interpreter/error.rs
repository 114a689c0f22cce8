//! Error and warning types for the renderer.

use thiserror::Error;

/// An error that aborts a render call.
///
/// Missing data is not an error: it collapses the enclosing template to an
/// empty string instead.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RenderError {
    /// A wildcard tag had no eligible candidate keys. Every variation group
    /// needs at least one candidate that is not gated by hour.
    #[error("no valid variations for varying template '{prefix}*'")]
    NoVariation { prefix: String },
}

/// An authoring problem found by [`lint_data`](crate::lint_data).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LintWarning {
    /// A tag references a key that is not in the data mapping.
    #[error("'{key}' references unknown key '{reference}'{}", format_suggestions(suggestions))]
    UnknownKey {
        key: String,
        reference: String,
        suggestions: Vec<String>,
    },

    /// A two-segment tag, which renders as a plain key lookup.
    #[error("'{key}' has tag '{tag}' with two segments; compound tags need base:condition:output")]
    IncompleteCompound { key: String, tag: String },

    /// A compound tag with segments past the fourth, which are ignored.
    #[error("'{key}' has tag '{tag}' with {extra} ignored segment(s)")]
    ExtraSegments {
        key: String,
        tag: String,
        extra: usize,
    },

    /// A wildcard prefix whose candidates are all gated by hour, or absent.
    #[error("'{key}' uses '{prefix}*' but no candidate is available at every hour")]
    NoUngatedVariation { key: String, prefix: String },

    /// An `_hours:` entry that is not `<start>..<end>`.
    #[error("'{key}' has invalid hour range '{value}'")]
    InvalidHours { key: String, value: String },
}

impl LintWarning {
    /// The data key the warning was raised for.
    pub fn key(&self) -> &str {
        match self {
            LintWarning::UnknownKey { key, .. }
            | LintWarning::IncompleteCompound { key, .. }
            | LintWarning::ExtraSegments { key, .. }
            | LintWarning::NoUngatedVariation { key, .. }
            | LintWarning::InvalidHours { key, .. } => key,
        }
    }
}

fn format_suggestions(suggestions: &[String]) -> String {
    if suggestions.is_empty() {
        String::new()
    } else {
        format!("; did you mean: {}?", suggestions.join(", "))
    }
}

/// Rank `available` keys by edit distance to `key`.
///
/// Keys of three characters or fewer allow one edit, longer keys allow two.
/// Exact matches are not suggestions.
/// Returns at most three suggestions, closest first.
pub fn compute_suggestions(key: &str, available: &[String]) -> Vec<String> {
    let max_distance = if key.chars().count() <= 3 { 1 } else { 2 };
    let mut scored: Vec<(usize, &String)> = available
        .iter()
        .map(|candidate| (strsim::levenshtein(key, candidate), candidate))
        .filter(|(distance, _)| *distance > 0 && *distance <= max_distance)
        .collect();
    scored.sort();
    scored
        .into_iter()
        .take(3)
        .map(|(_, candidate)| candidate.clone())
        .collect()
}
