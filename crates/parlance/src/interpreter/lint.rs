//! Static checks over a data mapping.
//!
//! Finds authoring mistakes that rendering would only reveal as empty output
//! or a variation error: references to unknown keys, malformed compound
//! tags, variation groups without an ungated fallback, and bad hour ranges.

use crate::interpreter::error::{LintWarning, compute_suggestions};
use crate::interpreter::plural::{auto_pluralize, unescape_inner_brackets};
use crate::interpreter::variation::eligible_variations;
use crate::parser::ast::Tag;
use crate::parser::{parse_tag, scan};
use crate::types::{DataMap, HOURS_PREFIX, HourRange, Value};

/// Run every lint rule over `data`, returning warnings in key order.
///
/// ```
/// use parlance::{DataMap, LintWarning, Value, lint_data};
///
/// let mut data = DataMap::new();
/// data.insert("welcome".into(), Value::from("Hi {nmae}"));
/// data.insert("name".into(), Value::from("Ann"));
///
/// let warnings = lint_data(&data);
/// assert!(matches!(
///     &warnings[0],
///     LintWarning::UnknownKey { reference, suggestions, .. }
///         if reference == "nmae" && suggestions == &["name".to_string()]
/// ));
/// ```
pub fn lint_data(data: &DataMap) -> Vec<LintWarning> {
    let known: Vec<String> = data.keys().cloned().collect();
    let mut warnings = Vec::new();
    for (key, value) in data {
        let Value::String(text) = value else {
            continue;
        };
        if let Some(gated) = key.strip_prefix(HOURS_PREFIX) {
            lint_hours(gated, text, &mut warnings);
            continue;
        }
        lint_template(key, text, data, &known, &mut warnings);
    }
    warnings
}

fn lint_hours(gated: &str, text: &str, warnings: &mut Vec<LintWarning>) {
    if !text.is_empty() && text.parse::<HourRange>().is_err() {
        push_unique(
            warnings,
            LintWarning::InvalidHours {
                key: format!("{HOURS_PREFIX}{gated}"),
                value: text.to_string(),
            },
        );
    }
}

fn lint_template(
    key: &str,
    text: &str,
    data: &DataMap,
    known: &[String],
    warnings: &mut Vec<LintWarning>,
) {
    for raw in scan(text).tags() {
        match parse_tag(raw) {
            Tag::Simple(reference) => {
                if reference.matches(':').count() == 1 {
                    push_unique(
                        warnings,
                        LintWarning::IncompleteCompound {
                            key: key.to_string(),
                            tag: raw.to_string(),
                        },
                    );
                } else {
                    check_reference(key, &reference, data, known, warnings);
                }
            }
            Tag::Wildcard(prefix) => {
                if eligible_variations(&prefix, data, None).is_empty() {
                    push_unique(
                        warnings,
                        LintWarning::NoUngatedVariation {
                            key: key.to_string(),
                            prefix,
                        },
                    );
                }
            }
            Tag::Compound(compound) => {
                if compound.extra_segments > 0 {
                    push_unique(
                        warnings,
                        LintWarning::ExtraSegments {
                            key: key.to_string(),
                            tag: raw.to_string(),
                            extra: compound.extra_segments,
                        },
                    );
                }
                check_reference(key, &compound.base, data, known, warnings);
                for branch in [&compound.matched, &compound.unmatched] {
                    if branch.contains('[') {
                        let nested = unescape_inner_brackets(&auto_pluralize(branch, None));
                        lint_template(key, &nested, data, known, warnings);
                    }
                }
            }
        }
    }
}

fn check_reference(
    key: &str,
    reference: &str,
    data: &DataMap,
    known: &[String],
    warnings: &mut Vec<LintWarning>,
) {
    if data.contains_key(reference) {
        return;
    }
    push_unique(
        warnings,
        LintWarning::UnknownKey {
            key: key.to_string(),
            reference: reference.to_string(),
            suggestions: compute_suggestions(reference, known),
        },
    );
}

fn push_unique(warnings: &mut Vec<LintWarning>, warning: LintWarning) {
    if !warnings.contains(&warning) {
        warnings.push(warning);
    }
}
