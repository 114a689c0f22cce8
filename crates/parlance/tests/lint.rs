//! Integration tests for static content checks.

use parlance::{LintWarning, compute_suggestions, data, lint_data};

// =============================================================================
// Clean Content
// =============================================================================

#[test]
fn clean_content_has_no_warnings() {
    let data = data! {
        "welcome" => "Hi {name}. {greet-*} You have {beds:>0:[beds] bedroom[s]:no bedrooms}.",
        "name" => "Ann",
        "beds" => 2,
        "greet-a" => "Hello!",
        "greet-b" => "Good morning!",
        "_hours:greet-b" => "5..11",
    };
    assert_eq!(lint_data(&data), vec![]);
}

#[test]
fn non_string_values_are_skipped() {
    let data = data! { "n" => 3, "flag" => true };
    assert!(lint_data(&data).is_empty());
}

// =============================================================================
// Unknown Keys
// =============================================================================

#[test]
fn unknown_key_with_suggestion() {
    let data = data! { "welcome" => "Hi {nmae}", "name" => "Ann" };
    let warnings = lint_data(&data);
    assert_eq!(warnings.len(), 1);
    assert_eq!(warnings[0].key(), "welcome");
    insta::assert_snapshot!(
        warnings[0].to_string(),
        @"'welcome' references unknown key 'nmae'; did you mean: name?"
    );
}

#[test]
fn unknown_compound_base_is_reported() {
    let data = data! { "t" => "{pool:yes:pool}" };
    assert!(matches!(
        &lint_data(&data)[..],
        [LintWarning::UnknownKey { reference, .. }] if reference == "pool"
    ));
}

#[test]
fn bracket_tags_in_branches_are_checked() {
    let data = data! { "t" => "{garage:yes:a [garage-type] garage}", "garage" => true };
    assert!(matches!(
        &lint_data(&data)[..],
        [LintWarning::UnknownKey { reference, .. }] if reference == "garage-type"
    ));
}

#[test]
fn agreement_markers_are_not_references() {
    let data = data! { "t" => "{n:any:item[s] [is] here}", "n" => 1 };
    assert!(lint_data(&data).is_empty());
}

#[test]
fn repeated_reference_is_reported_once() {
    let data = data! { "t" => "{x} {x} {x}" };
    assert_eq!(lint_data(&data).len(), 1);
}

// =============================================================================
// Malformed Tags
// =============================================================================

#[test]
fn two_segment_tag_is_incomplete() {
    let data = data! { "t" => "{n:any}", "n" => 1 };
    let warnings = lint_data(&data);
    assert_eq!(warnings.len(), 1);
    insta::assert_snapshot!(
        warnings[0].to_string(),
        @"'t' has tag '{n:any}' with two segments; compound tags need base:condition:output"
    );
}

#[test]
fn extra_segments_are_reported() {
    let data = data! { "t" => "{n:1:one:other:more}", "n" => 1 };
    let warnings = lint_data(&data);
    assert_eq!(
        warnings,
        vec![LintWarning::ExtraSegments {
            key: "t".to_string(),
            tag: "{n:1:one:other:more}".to_string(),
            extra: 1,
        }]
    );
    insta::assert_snapshot!(
        warnings[0].to_string(),
        @"'t' has tag '{n:1:one:other:more}' with 1 ignored segment(s)"
    );
}

// =============================================================================
// Variations and Hours
// =============================================================================

#[test]
fn fully_gated_group_is_reported() {
    let data = data! {
        "t" => "{greet-*}",
        "greet-a" => "Good morning",
        "_hours:greet-a" => "5..11",
    };
    let warnings = lint_data(&data);
    assert_eq!(warnings.len(), 1);
    insta::assert_snapshot!(
        warnings[0].to_string(),
        @"'t' uses 'greet-*' but no candidate is available at every hour"
    );
}

#[test]
fn empty_group_is_reported() {
    let data = data! { "t" => "{missing-*}" };
    assert!(matches!(
        &lint_data(&data)[..],
        [LintWarning::NoUngatedVariation { prefix, .. }] if prefix == "missing-"
    ));
}

#[test]
fn invalid_hour_range_is_reported() {
    let data = data! {
        "greet-a" => "Good morning",
        "_hours:greet-a" => "mornings",
    };
    let warnings = lint_data(&data);
    assert_eq!(warnings.len(), 1);
    assert_eq!(warnings[0].key(), "_hours:greet-a");
    insta::assert_snapshot!(
        warnings[0].to_string(),
        @"'_hours:greet-a' has invalid hour range 'mornings'"
    );
}

#[test]
fn empty_hour_range_is_allowed() {
    let data = data! { "greet-a" => "Hi", "_hours:greet-a" => "" };
    assert!(lint_data(&data).is_empty());
}

// =============================================================================
// Suggestions
// =============================================================================

#[test]
fn suggestions_rank_by_distance() {
    let available = ["beds", "bed", "baths", "bedrooms"].map(String::from);
    assert_eq!(compute_suggestions("beds", &available), vec!["bed"]);
    assert_eq!(compute_suggestions("bads", &available), vec!["beds", "baths", "bed"]);
}

#[test]
fn short_keys_allow_one_edit() {
    let available = ["cat", "dog"].map(String::from);
    assert_eq!(compute_suggestions("cot", &available), vec!["cat"]);
    assert!(compute_suggestions("cut", &["dog".to_string()]).is_empty());
    assert!(compute_suggestions("ct", &["dog".to_string()]).is_empty());
}

#[test]
fn at_most_three_suggestions() {
    let available = ["ab", "ac", "ad", "ae"].map(String::from);
    assert_eq!(compute_suggestions("aa", &available).len(), 3);
}
