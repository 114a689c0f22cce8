//! Integration tests for wildcard variation selection and hour gating.

use std::collections::BTreeSet;

use parlance::interpreter::eligible_variations;
use parlance::{
    DataMap, RenderError, Renderer, ScriptedRandom, SeededRandom, data, render,
    select_variation,
};

fn greetings() -> DataMap {
    data! { "t" => "{greet-*}", "greet-a" => "Hi", "greet-b" => "Hello" }
}

// =============================================================================
// Membership and Coverage
// =============================================================================

#[test]
fn wildcard_renders_one_of_the_candidates() {
    let data = greetings();
    for _ in 0..50 {
        let out = render("t", &data, None).unwrap();
        assert!(out == "Hi" || out == "Hello", "unexpected output {out:?}");
    }
}

#[test]
fn scripted_source_reaches_every_candidate() {
    let data = data! {
        "t" => "{opener-*}",
        "opener-1" => "one",
        "opener-2" => "two",
        "opener-3" => "three",
    };
    let renderer = Renderer::new();
    let mut random = ScriptedRandom::covering(3);
    let seen: BTreeSet<String> = (0..3)
        .map(|_| renderer.render_with("t", &data, None, &mut random).unwrap())
        .collect();
    let expected: BTreeSet<String> = ["one", "two", "three"].map(String::from).into();
    assert_eq!(seen, expected);
}

#[test]
fn seeded_source_is_reproducible() {
    let data = data! {
        "t" => "{a-*} {b-*}",
        "a-1" => "red", "a-2" => "green", "a-3" => "blue",
        "b-1" => "fish", "b-2" => "bird",
    };
    let renderer = Renderer::new();
    let run = |seed| {
        let mut random = SeededRandom::new(seed);
        (0..10)
            .map(|_| renderer.render_with("t", &data, None, &mut random).unwrap())
            .collect::<Vec<_>>()
    };
    assert_eq!(run(42), run(42));
}

#[test]
fn selected_candidate_is_rendered_as_a_template() {
    let data = data! {
        "t" => "{intro-*}",
        "intro-a" => "Hi {name}",
        "name" => "Ann",
    };
    assert_eq!(render("t", &data, None).unwrap(), "Hi Ann");
}

#[test]
fn selected_candidate_with_missing_data_collapses_its_frame() {
    let data = data! { "t" => "<{intro-*}>", "intro-a" => "Hi {name}" };
    assert_eq!(render("t", &data, None).unwrap(), "<>");
}

#[test]
fn compound_shaped_candidate_is_evaluated() {
    let data = data! { "t" => "{v-*}", "v-:a:b" => "ignored", "v-" => "zzz" };
    // Candidates in key order: "v-", "v-:a:b". The second is a compound
    // key whose base `v-` holds "zzz", which is not "a".
    let mut random = ScriptedRandom::new([0.0]);
    let mut pick_second = ScriptedRandom::new([0.75]);
    let renderer = Renderer::new();
    assert_eq!(renderer.render_with("t", &data, None, &mut random).unwrap(), "zzz");
    assert_eq!(renderer.render_with("t", &data, None, &mut pick_second).unwrap(), "");
}

// =============================================================================
// Hour Gating
// =============================================================================

#[test]
fn gated_candidate_is_excluded_outside_its_hours() {
    let data = data! {
        "t" => "{greet-*}",
        "greet-a" => "Good morning",
        "greet-b" => "Hello",
        "_hours:greet-a" => "6..11",
    };
    let renderer = Renderer::new();
    for value in [0.0, 0.4, 0.9] {
        let mut random = ScriptedRandom::new([value]);
        assert_eq!(
            renderer.render_with("t", &data, Some(20), &mut random).unwrap(),
            "Hello"
        );
    }
}

#[test]
fn gated_candidate_is_eligible_inside_its_hours() {
    let data = data! {
        "greet-a" => "Good morning",
        "greet-b" => "Hello",
        "_hours:greet-a" => "6..11",
    };
    assert_eq!(eligible_variations("greet-", &data, Some(6)), vec!["greet-a", "greet-b"]);
    assert_eq!(eligible_variations("greet-", &data, Some(11)), vec!["greet-a", "greet-b"]);
    assert_eq!(eligible_variations("greet-", &data, Some(12)), vec!["greet-b"]);
}

#[test]
fn unknown_hour_excludes_every_gated_candidate() {
    let data = data! {
        "greet-a" => "Good morning",
        "greet-b" => "Hello",
        "_hours:greet-a" => "0..23",
    };
    assert_eq!(eligible_variations("greet-", &data, None), vec!["greet-b"]);
}

#[test]
fn hours_entries_do_not_join_a_prefix_group() {
    let data = data! { "greet-a" => "Hi", "_hours:greet-a" => "0..23" };
    assert_eq!(eligible_variations("_hours:", &data, Some(3)), vec!["_hours:greet-a"]);
    assert_eq!(eligible_variations("greet-", &data, Some(3)), vec!["greet-a"]);
}

// =============================================================================
// Failure
// =============================================================================

#[test]
fn all_gated_group_fails_with_prefix() {
    let data = data! {
        "t" => "{greet-*}",
        "greet-a" => "Good morning",
        "_hours:greet-a" => "6..11",
    };
    let err = render("t", &data, Some(20)).unwrap_err();
    assert_eq!(
        err,
        RenderError::NoVariation {
            prefix: "greet-".to_string()
        }
    );
    assert_eq!(
        err.to_string(),
        "no valid variations for varying template 'greet-*'"
    );
}

#[test]
fn empty_group_fails() {
    let data = data! { "t" => "hello {missing-*}" };
    assert!(matches!(
        render("t", &data, None),
        Err(RenderError::NoVariation { prefix }) if prefix == "missing-"
    ));
}

#[test]
fn nested_failure_propagates_through_frames() {
    let data = data! { "t" => "{outer}", "outer" => "{n:any:[inner-*]}", "n" => 1 };
    assert!(render("t", &data, None).is_err());
}

#[test]
fn select_variation_returns_the_key() {
    let data = greetings();
    let mut random = ScriptedRandom::new([0.99]);
    assert_eq!(
        select_variation("greet-", &data, None, &mut random).unwrap(),
        "greet-b"
    );
}
