//! Branch post-processing for compound tags.
//!
//! A selected branch may carry two agreement markers, `[s]` and `[is]`, and
//! nested tags written with square brackets (`[garage-type]`). Markers are
//! replaced first, then the remaining brackets become braces so the next
//! render frame expands them.
//!
//! The two markers use different tests against the base value:
//! `[s]` uses loose numeric equality with 1, `[is]` uses the integer prefix.
//! They disagree for values such as `1.5` (`"s"` and `"is"`) or `true` (`""`
//! and `"are"`).

use crate::types::Value;

/// Replace the `[s]` and `[is]` markers according to `value`.
///
/// ```
/// use parlance::{Value, auto_pluralize};
///
/// assert_eq!(auto_pluralize("1 bed[s]", Some(&Value::from(1))), "1 bed");
/// assert_eq!(auto_pluralize("there [is] 3", Some(&Value::from(3))), "there are 3");
/// ```
pub fn auto_pluralize(text: &str, value: Option<&Value>) -> String {
    let singular = value.and_then(Value::loose_number) == Some(1.0);
    let is_are = if value.and_then(Value::parse_int) == Some(1) {
        "is"
    } else {
        "are"
    };
    text.replace("[s]", if singular { "" } else { "s" })
        .replace("[is]", is_are)
}

/// Turn `[key]` into `{key}` so a branch can carry nested tags.
pub fn unescape_inner_brackets(text: &str) -> String {
    text.replace('[', "{").replace(']', "}")
}
