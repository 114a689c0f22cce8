//! Wildcard variation selection.

use std::ops::Bound;

use tracing::debug;

use crate::interpreter::RenderError;
use crate::interpreter::random::RandomSource;
use crate::types::{DataMap, HourRange, Value, hours_key};

/// Whether a candidate key may be chosen at `hour`.
///
/// A candidate without an `_hours:` entry (or with a null or empty one) is
/// always eligible. A gated candidate is eligible only when the hour is
/// known and inside its range; an unparseable range never matches.
pub fn is_eligible(candidate: &str, data: &DataMap, hour: Option<u8>) -> bool {
    let gate = match data.get(&hours_key(candidate)) {
        None | Some(Value::Null) => return true,
        Some(Value::String(s)) if s.is_empty() => return true,
        Some(Value::String(s)) => s,
        Some(_) => return false,
    };
    let Some(hour) = hour else {
        return false;
    };
    gate.parse::<HourRange>()
        .is_ok_and(|range| range.contains(hour))
}

/// Keys of `data` starting with `prefix` that are eligible at `hour`, in
/// key order.
pub fn eligible_variations<'a>(prefix: &str, data: &'a DataMap, hour: Option<u8>) -> Vec<&'a str> {
    data.range::<str, _>((Bound::Included(prefix), Bound::Unbounded))
        .map(|(key, _)| key.as_str())
        .take_while(|key| key.starts_with(prefix))
        .filter(|key| is_eligible(key, data, hour))
        .collect()
}

/// Pick one eligible key starting with `prefix`.
///
/// # Errors
///
/// Returns [`RenderError::NoVariation`] when no candidate is eligible.
///
/// ```
/// use parlance::{DataMap, ScriptedRandom, Value, select_variation};
///
/// let mut data = DataMap::new();
/// data.insert("greet-a".into(), Value::from("Hi"));
/// data.insert("greet-b".into(), Value::from("Hello"));
/// data.insert("_hours:greet-a".into(), Value::from("6..11"));
///
/// let mut random = ScriptedRandom::new([0.0]);
/// let key = select_variation("greet-", &data, Some(20), &mut random).unwrap();
/// assert_eq!(key, "greet-b");
/// ```
pub fn select_variation(
    prefix: &str,
    data: &DataMap,
    hour: Option<u8>,
    random: &mut dyn RandomSource,
) -> Result<String, RenderError> {
    let candidates = eligible_variations(prefix, data, hour);
    if candidates.is_empty() {
        return Err(RenderError::NoVariation {
            prefix: prefix.to_string(),
        });
    }
    let chosen = candidates[random.pick_index(candidates.len())];
    debug!(
        prefix,
        chosen,
        candidates = candidates.len(),
        "selected variation"
    );
    Ok(chosen.to_string())
}
