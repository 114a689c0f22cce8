use std::collections::BTreeMap;

mod hours;
mod value;

pub use hours::{HOURS_PREFIX, HourRange, InvalidHourRange, hours_key};
pub use value::Value;

/// The flat key/value mapping every render call interpolates from.
///
/// Ordered so that variation candidates are enumerated deterministically.
pub type DataMap = BTreeMap<String, Value>;
