use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

use thiserror::Error;

/// Prefix of companion keys that gate a variation by hour of day.
pub const HOURS_PREFIX: &str = "_hours:";

/// Returns the companion key holding the hour range for `key`.
pub fn hours_key(key: &str) -> String {
    format!("{HOURS_PREFIX}{key}")
}

/// An inclusive hour-of-day window written as `"<start>..<end>"`.
///
/// Windows do not wrap around midnight: `22..2` contains no hour.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HourRange {
    pub start: i64,
    pub end: i64,
}

impl HourRange {
    pub fn new(start: i64, end: i64) -> Self {
        Self { start, end }
    }

    /// Whether `hour` falls inside the window, bounds included.
    pub fn contains(&self, hour: u8) -> bool {
        let hour = i64::from(hour);
        self.start <= hour && hour <= self.end
    }
}

/// A `_hours:` value that is not of the form `"<start>..<end>"`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid hour range '{0}': expected '<start>..<end>'")]
pub struct InvalidHourRange(pub String);

impl FromStr for HourRange {
    type Err = InvalidHourRange;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || InvalidHourRange(s.to_string());
        let (start, end) = s.split_once("..").ok_or_else(invalid)?;
        let start = start.trim().parse().map_err(|_| invalid())?;
        let end = end.trim().parse().map_err(|_| invalid())?;
        Ok(Self { start, end })
    }
}

impl Display for HourRange {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}

#[cfg(test)]
mod tests {
    use super::HourRange;

    #[test]
    fn parses_and_contains_inclusive_bounds() {
        let range: HourRange = "6..11".parse().unwrap();
        assert_eq!(range, HourRange::new(6, 11));
        assert!(range.contains(6));
        assert!(range.contains(11));
        assert!(!range.contains(12));
        assert!(!range.contains(5));
    }

    #[test]
    fn does_not_wrap_midnight() {
        let range: HourRange = "22..2".parse().unwrap();
        assert!(!range.contains(23));
        assert!(!range.contains(1));
    }

    #[test]
    fn rejects_malformed_ranges() {
        assert!("6-11".parse::<HourRange>().is_err());
        assert!("morning..11".parse::<HourRange>().is_err());
        assert!("..".parse::<HourRange>().is_err());
    }
}
