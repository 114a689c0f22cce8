use std::fmt::{self, Display, Formatter};

use const_fnv1a_hash::fnv1a_hash_str_64;
use serde::{Deserialize, Serialize};

/// Identifies one loaded set of templates.
///
/// `ContentVersion` wraps a 64-bit FNV-1a hash, either of an explicit label
/// (such as a CMS revision) or of the loaded entries themselves. Two caches
/// built from the same entries share a version, so a request can tell
/// whether the templates it holds are current.
///
/// ```
/// use parlance::ContentVersion;
///
/// const RELEASE: ContentVersion = ContentVersion::from_label("2024-06-01");
/// assert_eq!(RELEASE, ContentVersion::from_label("2024-06-01"));
/// assert_ne!(RELEASE, ContentVersion::from_label("2024-06-02"));
/// ```
#[derive(Copy, Clone, Debug, Hash, Eq, PartialEq, Serialize, Deserialize)]
pub struct ContentVersion(u64);

impl ContentVersion {
    /// Version named by an explicit label.
    pub const fn from_label(label: &str) -> Self {
        Self(fnv1a_hash_str_64(label))
    }

    /// Version derived from `(key, template)` entries, in iteration order.
    pub fn of_entries<'a>(entries: impl IntoIterator<Item = (&'a str, &'a str)>) -> Self {
        let mut joined = String::new();
        for (key, template) in entries {
            joined.push_str(key);
            joined.push('\u{0}');
            joined.push_str(template);
            joined.push('\u{1}');
        }
        Self(fnv1a_hash_str_64(&joined))
    }

    /// Create from a raw hash value.
    pub const fn from_u64(hash: u64) -> Self {
        Self(hash)
    }

    pub const fn as_u64(self) -> u64 {
        self.0
    }
}

impl Display for ContentVersion {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{:016x}", self.0)
    }
}
