//! Versioned template cache.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::content::error::LoadError;
use crate::content::version::ContentVersion;
use crate::types::{DataMap, HourRange, Value, hours_key};

/// Suffix of keys holding a record's screen title.
pub const SCREEN_TITLE_SUFFIX: &str = "-screen-title";
/// Suffix of keys holding a record's screen content.
pub const SCREEN_CONTENT_SUFFIX: &str = "-screen-content";
/// Suffix of keys holding a fact template.
pub const RESPONSE_SUFFIX: &str = "-response";

/// Last hour of the day, used when a record has a start hour only.
const LAST_HOUR: u8 = 23;

/// Lookup of template strings by id.
pub trait TemplateStore {
    /// The template stored under `id`.
    fn template(&self, id: &str) -> Option<&str>;

    /// Version of the content this store holds.
    fn version(&self) -> ContentVersion;
}

/// One row of UI strings as authored in the content table.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UiRecord {
    pub id: String,
    pub voice_content: Option<String>,
    pub screen_title: Option<String>,
    pub screen_content: Option<String>,
    pub start_hour: Option<u8>,
    pub end_hour: Option<u8>,
}

/// A per-fact response template.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FactTemplate {
    pub id: String,
    pub template: Option<String>,
    pub description: Option<String>,
}

/// A content export: UI string records and fact templates.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContentDocument {
    /// Explicit version label. When absent the version is derived from the
    /// entries.
    pub version: Option<String>,
    pub ui: Vec<UiRecord>,
    pub facts: Vec<FactTemplate>,
}

/// Template strings keyed by id, with the version they were loaded at.
///
/// A cache is built once and passed by reference to whatever assembles
/// request data; there is no process-wide instance.
///
/// ```
/// use parlance::{ContentDocument, TemplateCache, TemplateStore, UiRecord};
///
/// let doc = ContentDocument {
///     ui: vec![UiRecord {
///         id: "greet-morning".into(),
///         voice_content: Some("Good morning!".into()),
///         start_hour: Some(5),
///         end_hour: Some(11),
///         ..Default::default()
///     }],
///     ..Default::default()
/// };
/// let cache = TemplateCache::from_document(&doc);
/// assert_eq!(cache.template("greet-morning"), Some("Good morning!"));
/// assert_eq!(cache.template("_hours:greet-morning"), Some("5..11"));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct TemplateCache {
    version: ContentVersion,
    entries: BTreeMap<String, String>,
}

impl TemplateCache {
    /// Build a cache from raw `(id, template)` entries.
    pub fn from_entries(entries: BTreeMap<String, String>) -> Self {
        let version =
            ContentVersion::of_entries(entries.iter().map(|(k, v)| (k.as_str(), v.as_str())));
        Self::with_version(version, entries)
    }

    /// Build a cache with an explicit version.
    pub fn with_version(version: ContentVersion, entries: BTreeMap<String, String>) -> Self {
        debug!(%version, entries = entries.len(), "built template cache");
        Self { version, entries }
    }

    /// Expand a content document into cache entries.
    ///
    /// Each UI record contributes `<id>`, `<id>-screen-title`,
    /// `<id>-screen-content` and `_hours:<id>` for whichever fields it has.
    /// Each fact template with a template string contributes
    /// `<id>-response`. Records without an id are skipped.
    pub fn from_document(doc: &ContentDocument) -> Self {
        let mut entries = BTreeMap::new();
        for record in doc.ui.iter().filter(|r| !r.id.is_empty()) {
            expand_ui_record(record, &mut entries);
        }
        for fact in doc.facts.iter().filter(|f| !f.id.is_empty()) {
            if let Some(template) = &fact.template {
                entries.insert(format!("{}{RESPONSE_SUFFIX}", fact.id), template.clone());
            }
        }
        match &doc.version {
            Some(label) => Self::with_version(ContentVersion::from_label(label), entries),
            None => Self::from_entries(entries),
        }
    }

    /// Parse a JSON content document.
    pub fn from_json_str(json: &str) -> Result<Self, LoadError> {
        let doc: ContentDocument =
            serde_json::from_str(json).map_err(|e| LoadError::json("content string", e))?;
        Ok(Self::from_document(&doc))
    }

    /// Read and parse a JSON content document from `path`.
    pub fn load_json(path: impl AsRef<Path>) -> Result<Self, LoadError> {
        let path = path.as_ref();
        let json = fs::read_to_string(path).map_err(|e| LoadError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;
        let doc: ContentDocument = serde_json::from_str(&json)
            .map_err(|e| LoadError::json(path.display().to_string(), e))?;
        Ok(Self::from_document(&doc))
    }

    /// Whether content loaded at `known` is out of date with this cache.
    pub fn needs_reload(&self, known: ContentVersion) -> bool {
        self.version != known
    }

    /// All entries in key order.
    pub fn entries(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The entries as a data mapping of string values.
    pub fn to_data(&self) -> DataMap {
        self.entries
            .iter()
            .map(|(k, v)| (k.clone(), Value::String(v.clone())))
            .collect()
    }
}

impl TemplateStore for TemplateCache {
    fn template(&self, id: &str) -> Option<&str> {
        self.entries.get(id).map(String::as_str)
    }

    fn version(&self) -> ContentVersion {
        self.version
    }
}

fn expand_ui_record(record: &UiRecord, entries: &mut BTreeMap<String, String>) {
    let id = &record.id;
    let non_empty = |field: &Option<String>| field.clone().filter(|s| !s.is_empty());
    if let Some(voice) = non_empty(&record.voice_content) {
        entries.insert(id.clone(), voice);
    }
    if let Some(title) = non_empty(&record.screen_title) {
        entries.insert(format!("{id}{SCREEN_TITLE_SUFFIX}"), title);
    }
    if let Some(content) = non_empty(&record.screen_content) {
        entries.insert(format!("{id}{SCREEN_CONTENT_SUFFIX}"), content);
    }
    if let Some(start) = record.start_hour {
        let end = record.end_hour.unwrap_or(LAST_HOUR);
        let range = HourRange::new(i64::from(start), i64::from(end));
        entries.insert(hours_key(id), range.to_string());
    }
}

/// Read a JSON object of scalar values into a data mapping.
pub fn load_data_json(path: impl AsRef<Path>) -> Result<DataMap, LoadError> {
    let path = path.as_ref();
    let json = fs::read_to_string(path).map_err(|e| LoadError::Io {
        path: path.to_path_buf(),
        source: e,
    })?;
    serde_json::from_str(&json).map_err(|e| LoadError::json(path.display().to_string(), e))
}
