//! Request data assembly.

use std::collections::BTreeMap;

use bon::Builder;

use crate::content::cache::{RESPONSE_SUFFIX, TemplateCache};
use crate::types::{DataMap, Value};

/// Key under which the skill's invocation name is exposed to templates.
pub const INVOCATION_NAME_KEY: &str = "invocation-name";

/// The layers merged into one request's data mapping.
///
/// Layers are applied in this order, later layers replacing earlier keys:
/// cached templates, invocation name, extra fact templates, fact set, user
/// state, slot values, overrides.
///
/// ```
/// use std::collections::BTreeMap;
/// use parlance::{DataLayers, DataMap, TemplateCache, Value};
///
/// let cache = TemplateCache::from_entries(BTreeMap::from([
///     ("welcome".to_string(), "Hi {name}".to_string()),
/// ]));
/// let slots = BTreeMap::from([("name".to_string(), Some("Ann".to_string()))]);
///
/// let data = DataLayers::builder()
///     .templates(&cache)
///     .slots(slots)
///     .build()
///     .assemble();
/// assert_eq!(data["name"], Value::from("Ann"));
/// assert_eq!(data["welcome"], Value::from("Hi {name}"));
/// ```
#[derive(Debug, Builder)]
#[builder(on(String, into))]
pub struct DataLayers<'a> {
    /// Loaded templates, shared across requests.
    templates: &'a TemplateCache,

    invocation_name: Option<String>,

    /// Fact templates loaded outside the cache, keyed by fact id. Each is
    /// exposed as `<id>-response`.
    #[builder(default)]
    fact_templates: BTreeMap<String, String>,

    /// Facts about the subject of the conversation.
    #[builder(default)]
    fact_set: DataMap,

    /// Persistent per-user state.
    #[builder(default)]
    user_state: DataMap,

    /// Slot values from the current request; unfilled slots are `None`.
    #[builder(default)]
    slots: BTreeMap<String, Option<String>>,

    /// Per-call values that win over every other layer.
    #[builder(default)]
    overrides: DataMap,
}

impl DataLayers<'_> {
    /// Merge every layer into one data mapping.
    pub fn assemble(&self) -> DataMap {
        let mut data = self.templates.to_data();
        if let Some(name) = &self.invocation_name {
            data.insert(INVOCATION_NAME_KEY.to_string(), Value::from(name.as_str()));
        }
        for (id, template) in &self.fact_templates {
            data.insert(
                format!("{id}{RESPONSE_SUFFIX}"),
                Value::from(template.as_str()),
            );
        }
        extend(&mut data, &self.fact_set);
        extend(&mut data, &self.user_state);
        for (slot, value) in &self.slots {
            data.insert(slot.clone(), Value::from(value.clone()));
        }
        extend(&mut data, &self.overrides);
        data
    }
}

fn extend(data: &mut DataMap, layer: &DataMap) {
    data.extend(layer.iter().map(|(k, v)| (k.clone(), v.clone())));
}
