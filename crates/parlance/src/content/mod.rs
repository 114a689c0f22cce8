//! Content loading and request data assembly.
//!
//! Templates come from a content export (UI string records and fact
//! templates) held in an explicit, versioned [`TemplateCache`]. Each request
//! merges the cache with fact, user, and slot layers into the flat
//! [`DataMap`](crate::DataMap) the renderer reads.

mod cache;
mod error;
mod layers;
mod version;

pub use cache::{
    ContentDocument, FactTemplate, RESPONSE_SUFFIX, SCREEN_CONTENT_SUFFIX, SCREEN_TITLE_SUFFIX,
    TemplateCache, TemplateStore, UiRecord, load_data_json,
};
pub use error::LoadError;
pub use layers::{DataLayers, INVOCATION_NAME_KEY};
pub use version::ContentVersion;
