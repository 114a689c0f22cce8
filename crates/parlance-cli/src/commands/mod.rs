//! CLI command implementations.

mod check;
mod render;
mod variations;

use std::path::PathBuf;

use parlance::{load_data_json, DataLayers, DataMap, TemplateCache, TemplateStore, Value};
use tracing::debug;

use crate::output::LoadDiagnostic;

pub use check::{run_check, CheckArgs};
pub use render::{run_render, RenderArgs};
pub use variations::{run_variations, VariationsArgs};

/// Where content and data come from. Shared by every command.
#[derive(Debug, clap::Args)]
pub struct ContentArgs {
    /// Content export (.json) with UI records and fact templates
    #[arg(long, env = "PARLANCE_CONTENT")]
    pub content: PathBuf,

    /// JSON object of fact values layered over the content
    #[arg(long)]
    pub data: Option<PathBuf>,

    /// Values in key=value format (repeatable); these win over every other source
    #[arg(short = 'p', long = "param", value_parser = parse_key_val)]
    pub params: Vec<(String, Value)>,

    /// Name exposed to templates as {invocation-name}
    #[arg(long)]
    pub invocation_name: Option<String>,
}

/// Loaded content and the data mapping assembled from it.
pub struct Loaded {
    pub cache: TemplateCache,
    pub data: DataMap,
}

impl ContentArgs {
    /// Read the content and data files and merge every layer.
    pub fn load(&self) -> Result<Loaded, LoadDiagnostic> {
        let cache = TemplateCache::load_json(&self.content)
            .map_err(|e| LoadDiagnostic::new(&self.content, e))?;
        let fact_set = match &self.data {
            Some(path) => load_data_json(path).map_err(|e| LoadDiagnostic::new(path, e))?,
            None => DataMap::new(),
        };
        let overrides: DataMap = self.params.iter().cloned().collect();
        let data = DataLayers::builder()
            .templates(&cache)
            .maybe_invocation_name(self.invocation_name.clone())
            .fact_set(fact_set)
            .overrides(overrides)
            .build()
            .assemble();
        debug!(
            version = %cache.version(),
            templates = cache.len(),
            keys = data.len(),
            "assembled data"
        );
        Ok(Loaded { cache, data })
    }
}

/// Parse a key=value parameter. The value is read as a JSON scalar when it
/// is one (`3`, `2.5`, `true`, `null`) and as a string otherwise.
fn parse_key_val(s: &str) -> Result<(String, Value), String> {
    let (key, raw) = s
        .split_once('=')
        .ok_or_else(|| format!("invalid parameter format '{s}': expected key=value"))?;
    let value = serde_json::from_str::<Value>(raw).unwrap_or_else(|_| Value::from(raw));
    Ok((key.to_string(), value))
}
