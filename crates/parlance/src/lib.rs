pub mod content;
pub mod interpreter;
pub mod parser;
pub mod speech;
pub mod types;

pub use content::{
    ContentDocument, ContentVersion, DataLayers, FactTemplate, LoadError, TemplateCache,
    TemplateStore, UiRecord, load_data_json,
};
pub use interpreter::{
    DEFAULT_MAX_DEPTH, LintWarning, Outcome, RandomSource, RenderError, Renderer, ScriptedRandom,
    SeededRandom, ThreadRandom, auto_pluralize, compute_suggestions, evaluate, lint_data, render,
    select_variation, unescape_inner_brackets,
};
pub use speech::{Utterance, express_item_list, prepare_speech};
pub use types::{DataMap, HourRange, Value};

/// Creates a [`DataMap`] from key-value pairs.
///
/// Values are converted via `Into<Value>`, so you can pass integers, floats,
/// booleans, strings, or `Option`s (`None` becomes [`Value::Null`]).
///
/// # Example
///
/// ```
/// use parlance::{data, Value};
///
/// let d = data! { "n" => 3, "name" => "Ann", "hoa" => true };
/// assert_eq!(d.len(), 3);
/// assert_eq!(d["n"].as_number(), Some(3));
/// assert_eq!(d["name"].as_str(), Some("Ann"));
/// ```
#[macro_export]
macro_rules! data {
    {} => {
        $crate::DataMap::new()
    };
    { $($key:expr => $value:expr),+ $(,)? } => {
        {
            let mut map = $crate::DataMap::new();
            $(
                map.insert($key.to_string(), ::std::convert::Into::<$crate::Value>::into($value));
            )+
            map
        }
    };
}
