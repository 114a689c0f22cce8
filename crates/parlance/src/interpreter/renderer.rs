//! Recursive template rendering.
//!
//! Rendering a key looks up its template, scans it for tags, resolves each
//! tag against the data mapping, and renders every resolved string again one
//! level deeper, since values may themselves be templates. A tag whose data
//! is missing collapses the frame that contains it to an empty string; the
//! parent frame sees that empty string as an ordinary value.

use std::borrow::Cow;

use bon::Builder;
use tracing::{debug, warn};

use crate::interpreter::RenderError;
use crate::interpreter::condition::{Outcome, evaluate};
use crate::interpreter::plural::{auto_pluralize, unescape_inner_brackets};
use crate::interpreter::random::{RandomSource, ThreadRandom};
use crate::interpreter::variation::select_variation;
use crate::parser::ast::{CompoundTag, Segment, Tag};
use crate::parser::{classify_key, parse_tag, scan};
use crate::types::{DataMap, Value};

/// Default bound on nested render frames.
pub const DEFAULT_MAX_DEPTH: usize = 100;

/// Renders templates from a data mapping.
///
/// # Example
///
/// ```
/// use parlance::{DataMap, Renderer, Value};
///
/// let mut data = DataMap::new();
/// data.insert("greeting".into(), Value::from("hi {name}"));
/// data.insert("name".into(), Value::from("Ann"));
///
/// let renderer = Renderer::builder().max_depth(10).build();
/// assert_eq!(renderer.render("greeting", &data, None).unwrap(), "hi Ann");
///
/// // Unknown keys are literal text.
/// assert_eq!(renderer.render("hello", &data, None).unwrap(), "hello");
/// ```
#[derive(Debug, Clone, Copy, Builder)]
pub struct Renderer {
    /// Frames deeper than this are returned unexpanded.
    #[builder(default = DEFAULT_MAX_DEPTH)]
    max_depth: usize,
}

impl Default for Renderer {
    fn default() -> Self {
        Renderer::builder().build()
    }
}

/// Per-call state shared by every frame of one render.
struct RenderContext<'a> {
    data: &'a DataMap,
    hour: Option<u8>,
    random: &'a mut dyn RandomSource,
}

impl Renderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// The configured depth bound.
    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    /// Render `key` using the thread-local random generator.
    ///
    /// `key` names a template in `data`; if no such entry exists, `key`
    /// itself is rendered as template text. Returns an empty string when any
    /// tag in the top-level template refers to missing data.
    ///
    /// # Errors
    ///
    /// Returns [`RenderError::NoVariation`] if a wildcard tag has no eligible
    /// candidate.
    pub fn render(&self, key: &str, data: &DataMap, hour: Option<u8>) -> Result<String, RenderError> {
        self.render_with(key, data, hour, &mut ThreadRandom)
    }

    /// Render `key`, drawing variation choices from `random`.
    ///
    /// # Errors
    ///
    /// Returns [`RenderError::NoVariation`] if a wildcard tag has no eligible
    /// candidate.
    pub fn render_with(
        &self,
        key: &str,
        data: &DataMap,
        hour: Option<u8>,
        random: &mut dyn RandomSource,
    ) -> Result<String, RenderError> {
        if self.max_depth == 0 {
            warn!(key, "template max recursion reached, returning unexpanded");
            return Ok(key.to_string());
        }
        let mut ctx = RenderContext { data, hour, random };
        let content = match data.get(key) {
            Some(Value::String(template)) => template.as_str(),
            Some(Value::Null) => return Ok(String::new()),
            Some(other) => return Ok(other.to_string()),
            None => key,
        };
        self.render_content(content, &mut ctx, 1)
            .map(Cow::into_owned)
    }

    /// Render template text at `depth`.
    fn render_content<'c>(
        &self,
        content: &'c str,
        ctx: &mut RenderContext<'_>,
        depth: usize,
    ) -> Result<Cow<'c, str>, RenderError> {
        if depth > self.max_depth {
            warn!(
                depth,
                max_depth = self.max_depth,
                "template max recursion reached, returning unexpanded"
            );
            return Ok(Cow::Borrowed(content));
        }

        let template = scan(content);
        if !template.has_tags() {
            return Ok(Cow::Borrowed(content));
        }

        let mut output = String::with_capacity(content.len());
        let mut missing = false;
        for segment in &template.segments {
            match segment {
                Segment::Literal(text) => output.push_str(text),
                Segment::Tag(raw) => match self.render_tag(raw, ctx, depth)? {
                    Some(value) => output.push_str(&value),
                    None => {
                        debug!(tag = raw, depth, "missing data");
                        missing = true;
                    }
                },
            }
        }

        if missing {
            return Ok(Cow::Borrowed(""));
        }
        Ok(Cow::Owned(output))
    }

    /// Resolve one tag match and render the result one frame deeper.
    /// `None` means the tag's data is missing.
    fn render_tag(
        &self,
        raw: &str,
        ctx: &mut RenderContext<'_>,
        depth: usize,
    ) -> Result<Option<String>, RenderError> {
        let resolved = match parse_tag(raw) {
            Tag::Wildcard(prefix) => {
                let chosen = select_variation(&prefix, ctx.data, ctx.hour, &mut *ctx.random)?;
                resolve_selected(&chosen, ctx.data)
            }
            Tag::Compound(compound) => resolve_compound(&compound, ctx.data).map(Value::String),
            Tag::Simple(key) => lookup(ctx.data, &key),
        };

        match resolved {
            None => Ok(None),
            Some(Value::String(text)) => self
                .render_content(&text, ctx, depth + 1)
                .map(|rendered| Some(rendered.into_owned())),
            Some(other) => Ok(Some(other.to_string())),
        }
    }
}

/// A present, non-null value stored under `key`.
fn lookup(data: &DataMap, key: &str) -> Option<Value> {
    data.get(key).filter(|v| !v.is_null()).cloned()
}

/// Resolve a key chosen by a wildcard. The chosen key may itself be
/// compound; it is never selected from again.
fn resolve_selected(key: &str, data: &DataMap) -> Option<Value> {
    match classify_key(key) {
        Tag::Compound(compound) => resolve_compound(&compound, data).map(Value::String),
        Tag::Simple(_) | Tag::Wildcard(_) => lookup(data, key),
    }
}

/// Pick and post-process the branch of a compound tag, or `None` when its
/// base value is missing.
fn resolve_compound(tag: &CompoundTag, data: &DataMap) -> Option<String> {
    let base = data.get(&tag.base);
    let branch = match evaluate(base, &tag.condition) {
        Outcome::Missing => return None,
        Outcome::Matched => &tag.matched,
        Outcome::NotMatched => &tag.unmatched,
    };
    let base = base.filter(|v| !v.is_null());
    Some(unescape_inner_brackets(&auto_pluralize(branch, base)))
}

/// Render `key` with a default [`Renderer`] and the thread-local generator.
///
/// # Errors
///
/// Returns [`RenderError::NoVariation`] if a wildcard tag has no eligible
/// candidate.
pub fn render(key: &str, data: &DataMap, hour: Option<u8>) -> Result<String, RenderError> {
    Renderer::default().render(key, data, hour)
}
