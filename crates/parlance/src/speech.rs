//! Turning rendered templates into speech output.
//!
//! A render that collapses to an empty string still has to say something;
//! [`Utterance`] substitutes a message naming the template so the gap is
//! audible during development. Rendered text is then made safe for SSML.

use crate::content::TemplateStore;
use crate::interpreter::{RandomSource, RenderError, Renderer, ThreadRandom};
use crate::types::DataMap;

/// Renders templates by id and prepares the result for speech.
///
/// ```
/// use std::collections::BTreeMap;
/// use parlance::{Renderer, TemplateCache, Utterance};
///
/// let cache = TemplateCache::from_entries(BTreeMap::from([
///     ("help".to_string(), "Say \"next\" to {action}.".to_string()),
/// ]));
/// let utterance = Utterance::new(Renderer::new(), &cache);
///
/// let mut data = cache.to_data();
/// assert_eq!(
///     utterance.speak("help", &data, None).unwrap(),
///     "could not load content from help. Check that all replacements are available for: (Say \"next\" to {action}.)"
/// );
///
/// data.insert("action".into(), "continue".into());
/// assert_eq!(
///     utterance.speak("help", &data, None).unwrap(),
///     "Say &quot;next&quot; to continue."
/// );
/// ```
pub struct Utterance<'a, S: TemplateStore + ?Sized> {
    renderer: Renderer,
    store: &'a S,
}

impl<'a, S: TemplateStore + ?Sized> Utterance<'a, S> {
    pub fn new(renderer: Renderer, store: &'a S) -> Self {
        Self { renderer, store }
    }

    /// Render template `id` with the thread-local generator.
    ///
    /// # Errors
    ///
    /// Propagates [`RenderError::NoVariation`].
    pub fn speak(&self, id: &str, data: &DataMap, hour: Option<u8>) -> Result<String, RenderError> {
        self.speak_with(id, data, hour, &mut ThreadRandom)
    }

    /// Render template `id`, substituting a fallback message for an empty
    /// result, and prepare the text for speech.
    ///
    /// # Errors
    ///
    /// Propagates [`RenderError::NoVariation`].
    pub fn speak_with(
        &self,
        id: &str,
        data: &DataMap,
        hour: Option<u8>,
        random: &mut dyn RandomSource,
    ) -> Result<String, RenderError> {
        let rendered = self.renderer.render_with(id, data, hour, random)?;
        if rendered.is_empty() {
            return Ok(self.fallback(id));
        }
        Ok(prepare_speech(&rendered))
    }

    /// The message spoken when template `id` cannot be rendered.
    pub fn fallback(&self, id: &str) -> String {
        let template = self.store.template(id).unwrap_or("undefined");
        format!(
            "could not load content from {id}. Check that all replacements are available for: ({template})"
        )
    }
}

/// Replace newlines with spaces and escape double quotes in spoken text.
///
/// A newline causes a long pause in synthesized speech, and quotes in text
/// content must be entity-encoded in SSML. A quote is left alone when it sits
/// inside a tag (`<break time="1s"/>`) or in element text that runs up to a
/// closing tag (`<s>"hi"</s>`).
///
/// ```
/// use parlance::prepare_speech;
///
/// assert_eq!(
///     prepare_speech("say \"hi\"\n<break time=\"1s\"/>"),
///     "say &quot;hi&quot; <break time=\"1s\"/>"
/// );
/// ```
pub fn prepare_speech(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for (i, c) in text.char_indices() {
        match c {
            '\n' => out.push(' '),
            '"' if !is_markup_quote(&text[i + 1..]) => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}

/// Whether a quote followed by `rest` is inside a tag or in text closed by
/// an end tag: the next angle bracket is `>` or starts `</`.
fn is_markup_quote(rest: &str) -> bool {
    match rest.find(['<', '>']) {
        Some(i) => rest[i..].starts_with('>') || rest[i..].starts_with("</"),
        None => false,
    }
}

/// Join items into a spoken list.
///
/// Two or fewer items are joined with `" and "`; longer lists separate items
/// with `punctuation` (default `,`) and put `", and "` before the last.
///
/// ```
/// use parlance::express_item_list;
///
/// assert_eq!(express_item_list(&["a", "b"], None), "a and b");
/// assert_eq!(express_item_list(&["a", "b", "c"], None), "a, b, and c");
/// assert_eq!(express_item_list(&["a", "b", "c"], Some(";")), "a; b, and c");
/// ```
pub fn express_item_list<S: AsRef<str>>(items: &[S], punctuation: Option<&str>) -> String {
    let items: Vec<&str> = items.iter().map(AsRef::as_ref).collect();
    match items.split_last() {
        Some((last, rest)) if items.len() > 2 => {
            let separator = format!("{} ", punctuation.unwrap_or(","));
            format!("{}, and {last}", rest.join(separator.as_str()))
        }
        _ => items.join(" and "),
    }
}
