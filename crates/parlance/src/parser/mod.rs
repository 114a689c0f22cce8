//! Template scanning and tag classification.
//!
//! The scanner splits a template string into literal text and `{...}` tag
//! matches; the tag parser classifies each match into a [`Tag`]. Both are
//! public so tooling can inspect content without rendering it.

pub mod ast;
mod tag;
mod template;

pub use ast::*;
pub use tag::{base_key_of, classify_key, is_compound, is_wildcard, parse_tag, strip_braces};
pub use template::scan;
