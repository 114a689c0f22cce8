//! Template interpreter.
//!
//! This module provides the rendering engine that takes template strings and
//! a data mapping and produces finished text. It evaluates compound tag
//! conditions, selects wildcard variations, applies agreement markers, and
//! expands nested templates up to a depth bound.

mod condition;
mod error;
mod lint;
mod plural;
mod random;
mod renderer;
mod variation;

pub use condition::{Outcome, evaluate};
pub use error::{LintWarning, RenderError, compute_suggestions};
pub use lint::lint_data;
pub use plural::{auto_pluralize, unescape_inner_brackets};
pub use random::{RandomSource, ScriptedRandom, SeededRandom, ThreadRandom};
pub use renderer::{DEFAULT_MAX_DEPTH, Renderer, render};
pub use variation::{eligible_variations, is_eligible, select_variation};
