//! Output formatting for CLI commands.

pub mod diagnostic;
pub mod table;

pub use diagnostic::LoadDiagnostic;

use owo_colors::Style;

/// Style of the `error:` prefix.
pub fn error_style() -> Style {
    Style::new().red().bold()
}

/// Style of the `warning:` prefix.
pub fn warning_style() -> Style {
    Style::new().yellow().bold()
}

/// Style of the `ok:` prefix.
pub fn ok_style() -> Style {
    Style::new().green().bold()
}
