//! Miette diagnostic wrapper for content loading errors.

use std::fs::read_to_string;
use std::path::Path;

use miette::{Diagnostic, NamedSource, Report, SourceSpan};
use parlance::LoadError;
use thiserror::Error;

/// A miette-compatible diagnostic for a file that failed to load.
///
/// JSON errors carry the file contents so the report can point at the
/// offending position.
#[derive(Debug, Error, Diagnostic)]
#[error("{message}")]
#[diagnostic(code(parlance::load))]
pub struct LoadDiagnostic {
    #[source_code]
    src: Option<NamedSource<String>>,

    #[label("error here")]
    span: Option<SourceSpan>,

    message: String,

    #[help]
    help: Option<String>,

    exit_code: i32,
}

impl LoadDiagnostic {
    /// Create a diagnostic for `err`, raised while loading `path`.
    pub fn new(path: &Path, err: LoadError) -> Self {
        match &err {
            LoadError::Io { .. } => LoadDiagnostic {
                src: None,
                span: None,
                message: err.to_string(),
                help: Some("pass --content or set PARLANCE_CONTENT to a content export".into()),
                exit_code: exitcode::NOINPUT,
            },
            LoadError::Json { line, column, .. } => {
                let content = read_to_string(path).ok();
                let span = content
                    .as_deref()
                    .map(|content| (byte_offset(content, *line, *column), 1).into());
                LoadDiagnostic {
                    src: content.map(|c| NamedSource::new(path.display().to_string(), c)),
                    span,
                    message: err.to_string(),
                    help: None,
                    exit_code: exitcode::DATAERR,
                }
            }
        }
    }

    /// Print the report to stderr and return the process exit code.
    pub fn emit(self) -> i32 {
        let exit_code = self.exit_code;
        eprintln!("{:?}", Report::new(self));
        exit_code
    }
}

/// Convert a 1-based line and column to a byte offset, clamped to the
/// content length.
fn byte_offset(content: &str, line: usize, column: usize) -> usize {
    let offset = content
        .lines()
        .take(line.saturating_sub(1))
        .map(|l| l.len() + 1)
        .sum::<usize>()
        + column.saturating_sub(1);
    offset.min(content.len().saturating_sub(1))
}
