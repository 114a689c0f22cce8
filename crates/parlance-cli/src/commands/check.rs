//! Implementation of the `parlance check` command.

use miette::IntoDiagnostic;
use owo_colors::{OwoColorize, Stream};
use parlance::{lint_data, LintWarning, TemplateStore};
use serde::Serialize;

use super::ContentArgs;
use crate::output::{ok_style, warning_style};

/// Arguments for the check command.
#[derive(Debug, clap::Args)]
pub struct CheckArgs {
    #[command(flatten)]
    pub content: ContentArgs,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,

    /// Exit with a non-zero code if there are any warnings
    #[arg(long)]
    pub strict: bool,
}

/// JSON output for check results.
#[derive(Serialize)]
struct CheckJson<'a> {
    version: String,
    templates: usize,
    warnings: Vec<WarningJson<'a>>,
}

#[derive(Serialize)]
struct WarningJson<'a> {
    key: &'a str,
    message: String,
}

/// Run the check command.
pub fn run_check(args: CheckArgs) -> miette::Result<i32> {
    let loaded = match args.content.load() {
        Ok(loaded) => loaded,
        Err(diagnostic) => return Ok(diagnostic.emit()),
    };
    let warnings = lint_data(&loaded.data);
    let version = loaded.cache.version();

    if args.json {
        let json = CheckJson {
            version: version.to_string(),
            templates: loaded.cache.len(),
            warnings: warnings.iter().map(warning_json).collect(),
        };
        println!("{}", serde_json::to_string_pretty(&json).into_diagnostic()?);
    } else if warnings.is_empty() {
        println!(
            "{} {} templates, version {version}",
            "ok:".if_supports_color(Stream::Stdout, |t| t.style(ok_style())),
            loaded.cache.len()
        );
    } else {
        for warning in &warnings {
            println!(
                "{} {warning}",
                "warning:".if_supports_color(Stream::Stdout, |t| t.style(warning_style()))
            );
        }
        println!("\n{} warning(s) in {}", warnings.len(), args.content.content.display());
    }

    if args.strict && !warnings.is_empty() {
        Ok(exitcode::DATAERR)
    } else {
        Ok(exitcode::OK)
    }
}

fn warning_json(warning: &LintWarning) -> WarningJson<'_> {
    WarningJson {
        key: warning.key(),
        message: warning.to_string(),
    }
}
