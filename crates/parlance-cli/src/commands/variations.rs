//! Implementation of the `parlance variations` command.

use miette::IntoDiagnostic;
use owo_colors::{OwoColorize, Stream};
use parlance::interpreter::eligible_variations;
use parlance::DataMap;
use serde::Serialize;

use super::ContentArgs;
use crate::output::table::{format_variations_table, HourCandidates};
use crate::output::warning_style;

/// Hours of the day, 0 through 23.
const HOURS: u8 = 24;

/// Arguments for the variations command.
#[derive(Debug, clap::Args)]
pub struct VariationsArgs {
    /// Variation prefix, with or without the trailing `*`
    pub prefix: String,

    #[command(flatten)]
    pub content: ContentArgs,

    /// Exit with a non-zero code if some hour has no candidate
    #[arg(long)]
    pub strict: bool,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// JSON output for one row of the hour table.
#[derive(Serialize)]
struct HourJson<'a> {
    hour: Option<u8>,
    candidates: &'a [String],
}

/// Run the variations command.
pub fn run_variations(args: VariationsArgs) -> miette::Result<i32> {
    let loaded = match args.content.load() {
        Ok(loaded) => loaded,
        Err(diagnostic) => return Ok(diagnostic.emit()),
    };
    let prefix = args.prefix.trim_end_matches('*');
    let rows = hour_rows(prefix, &loaded.data);
    let uncovered: Vec<&HourCandidates> =
        rows.iter().filter(|row| row.candidates.is_empty()).collect();

    if args.json {
        let json: Vec<HourJson<'_>> = rows
            .iter()
            .map(|row| HourJson {
                hour: row.hour,
                candidates: &row.candidates,
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&json).into_diagnostic()?);
    } else {
        println!("{}", format_variations_table(&rows));
        if !uncovered.is_empty() {
            println!(
                "\n{} '{prefix}*' fails to render at {} of {} hour settings",
                "warning:".if_supports_color(Stream::Stdout, |t| t.style(warning_style())),
                uncovered.len(),
                rows.len()
            );
        }
    }

    if args.strict && !uncovered.is_empty() {
        Ok(exitcode::DATAERR)
    } else {
        Ok(exitcode::OK)
    }
}

/// Eligible candidates at each hour, then with the hour unknown.
fn hour_rows(prefix: &str, data: &DataMap) -> Vec<HourCandidates> {
    (0..HOURS)
        .map(Some)
        .chain([None])
        .map(|hour| HourCandidates {
            hour,
            candidates: eligible_variations(prefix, data, hour)
                .into_iter()
                .map(String::from)
                .collect(),
        })
        .collect()
}
