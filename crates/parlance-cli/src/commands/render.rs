//! Implementation of the `parlance render` command.

use clap::value_parser;
use miette::IntoDiagnostic;
use owo_colors::{OwoColorize, Stream};
use parlance::{
    RandomSource, Renderer, SeededRandom, TemplateStore, ThreadRandom, Utterance,
    DEFAULT_MAX_DEPTH,
};
use serde::Serialize;

use super::ContentArgs;
use crate::output::error_style;

/// Arguments for the render command.
#[derive(Debug, clap::Args)]
pub struct RenderArgs {
    /// Template key; text that names no key is rendered as a template itself
    pub key: String,

    #[command(flatten)]
    pub content: ContentArgs,

    /// Hour of day (0-23) for hour-gated variations; unset means unknown
    #[arg(long, env = "PARLANCE_HOUR", value_parser = value_parser!(u8).range(0..24))]
    pub hour: Option<u8>,

    /// Seed for variation choice, for reproducible output
    #[arg(long)]
    pub seed: Option<u64>,

    /// Maximum template nesting depth
    #[arg(long, default_value_t = DEFAULT_MAX_DEPTH)]
    pub max_depth: usize,

    /// Print the rendered text as is, without the fallback message or SSML quoting
    #[arg(long)]
    pub raw: bool,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// JSON output for render results.
#[derive(Serialize)]
struct RenderJson<'a> {
    key: &'a str,
    hour: Option<u8>,
    version: String,
    output: &'a str,
}

/// Run the render command.
pub fn run_render(args: RenderArgs) -> miette::Result<i32> {
    let loaded = match args.content.load() {
        Ok(loaded) => loaded,
        Err(diagnostic) => return Ok(diagnostic.emit()),
    };

    let renderer = Renderer::builder().max_depth(args.max_depth).build();
    let mut random: Box<dyn RandomSource> = match args.seed {
        Some(seed) => Box::new(SeededRandom::new(seed)),
        None => Box::new(ThreadRandom),
    };

    let result = if args.raw {
        renderer.render_with(&args.key, &loaded.data, args.hour, random.as_mut())
    } else {
        Utterance::new(renderer, &loaded.cache).speak_with(
            &args.key,
            &loaded.data,
            args.hour,
            random.as_mut(),
        )
    };

    match result {
        Ok(output) => {
            if args.json {
                let json = RenderJson {
                    key: &args.key,
                    hour: args.hour,
                    version: loaded.cache.version().to_string(),
                    output: &output,
                };
                println!("{}", serde_json::to_string_pretty(&json).into_diagnostic()?);
            } else {
                println!("{output}");
            }
            Ok(exitcode::OK)
        }
        Err(e) => {
            if args.json {
                let json = serde_json::json!({ "error": e.to_string() });
                eprintln!("{}", serde_json::to_string_pretty(&json).into_diagnostic()?);
            } else {
                eprintln!(
                    "{} {e}",
                    "error:".if_supports_color(Stream::Stderr, |t| t.style(error_style()))
                );
            }
            Ok(exitcode::DATAERR)
        }
    }
}
