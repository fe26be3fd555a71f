//! Implementation of the `ntl templatize` command.

use std::path::PathBuf;

use ntl::{resolve_references, substitute, ExtractOptions, ResolutionMap};
use ntl_nlp::RuleAnalyzer;
use serde::Serialize;

use super::payload::Payload;

/// Arguments for the templatize command.
#[derive(Debug, clap::Args)]
pub struct TemplatizeArgs {
    /// Request payload file (JSON: {"text", "data", "args"})
    #[arg(long, required = true)]
    pub payload: PathBuf,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// JSON output for templatize results.
#[derive(Serialize)]
pub struct TemplatizeResult {
    pub template: String,
    pub resolutions: ResolutionMap,
}

/// Run the templatize command.
pub fn run_templatize(args: TemplatizeArgs) -> miette::Result<i32> {
    let payload = Payload::load(&args.payload)?;
    let dataset = payload.dataset()?;
    let analyzer = RuleAnalyzer::shared();

    let resolutions = resolve_references(
        analyzer,
        &payload.text,
        &payload.args,
        &dataset,
        &ExtractOptions::default(),
    )
    .map_err(|e| miette::miette!("language analysis failed: {}", e))?;
    let template = substitute(&payload.text, &resolutions);

    if args.json {
        let output = TemplatizeResult {
            template,
            resolutions,
        };
        println!(
            "{}",
            serde_json::to_string_pretty(&output).expect("JSON serialization should not fail")
        );
    } else {
        println!("{}", template);
    }
    Ok(exitcode::OK)
}
