//! Implementation of the `ntl inspect` command.

use ntl::{extract_phrases, ExtractOptions};
use ntl_nlp::{Analyze, RuleAnalyzer, Token};
use serde::Serialize;

use crate::output::{span_table, token_table};

/// Arguments for the inspect command.
#[derive(Debug, clap::Args)]
pub struct InspectArgs {
    /// Text to analyze
    #[arg(long, required = true)]
    pub text: String,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// JSON output for inspect results.
#[derive(Serialize)]
pub struct InspectResult {
    pub tokens: Vec<Token>,
    pub phrases: Vec<String>,
}

/// Run the inspect command.
pub fn run_inspect(args: InspectArgs) -> miette::Result<i32> {
    let analyzer = RuleAnalyzer::shared();
    let doc = analyzer
        .analyze(&args.text)
        .map_err(|e| miette::miette!("language analysis failed: {}", e))?;
    let spans = extract_phrases(&doc, &ExtractOptions::default());

    if args.json {
        let output = InspectResult {
            tokens: doc.tokens().to_vec(),
            phrases: spans.iter().map(|s| s.text().to_string()).collect(),
        };
        println!(
            "{}",
            serde_json::to_string_pretty(&output).expect("JSON serialization should not fail")
        );
    } else {
        println!("{}", token_table(doc.tokens()));
        if !spans.is_empty() {
            println!();
            println!("{}", span_table(&spans));
        }
    }
    Ok(exitcode::OK)
}
