//! Implementation of the `ntl render` command.

use std::fs::read_to_string;
use std::path::PathBuf;

use ntl::parse_template;
use serde::Serialize;

use super::payload::Payload;
use crate::output::SyntaxDiagnostic;

/// Arguments for the render command.
#[derive(Debug, clap::Args)]
pub struct RenderArgs {
    /// Template string, or @path to read one from a file
    #[arg(long, required = true)]
    pub template: String,

    /// Request payload file (JSON: {"text", "data", "args"})
    #[arg(long, required = true)]
    pub payload: PathBuf,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// JSON output for render results.
#[derive(Serialize)]
pub struct RenderResult {
    pub rendered: String,
}

/// Resolve the template argument to a source name and its content.
fn template_source(raw: &str) -> miette::Result<(String, String)> {
    if let Some(path) = raw.strip_prefix('@') {
        let content = read_to_string(path)
            .map_err(|e| miette::miette!("cannot read template file {}: {}", path, e))?;
        Ok((path.to_string(), content.trim_end().to_string()))
    } else {
        Ok(("<template>".to_string(), raw.to_string()))
    }
}

/// Run the render command.
pub fn run_render(args: RenderArgs) -> miette::Result<i32> {
    let payload = Payload::load(&args.payload)?;
    let dataset = payload.dataset()?;
    let (name, source) = template_source(&args.template)?;

    let template = match parse_template(&source) {
        Ok(template) => template,
        Err(err) => {
            return Err(SyntaxDiagnostic::new(&name, &source, &err).into());
        }
    };

    match template.render(&dataset, &payload.args) {
        Ok(rendered) => {
            if args.json {
                let output = RenderResult { rendered };
                println!(
                    "{}",
                    serde_json::to_string_pretty(&output)
                        .expect("JSON serialization should not fail")
                );
            } else {
                println!("{}", rendered);
            }
            Ok(exitcode::OK)
        }
        Err(e) => {
            if args.json {
                let output = serde_json::json!({
                    "error": e.to_string()
                });
                eprintln!(
                    "{}",
                    serde_json::to_string_pretty(&output)
                        .expect("JSON serialization should not fail")
                );
            } else {
                eprintln!("Render error: {}", e);
            }
            Ok(exitcode::DATAERR)
        }
    }
}
