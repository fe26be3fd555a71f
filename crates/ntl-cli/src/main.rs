//! NTL CLI entry point.
//!
//! Command-line front end for the templatization engine:
//! - `ntl templatize` - Turn a text and data payload into a template
//! - `ntl render` - Render a template against a data payload
//! - `ntl inspect` - Show the linguistic analysis of a text

mod commands;
mod output;

use std::io::stderr;
use std::process::exit;

use clap::{Parser, Subcommand, ValueEnum};
use commands::{run_inspect, run_render, run_templatize, InspectArgs, RenderArgs, TemplatizeArgs};
use tracing_subscriber::EnvFilter;

/// Natural-language templatization tools.
#[derive(Debug, Parser)]
#[command(name = "ntl")]
#[command(about = "Natural-language templatization tools", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Color output control
    #[arg(long, value_enum, default_value_t = ColorWhen::Auto, global = true)]
    pub color: ColorWhen,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// When to use colored output.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ColorWhen {
    Auto,
    Always,
    Never,
}

/// CLI subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Turn a text and data payload into a reusable template
    Templatize(TemplatizeArgs),
    /// Render a template against a data payload
    Render(RenderArgs),
    /// Show tokens, lemmas, tags, and extracted phrases for a text
    Inspect(InspectArgs),
}

/// Set up color output based on user preference.
fn setup_colors(color_when: ColorWhen) {
    match color_when {
        ColorWhen::Auto => {
            // owo-colors automatically checks TTY, NO_COLOR, FORCE_COLOR
        }
        ColorWhen::Always => {
            owo_colors::set_override(true);
        }
        ColorWhen::Never => {
            owo_colors::set_override(false);
        }
    }
}

/// Install a stderr tracing subscriber when verbose output is requested.
fn setup_tracing(verbose: bool) {
    if verbose {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(stderr)
            .init();
    }
}

fn main() -> miette::Result<()> {
    let cli = Cli::parse();
    setup_colors(cli.color);
    setup_tracing(cli.verbose);

    miette::set_hook(Box::new(|_| {
        Box::new(
            miette::MietteHandlerOpts::new()
                .terminal_links(true)
                .unicode(true)
                .context_lines(2)
                .build(),
        )
    }))?;

    let result = match cli.command {
        Commands::Templatize(args) => run_templatize(args),
        Commands::Render(args) => run_render(args),
        Commands::Inspect(args) => run_inspect(args),
    };

    match result {
        Ok(code) => exit(code),
        Err(e) => {
            eprintln!("{:?}", e);
            exit(exitcode::SOFTWARE);
        }
    }
}
