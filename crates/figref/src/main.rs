//! figref CLI - pandoc filter for typed figures and cross-references.
//!
//! Speaks the pandoc JSON filter protocol: the document arrives on stdin,
//! the output format name as the first argument, and the rewritten document
//! leaves on stdout. Diagnostics go to stderr only.
//!
//! ```text
//! pandoc article.md --filter figref -o article.pdf
//! ```

mod error;
mod output;

use std::io::{self, Read, Write};

use clap::Parser;
use tracing_subscriber::EnvFilter;

use figref_ast::Pandoc;
use figref_filter::OutputTarget;

use error::CliError;
use output::Output;

/// figref - typed figure numbering and cross-referencing for pandoc.
#[derive(Parser)]
#[command(name = "figref", version, about)]
struct Cli {
    /// Output format name, as pandoc passes to its filters (e.g. "latex").
    format: Option<String>,
}

fn main() {
    // Initialize tracing on stderr; stdout carries the document.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let output = Output::new();

    if let Err(err) = run(&cli, &output) {
        output.error(&format!("Error: {err}"));
        std::process::exit(1);
    }
}

fn run(cli: &Cli, output: &Output) -> Result<(), CliError> {
    let mut input = String::new();
    io::stdin().read_to_string(&mut input)?;
    let mut doc: Pandoc = serde_json::from_str(&input)?;

    let target = OutputTarget::new(cli.format.clone().unwrap_or_default());
    let registry = figref_filter::apply(&mut doc, &target);
    for conflict in registry.conflicts() {
        output.warning(&conflict.to_string());
    }

    let mut stdout = io::BufWriter::new(io::stdout().lock());
    serde_json::to_writer(&mut stdout, &doc)?;
    stdout.flush()?;
    Ok(())
}
