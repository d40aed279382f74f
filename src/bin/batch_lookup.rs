//! Headless Batch Lookup
//!
//! Processes a file of shopping requests (one per line) and prints the
//! outcome of each. Requests are independent, so they run in parallel
//! over the shared catalog.

use aisle_assistant::catalog::Catalog;
use aisle_assistant::core::error::Result;
use aisle_assistant::core::types::ExtractionMode;
use aisle_assistant::nlp::{Annotator, LexiconAnnotator, RecordedAnnotator};
use aisle_assistant::present::render;
use aisle_assistant::request::{Assistant, RequestOutcome};
use clap::{Parser, ValueEnum};
use rayon::prelude::*;
use serde::Serialize;
use std::fs;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Batch Lookup - resolve many shopping requests at once
#[derive(Parser, Debug)]
#[command(name = "batch_lookup")]
#[command(about = "Resolve a file of shopping requests to shelf locations")]
struct Args {
    /// Catalog JSON file
    #[arg(long, default_value = "data/database.json")]
    catalog: PathBuf,

    /// Requests, one per line
    #[arg(long)]
    input: PathBuf,

    /// JSON-lines annotations exported by an external NLP toolkit
    ///
    /// When given, requests are annotated from this file instead of the
    /// built-in word lists. Requests without a recorded doc yield no items.
    #[arg(long)]
    docs: Option<PathBuf>,

    /// Output format: json or text
    #[arg(long, default_value = "json", value_enum)]
    format: OutputFormat,

    /// Match surface forms only, without lemmas
    #[arg(long)]
    surface_only: bool,

    /// Skip adding lemma aliases to the catalog
    #[arg(long)]
    no_aliases: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    /// One JSON object per request
    Json,
    /// The same reply the interactive assistant prints
    Text,
}

/// JSON output line
#[derive(Serialize)]
struct LookupLine<'a> {
    request: &'a str,
    #[serde(flatten)]
    outcome: &'a RequestOutcome,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("aisle_assistant=warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    if let Err(e) = run(&args) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(args: &Args) -> Result<()> {
    let mut catalog = Catalog::load(&args.catalog)?;
    if !args.no_aliases {
        catalog = catalog.with_lemma_aliases();
    }

    let annotator: Box<dyn Annotator> = match &args.docs {
        Some(path) => Box::new(RecordedAnnotator::load(path)?),
        None => Box::new(LexiconAnnotator::new().with_phrases(catalog.phrases())),
    };

    let mode = if args.surface_only {
        ExtractionMode::Surface
    } else {
        ExtractionMode::LemmaAware
    };
    let assistant = Assistant::new(&catalog, annotator.as_ref()).with_mode(mode);

    let content = fs::read_to_string(&args.input)?;
    let requests: Vec<&str> = content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect();

    tracing::info!(requests = requests.len(), "processing batch");

    let outcomes: Vec<RequestOutcome> = requests
        .par_iter()
        .map(|request| assistant.process(request))
        .collect();

    for (request, outcome) in requests.iter().copied().zip(&outcomes) {
        match args.format {
            OutputFormat::Json => {
                let line = LookupLine { request, outcome };
                println!("{}", serde_json::to_string(&line)?);
            }
            OutputFormat::Text => {
                println!("> {}", request);
                for line in render(outcome) {
                    println!("{}", line);
                }
                println!();
            }
        }
    }

    let matched = outcomes.iter().filter(|o| !o.products.is_empty()).count();
    tracing::info!(
        requests = requests.len(),
        matched,
        "batch complete"
    );

    Ok(())
}
