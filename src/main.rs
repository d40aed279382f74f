//! Aisle Assistant - Entry Point
//!
//! Interactive shopping assistant: type what you want to buy and get the
//! shelf for each item. `export` writes the last answer as a CSV list.

use aisle_assistant::catalog::{self, Catalog};
use aisle_assistant::core::config::AssistantConfig;
use aisle_assistant::core::error::Result;
use aisle_assistant::core::types::ExtractionMode;
use aisle_assistant::nlp::LexiconAnnotator;
use aisle_assistant::present::{export_csv, render};
use aisle_assistant::request::{Assistant, RequestOutcome};
use clap::Parser;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

/// Supermarket assistant - tells you which shelf each item is on
#[derive(Parser, Debug)]
#[command(name = "aisle-assistant")]
#[command(about = "Map a shopping list to shelf locations")]
struct Args {
    /// TOML config file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Catalog JSON file (overrides the config)
    #[arg(long)]
    catalog: Option<PathBuf>,

    /// Match surface forms only, without lemmas
    #[arg(long)]
    surface_only: bool,
}

fn main() {
    let args = Args::parse();
    if let Err(e) = run(args) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<()> {
    let mut config = match &args.config {
        Some(path) => AssistantConfig::load(path)?,
        None => AssistantConfig::default(),
    };
    if let Some(path) = args.catalog {
        config.catalog_path = path;
    }
    if args.surface_only {
        config.extraction = ExtractionMode::Surface;
    }

    let rust_log = std::env::var("RUST_LOG").ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(config.log_directives(rust_log.as_deref())))
        .init();

    tracing::info!("Aisle Assistant starting...");

    let mut loaded = Catalog::load(&config.catalog_path)?;
    if config.alias_lemmas {
        loaded = loaded.with_lemma_aliases();
    }
    let catalog = catalog::install(loaded)?;

    let annotator = LexiconAnnotator::new().with_phrases(catalog.phrases());
    let assistant = Assistant::new(catalog, &annotator).with_mode(config.extraction);

    println!("\n=== SUPERMARKET ASSISTANT ===");
    println!("Enter your shopping list and I'll tell you where to find each item!");
    println!("Example: I need bread, rice and chicken");
    println!();
    print_help();

    let mut last: Option<RequestOutcome> = None;

    loop {
        print!("> ");
        io::stdout().flush()?;

        let mut input = String::new();
        if io::stdin().read_line(&mut input)? == 0 {
            break;
        }
        let input = input.trim();

        if input.is_empty() {
            continue;
        }

        if input == "quit" || input == "q" {
            break;
        }

        if input == "help" {
            print_help();
            continue;
        }

        if input == "export" || input.starts_with("export ") {
            let path = match input.strip_prefix("export ") {
                Some(p) if !p.trim().is_empty() => PathBuf::from(p.trim()),
                _ => config.export_path.clone(),
            };
            export_last(last.as_ref(), &path);
            continue;
        }

        let outcome = assistant.process(input);
        println!();
        for line in render(&outcome) {
            println!("{}", line);
        }
        println!();
        last = Some(outcome);
    }

    println!("\nGoodbye!");
    Ok(())
}

fn export_last(last: Option<&RequestOutcome>, path: &Path) {
    match last {
        Some(outcome) if !outcome.products.is_empty() => {
            match export_csv(&outcome.products, path) {
                Ok(()) => println!(
                    "Saved {} item(s) to {}",
                    outcome.products.len(),
                    path.display()
                ),
                Err(e) => println!("Could not export shopping list: {}", e),
            }
        }
        _ => println!("Nothing to export yet - ask for some items first."),
    }
}

fn print_help() {
    println!("Commands:");
    println!("  <any text>      - Shopping request, e.g. \"where can I find milk\"");
    println!("  export [path]   - Save the last list as CSV");
    println!("  help            - Show this message");
    println!("  quit / q        - Exit");
    println!();
}
