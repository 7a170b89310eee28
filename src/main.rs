//! Deck Formatter - turns a pasted MTG decklist into a detailed text report.

use clap::Parser;
use deck_formatter::{
    build_deck, format_deck_report, CachedLookup, CardCache, CardLookup, DeckProgress,
    DeckResult, ReportLayout, ScryfallClient,
};
use std::io::{Read, Write};
use std::path::PathBuf;
use std::time::Duration;

/// Enrich a decklist with Scryfall card data and print a formatted report
#[derive(Parser, Debug)]
#[command(name = "deck_formatter")]
#[command(version, about, long_about = None)]
struct Args {
    /// Decklist file to read ("-" or omitted reads stdin)
    input: Option<PathBuf>,

    /// Write the report to this file instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Report line width
    #[arg(long, default_value_t = 72)]
    width: usize,

    /// Scryfall API base URL
    #[arg(long, default_value = deck_formatter::scryfall::SCRYFALL_API_BASE)]
    base_url: String,

    /// Delay between Scryfall requests in milliseconds
    #[arg(long, default_value_t = 100)]
    delay_ms: u64,

    /// Don't read or write the lookup cache
    #[arg(long, default_value_t = false)]
    no_cache: bool,

    /// Lookup cache file (default: platform cache dir)
    #[arg(long)]
    cache_file: Option<PathBuf>,
}

fn read_decklist(input: Option<&PathBuf>) -> DeckResult<String> {
    match input {
        Some(path) if path.as_os_str() != "-" => {
            log::info!("Reading decklist from {}", path.display());
            Ok(std::fs::read_to_string(path)?)
        }
        _ => {
            log::info!("Reading decklist from stdin");
            let mut text = String::new();
            std::io::stdin().read_to_string(&mut text)?;
            Ok(text)
        }
    }
}

fn write_report(output: Option<&PathBuf>, report: &str) -> DeckResult<()> {
    match output {
        Some(path) => {
            std::fs::write(path, report)?;
            log::info!("Report written to {}", path.display());
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(report.as_bytes())?;
            stdout.flush()?;
        }
    }
    Ok(())
}

fn log_progress(progress: DeckProgress) {
    match progress {
        DeckProgress::Fetching {
            current,
            total,
            name,
        } => log::info!("Fetching ({}/{}): {}...", current, total, name),
        DeckProgress::Skipped {
            current,
            total,
            name,
        } => log::info!("Skipping ({}/{}): {} (already handled)", current, total, name),
        DeckProgress::NotFound { name } => log::warn!("Card not found: {}", name),
    }
}

fn run(args: &Args) -> DeckResult<()> {
    let decklist = read_decklist(args.input.as_ref())?;
    if decklist.trim().is_empty() {
        log::warn!("Decklist is empty");
    }

    let client = ScryfallClient::new(args.base_url.as_str())
        .with_request_delay(Duration::from_millis(args.delay_ms));

    let mut lookup: Box<dyn CardLookup> = if args.no_cache {
        Box::new(client)
    } else {
        let cache_path = args.cache_file.clone().unwrap_or_else(CardCache::default_path);
        Box::new(CachedLookup::new(CardCache::load_from(cache_path), client))
    };

    let deck = build_deck(&decklist, lookup.as_mut(), log_progress);
    if deck.is_empty() {
        log::warn!("No cards were found. Check the card names.");
    }

    let report = format_deck_report(&deck, &ReportLayout::with_width(args.width));
    write_report(args.output.as_ref(), &report)
}

fn main() {
    // Initialize logger. Set RUST_LOG environment variable to control log level.
    // Examples: RUST_LOG=info, RUST_LOG=warn, RUST_LOG=deck_formatter=debug
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    log::info!("Starting Deck Formatter");

    if let Err(e) = run(&args) {
        log::error!("Application error: {e}");
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
