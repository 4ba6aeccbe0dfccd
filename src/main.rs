mod diagnostics;
mod engine;
mod models;
mod reader;
mod storage;
mod types;

use std::fs::File;
use std::io::{stderr, stdin};
use std::process::exit;
use std::time::Instant;

use anyhow::{Context, Result};
use tracing::level_filters::LevelFilter;
use tracing::{debug, info};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, Layer};

use crate::diagnostics::TracingSink;
use crate::engine::TradeProcessor;
use crate::storage::{CsvTradeStore, MemoryTradeStore, TradeStore};

const STDIN_ARGUMENT: &str = "-";

fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        eprintln!("Usage: trade-processor [input|-] [store.csv|-:optional] [log_level:optional]");
        eprintln!("Without a store (or with '-') trades are kept in memory only (dry run).");
        eprintln!("Available log levels: error, warn, info, debug, trace (default: info)");
        exit(1);
    }

    let input = &args[1];
    let store_path = args.get(2).filter(|path| path.as_str() != STDIN_ARGUMENT);
    let log_level = args.get(3)
        .map(|s| parse_log_level(s)).unwrap_or(LevelFilter::INFO);

    setup_logging(log_level);

    let timer = Instant::now();

    match store_path {
        Some(path) => {
            let (processed, store) = run(CsvTradeStore::new(path), input)?;
            debug!("{processed} trades stored in {}", store.path().display());
        }
        None => {
            info!("No trade store given, performing a dry run");
            let (_, store) = run(MemoryTradeStore::new(), input)?;

            for trade in store.records() {
                debug!("{trade:?}");
            }
        }
    }

    let duration = timer.elapsed();
    debug!("Processed trades in: {duration:?}");

    Ok(())
}

fn run<S: TradeStore>(store: S, input: &str) -> Result<(usize, S)> {
    let mut processor = TradeProcessor::new(store, TracingSink);

    let processed = if input == STDIN_ARGUMENT {
        processor.process(stdin().lock())
            .context("Failed to process trades from stdin")?
    } else {
        let file = File::open(input).with_context(|| format!("Failed to open trade file '{input}'"))?;
        processor.process(file)
            .with_context(|| format!("Failed to process trades from '{input}'"))?
    };

    Ok((processed, processor.into_store()))
}

fn parse_log_level(level: &str) -> LevelFilter {
    match level.to_lowercase().as_str() {
        "trace" => LevelFilter::TRACE,
        "debug" => LevelFilter::DEBUG,
        "info" => LevelFilter::INFO,
        "warn" => LevelFilter::WARN,
        "error" => LevelFilter::ERROR,
        _ => {
            eprintln!("Invalid log level '{}', defaulting to 'info'", level);
            LevelFilter::INFO
        }
    }
}

fn setup_logging(level: LevelFilter) {
    //NOTE: Diagnostics go to stderr so stdout stays free for piping
    let terminal_log = fmt::layer()
        .with_target(false)
        .with_writer(stderr)
        .with_filter(level);

    tracing_subscriber::registry()
        .with(terminal_log)
        .init();
}
