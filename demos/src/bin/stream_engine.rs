// demos/src/bin/stream_engine.rs
//
// Reads operations from stdin, one per line, and writes trades and depth
// snapshots to stdout. BOOK_SYMBOL names the book, LOGLEVEL sets verbosity.

use limitbook_rs::OrderBook;
use pricelevel::setup_logger;
use std::io::{self, BufWriter};
use std::process::ExitCode;
use tracing::{error, info};

const DEFAULT_SYMBOL: &str = "BOOK";

fn main() -> ExitCode {
    setup_logger();

    let symbol = std::env::var("BOOK_SYMBOL").unwrap_or_else(|_| DEFAULT_SYMBOL.to_string());
    info!("Starting stream engine for {}", symbol);

    let mut book = OrderBook::new(&symbol);
    let stdin = io::stdin().lock();
    let stdout = BufWriter::new(io::stdout().lock());

    match book.process_stream(stdin, stdout) {
        Ok(summary) => {
            eprintln!(
                "Processed {} operations ({} rejected, {} trades) in {} ms",
                summary.operations_applied,
                summary.rejected,
                summary.trades,
                summary.elapsed.as_millis()
            );
            ExitCode::SUCCESS
        }
        Err(err) => {
            error!("Stream aborted: {}", err);
            ExitCode::FAILURE
        }
    }
}
