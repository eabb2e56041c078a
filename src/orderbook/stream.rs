//! Drives a book from a line-oriented operation stream.

use super::book::OrderBook;
use super::error::OrderBookError;
use super::operation::Operation;
use super::snapshot::BookEvent;
use std::io::{BufRead, Write};
use std::time::{Duration, Instant};
use tracing::{debug, info};

/// Counters collected while processing a stream
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StreamSummary {
    /// Lines read, blank ones included
    pub lines_read: usize,
    /// Lines that parsed and were applied to the book
    pub operations_applied: usize,
    /// Lines dropped by the parser
    pub rejected: usize,
    /// Trade lines written
    pub trades: usize,
    /// Wall time spent processing
    pub elapsed: Duration,
}

impl OrderBook {
    /// Read operations line by line until EOF, apply them and write every
    /// produced line to `writer`.
    ///
    /// Lines that fail to parse are dropped without output. Only I/O errors
    /// abort the stream.
    pub fn process_stream<R, W>(
        &mut self,
        reader: R,
        mut writer: W,
    ) -> Result<StreamSummary, OrderBookError>
    where
        R: BufRead,
        W: Write,
    {
        let started = Instant::now();
        let mut summary = StreamSummary::default();

        for line in reader.lines() {
            let line = line?;
            summary.lines_read += 1;

            let operation = match line.parse::<Operation>() {
                Ok(operation) => operation,
                Err(err) => {
                    debug!("Order book {}: Dropping '{}': {}", self.symbol, line, err);
                    summary.rejected += 1;
                    continue;
                }
            };

            summary.operations_applied += 1;
            for event in self.process(operation) {
                if matches!(event, BookEvent::Trade(_)) {
                    summary.trades += 1;
                }
                writeln!(writer, "{}", event)?;
            }
        }

        writer.flush()?;
        summary.elapsed = started.elapsed();
        info!(
            "Order book {}: {} lines, {} applied, {} rejected, {} trades in {:?}",
            self.symbol,
            summary.lines_read,
            summary.operations_applied,
            summary.rejected,
            summary.trades,
            summary.elapsed
        );
        Ok(summary)
    }
}
