//! Order book depth snapshot and the events a book emits

use super::trade::Trade;
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::trace;

/// Aggregate view of one price level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LevelDepth {
    /// Price of the level
    pub price: u64,

    /// Sum of remaining quantities at this price
    pub quantity: u64,

    /// Number of resting orders at this price
    pub order_count: usize,
}

/// Aggregated depth of both sides at one point in the operation stream.
///
/// Both sides are listed from the numerically highest price down, which is
/// also the order they are rendered in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DepthSnapshot {
    /// The symbol or identifier for this order book
    pub symbol: String,

    /// Ask levels, highest price first
    pub asks: Vec<LevelDepth>,

    /// Bid levels, highest price first
    pub bids: Vec<LevelDepth>,
}

impl DepthSnapshot {
    /// Get the best bid price and quantity
    pub fn best_bid(&self) -> Option<(u64, u64)> {
        let bid = self.bids.first().map(|level| (level.price, level.quantity));
        trace!("best_bid: {:?}", bid);
        bid
    }

    /// Get the best ask price and quantity
    pub fn best_ask(&self) -> Option<(u64, u64)> {
        let ask = self.asks.last().map(|level| (level.price, level.quantity));
        trace!("best_ask: {:?}", ask);
        ask
    }

    /// Get the mid price (average of best bid and best ask)
    pub fn mid_price(&self) -> Option<f64> {
        match (self.best_bid(), self.best_ask()) {
            (Some((bid_price, _)), Some((ask_price, _))) => {
                Some((bid_price as f64 + ask_price as f64) / 2.0)
            }
            _ => None,
        }
    }

    /// Get the spread (best ask - best bid)
    pub fn spread(&self) -> Option<u64> {
        match (self.best_bid(), self.best_ask()) {
            (Some((bid_price, _)), Some((ask_price, _))) => {
                Some(ask_price.saturating_sub(bid_price))
            }
            _ => None,
        }
    }

    /// Calculate the total volume on the bid side
    pub fn total_bid_volume(&self) -> u64 {
        saturating_volume(&self.bids)
    }

    /// Calculate the total volume on the ask side
    pub fn total_ask_volume(&self) -> u64 {
        saturating_volume(&self.asks)
    }

    /// The rendered output lines, headers included
    pub fn lines(&self) -> Vec<String> {
        let mut lines = Vec::with_capacity(self.asks.len() + self.bids.len() + 2);
        lines.push("SELL:".to_string());
        lines.extend(render_levels(&self.asks));
        lines.push("BUY:".to_string());
        lines.extend(render_levels(&self.bids));
        lines
    }
}

fn saturating_volume(levels: &[LevelDepth]) -> u64 {
    levels
        .iter()
        .fold(0u64, |total, level| total.saturating_add(level.quantity))
}

// Zero-quantity levels cannot exist in a consistent book; skip them anyway.
fn render_levels(levels: &[LevelDepth]) -> impl Iterator<Item = String> + '_ {
    levels
        .iter()
        .filter(|level| level.quantity > 0)
        .map(|level| format!("{} {}", level.price, level.quantity))
}

impl fmt::Display for DepthSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.lines().join("\n"))
    }
}

/// Something the book reports back to its caller
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BookEvent {
    Trade(Trade),
    Depth(DepthSnapshot),
}

impl fmt::Display for BookEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BookEvent::Trade(trade) => write!(f, "{}", trade),
            BookEvent::Depth(snapshot) => write!(f, "{}", snapshot),
        }
    }
}
