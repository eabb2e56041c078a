//! Core OrderBook implementation for managing price levels and orders

use super::error::OrderBookError;
use super::index::PriceLevelIndex;
use super::order::{Order, OrderLocation, Side};
use super::sequence::SequenceAllocator;
use super::snapshot::{DepthSnapshot, LevelDepth};
use super::trade::TradeIdGenerator;
use dashmap::DashMap;
use std::collections::HashMap;
use tracing::trace;
use uuid::Uuid;

/// The OrderBook manages the bid and ask price levels of a single instrument.
///
/// Mutations go through `&mut self` and run to completion, matching
/// included, before returning. Lookups only need `&self`.
pub struct OrderBook {
    /// The symbol or identifier for this order book
    pub(super) symbol: String,

    /// Bid side price levels (buy orders)
    pub(super) bids: PriceLevelIndex,

    /// Ask side price levels (sell orders)
    pub(super) asks: PriceLevelIndex,

    /// Registry of resting orders: order ID to its place in the side indexes.
    /// Immediate orders never appear here.
    pub(super) order_locations: DashMap<String, OrderLocation>,

    /// Issues time-priority stamps
    pub(super) sequence: SequenceAllocator,

    /// Generator for unique transaction IDs
    pub(super) trade_ids: TradeIdGenerator,

    /// The resting-side price of the most recent fill
    pub(super) last_trade_price: Option<u64>,
}

impl OrderBook {
    /// Create a new order book for the given symbol
    pub fn new(symbol: &str) -> Self {
        // Each book gets its own namespace so transaction IDs never collide across books
        let namespace = Uuid::new_v4();

        Self {
            symbol: symbol.to_string(),
            bids: PriceLevelIndex::new(Side::Buy),
            asks: PriceLevelIndex::new(Side::Sell),
            order_locations: DashMap::new(),
            sequence: SequenceAllocator::new(),
            trade_ids: TradeIdGenerator::new(namespace),
            last_trade_price: None,
        }
    }

    /// Get the symbol of this order book
    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    pub(super) fn side_index(&self, side: Side) -> &PriceLevelIndex {
        match side {
            Side::Buy => &self.bids,
            Side::Sell => &self.asks,
        }
    }

    pub(super) fn side_index_mut(&mut self, side: Side) -> &mut PriceLevelIndex {
        match side {
            Side::Buy => &mut self.bids,
            Side::Sell => &mut self.asks,
        }
    }

    /// Get the best bid price, if any
    pub fn best_bid(&self) -> Option<u64> {
        self.bids.best_price()
    }

    /// Get the best ask price, if any
    pub fn best_ask(&self) -> Option<u64> {
        self.asks.best_price()
    }

    /// Get the mid price (average of best bid and best ask)
    pub fn mid_price(&self) -> Option<f64> {
        match (self.best_bid(), self.best_ask()) {
            (Some(bid), Some(ask)) => Some((bid as f64 + ask as f64) / 2.0),
            _ => None,
        }
    }

    /// Get the spread (best ask - best bid)
    pub fn spread(&self) -> Option<u64> {
        match (self.best_bid(), self.best_ask()) {
            (Some(bid), Some(ask)) => Some(ask.saturating_sub(bid)),
            _ => None,
        }
    }

    /// Get the last trade price, if any
    pub fn last_trade_price(&self) -> Option<u64> {
        self.last_trade_price
    }

    /// The most recently issued time-priority stamp
    pub fn last_sequence(&self) -> Option<u64> {
        self.sequence.last_issued()
    }

    /// Number of resting orders
    pub fn order_count(&self) -> usize {
        self.order_locations.len()
    }

    /// Number of price levels on one side
    pub fn level_count(&self, side: Side) -> usize {
        self.side_index(side).len()
    }

    /// Whether a resting order with this ID is in the book
    pub fn contains_order(&self, order_id: &str) -> bool {
        self.order_locations.contains_key(order_id)
    }

    /// Get a resting order by ID
    pub fn get_order(&self, order_id: &str) -> Option<&Order> {
        let location = self.order_locations.get(order_id).map(|entry| *entry)?;
        self.side_index(location.side)
            .get_order(location.price, location.sequence)
    }

    /// Get all orders at a specific price level, oldest first
    pub fn get_orders_at_price(&self, price: u64, side: Side) -> Vec<&Order> {
        trace!(
            "Order book {}: Getting orders at price {} for side {:?}",
            self.symbol, price, side
        );
        self.side_index(side)
            .level(price)
            .map(|level| level.iter_orders().collect())
            .unwrap_or_default()
    }

    /// Get all resting orders, bids first, each side best price first
    pub fn get_all_orders(&self) -> Vec<&Order> {
        trace!("Order book {}: Getting all orders", self.symbol);
        self.bids
            .iter_best_first()
            .chain(self.asks.iter_best_first())
            .flat_map(|level| level.iter_orders())
            .collect()
    }

    /// Get the total volume at each price level
    pub fn get_volume_by_price(&self) -> (HashMap<u64, u64>, HashMap<u64, u64>) {
        let volumes = |index: &PriceLevelIndex| {
            index
                .iter_descending()
                .map(|level| (level.price(), level.total_quantity()))
                .collect::<HashMap<u64, u64>>()
        };
        (volumes(&self.bids), volumes(&self.asks))
    }

    /// Aggregate depth of both sides, each listed from the highest price down
    pub fn depth_snapshot(&self) -> DepthSnapshot {
        let depth = |index: &PriceLevelIndex| {
            index
                .iter_descending()
                .map(|level| LevelDepth {
                    price: level.price(),
                    quantity: level.total_quantity(),
                    order_count: level.order_count(),
                })
                .collect::<Vec<_>>()
        };

        DepthSnapshot {
            symbol: self.symbol.clone(),
            asks: depth(&self.asks),
            bids: depth(&self.bids),
        }
    }

    /// Check every structural invariant of the book.
    ///
    /// Each resting order must sit in exactly one non-empty level of its own
    /// side, with a positive quantity, in ascending stamp order, and be
    /// registered exactly once under a matching location.
    pub fn validate(&self) -> Result<(), OrderBookError> {
        let mut resting = 0usize;

        for index in [&self.bids, &self.asks] {
            for level in index.iter_descending() {
                if level.is_empty() {
                    return Err(violation(format!(
                        "empty {:?} level at {}",
                        index.side(),
                        level.price()
                    )));
                }

                let mut previous: Option<u64> = None;
                for order in level.iter_orders() {
                    if order.side != index.side() || order.price != level.price() {
                        return Err(violation(format!(
                            "order {} misplaced in {:?} level {}",
                            order.id,
                            index.side(),
                            level.price()
                        )));
                    }
                    if order.is_filled() {
                        return Err(violation(format!("order {} rests with zero quantity", order.id)));
                    }
                    if !order.lifetime.rests() {
                        return Err(violation(format!("immediate order {} is resting", order.id)));
                    }
                    if previous.is_some_and(|sequence| sequence >= order.sequence) {
                        return Err(violation(format!(
                            "order {} out of time priority at {}",
                            order.id,
                            level.price()
                        )));
                    }
                    previous = Some(order.sequence);

                    match self.order_locations.get(&order.id).map(|entry| *entry) {
                        Some(location) if location == order.location() => {}
                        Some(location) => {
                            return Err(violation(format!(
                                "order {} registered at {:?} but rests at {:?}",
                                order.id,
                                location,
                                order.location()
                            )));
                        }
                        None => {
                            return Err(violation(format!("order {} is not registered", order.id)));
                        }
                    }
                    resting += 1;
                }
            }
        }

        if resting != self.order_locations.len() {
            return Err(violation(format!(
                "{} registered orders but {} resting",
                self.order_locations.len(),
                resting
            )));
        }

        Ok(())
    }
}

fn violation(message: String) -> OrderBookError {
    OrderBookError::InvariantViolation { message }
}
