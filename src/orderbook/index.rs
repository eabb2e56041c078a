//! Price-ordered index of the levels on one side of the book.

use super::level::PriceLevel;
use super::order::{Order, Side};
use std::collections::BTreeMap;

/// All price levels on one side, ordered by price.
///
/// For bids the best price is the highest, for asks the lowest. An empty
/// level is dropped the moment its last order leaves.
#[derive(Debug, Clone)]
pub struct PriceLevelIndex {
    side: Side,
    levels: BTreeMap<u64, PriceLevel>,
}

impl PriceLevelIndex {
    pub fn new(side: Side) -> Self {
        Self {
            side,
            levels: BTreeMap::new(),
        }
    }

    pub fn side(&self) -> Side {
        self.side
    }

    /// Number of distinct price levels
    pub fn len(&self) -> usize {
        self.levels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }

    /// Insert an order at the back of its price level, creating the level if needed
    pub fn insert(&mut self, order: Order) {
        debug_assert_eq!(order.side, self.side);
        self.levels
            .entry(order.price)
            .or_insert_with(|| PriceLevel::new(order.price))
            .add_order(order);
    }

    /// Remove one order and drop its level if that empties it
    pub fn remove(&mut self, price: u64, sequence: u64) -> Option<Order> {
        let level = self.levels.get_mut(&price)?;
        let removed = level.remove_order(sequence);
        if level.is_empty() {
            self.levels.remove(&price);
        }
        removed
    }

    pub fn get_order(&self, price: u64, sequence: u64) -> Option<&Order> {
        self.levels.get(&price)?.get_order(sequence)
    }

    /// Overwrite the remaining quantity of a resting order
    pub fn set_quantity(&mut self, price: u64, sequence: u64, quantity: u64) -> bool {
        self.levels
            .get_mut(&price)
            .is_some_and(|level| level.set_quantity(sequence, quantity))
    }

    pub fn level(&self, price: u64) -> Option<&PriceLevel> {
        self.levels.get(&price)
    }

    pub(super) fn level_mut(&mut self, price: u64) -> Option<&mut PriceLevel> {
        self.levels.get_mut(&price)
    }

    /// Drop the level at `price` if it holds no orders. Returns true if dropped.
    pub(super) fn remove_if_empty(&mut self, price: u64) -> bool {
        if self.levels.get(&price).is_some_and(PriceLevel::is_empty) {
            self.levels.remove(&price);
            true
        } else {
            false
        }
    }

    /// Highest bid or lowest ask
    pub fn best_price(&self) -> Option<u64> {
        match self.side {
            Side::Buy => self.levels.keys().next_back().copied(),
            Side::Sell => self.levels.keys().next().copied(),
        }
    }

    /// Lowest price that is at or above `price`
    pub fn greater_than_or_equal(&self, price: u64) -> Option<u64> {
        self.levels.range(price..).next().map(|(key, _)| *key)
    }

    /// Highest price that is at or below `price`
    pub fn less_than_or_equal(&self, price: u64) -> Option<u64> {
        self.levels.range(..=price).next_back().map(|(key, _)| *key)
    }

    /// Worst price on this side an incoming opposite order limited at
    /// `limit` may still trade against.
    ///
    /// An incoming buy may take every ask at or below its limit, so the
    /// bound is the highest such ask. An incoming sell may take every bid at
    /// or above its limit, so the bound is the lowest such bid. `None` means
    /// nothing on this side crosses.
    pub fn crossing_bound(&self, limit: u64) -> Option<u64> {
        match self.side {
            Side::Sell => self.less_than_or_equal(limit),
            Side::Buy => self.greater_than_or_equal(limit),
        }
    }

    /// Whether the level at `price` lies between the best price and `bound`
    pub fn within_bound(&self, price: u64, bound: u64) -> bool {
        match self.side {
            Side::Sell => price <= bound,
            Side::Buy => price >= bound,
        }
    }

    /// Levels from the numerically highest price down to the lowest
    pub fn iter_descending(&self) -> impl Iterator<Item = &PriceLevel> {
        self.levels.values().rev()
    }

    /// Levels from best to worst price
    pub fn iter_best_first(&self) -> Box<dyn Iterator<Item = &PriceLevel> + '_> {
        match self.side {
            Side::Buy => Box::new(self.levels.values().rev()),
            Side::Sell => Box::new(self.levels.values()),
        }
    }

    /// Total remaining quantity across all levels
    pub fn total_quantity(&self) -> u64 {
        self.levels
            .values()
            .fold(0u64, |total, level| total.saturating_add(level.total_quantity()))
    }

    /// Number of orders across all levels
    pub fn order_count(&self) -> usize {
        self.levels.values().map(PriceLevel::order_count).sum()
    }
}
