//! A single price level: every resting order at one price, oldest first.

use super::order::Order;
use std::collections::BTreeMap;

/// One resting order's share of a match at this level.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fill {
    pub resting_id: String,
    pub resting_price: u64,
    pub resting_sequence: u64,
    pub quantity: u64,
}

/// Outcome of matching an incoming order against one level.
#[derive(Debug, Default)]
pub struct LevelMatch {
    /// Fills in the order they happened
    pub fills: Vec<Fill>,
    /// Resting orders that were fully consumed and are no longer in the level
    pub filled_order_ids: Vec<String>,
}

impl LevelMatch {
    pub fn executed_quantity(&self) -> u64 {
        self.fills.iter().map(|fill| fill.quantity).sum()
    }
}

/// Orders resting at a single price, keyed by time-priority stamp.
///
/// Keying by stamp keeps FIFO order and makes removal by stamp logarithmic.
#[derive(Debug, Clone)]
pub struct PriceLevel {
    price: u64,
    orders: BTreeMap<u64, Order>,
}

impl PriceLevel {
    pub fn new(price: u64) -> Self {
        Self {
            price,
            orders: BTreeMap::new(),
        }
    }

    pub fn price(&self) -> u64 {
        self.price
    }

    /// Append an order. Its stamp decides its place in the queue.
    pub fn add_order(&mut self, order: Order) {
        debug_assert_eq!(order.price, self.price);
        self.orders.insert(order.sequence, order);
    }

    /// Remove the order carrying `sequence`
    pub fn remove_order(&mut self, sequence: u64) -> Option<Order> {
        self.orders.remove(&sequence)
    }

    pub fn get_order(&self, sequence: u64) -> Option<&Order> {
        self.orders.get(&sequence)
    }

    /// Overwrite the remaining quantity of a resting order.
    ///
    /// Returns false if no order with that stamp rests here.
    pub fn set_quantity(&mut self, sequence: u64, quantity: u64) -> bool {
        match self.orders.get_mut(&sequence) {
            Some(order) => {
                order.quantity = quantity;
                true
            }
            None => false,
        }
    }

    pub fn order_count(&self) -> usize {
        self.orders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.orders.is_empty()
    }

    /// Sum of remaining quantities at this price, saturating at `u64::MAX`
    pub fn total_quantity(&self) -> u64 {
        self.orders
            .values()
            .fold(0u64, |total, order| total.saturating_add(order.quantity))
    }

    /// Orders in time priority, oldest first
    pub fn iter_orders(&self) -> impl Iterator<Item = &Order> {
        self.orders.values()
    }

    /// Fill `incoming` against this level in FIFO order.
    ///
    /// Both the incoming order and the resting orders are decremented in
    /// place. Resting orders that reach zero are removed from the level and
    /// reported in `filled_order_ids`. Scanning stops as soon as the incoming
    /// order has nothing left.
    pub fn match_order(&mut self, incoming: &mut Order) -> LevelMatch {
        let mut result = LevelMatch::default();
        let mut emptied = Vec::new();

        for (&sequence, resting) in self.orders.iter_mut() {
            if incoming.is_filled() {
                break;
            }

            let traded = incoming.quantity.min(resting.quantity);
            incoming.quantity -= traded;
            resting.quantity -= traded;

            result.fills.push(Fill {
                resting_id: resting.id.clone(),
                resting_price: resting.price,
                resting_sequence: sequence,
                quantity: traded,
            });

            if resting.is_filled() {
                emptied.push(sequence);
            }
        }

        for sequence in emptied {
            if let Some(order) = self.orders.remove(&sequence) {
                result.filled_order_ids.push(order.id);
            }
        }

        result
    }
}
