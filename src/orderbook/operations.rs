//! Order book operations: creating, cancelling, modifying and printing

use super::book::OrderBook;
use super::operation::Operation;
use super::order::{Lifetime, Order, Side};
use super::snapshot::{BookEvent, DepthSnapshot};
use super::trade::Trade;
use tracing::trace;

impl OrderBook {
    /// Apply one operation and return what it produced, in order.
    pub fn process(&mut self, operation: Operation) -> Vec<BookEvent> {
        match operation {
            Operation::Create {
                side,
                lifetime,
                price,
                quantity,
                order_id,
            } => self
                .add_order(order_id, side, price, quantity, lifetime)
                .into_iter()
                .map(BookEvent::Trade)
                .collect(),
            Operation::Cancel { order_id } => {
                self.cancel_order(&order_id);
                Vec::new()
            }
            Operation::Modify {
                order_id,
                side,
                price,
                quantity,
            } => self
                .modify_order(&order_id, side, price, quantity)
                .into_iter()
                .map(BookEvent::Trade)
                .collect(),
            Operation::Print => vec![BookEvent::Depth(self.print())],
        }
    }

    /// Submit a new order and match it against the opposite side.
    ///
    /// A resting order is registered and placed in its own side before
    /// matching starts; if it fills completely the matching engine takes it
    /// out again. An immediate order is never registered and whatever it
    /// cannot fill on arrival is dropped.
    ///
    /// An ID that already belongs to a resting order makes this a no-op.
    pub fn add_order(
        &mut self,
        order_id: impl Into<String>,
        side: Side,
        price: u64,
        quantity: u64,
        lifetime: Lifetime,
    ) -> Vec<Trade> {
        let order_id = order_id.into();
        if self.order_locations.contains_key(&order_id) {
            trace!(
                "Order book {}: Ignoring duplicate order {}",
                self.symbol, order_id
            );
            return Vec::new();
        }

        let sequence = self.sequence.next_sequence();
        let mut order = Order::new(order_id, side, price, quantity, lifetime, sequence);
        trace!("Order book {}: Adding order {}", self.symbol, order);

        if lifetime.rests() {
            self.order_locations
                .insert(order.id.clone(), order.location());
            self.side_index_mut(side).insert(order.clone());
        }

        self.match_incoming(&mut order)
    }

    /// Cancel a resting order by ID.
    ///
    /// Returns the removed order, or `None` if no resting order has that ID.
    pub fn cancel_order(&mut self, order_id: &str) -> Option<Order> {
        let Some((_, location)) = self.order_locations.remove(order_id) else {
            trace!(
                "Order book {}: Cancel of unknown order {} ignored",
                self.symbol, order_id
            );
            return None;
        };

        let cancelled = self
            .side_index_mut(location.side)
            .remove(location.price, location.sequence);
        trace!(
            "Order book {}: Cancelled order {} at {} {}",
            self.symbol, order_id, location.side, location.price
        );
        cancelled
    }

    /// Replace a resting order with a new one under the same ID.
    ///
    /// The old order is removed outright and the replacement is created as a
    /// resting order with a fresh stamp, so it always loses time priority,
    /// even when nothing about it changed. Unknown IDs are a no-op.
    pub fn modify_order(
        &mut self,
        order_id: &str,
        side: Side,
        price: u64,
        quantity: u64,
    ) -> Vec<Trade> {
        if self.cancel_order(order_id).is_none() {
            return Vec::new();
        }
        trace!(
            "Order book {}: Replacing order {} with {} {} {}",
            self.symbol, order_id, side, price, quantity
        );
        self.add_order(order_id, side, price, quantity, Lifetime::Resting)
    }

    /// Depth of both sides for rendering: asks, then bids, highest price first
    pub fn print(&self) -> DepthSnapshot {
        trace!("Order book {}: Printing depth", self.symbol);
        self.depth_snapshot()
    }
}
