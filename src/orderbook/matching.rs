//! Contains the core matching engine logic for the order book.

use super::book::OrderBook;
use super::level::Fill;
use super::order::{Order, Side};
use super::trade::Trade;
use tracing::trace;

impl OrderBook {
    /// Match an incoming order against the opposite side with price-time priority.
    ///
    /// Levels are taken best price first, and within a level oldest stamp
    /// first, until the incoming order is filled or no level crosses its
    /// limit. Fully filled resting orders leave both their level and the
    /// registry. If the incoming order is resting, it already sits in its own
    /// side: it is removed when fully filled and otherwise keeps its reduced
    /// remaining quantity.
    pub(super) fn match_incoming(&mut self, incoming: &mut Order) -> Vec<Trade> {
        let opposite_side = incoming.side.opposite();
        let Some(bound) = self
            .side_index(opposite_side)
            .crossing_bound(incoming.price)
        else {
            trace!(
                "Order book {}: No crossing level for order {}",
                self.symbol, incoming.id
            );
            return Vec::new();
        };

        let original_quantity = incoming.quantity;
        let mut trades = Vec::new();

        while !incoming.is_filled() {
            let opposite = self.side_index_mut(opposite_side);
            let Some(price) = opposite.best_price() else {
                break;
            };
            if !opposite.within_bound(price, bound) {
                break;
            }
            let Some(level) = opposite.level_mut(price) else {
                break;
            };

            let level_match = level.match_order(incoming);
            opposite.remove_if_empty(price);

            for filled_order_id in &level_match.filled_order_ids {
                self.order_locations.remove(filled_order_id);
            }

            if level_match.fills.is_empty() {
                break;
            }
            self.last_trade_price = Some(price);
            trace!(
                "Order book {}: Order {} took {} at {}",
                self.symbol,
                incoming.id,
                level_match.executed_quantity(),
                price
            );

            for fill in level_match.fills {
                let trade = self.record_trade(incoming, fill);
                trades.push(trade);
            }
        }

        if incoming.lifetime.rests() && incoming.quantity != original_quantity {
            self.settle_resting(incoming);
        }

        trades
    }

    /// Bring a speculatively placed resting order in line with what matching left of it
    fn settle_resting(&mut self, incoming: &Order) {
        let own = self.side_index_mut(incoming.side);
        if incoming.is_filled() {
            own.remove(incoming.price, incoming.sequence);
            self.order_locations.remove(&incoming.id);
            trace!(
                "Order book {}: Order {} fully filled on arrival",
                self.symbol, incoming.id
            );
        } else {
            own.set_quantity(incoming.price, incoming.sequence, incoming.quantity);
        }
    }

    /// Turn a fill into a trade record, the earlier-stamped order first
    fn record_trade(&mut self, incoming: &Order, fill: Fill) -> Trade {
        let transaction_id = self.trade_ids.next_id();
        let resting = (fill.resting_id, fill.resting_price);
        let arriving = (incoming.id.clone(), incoming.price);

        let (primary, secondary) = if fill.resting_sequence < incoming.sequence {
            (resting, arriving)
        } else {
            (arriving, resting)
        };

        Trade {
            transaction_id,
            primary_id: primary.0,
            primary_price: primary.1,
            secondary_id: secondary.0,
            secondary_price: secondary.1,
            quantity: fill.quantity,
        }
    }

    /// How much of an order on `side` limited at `price` could fill right
    /// now, up to `quantity`, without touching the book.
    pub fn peek_match(&self, side: Side, price: u64, quantity: u64) -> u64 {
        let opposite = self.side_index(side.opposite());
        let Some(bound) = opposite.crossing_bound(price) else {
            return 0;
        };

        let mut matched_quantity = 0u64;
        for level in opposite.iter_best_first() {
            if matched_quantity >= quantity || !opposite.within_bound(level.price(), bound) {
                break;
            }
            let needed_quantity = quantity.saturating_sub(matched_quantity);
            matched_quantity =
                matched_quantity.saturating_add(needed_quantity.min(level.total_quantity()));
        }

        matched_quantity
    }
}
