//! Trade records produced by the matching engine.

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// One execution between two orders.
///
/// The primary is whichever order arrived first (smaller stamp). Each side
/// reports the price it originally submitted, so the two prices can differ.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Trade {
    /// Unique id of this execution
    pub transaction_id: Uuid,
    pub primary_id: String,
    pub primary_price: u64,
    pub secondary_id: String,
    pub secondary_price: u64,
    /// Quantity exchanged
    pub quantity: u64,
}

impl fmt::Display for Trade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "TRADE {} {} {} {} {} {}",
            self.primary_id,
            self.primary_price,
            self.quantity,
            self.secondary_id,
            self.secondary_price,
            self.quantity
        )
    }
}

/// Deterministic transaction ids within one book.
///
/// Ids are v5 UUIDs over a random per-book namespace and a running counter,
/// so two books never collide and one book never repeats.
#[derive(Debug)]
pub struct TradeIdGenerator {
    namespace: Uuid,
    counter: u64,
}

impl TradeIdGenerator {
    pub fn new(namespace: Uuid) -> Self {
        Self {
            namespace,
            counter: 0,
        }
    }

    pub fn next_id(&mut self) -> Uuid {
        let id = Uuid::new_v5(&self.namespace, &self.counter.to_be_bytes());
        self.counter += 1;
        id
    }

    /// How many ids have been handed out
    pub fn issued(&self) -> u64 {
        self.counter
    }
}
