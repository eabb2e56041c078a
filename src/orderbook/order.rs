//! Order data model: sides, lifetimes, live orders and their registry locations.

use std::fmt;

pub use pricelevel::Side;

/// How long an order is allowed to live in the book.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Lifetime {
    /// Good-for-day: rests in the book until cancelled, modified or fully filled
    Resting,
    /// Immediate-or-cancel: fills what it can on arrival, the remainder is discarded
    Immediate,
}

impl Lifetime {
    /// Whether orders with this lifetime are kept in the book after matching
    pub fn rests(&self) -> bool {
        matches!(self, Lifetime::Resting)
    }
}

impl fmt::Display for Lifetime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Lifetime::Resting => write!(f, "GFD"),
            Lifetime::Immediate => write!(f, "IOC"),
        }
    }
}

/// A live order.
///
/// `quantity` is the remaining quantity; it only ever decreases while the
/// order is matched. `sequence` is the time-priority stamp assigned when the
/// order was registered with the book.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Order {
    /// Caller supplied identifier, unique among live resting orders
    pub id: String,
    /// Side of the book this order belongs to
    pub side: Side,
    /// Limit price as originally submitted
    pub price: u64,
    /// Remaining quantity
    pub quantity: u64,
    /// Resting or immediate
    pub lifetime: Lifetime,
    /// Time-priority stamp; smaller means earlier
    pub sequence: u64,
}

impl Order {
    /// Build an order with the given stamp
    pub fn new(
        id: impl Into<String>,
        side: Side,
        price: u64,
        quantity: u64,
        lifetime: Lifetime,
        sequence: u64,
    ) -> Self {
        Self {
            id: id.into(),
            side,
            price,
            quantity,
            lifetime,
            sequence,
        }
    }

    /// True once nothing is left to fill
    pub fn is_filled(&self) -> bool {
        self.quantity == 0
    }

    /// Where this order sits in the book, if it rests there
    pub fn location(&self) -> OrderLocation {
        OrderLocation {
            side: self.side,
            price: self.price,
            sequence: self.sequence,
        }
    }
}

impl fmt::Display for Order {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} {} {} #{}",
            self.side, self.lifetime, self.price, self.quantity, self.id, self.sequence
        )
    }
}

/// Registry entry: enough to find a resting order in its side index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OrderLocation {
    /// Side index holding the order
    pub side: Side,
    /// Price level within that side
    pub price: u64,
    /// Stamp keying the order inside its level
    pub sequence: u64,
}
