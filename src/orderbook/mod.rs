//! OrderBook implementation for managing price levels and order matching.

pub mod book;
mod error;
pub mod index;
pub mod level;
mod matching;
mod operation;
mod operations;
mod order;
mod sequence;
mod snapshot;
mod stream;
mod trade;

pub use book::OrderBook;
pub use error::OrderBookError;
pub use operation::Operation;
pub use order::{Lifetime, Order, OrderLocation, Side};
pub use sequence::SequenceAllocator;
pub use snapshot::{BookEvent, DepthSnapshot, LevelDepth};
pub use stream::StreamSummary;
pub use trade::{Trade, TradeIdGenerator};
