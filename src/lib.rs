//! # Price-Time Priority Limit Order Book
//!
//! A single-instrument continuous limit order book written in Rust. Orders are matched with
//! strict price-time priority: the best opposite price is always exhausted before the next one
//! is touched, and within one price the order that arrived first fills first.
//!
//! ## Key Features
//!
//! - **Two Order Lifetimes**: Good-for-day orders rest in the book until they are cancelled,
//!   modified or fully filled. Immediate-or-cancel orders fill what they can on arrival and the
//!   remainder is discarded; they never rest.
//!
//! - **Cancel and Cancel-Replace**: Orders are cancelled by ID in constant time through an order
//!   registry. A modification replaces the order outright and always assigns a fresh
//!   time-priority stamp, so a modified order goes to the back of its queue even when its price
//!   and quantity did not change.
//!
//! - **Logarithmic Price Lookup**: Each side keeps its levels in an ordered map, so finding the
//!   best level and the last level an incoming order may still trade against takes logarithmic
//!   time in the number of distinct prices.
//!
//! - **Depth Snapshots**: On request the book renders the aggregate quantity of every non-empty
//!   level on both sides, highest price first.
//!
//! - **Deterministic**: All matching happens synchronously inside the call that applied the
//!   operation. Given the same operation stream, the book always produces the same output.
//!
//! ## Trade Reporting
//!
//! Every execution is reported as
//!
//! ```text
//! TRADE <primary id> <primary price> <qty> <secondary id> <secondary price> <qty>
//! ```
//!
//! where the primary is the order that arrived first. Each side reports the price it originally
//! submitted, so the two prices may differ.
//!
//! ## Example
//!
//! ```rust
//! use limitbook_rs::{Lifetime, OrderBook, Side};
//!
//! let mut book = OrderBook::new("ACME");
//! book.add_order("o1", Side::Buy, 100, 10, Lifetime::Resting);
//!
//! let trades = book.add_order("o2", Side::Sell, 90, 5, Lifetime::Resting);
//! assert_eq!(trades[0].to_string(), "TRADE o1 100 5 o2 90 5");
//!
//! assert_eq!(book.print().lines(), vec!["SELL:", "BUY:", "100 5"]);
//! ```
//!
//! ## Operation Streams
//!
//! Operations can also be supplied as text, one per line, and processed with
//! [`OrderBook::process_stream`]:
//!
//! ```text
//! BUY GFD 1000 10 order1
//! SELL IOC 990 5 order2
//! CANCEL order1
//! MODIFY order1 SELL 1010 20
//! PRINT
//! ```
//!
//! Lines that do not parse, or carry a zero price or quantity, are dropped before they reach the
//! book.
//!
//! ## Design Goals
//!
//! 1. **Correctness**: Every operation leaves the book consistent: no empty levels, no
//!    zero-quantity orders, every resting order registered exactly once.
//! 2. **Predictability**: Unknown IDs and duplicate creations are silent no-ops, never errors.
//! 3. **Simplicity**: A single writer owns the book; there is no locking.
//!
//! ## Status
//! This project is currently in active development and is not yet suitable for production use.

pub mod orderbook;

pub use orderbook::{
    BookEvent, DepthSnapshot, Lifetime, Operation, Order, OrderBook, OrderBookError, Side,
    StreamSummary, Trade,
};
