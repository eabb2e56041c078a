//! Order book error types

use std::fmt;
use std::io;

/// Errors that can occur around the OrderBook.
///
/// Book operations themselves never fail: unknown ids and duplicates are
/// absorbed as no-ops. Errors come from parsing operation text, from the
/// stream driver's I/O, and from invariant validation.
#[derive(Debug)]
pub enum OrderBookError {
    /// Blank operation line
    EmptyOperation,

    /// First token is not a known command
    UnknownCommand(String),

    /// Wrong number of tokens for the command
    MalformedOperation {
        /// The command that was recognised
        command: String,
        /// Tokens expected, command included
        expected: usize,
        /// Tokens found
        found: usize,
    },

    /// Side token is neither BUY nor SELL
    UnknownSide(String),

    /// Lifetime token is neither GFD nor IOC
    UnknownLifetime(String),

    /// A numeric field could not be parsed
    InvalidNumber {
        /// Name of the field
        field: &'static str,
        /// Raw token
        value: String,
    },

    /// Price or quantity of zero
    NonPositive {
        /// Name of the field
        field: &'static str,
    },

    /// The book's internal structure broke one of its invariants
    InvariantViolation {
        /// Description of the breach
        message: String,
    },

    /// Reading operations or writing output failed
    Io(io::Error),
}

impl fmt::Display for OrderBookError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OrderBookError::EmptyOperation => write!(f, "Empty operation"),
            OrderBookError::UnknownCommand(command) => write!(f, "Unknown command: {}", command),
            OrderBookError::MalformedOperation {
                command,
                expected,
                found,
            } => {
                write!(
                    f,
                    "Malformed {} operation: expected {} tokens, found {}",
                    command, expected, found
                )
            }
            OrderBookError::UnknownSide(side) => write!(f, "Unknown side: {}", side),
            OrderBookError::UnknownLifetime(lifetime) => {
                write!(f, "Unknown order lifetime: {}", lifetime)
            }
            OrderBookError::InvalidNumber { field, value } => {
                write!(f, "Invalid {}: {}", field, value)
            }
            OrderBookError::NonPositive { field } => write!(f, "{} must be positive", field),
            OrderBookError::InvariantViolation { message } => {
                write!(f, "Invariant violation: {}", message)
            }
            OrderBookError::Io(err) => write!(f, "I/O error: {}", err),
        }
    }
}

impl std::error::Error for OrderBookError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            OrderBookError::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<io::Error> for OrderBookError {
    fn from(err: io::Error) -> Self {
        OrderBookError::Io(err)
    }
}
