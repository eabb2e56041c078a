//! Operations accepted by the book and their text form.
//!
//! ```text
//! BUY GFD 1000 10 order1
//! SELL IOC 990 5 order2
//! CANCEL order1
//! MODIFY order1 SELL 1010 20
//! PRINT
//! ```

use super::error::OrderBookError;
use super::order::{Lifetime, Side};
use std::str::FromStr;

/// A structured, already validated operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Operation {
    Create {
        side: Side,
        lifetime: Lifetime,
        price: u64,
        quantity: u64,
        order_id: String,
    },
    Cancel {
        order_id: String,
    },
    Modify {
        order_id: String,
        side: Side,
        price: u64,
        quantity: u64,
    },
    Print,
}

impl FromStr for Operation {
    type Err = OrderBookError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let tokens: Vec<&str> = line.split_whitespace().collect();
        let Some(&command) = tokens.first() else {
            return Err(OrderBookError::EmptyOperation);
        };

        match command {
            "BUY" | "SELL" => {
                expect_tokens(command, &tokens, 5)?;
                Ok(Operation::Create {
                    side: parse_side(command)?,
                    lifetime: parse_lifetime(tokens[1])?,
                    price: parse_positive("price", tokens[2])?,
                    quantity: parse_positive("quantity", tokens[3])?,
                    order_id: tokens[4].to_string(),
                })
            }
            "CANCEL" => {
                expect_tokens(command, &tokens, 2)?;
                Ok(Operation::Cancel {
                    order_id: tokens[1].to_string(),
                })
            }
            "MODIFY" => {
                expect_tokens(command, &tokens, 5)?;
                Ok(Operation::Modify {
                    order_id: tokens[1].to_string(),
                    side: parse_side(tokens[2])?,
                    price: parse_positive("price", tokens[3])?,
                    quantity: parse_positive("quantity", tokens[4])?,
                })
            }
            "PRINT" => {
                expect_tokens(command, &tokens, 1)?;
                Ok(Operation::Print)
            }
            other => Err(OrderBookError::UnknownCommand(other.to_string())),
        }
    }
}

fn expect_tokens(command: &str, tokens: &[&str], expected: usize) -> Result<(), OrderBookError> {
    if tokens.len() == expected {
        Ok(())
    } else {
        Err(OrderBookError::MalformedOperation {
            command: command.to_string(),
            expected,
            found: tokens.len(),
        })
    }
}

fn parse_side(token: &str) -> Result<Side, OrderBookError> {
    match token {
        "BUY" => Ok(Side::Buy),
        "SELL" => Ok(Side::Sell),
        other => Err(OrderBookError::UnknownSide(other.to_string())),
    }
}

fn parse_lifetime(token: &str) -> Result<Lifetime, OrderBookError> {
    match token {
        "GFD" => Ok(Lifetime::Resting),
        "IOC" => Ok(Lifetime::Immediate),
        other => Err(OrderBookError::UnknownLifetime(other.to_string())),
    }
}

fn parse_positive(field: &'static str, token: &str) -> Result<u64, OrderBookError> {
    let value = token
        .parse::<u64>()
        .map_err(|_| OrderBookError::InvalidNumber {
            field,
            value: token.to_string(),
        })?;
    if value == 0 {
        return Err(OrderBookError::NonPositive { field });
    }
    Ok(value)
}
