use serde::Serialize;
use thiserror::Error;

use crate::symbols::CandidateSet;

/// A validated buy or sell
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Order {
    pub symbol: String,
    /// Negative quantities sell
    pub quantity: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
}

impl Order {
    pub fn is_sell(&self) -> bool {
        self.quantity < 0
    }

    pub fn summary(&self) -> String {
        match self.price {
            Some(price) => format!("Bought {} {} @ {:.2}", self.quantity, self.symbol, price),
            None => format!("Sold {} {}", self.quantity.unsigned_abs(), self.symbol),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OrderError {
    #[error("A symbol was not supplied. This field is required.")]
    MissingSymbol,

    #[error("Unknown symbol: {0}")]
    UnknownSymbol(String),

    #[error("A quantity was not supplied. This field is required.")]
    MissingQuantity,

    #[error("The value supplied for quantity must be an integer.")]
    InvalidQuantity,

    #[error("The value supplied for quantity must not be zero.")]
    ZeroQuantity,

    #[error("A price was not supplied. This field is required.")]
    MissingPrice,

    #[error("The value supplied for price must be a positive integer or float.")]
    InvalidPrice,
}

/// Validate raw form values into an order.
///
/// Price is only read for buys.
pub fn validate_order(
    symbol: &str,
    quantity: &str,
    price: &str,
    candidates: &CandidateSet,
) -> Result<Order, OrderError> {
    let symbol = symbol.trim();
    if symbol.is_empty() {
        return Err(OrderError::MissingSymbol);
    }
    if !candidates.contains_ignore_case(symbol) {
        return Err(OrderError::UnknownSymbol(symbol.to_string()));
    }

    let quantity = quantity.trim();
    if quantity.is_empty() {
        return Err(OrderError::MissingQuantity);
    }
    let quantity: i64 = quantity.parse().map_err(|_| OrderError::InvalidQuantity)?;
    if quantity == 0 {
        return Err(OrderError::ZeroQuantity);
    }

    let price = if quantity < 0 {
        None
    } else {
        Some(parse_price(price)?)
    };

    Ok(Order {
        symbol: symbol.to_uppercase(),
        quantity,
        price,
    })
}

fn parse_price(price: &str) -> Result<f64, OrderError> {
    let price = price.trim();
    if price.is_empty() {
        return Err(OrderError::MissingPrice);
    }
    match price.parse::<f64>() {
        Ok(value) if value.is_finite() && value > 0.0 => Ok(value),
        _ => Err(OrderError::InvalidPrice),
    }
}

#[cfg(test)]
#[path = "order_tests.rs"]
mod order_tests;
