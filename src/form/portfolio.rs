use serde::Serialize;
use thiserror::Error;

use super::order::{Order, OrderError};

/// Shares of one symbol held in the portfolio
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Holding {
    pub symbol: String,
    pub quantity: i64,
    /// Average price paid per share
    pub price: f64,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PortfolioError {
    #[error("You do not own any {0} stock")]
    NotOwned(String),

    #[error("You cannot sell more stock than you own (you own {owned} {symbol})")]
    NotEnough { symbol: String, owned: i64 },

    #[error("Too many {0} shares to hold")]
    QuantityOverflow(String),
}

/// Why a submitted form did not change the portfolio
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TradeError {
    #[error(transparent)]
    Order(#[from] OrderError),

    #[error(transparent)]
    Portfolio(#[from] PortfolioError),
}

/// Holdings built up by the orders of this session
#[derive(Debug, Default)]
pub struct Portfolio {
    holdings: Vec<Holding>,
}

impl Portfolio {
    pub fn new() -> Self {
        Self::default()
    }

    /// Holdings in the order they were first bought
    pub fn holdings(&self) -> &[Holding] {
        &self.holdings
    }

    pub fn get(&self, symbol: &str) -> Option<&Holding> {
        self.position(symbol).map(|index| &self.holdings[index])
    }

    pub fn len(&self) -> usize {
        self.holdings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.holdings.is_empty()
    }

    /// Apply an order. On error the portfolio is left untouched.
    ///
    /// Buying a held symbol averages its price; selling the whole holding
    /// removes it.
    pub fn adjust(&mut self, order: &Order) -> Result<(), PortfolioError> {
        let position = self.position(&order.symbol);

        if order.is_sell() {
            let Some(index) = position else {
                return Err(PortfolioError::NotOwned(order.symbol.clone()));
            };
            return self.sell(index, order.quantity.unsigned_abs());
        }

        let price = order.price.unwrap_or_default();
        match position {
            Some(index) => self.buy_more(index, order.quantity, price),
            None => {
                self.holdings.push(Holding {
                    symbol: order.symbol.clone(),
                    quantity: order.quantity,
                    price,
                });
                Ok(())
            }
        }
    }

    fn buy_more(&mut self, index: usize, quantity: i64, price: f64) -> Result<(), PortfolioError> {
        let holding = &mut self.holdings[index];
        let total = holding
            .quantity
            .checked_add(quantity)
            .ok_or_else(|| PortfolioError::QuantityOverflow(holding.symbol.clone()))?;

        holding.price = average_price(holding.quantity, holding.price, quantity, price);
        holding.quantity = total;
        Ok(())
    }

    fn sell(&mut self, index: usize, quantity: u64) -> Result<(), PortfolioError> {
        let owned = self.holdings[index].quantity;

        match i64::try_from(quantity) {
            Ok(sold) if sold < owned => self.holdings[index].quantity -= sold,
            Ok(sold) if sold == owned => {
                self.holdings.remove(index);
            }
            _ => {
                return Err(PortfolioError::NotEnough {
                    symbol: self.holdings[index].symbol.clone(),
                    owned,
                });
            }
        }
        Ok(())
    }

    fn position(&self, symbol: &str) -> Option<usize> {
        self.holdings
            .iter()
            .position(|holding| holding.symbol.eq_ignore_ascii_case(symbol))
    }
}

/// Price of a holding after buying `new_quantity` more at `new_price`
pub fn average_price(old_quantity: i64, old_price: f64, new_quantity: i64, new_price: f64) -> f64 {
    let total = old_quantity as f64 + new_quantity as f64;
    (old_quantity as f64 * old_price + new_quantity as f64 * new_price) / total
}

#[cfg(test)]
#[path = "portfolio_tests.rs"]
mod portfolio_tests;
