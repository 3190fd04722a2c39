use crate::{amount::Amount, errors::AccountErr};
use rust_decimal::Decimal;

/// Represents current account balance, never below zero
#[derive(Debug, Clone, Default)]
pub struct Balance {
    available: Decimal,
}

impl Balance {
    pub fn new(initial: Amount) -> Self {
        Self {
            available: initial.into(),
        }
    }

    pub fn deposit(&mut self, amount: &Decimal) -> Result<(), AccountErr> {
        self.available = self
            .available
            .checked_add(*amount)
            .ok_or_else(AccountErr::overflow)?;
        Ok(())
    }

    pub fn try_withdraw(&mut self, amount: &Decimal) -> Result<(), AccountErr> {
        if self.available < *amount {
            return Err(AccountErr::insufficient_balance());
        }

        self.available -= amount;
        debug_assert!(self.available >= Decimal::ZERO);
        Ok(())
    }

    pub fn available(&self) -> Decimal {
        self.available
    }
}
