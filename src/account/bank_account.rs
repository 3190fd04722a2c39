use super::balance::Balance;
use super::Account;
use crate::{
    amount::Amount,
    errors::{AccountErr, ErrKind},
    hooks::{Hooks, NotificationHook},
};
use rust_decimal::Decimal;

/// Account balance, open state and hooks listening for changes
#[derive(Debug)]
pub struct BankAccount {
    id: String,
    balance: Balance,
    open: bool,
    hooks: Hooks,
}

impl BankAccount {
    /// Create new open [`BankAccount`] without hooks
    pub fn new(id: impl Into<String>, initial: Amount) -> Self {
        Self {
            id: id.into(),
            balance: Balance::new(initial),
            open: true,
            hooks: Hooks::default(),
        }
    }

    #[cfg(test)]
    /// New account with balance 100.0
    pub fn new_test_account() -> Self {
        BankAccount::new("123456", Amount::new(1000, 1))
    }

    fn check_open(&self) -> Result<(), AccountErr> {
        if self.open {
            Ok(())
        } else {
            Err(AccountErr::closed())
        }
    }
}

impl Account for BankAccount {
    fn id(&self) -> &str {
        &self.id
    }

    fn balance(&self) -> Decimal {
        self.balance.available()
    }

    fn is_open(&self) -> bool {
        self.open
    }

    fn deposit(&mut self, amount: Decimal) -> Result<(), AccountErr> {
        self.check_open()?;
        let amount = Amount::try_from(amount).map_err(|_| {
            AccountErr::new(ErrKind::NegativeAmount, "Cannot deposit a negative amount.")
        })?;

        self.balance.deposit(&amount)?;
        tracing::debug!(account = %self.id, %amount, balance = %self.balance(), "deposit");
        self.notify(&format!("Deposited: ${amount}"));
        Ok(())
    }

    fn withdraw(&mut self, amount: Decimal) -> Result<(), AccountErr> {
        self.check_open()?;
        let amount = Amount::try_from(amount).map_err(|_| {
            AccountErr::new(ErrKind::NegativeAmount, "Cannot withdraw a negative amount.")
        })?;

        self.balance.try_withdraw(&amount)?;
        tracing::debug!(account = %self.id, %amount, balance = %self.balance(), "withdraw");
        self.notify(&format!("Withdrew: ${amount}"));
        Ok(())
    }

    /// Closing already closed account does nothing
    fn close(&mut self) {
        if !self.open {
            tracing::debug!(account = %self.id, "account already closed");
            return;
        }

        self.open = false;
        tracing::debug!(account = %self.id, "close");
        self.notify("Account closed.");
    }

    fn register_hook(&mut self, hook: Box<dyn NotificationHook>) {
        self.hooks.register(hook);
    }

    fn notify(&mut self, message: &str) {
        self.hooks.notify(message);
    }
}
