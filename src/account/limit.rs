//! Secured account that caps a single withdrawal
use super::Account;
use crate::{
    amount::Amount,
    errors::{AccountErr, ErrKind},
    hooks::NotificationHook,
    DEFAULT_WITHDRAW_CEILING,
};
use rust_decimal::Decimal;

/// Wraps any [`Account`] and refuses withdrawals above a fixed ceiling.
///
/// Holds no state of its own apart from the ceiling, everything else is read from and written to
/// the delegate. Wrap `&mut account` to keep ownership outside.
#[derive(Debug)]
pub struct LimitDecorator<A> {
    inner: A,
    ceiling: Amount,
}

impl<A: Account> LimitDecorator<A> {
    /// Secure `inner` with [`DEFAULT_WITHDRAW_CEILING`]
    pub fn new(inner: A) -> Self {
        Self::with_ceiling(inner, DEFAULT_WITHDRAW_CEILING)
    }

    /// Secure `inner` with custom `ceiling`
    pub fn with_ceiling(inner: A, ceiling: Amount) -> Self {
        Self { inner, ceiling }
    }

    /// largest amount accepted by single withdraw
    pub fn ceiling(&self) -> Amount {
        self.ceiling
    }

    /// give back wrapped account
    pub fn into_inner(self) -> A {
        self.inner
    }
}

impl<A: Account> Account for LimitDecorator<A> {
    fn id(&self) -> &str {
        self.inner.id()
    }

    fn balance(&self) -> Decimal {
        self.inner.balance()
    }

    fn is_open(&self) -> bool {
        self.inner.is_open()
    }

    fn deposit(&mut self, amount: Decimal) -> Result<(), AccountErr> {
        self.inner.deposit(amount)
    }

    /// Ceiling is checked before anything the wrapped account checks
    fn withdraw(&mut self, amount: Decimal) -> Result<(), AccountErr> {
        if amount > *self.ceiling {
            tracing::debug!(account = %self.id(), %amount, ceiling = %self.ceiling, "withdraw over limit");
            return Err(AccountErr::new(
                ErrKind::InsufficientFunds,
                format!("Cannot withdraw more than ${} at once.", self.ceiling),
            ));
        }
        self.inner.withdraw(amount)
    }

    fn close(&mut self) {
        self.inner.close()
    }

    fn register_hook(&mut self, hook: Box<dyn NotificationHook>) {
        self.inner.register_hook(hook)
    }

    fn notify(&mut self, message: &str) {
        self.inner.notify(message)
    }
}
