//! Account traits and structs
use crate::{errors::AccountErr, hooks::NotificationHook};
use rust_decimal::Decimal;

pub(crate) mod balance;
pub(crate) mod bank_account;
pub(crate) mod limit;

pub use bank_account::BankAccount;
pub use limit::LimitDecorator;

/// Operations every account, decorated or not, supports
pub trait Account {
    /// identifier of account
    fn id(&self) -> &str;
    /// amount of money on the account
    fn balance(&self) -> Decimal;
    /// is account still accepting operations
    fn is_open(&self) -> bool;

    /// increase balance by `amount`
    fn deposit(&mut self, amount: Decimal) -> Result<(), AccountErr>;
    /// decrease balance by `amount`
    fn withdraw(&mut self, amount: Decimal) -> Result<(), AccountErr>;
    /// close account for good
    fn close(&mut self);

    /// attach `hook` after already registered ones
    fn register_hook(&mut self, hook: Box<dyn NotificationHook>);
    /// pass `message` to every registered hook
    fn notify(&mut self, message: &str);
}

impl<A: Account + ?Sized> Account for &mut A {
    fn id(&self) -> &str {
        (**self).id()
    }

    fn balance(&self) -> Decimal {
        (**self).balance()
    }

    fn is_open(&self) -> bool {
        (**self).is_open()
    }

    fn deposit(&mut self, amount: Decimal) -> Result<(), AccountErr> {
        (**self).deposit(amount)
    }

    fn withdraw(&mut self, amount: Decimal) -> Result<(), AccountErr> {
        (**self).withdraw(amount)
    }

    fn close(&mut self) {
        (**self).close()
    }

    fn register_hook(&mut self, hook: Box<dyn NotificationHook>) {
        (**self).register_hook(hook)
    }

    fn notify(&mut self, message: &str) {
        (**self).notify(message)
    }
}

impl<A: Account + ?Sized> Account for Box<A> {
    fn id(&self) -> &str {
        (**self).id()
    }

    fn balance(&self) -> Decimal {
        (**self).balance()
    }

    fn is_open(&self) -> bool {
        (**self).is_open()
    }

    fn deposit(&mut self, amount: Decimal) -> Result<(), AccountErr> {
        (**self).deposit(amount)
    }

    fn withdraw(&mut self, amount: Decimal) -> Result<(), AccountErr> {
        (**self).withdraw(amount)
    }

    fn close(&mut self) {
        (**self).close()
    }

    fn register_hook(&mut self, hook: Box<dyn NotificationHook>) {
        (**self).register_hook(hook)
    }

    fn notify(&mut self, message: &str) {
        (**self).notify(message)
    }
}
