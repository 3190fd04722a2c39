//! Toy single account simulator with transaction hooks

#![deny(missing_docs)]

pub mod account;
pub mod amount;
pub mod csv;
pub mod errors;
pub mod hooks;
pub mod session;

use amount::Amount;

/// Identifier given to account created by the program
pub const DEFAULT_ACCOUNT_ID: &str = "123456";
/// Largest single withdrawal accepted by [`account::LimitDecorator::new`]
pub const DEFAULT_WITHDRAW_CEILING: Amount = Amount::new(500, 0);
