//! Possible errors

use crate::amount::NegativeAmountErr;
use std::fmt;
use thiserror::Error;

/// Kind of rule an account operation broke
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrKind {
    /// amount below zero
    NegativeAmount,
    /// withdraw exceeds balance or withdrawal ceiling
    InsufficientFunds,
    /// deposit or withdraw on closed account
    InvalidOperation,
}

impl ErrKind {
    /// Console label used when the error is reported to the user
    pub fn label(&self) -> &'static str {
        match self {
            ErrKind::NegativeAmount => "Negative Amount",
            ErrKind::InsufficientFunds => "Overdraw",
            ErrKind::InvalidOperation => "Invalid Account Operation",
        }
    }
}

impl fmt::Display for ErrKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Error returned when account refuse an operation
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("{message}")]
pub struct AccountErr {
    kind: ErrKind,
    message: String,
}

impl AccountErr {
    /// Create new error of `kind`
    pub fn new(kind: ErrKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    /// operation on closed account
    pub fn closed() -> Self {
        Self::new(ErrKind::InvalidOperation, "Account is closed.")
    }

    /// not enough money on the account
    pub fn insufficient_balance() -> Self {
        Self::new(ErrKind::InsufficientFunds, "Insufficient balance.")
    }

    /// balance can not hold the result of deposit
    pub fn overflow() -> Self {
        Self::new(ErrKind::InvalidOperation, "Deposit would overflow the balance.")
    }

    /// kind of broken rule
    pub fn kind(&self) -> ErrKind {
        self.kind
    }

    /// human readable description
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl From<NegativeAmountErr> for AccountErr {
    fn from(_: NegativeAmountErr) -> Self {
        Self::new(ErrKind::NegativeAmount, "Cannot use a negative amount.")
    }
}

/// Errors while reading values typed by user
#[allow(missing_docs)]
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum InputErr {
    #[error("input ended before {0} was given")]
    Eof(&'static str),
    #[error("expected a decimal number but got {0:?}")]
    NotANumber(String),
}

/// Errors while replaying a single operation from script
#[allow(missing_docs)]
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ScriptErr {
    #[error(transparent)]
    Account(#[from] AccountErr),
    #[error("operation {0} requires an amount")]
    MissingAmount(&'static str),
}
