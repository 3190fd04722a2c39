//! Protect accounts from negative amounts of money.

use std::{borrow::Borrow, fmt, ops::Deref};

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Represent non negative financial amount of money
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(try_from = "Decimal")]
pub struct Amount(Decimal);

impl Amount {
    /// Create new amount of that is guarantee to be non negative
    pub const fn new(num: u64, scale: u32) -> Amount {
        let inner = Decimal::from_parts(num as u32, (num >> 32) as u32, 0, false, scale);
        Self(inner)
    }
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("amount is negative")]
/// represent error when operation want to use negative amount of money
pub struct NegativeAmountErr;

impl TryFrom<Decimal> for Amount {
    type Error = NegativeAmountErr;
    fn try_from(value: Decimal) -> Result<Self, Self::Error> {
        // `-0` parses with the sign bit set
        if value.is_sign_negative() && !value.is_zero() {
            Err(NegativeAmountErr)
        } else {
            Ok(Self(value))
        }
    }
}

impl From<Amount> for Decimal {
    fn from(this: Amount) -> Self {
        this.0
    }
}

impl Borrow<Decimal> for Amount {
    fn borrow(&self) -> &Decimal {
        &self.0
    }
}

impl Deref for Amount {
    type Target = Decimal;
    fn deref(&self) -> &Self::Target {
        self.borrow()
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

#[cfg(test)]
mod test {
    use super::{Amount, NegativeAmountErr};
    use rust_decimal::Decimal;
    use std::str::FromStr;

    #[test]
    fn rejects_negative() {
        let e = Amount::try_from(Decimal::new(-10, 1)).unwrap_err();
        assert_eq!(e, NegativeAmountErr);
    }

    #[test]
    fn accepts_zero_and_negative_zero() {
        let neg_zero = Decimal::from_str("-0.0").unwrap();
        assert_eq!(*Amount::try_from(neg_zero).unwrap(), Decimal::ZERO);
        assert_eq!(Amount::try_from(Decimal::ZERO).unwrap(), Amount::default());
    }

    #[test]
    fn keeps_scale_for_display() {
        let a = Amount::try_from(Decimal::from_str("50.0").unwrap()).unwrap();
        assert_eq!(a.to_string(), "50.0");
        assert_eq!(Amount::new(500, 0).to_string(), "500");
    }
}
