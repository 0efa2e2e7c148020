use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::DisplayAmount;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum AmountError {
    #[error("amount must not be negative, got {0}")]
    Negative(Decimal),

    #[error("amount {0} does not fit in the stored major units")]
    TooLarge(Decimal),

    #[error("sum of stored amounts overflowed")]
    Overflow,
}

/// The `(main, decimal)` pair a host form persists for a transaction.
///
/// `decimal_amount` holds whatever digits were typed after the separator,
/// read as an integer. `,5` and `,05` therefore store `5` for both.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredAmount {
    pub main_amount: u64,
    pub decimal_amount: u64,
}

impl StoredAmount {
    pub fn new(
        main_amount: u64,
        decimal_amount: u64,
    ) -> Self {
        Self {
            main_amount,
            decimal_amount,
        }
    }

    /// Splits a receipt subtotal into whole units and truncated hundredths.
    ///
    /// Used when line items come back from receipt extraction as plain
    /// numbers rather than keystrokes.
    ///
    /// ```
    /// use keypad_core::StoredAmount;
    /// use rust_decimal_macros::dec;
    ///
    /// let stored = StoredAmount::from_subtotal(dec!(15500.759)).unwrap();
    /// assert_eq!(stored, StoredAmount::new(15500, 75));
    /// ```
    pub fn from_subtotal(subtotal: Decimal) -> Result<Self, AmountError> {
        if subtotal.is_sign_negative() && !subtotal.is_zero() {
            return Err(AmountError::Negative(subtotal));
        }

        let whole = subtotal.trunc();
        let main_amount = whole.to_u64().ok_or(AmountError::TooLarge(subtotal))?;
        let hundredths = ((subtotal - whole) * Decimal::ONE_HUNDRED).trunc();
        let decimal_amount = hundredths
            .to_u64()
            .ok_or(AmountError::TooLarge(subtotal))?;

        Ok(Self {
            main_amount,
            decimal_amount,
        })
    }

    /// Reads the pair back as `"{main}.{decimal}"`.
    ///
    /// The decimal digits are read as typed, not as hundredths, so a pair
    /// from [`from_subtotal`](Self::from_subtotal) with single-digit
    /// hundredths does not survive the trip: `10.05` splits into `(10, 5)`
    /// and reads back as `10.5`.
    ///
    /// ```
    /// use keypad_core::StoredAmount;
    /// use rust_decimal_macros::dec;
    ///
    /// assert_eq!(StoredAmount::new(500, 5).to_decimal(), dec!(500.5));
    /// assert_eq!(StoredAmount::new(12000, 50).to_decimal(), dec!(12000.50));
    /// ```
    pub fn to_decimal(&self) -> Decimal {
        let scale = digit_count(self.decimal_amount);
        let fraction = Decimal::from_i128_with_scale(i128::from(self.decimal_amount), scale);
        Decimal::from(self.main_amount) + fraction
    }

    /// Sums a group of stored amounts, as shown beside a day's heading in
    /// the transaction list.
    pub fn total<'a, I>(amounts: I) -> Result<Decimal, AmountError>
    where
        I: IntoIterator<Item = &'a StoredAmount>,
    {
        amounts
            .into_iter()
            .try_fold(Decimal::ZERO, |acc, amount| {
                acc.checked_add(amount.to_decimal())
            })
            .ok_or(AmountError::Overflow)
    }
}

impl From<&DisplayAmount> for StoredAmount {
    fn from(amount: &DisplayAmount) -> Self {
        Self {
            main_amount: amount.major.value,
            decimal_amount: amount.minor.value,
        }
    }
}

fn digit_count(value: u64) -> u32 {
    value.checked_ilog10().map_or(1, |log| log + 1)
}
