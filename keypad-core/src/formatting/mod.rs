//! Locale number and currency formatting.
//!
//! Grouping is a plain string operation with no currency symbol involved,
//! so the keypad renderer and the currency formatter both call
//! [`group_digits`] directly instead of one parsing the other's output.

pub mod currency;
pub mod grouping;

pub use currency::{MAX_FRACTION_DIGITS, format_amount, format_currency};
pub use grouping::group_digits;
