//! Amount entry for a numeric keypad.
//!
//! Keystrokes build a raw buffer of digits and at most one decimal
//! separator. The buffer is rendered into a locale-grouped major part and a
//! verbatim minor part after every press, and pushed to whichever form hosts
//! the keypad.

pub mod formatting;
pub mod keypad;
pub mod models;

pub use formatting::{format_amount, format_currency, group_digits};
pub use keypad::{
    AmountListener, Digit, EntryRules, KEYPAD_LAYOUT, Key, KeyError, Keypad, KeypadUpdate,
    RawInput, render,
};
pub use models::*;
