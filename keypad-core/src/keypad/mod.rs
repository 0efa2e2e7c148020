//! Amount entry from keypad presses.
//!
//! Entry is a two-step pipeline. [`RawInput::apply`] mutates the keystroke
//! buffer and [`render`] projects it onto a [`DisplayAmount`](crate::DisplayAmount).
//! [`Keypad`] composes the two for a single form and pushes each result to
//! its listeners.

mod accumulator;
mod input;
mod key;
mod renderer;

pub use accumulator::{AmountListener, Keypad, KeypadUpdate};
pub use input::{EntryRules, MAX_MAJOR_DIGITS, MAX_MINOR_DIGITS, RawInput};
pub use key::{Digit, KEYPAD_LAYOUT, Key, KeyError};
pub use renderer::render;
