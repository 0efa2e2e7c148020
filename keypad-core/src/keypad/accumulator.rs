use std::fmt;

use rust_decimal::Decimal;
use tracing::{debug, trace};

use super::{EntryRules, Key, RawInput, render};
use crate::{DisplayAmount, Locale, StoredAmount};

/// Receives the fresh rendering after every keypress.
pub trait AmountListener {
    fn on_amount_change(
        &mut self,
        amount: &DisplayAmount,
        flat: Decimal,
    );
}

impl<F> AmountListener for F
where
    F: FnMut(&DisplayAmount, Decimal),
{
    fn on_amount_change(
        &mut self,
        amount: &DisplayAmount,
        flat: Decimal,
    ) {
        self(amount, flat)
    }
}

/// What a keypress produced: the display form and the buffer as one number.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeypadUpdate {
    pub amount: DisplayAmount,
    pub flat: Decimal,
}

/// One amount-entry session, owned by a single form.
///
/// Each [`press`](Keypad::press) mutates the buffer, renders it, and
/// notifies every subscribed listener exactly once, even when the key left
/// the buffer unchanged.
///
/// ```
/// use keypad_core::{Digit, EntryRules, Key, Keypad, Locale};
/// use rust_decimal_macros::dec;
///
/// let five = Key::from(Digit::new(5).unwrap());
/// let zero = Key::from(Digit::new(0).unwrap());
///
/// let mut keypad = Keypad::new(Locale::indonesian(), EntryRules::default());
/// for key in [five, zero, zero, Key::Separator] {
///     keypad.press(key);
/// }
/// let update = keypad.press(five);
///
/// assert_eq!(update.amount.to_string(), "500,5");
/// assert_eq!(update.flat, dec!(500.5));
/// ```
pub struct Keypad {
    input: RawInput,
    locale: Locale,
    rules: EntryRules,
    listeners: Vec<Box<dyn AmountListener>>,
}

impl Keypad {
    pub fn new(
        locale: Locale,
        rules: EntryRules,
    ) -> Self {
        Self {
            input: RawInput::new(locale.decimal_separator),
            locale,
            rules,
            listeners: Vec::new(),
        }
    }

    /// Starts a session for editing an existing record.
    ///
    /// Seeding does not notify listeners; call [`current`](Keypad::current)
    /// for the first paint.
    pub fn editing(
        locale: Locale,
        rules: EntryRules,
        major: Option<u64>,
        minor: Option<u64>,
    ) -> Self {
        let input = RawInput::seeded(major, minor, locale.decimal_separator);
        debug!(buffer = input.as_str(), "seeded keypad");
        Self {
            input,
            locale,
            rules,
            listeners: Vec::new(),
        }
    }

    pub fn from_stored(
        locale: Locale,
        rules: EntryRules,
        stored: &StoredAmount,
    ) -> Self {
        Self::editing(
            locale,
            rules,
            Some(stored.main_amount),
            Some(stored.decimal_amount),
        )
    }

    pub fn subscribe<L>(
        &mut self,
        listener: L,
    ) where
        L: AmountListener + 'static,
    {
        self.listeners.push(Box::new(listener));
    }

    pub fn buffer(&self) -> &str {
        self.input.as_str()
    }

    pub fn locale(&self) -> &Locale {
        &self.locale
    }

    pub fn rules(&self) -> &EntryRules {
        &self.rules
    }

    /// Renders the buffer as it stands, without notifying anyone.
    pub fn current(&self) -> KeypadUpdate {
        KeypadUpdate {
            amount: render(&self.input, &self.locale),
            flat: self.input.flat_amount(),
        }
    }

    pub fn press(
        &mut self,
        key: Key,
    ) -> KeypadUpdate {
        let changed = self.input.apply(key, &self.rules);
        trace!(?key, changed, buffer = self.input.as_str(), "key pressed");

        let update = self.current();
        for listener in &mut self.listeners {
            listener.on_amount_change(&update.amount, update.flat);
        }
        update
    }

    /// Presses each key in turn and returns the last update, or the current
    /// rendering when `keys` is empty.
    pub fn press_all<I>(
        &mut self,
        keys: I,
    ) -> KeypadUpdate
    where
        I: IntoIterator<Item = Key>,
    {
        keys.into_iter()
            .fold(None, |_, key| Some(self.press(key)))
            .unwrap_or_else(|| self.current())
    }

    pub fn clear(&mut self) -> KeypadUpdate {
        self.press(Key::Clear)
    }
}

impl fmt::Debug for Keypad {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        f.debug_struct("Keypad")
            .field("input", &self.input)
            .field("locale", &self.locale)
            .field("rules", &self.rules)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}
