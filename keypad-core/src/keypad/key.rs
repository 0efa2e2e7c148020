use thiserror::Error;

use crate::{CLEAR_SYMBOL, Locale};

/// Errors raised when reading keys from text.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum KeyError {
    #[error("digit must be between 0 and 9, got {0}")]
    DigitOutOfRange(u8),

    #[error("'{0}' is not a keypad key")]
    UnknownKey(char),
}

/// A single decimal digit, 0 through 9.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Digit(u8);

impl Digit {
    pub fn new(value: u8) -> Option<Self> {
        (value <= 9).then_some(Self(value))
    }

    pub fn value(self) -> u8 {
        self.0
    }

    pub fn as_char(self) -> char {
        char::from(b'0' + self.0)
    }
}

impl TryFrom<u8> for Digit {
    type Error = KeyError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value).ok_or(KeyError::DigitOutOfRange(value))
    }
}

/// A keypad button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Digit(Digit),
    Separator,
    Clear,
}

/// Button order on the on-screen keypad, three per row.
pub const KEYPAD_LAYOUT: [Key; 12] = [
    Key::Digit(Digit(1)),
    Key::Digit(Digit(2)),
    Key::Digit(Digit(3)),
    Key::Digit(Digit(4)),
    Key::Digit(Digit(5)),
    Key::Digit(Digit(6)),
    Key::Digit(Digit(7)),
    Key::Digit(Digit(8)),
    Key::Digit(Digit(9)),
    Key::Separator,
    Key::Digit(Digit(0)),
    Key::Clear,
];

impl Key {
    #[cfg(test)]
    pub(crate) fn digit(value: u8) -> Self {
        match Digit::new(value) {
            Some(digit) => Key::Digit(digit),
            None => panic!("digit key out of range: {value}"),
        }
    }

    /// Maps a typed character to a key: digits, the locale's decimal
    /// separator, and `C` (either case) for clear.
    pub fn from_char(
        c: char,
        locale: &Locale,
    ) -> Result<Self, KeyError> {
        if let Some(value) = c.to_digit(10) {
            return Ok(Key::Digit(Digit(value as u8)));
        }
        if c == locale.decimal_separator {
            return Ok(Key::Separator);
        }
        if c.eq_ignore_ascii_case(&CLEAR_SYMBOL) {
            return Ok(Key::Clear);
        }
        Err(KeyError::UnknownKey(c))
    }

    /// Parses a string of key symbols, skipping whitespace.
    ///
    /// ```
    /// use keypad_core::{Key, Locale};
    ///
    /// let keys = Key::parse_sequence("50 0,5", &Locale::indonesian()).unwrap();
    /// assert_eq!(keys.len(), 5);
    /// assert_eq!(keys[3], Key::Separator);
    /// ```
    pub fn parse_sequence(
        input: &str,
        locale: &Locale,
    ) -> Result<Vec<Self>, KeyError> {
        input
            .chars()
            .filter(|c| !c.is_ascii_whitespace())
            .map(|c| Self::from_char(c, locale))
            .collect()
    }

    /// The label shown on the button.
    pub fn symbol(
        self,
        locale: &Locale,
    ) -> char {
        match self {
            Key::Digit(digit) => digit.as_char(),
            Key::Separator => locale.decimal_separator,
            Key::Clear => CLEAR_SYMBOL,
        }
    }
}

impl From<Digit> for Key {
    fn from(digit: Digit) -> Self {
        Key::Digit(digit)
    }
}
