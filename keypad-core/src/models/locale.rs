use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Symbol shown on the clear key. Never valid as a separator.
pub const CLEAR_SYMBOL: char = 'C';

#[derive(Debug, Error, PartialEq, Eq)]
pub enum LocaleError {
    #[error("grouping and decimal separators must differ, both are '{0}'")]
    SameSeparators(char),

    #[error("separator '{0}' is a digit")]
    DigitSeparator(char),

    #[error("separator '{0}' collides with the clear key")]
    ClearSeparator(char),

    #[error("decimal separator {0:?} is whitespace, which is skipped when reading keys")]
    WhitespaceSeparator(char),
}

/// Locale parameters for amount entry and display.
///
/// The default is the Indonesian Rupiah convention the keypad was built
/// around: `.` groups thousands, `,` separates the minor units, and currency
/// strings are prefixed with `Rp` and a non-breaking space.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Locale {
    /// Inserted every three digits in the major-unit display.
    pub grouping_separator: char,
    /// Divides major and minor digits during entry and display.
    pub decimal_separator: char,
    pub currency_symbol: String,
    /// Placed between the currency symbol and the number.
    pub symbol_separator: String,
}

impl Locale {
    pub fn indonesian() -> Self {
        Self {
            grouping_separator: '.',
            decimal_separator: ',',
            currency_symbol: "Rp".to_string(),
            symbol_separator: "\u{a0}".to_string(),
        }
    }

    /// Checks that the separators can be told apart from each other and
    /// from the other keypad keys.
    pub fn validate(&self) -> Result<(), LocaleError> {
        for sep in [self.grouping_separator, self.decimal_separator] {
            if sep.is_ascii_digit() {
                return Err(LocaleError::DigitSeparator(sep));
            }
            if sep.eq_ignore_ascii_case(&CLEAR_SYMBOL) {
                return Err(LocaleError::ClearSeparator(sep));
            }
        }
        // Typed keys skip whitespace; grouping is display-only and may use it.
        if self.decimal_separator.is_whitespace() {
            return Err(LocaleError::WhitespaceSeparator(self.decimal_separator));
        }
        if self.grouping_separator == self.decimal_separator {
            return Err(LocaleError::SameSeparators(self.decimal_separator));
        }
        Ok(())
    }
}

impl Default for Locale {
    fn default() -> Self {
        Self::indonesian()
    }
}
