use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::warn;

use super::Key;

/// Most major digits the buffer will accept from keypresses. Every 19 digit
/// number fits in a `u64`.
pub const MAX_MAJOR_DIGITS: usize = 19;

/// Most minor digits the buffer will accept from keypresses, whatever
/// [`EntryRules::max_minor_digits`] says.
pub const MAX_MINOR_DIGITS: usize = 19;

/// Limits applied while typing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EntryRules {
    /// Cap on digits typed after the separator. `None` accepts as many as
    /// the buffer can hold.
    pub max_minor_digits: Option<u32>,
}

impl EntryRules {
    /// Two minor digits, i.e. cents.
    pub fn cents() -> Self {
        Self {
            max_minor_digits: Some(2),
        }
    }

    fn minor_limit(&self) -> usize {
        self.max_minor_digits
            .map_or(MAX_MINOR_DIGITS, |max| (max as usize).min(MAX_MINOR_DIGITS))
    }
}

/// The keystroke buffer: digits plus at most one decimal separator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawInput {
    buffer: String,
    separator: char,
}

impl RawInput {
    pub fn new(separator: char) -> Self {
        Self {
            buffer: String::new(),
            separator,
        }
    }

    /// Seeds the buffer from a persisted amount when editing a record.
    ///
    /// Both parts give `"{major}{separator}{minor}"`, a major part alone
    /// gives `"{major}"`, and anything else leaves the buffer empty.
    ///
    /// ```
    /// use keypad_core::RawInput;
    ///
    /// let input = RawInput::seeded(Some(12000), Some(50), ',');
    /// assert_eq!(input.as_str(), "12000,50");
    /// ```
    pub fn seeded(
        major: Option<u64>,
        minor: Option<u64>,
        separator: char,
    ) -> Self {
        let buffer = match (major, minor) {
            (Some(major), Some(minor)) => format!("{major}{separator}{minor}"),
            (Some(major), None) => major.to_string(),
            (None, _) => String::new(),
        };
        Self { buffer, separator }
    }

    pub fn as_str(&self) -> &str {
        &self.buffer
    }

    pub fn separator(&self) -> char {
        self.separator
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    pub fn has_separator(&self) -> bool {
        self.buffer.contains(self.separator)
    }

    /// Digits before the separator, and the digits after it if one was typed.
    pub fn split(&self) -> (&str, Option<&str>) {
        match self.buffer.split_once(self.separator) {
            Some((major, minor)) => (major, Some(minor)),
            None => (self.buffer.as_str(), None),
        }
    }

    /// Applies one keypress. Returns whether the buffer changed.
    pub fn apply(
        &mut self,
        key: Key,
        rules: &EntryRules,
    ) -> bool {
        match key {
            Key::Clear => {
                let changed = !self.buffer.is_empty();
                self.buffer.clear();
                changed
            }
            Key::Separator => {
                if self.has_separator() {
                    return false;
                }
                self.buffer.push(self.separator);
                true
            }
            Key::Digit(digit) => {
                let c = digit.as_char();
                if self.buffer == "0" {
                    self.buffer.clear();
                    self.buffer.push(c);
                    return c != '0';
                }

                let (major, minor) = self.split();
                let (typed, limit) = match minor {
                    Some(minor) => (minor.len(), rules.minor_limit()),
                    None => (major.len(), MAX_MAJOR_DIGITS),
                };
                if typed >= limit {
                    warn!(buffer = %self.buffer, limit, "digit limit reached, ignoring '{c}'");
                    return false;
                }

                self.buffer.push(c);
                true
            }
        }
    }

    /// The buffer as one number, reading the separator as a decimal point.
    /// An empty buffer is zero.
    ///
    /// ```
    /// use keypad_core::RawInput;
    /// use rust_decimal_macros::dec;
    ///
    /// let input = RawInput::seeded(Some(500), Some(5), ',');
    /// assert_eq!(input.flat_amount(), dec!(500.5));
    /// ```
    pub fn flat_amount(&self) -> Decimal {
        let (major, minor) = self.split();
        let whole = Decimal::from(parse_digits(major));
        match minor {
            Some(minor) if !minor.is_empty() => {
                let fraction =
                    Decimal::from_i128_with_scale(i128::from(parse_digits(minor)), minor.len() as u32);
                whole + fraction
            }
            _ => whole,
        }
    }
}

/// Reads a run of ASCII digits as an integer. Empty input is zero.
pub(crate) fn parse_digits(digits: &str) -> u64 {
    digits
        .bytes()
        .filter(u8::is_ascii_digit)
        .fold(0u64, |acc, b| {
            acc.saturating_mul(10).saturating_add(u64::from(b - b'0'))
        })
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    fn typed(keys: &str) -> RawInput {
        typed_with(keys, &EntryRules::default())
    }

    fn typed_with(
        keys: &str,
        rules: &EntryRules,
    ) -> RawInput {
        let mut input = RawInput::new(',');
        for c in keys.chars() {
            let key = match c {
                ',' => Key::Separator,
                'C' => Key::Clear,
                d => Key::digit(d.to_digit(10).unwrap() as u8),
            };
            input.apply(key, rules);
        }
        input
    }

    /// Initializes tracing subscriber for tests that hit the warn path.
    fn init_test_tracing() -> tracing::subscriber::DefaultGuard {
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::WARN)
            .with_test_writer()
            .finish();
        tracing::subscriber::set_default(subscriber)
    }

    // =========================================================================
    // seeding tests
    // =========================================================================

    #[test]
    fn seeded_joins_both_parts() {
        assert_eq!(RawInput::seeded(Some(12000), Some(50), ',').as_str(), "12000,50");
    }

    #[test]
    fn seeded_keeps_zero_minor() {
        assert_eq!(RawInput::seeded(Some(7), Some(0), ',').as_str(), "7,0");
    }

    #[test]
    fn seeded_major_only() {
        assert_eq!(RawInput::seeded(Some(12000), None, ',').as_str(), "12000");
    }

    #[test]
    fn seeded_without_major_is_empty() {
        assert!(RawInput::seeded(None, Some(50), ',').is_empty());
        assert!(RawInput::seeded(None, None, ',').is_empty());
    }

    // =========================================================================
    // apply tests
    // =========================================================================

    #[test]
    fn digits_append() {
        assert_eq!(typed("1234567").as_str(), "1234567");
    }

    #[test]
    fn leading_zero_is_replaced() {
        assert_eq!(typed("05").as_str(), "5");
        assert_eq!(typed("0005").as_str(), "5");
        assert_eq!(typed("00").as_str(), "0");
    }

    #[test]
    fn zero_before_separator_is_kept() {
        assert_eq!(typed("0,05").as_str(), "0,05");
    }

    #[test]
    fn separator_is_accepted_once() {
        let mut input = typed("12,");

        let changed = input.apply(Key::Separator, &EntryRules::default());

        assert!(!changed);
        assert_eq!(input.as_str(), "12,");
        assert_eq!(typed("1,2,3,").as_str(), "1,23");
    }

    #[test]
    fn separator_on_empty_buffer() {
        assert_eq!(typed(",5").as_str(), ",5");
    }

    #[test]
    fn clear_empties_buffer() {
        assert_eq!(typed("123,45C").as_str(), "");
        assert_eq!(typed("123C9").as_str(), "9");
    }

    #[test]
    fn clear_on_empty_buffer_reports_no_change() {
        let mut input = RawInput::new(',');

        assert!(!input.apply(Key::Clear, &EntryRules::default()));
    }

    #[test]
    fn minor_digits_are_unbounded_by_default() {
        assert_eq!(typed("1,23456").as_str(), "1,23456");
    }

    #[test]
    fn minor_digit_cap_drops_extra_digits() {
        let _guard = init_test_tracing();

        let input = typed_with("1,23456", &EntryRules::cents());

        assert_eq!(input.as_str(), "1,23");
    }

    #[test]
    fn minor_digit_cap_does_not_limit_major_digits() {
        let input = typed_with("123456", &EntryRules::cents());

        assert_eq!(input.as_str(), "123456");
    }

    #[test]
    fn major_digits_stop_at_u64_safe_length() {
        let _guard = init_test_tracing();

        let input = typed(&"9".repeat(25));

        assert_eq!(input.as_str().len(), MAX_MAJOR_DIGITS);
    }

    #[test]
    fn minor_digits_stop_at_u64_safe_length() {
        let _guard = init_test_tracing();

        let input = typed(&format!("1,{}", "9".repeat(25)));
        let (_, minor) = input.split();

        assert_eq!(minor.map(str::len), Some(MAX_MINOR_DIGITS));
    }

    #[test]
    fn minor_cap_above_hard_limit_uses_hard_limit() {
        let _guard = init_test_tracing();
        let rules = EntryRules {
            max_minor_digits: Some(40),
        };

        let input = typed_with(&format!("1,{}", "9".repeat(25)), &rules);

        assert_eq!(input.as_str().len(), 2 + MAX_MINOR_DIGITS);
    }

    #[test]
    fn limits_fit_in_u64() {
        assert_eq!(MAX_MAJOR_DIGITS, 19);
        assert_eq!(MAX_MINOR_DIGITS, 19);
        assert_eq!(parse_digits(&"9".repeat(MAX_MAJOR_DIGITS)), 9_999_999_999_999_999_999);
    }

    #[test]
    fn zero_minor_cap_still_accepts_separator() {
        let rules = EntryRules {
            max_minor_digits: Some(0),
        };

        assert_eq!(typed_with("5,5", &rules).as_str(), "5,");
    }

    // =========================================================================
    // flat_amount tests
    // =========================================================================

    #[test]
    fn flat_amount_of_empty_is_zero() {
        assert_eq!(RawInput::new(',').flat_amount(), Decimal::ZERO);
    }

    #[test]
    fn flat_amount_reads_separator_as_point() {
        assert_eq!(typed("500,5").flat_amount(), dec!(500.5));
        assert_eq!(typed("0,05").flat_amount(), dec!(0.05));
        assert_eq!(typed(",5").flat_amount(), dec!(0.5));
    }

    #[test]
    fn flat_amount_ignores_trailing_separator() {
        assert_eq!(typed("5,").flat_amount(), dec!(5));
    }

    #[test]
    fn flat_amount_handles_largest_typed_values() {
        let input = typed(&format!("{},{}", "9".repeat(19), "9".repeat(19)));

        assert!(input.flat_amount() > dec!(9999999999999999999));
    }

    #[test]
    fn parse_digits_treats_empty_as_zero() {
        assert_eq!(parse_digits(""), 0);
        assert_eq!(parse_digits("007"), 7);
        assert_eq!(parse_digits("18446744073709551615"), u64::MAX);
    }
}
