use rust_decimal::{Decimal, RoundingStrategy};

use super::group_digits;
use crate::Locale;

/// Upper bound on fractional digits shown for non-whole amounts.
pub const MAX_FRACTION_DIGITS: u32 = 10;

/// Formats a number in the locale's convention without a currency symbol.
///
/// Whole values have no fractional part. Other values keep their
/// significant fractional digits, rounded half away from zero to at most
/// [`MAX_FRACTION_DIGITS`].
///
/// ```
/// use keypad_core::{Locale, format_amount};
/// use rust_decimal_macros::dec;
///
/// let locale = Locale::indonesian();
/// assert_eq!(format_amount(dec!(1234567), &locale), "1.234.567");
/// assert_eq!(format_amount(dec!(1234.50), &locale), "1.234,5");
/// ```
pub fn format_amount(
    value: Decimal,
    locale: &Locale,
) -> String {
    let rounded = round_for_display(value);
    let plain = rounded.abs().to_string();

    let (int_part, frac_part) = plain.split_once('.').unwrap_or((plain.as_str(), ""));

    let mut out = String::with_capacity(plain.len() + plain.len() / 3 + 1);
    if is_negative(rounded) {
        out.push('-');
    }
    out.push_str(&group_digits(int_part, locale.grouping_separator));
    if !frac_part.is_empty() {
        out.push(locale.decimal_separator);
        out.push_str(frac_part);
    }
    out
}

/// Formats a number as a currency string, e.g. `Rp 1.234.567`.
///
/// The sign goes before the symbol: `-Rp 500`.
pub fn format_currency(
    value: Decimal,
    locale: &Locale,
) -> String {
    let rounded = round_for_display(value);
    let sign = if is_negative(rounded) { "-" } else { "" };
    let amount = format_amount(rounded.abs(), locale);
    format!(
        "{sign}{}{}{amount}",
        locale.currency_symbol, locale.symbol_separator
    )
}

fn round_for_display(value: Decimal) -> Decimal {
    value
        .round_dp_with_strategy(MAX_FRACTION_DIGITS, RoundingStrategy::MidpointAwayFromZero)
        .normalize()
}

/// Zero is never signed, even when rounding left a negative zero behind.
fn is_negative(rounded: Decimal) -> bool {
    rounded.is_sign_negative() && !rounded.is_zero()
}
