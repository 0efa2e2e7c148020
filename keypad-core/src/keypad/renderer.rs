use super::RawInput;
use super::input::parse_digits;
use crate::{AmountPart, DisplayAmount, Locale, group_digits};

/// Projects a keystroke buffer onto its display form.
///
/// Pure and total: the same buffer always renders the same way, and every
/// buffer the accumulator can produce has a rendering. Minor digits are
/// shown exactly as typed, however many there are.
///
/// ```
/// use keypad_core::{Locale, RawInput, render};
///
/// let locale = Locale::indonesian();
/// let amount = render(&RawInput::seeded(Some(12000), Some(50), ','), &locale);
///
/// assert_eq!(amount.major.display, "12.000");
/// assert_eq!(amount.minor.display, ",50");
/// ```
pub fn render(
    input: &RawInput,
    locale: &Locale,
) -> DisplayAmount {
    if input.is_empty() {
        return DisplayAmount::zero();
    }

    let (major_digits, minor_digits) = input.split();
    let minor_digits = minor_digits.unwrap_or_default();

    let major = AmountPart {
        value: parse_digits(major_digits),
        display: group_digits(major_digits, locale.grouping_separator),
    };
    let minor = AmountPart {
        value: parse_digits(minor_digits),
        display: if minor_digits.is_empty() {
            String::new()
        } else {
            format!("{}{minor_digits}", locale.decimal_separator)
        },
    };

    DisplayAmount { major, minor }
}
