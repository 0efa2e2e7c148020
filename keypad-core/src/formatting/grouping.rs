/// Groups a run of digits into threes from the right, joined by `separator`.
///
/// The leftmost group holds one to three digits. Input is taken verbatim:
/// no digits are added, removed, or validated.
///
/// ```
/// use keypad_core::group_digits;
///
/// assert_eq!(group_digits("1234567", '.'), "1.234.567");
/// assert_eq!(group_digits("500", '.'), "500");
/// assert_eq!(group_digits("", '.'), "");
/// ```
pub fn group_digits(
    digits: &str,
    separator: char,
) -> String {
    let len = digits.chars().count();
    let mut out = String::with_capacity(digits.len() + len / 3);

    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(separator);
        }
        out.push(ch);
    }

    out
}
