mod display_amount;
mod locale;
mod stored_amount;

pub use display_amount::{AmountPart, DisplayAmount};
pub use locale::{CLEAR_SYMBOL, Locale, LocaleError};
pub use stored_amount::{AmountError, StoredAmount};
