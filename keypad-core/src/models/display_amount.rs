use std::fmt;

use serde::{Deserialize, Serialize};

/// One half of a rendered amount: the parsed number and the string shown
/// to the user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AmountPart {
    pub value: u64,
    pub display: String,
}

/// Render-ready snapshot of a keystroke buffer.
///
/// Recomputed from scratch on every keypress; it never refers back to the
/// buffer it came from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayAmount {
    /// Whole units, grouped by thousands (e.g. `1.234.567`).
    pub major: AmountPart,
    /// Fractional units with a leading decimal separator (e.g. `,5`), or an
    /// empty display when nothing was typed after the separator.
    pub minor: AmountPart,
}

impl DisplayAmount {
    /// The rendering of an empty buffer.
    pub fn zero() -> Self {
        Self {
            major: AmountPart {
                value: 0,
                display: "0".to_string(),
            },
            minor: AmountPart {
                value: 0,
                display: String::new(),
            },
        }
    }

    pub fn has_minor(&self) -> bool {
        !self.minor.display.is_empty()
    }
}

impl Default for DisplayAmount {
    fn default() -> Self {
        Self::zero()
    }
}

impl fmt::Display for DisplayAmount {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        write!(f, "{}{}", self.major.display, self.minor.display)
    }
}
