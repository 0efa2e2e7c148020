//! Keypad configuration loaded from TOML.
//!
//! Every field is optional. A minimal file switching to US-style
//! separators with cents-only entry:
//!
//! ```toml
//! [locale]
//! grouping_separator = ","
//! decimal_separator = "."
//! currency_symbol = "$"
//! symbol_separator = ""
//!
//! [entry]
//! max_minor_digits = 2
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use keypad_core::{EntryRules, Locale, LocaleError};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

/// Errors that can occur while loading a configuration file.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config file '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid locale: {0}")]
    Locale(#[from] LocaleError),
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct KeypadConfig {
    pub locale: Locale,
    pub entry: EntryRules,
}

impl KeypadConfig {
    /// Parses and validates a TOML document.
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(text)?;
        config.locale.validate()?;
        Ok(config)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml_str(&text)?;
        debug!(path = %path.display(), ?config, "loaded keypad config");
        Ok(config)
    }

    /// Applies a command-line override of the minor digit cap.
    pub fn with_max_minor_digits(
        mut self,
        max_minor_digits: Option<u32>,
    ) -> Self {
        if max_minor_digits.is_some() {
            self.entry.max_minor_digits = max_minor_digits;
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn empty_document_gives_defaults() {
        let config = KeypadConfig::from_toml_str("").unwrap();

        assert_eq!(config, KeypadConfig::default());
        assert_eq!(config.locale, Locale::indonesian());
        assert_eq!(config.entry.max_minor_digits, None);
    }

    #[test]
    fn partial_locale_keeps_other_defaults() {
        let config = KeypadConfig::from_toml_str(
            r#"
            [locale]
            currency_symbol = "IDR"
            "#,
        )
        .unwrap();

        assert_eq!(config.locale.currency_symbol, "IDR");
        assert_eq!(config.locale.grouping_separator, '.');
        assert_eq!(config.locale.decimal_separator, ',');
    }

    #[test]
    fn reads_entry_rules() {
        let config = KeypadConfig::from_toml_str(
            r#"
            [entry]
            max_minor_digits = 2
            "#,
        )
        .unwrap();

        assert_eq!(config.entry, EntryRules::cents());
    }

    #[test]
    fn rejects_clashing_separators() {
        let result = KeypadConfig::from_toml_str(
            r#"
            [locale]
            grouping_separator = ","
            "#,
        );

        assert!(matches!(
            result,
            Err(ConfigError::Locale(LocaleError::SameSeparators(',')))
        ));
    }

    #[test]
    fn rejects_space_as_decimal_separator() {
        let result = KeypadConfig::from_toml_str(
            r#"
            [locale]
            decimal_separator = " "
            "#,
        );

        assert!(matches!(
            result,
            Err(ConfigError::Locale(LocaleError::WhitespaceSeparator(' ')))
        ));
    }

    #[test]
    fn rejects_multi_character_separator() {
        let result = KeypadConfig::from_toml_str(
            r#"
            [locale]
            decimal_separator = ",,"
            "#,
        );

        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn override_replaces_file_value() {
        let config = KeypadConfig::default().with_max_minor_digits(Some(3));

        assert_eq!(config.entry.max_minor_digits, Some(3));
    }

    #[test]
    fn missing_override_keeps_file_value() {
        let config = KeypadConfig {
            entry: EntryRules::cents(),
            ..KeypadConfig::default()
        }
        .with_max_minor_digits(None);

        assert_eq!(config.entry, EntryRules::cents());
    }

    #[test]
    fn load_reports_missing_file() {
        let result = KeypadConfig::load(Path::new("does/not/exist.toml"));

        assert!(matches!(result, Err(ConfigError::Io { .. })));
    }
}
