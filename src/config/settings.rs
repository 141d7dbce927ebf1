//! User settings for Finsight
//!
//! Display preferences kept in `config.json`. Every field has a serde
//! default, so older or partial files still load.

use chrono::format::{Item, StrftimeItems};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt::Write as _;
use tracing::debug;

use super::paths::FinsightPaths;
use crate::error::{FinsightError, FinsightResult};
use crate::services::SortKey;

/// User settings for Finsight
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Currency symbol prefixed to amounts
    #[serde(default = "default_currency")]
    pub currency_symbol: String,

    /// Date format preference (strftime format)
    #[serde(default = "default_date_format")]
    pub date_format: String,

    /// Number of expenses shown on the dashboard
    #[serde(default = "default_recent_expense_limit")]
    pub recent_expense_limit: usize,

    /// Ordering used by `expenses` when no `--sort` is given
    #[serde(default)]
    pub default_sort: SortKey,
}

fn default_schema_version() -> u32 {
    1
}

fn default_currency() -> String {
    "$".to_string()
}

fn default_date_format() -> String {
    "%Y-%m-%d".to_string()
}

fn default_recent_expense_limit() -> usize {
    5
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            currency_symbol: default_currency(),
            date_format: default_date_format(),
            recent_expense_limit: default_recent_expense_limit(),
            default_sort: SortKey::default(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or defaults if the file doesn't exist
    pub fn load_or_create(paths: &FinsightPaths) -> FinsightResult<Self> {
        let settings_path = paths.settings_file();

        if !settings_path.exists() {
            debug!(path = %settings_path.display(), "no settings file, using defaults");
            return Ok(Settings::default());
        }

        let contents = std::fs::read_to_string(&settings_path)
            .map_err(|e| FinsightError::Io(format!("Failed to read settings file: {}", e)))?;

        let settings: Settings = serde_json::from_str(&contents)
            .map_err(|e| FinsightError::Config(format!("Failed to parse settings file: {}", e)))?;
        validate_date_format(&settings.date_format)?;
        Ok(settings)
    }

    /// Save settings to disk
    pub fn save(&self, paths: &FinsightPaths) -> FinsightResult<()> {
        paths.ensure_directories()?;

        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| FinsightError::Config(format!("Failed to serialize settings: {}", e)))?;

        std::fs::write(paths.settings_file(), contents)
            .map_err(|e| FinsightError::Io(format!("Failed to write settings file: {}", e)))?;

        Ok(())
    }

    /// Update one setting from its key and a string value
    pub fn set(&mut self, key: &str, value: &str) -> FinsightResult<()> {
        match key {
            "currency_symbol" => self.currency_symbol = value.to_string(),
            "date_format" => {
                validate_date_format(value)?;
                self.date_format = value.to_string();
            }
            "recent_expense_limit" => {
                self.recent_expense_limit = value.parse().map_err(|_| {
                    FinsightError::Config(format!(
                        "recent_expense_limit must be a whole number, got '{}'",
                        value
                    ))
                })?;
            }
            "default_sort" => {
                self.default_sort = value.parse().map_err(FinsightError::Config)?;
            }
            other => {
                return Err(FinsightError::Config(format!("Unknown setting '{}'", other)));
            }
        }
        Ok(())
    }
}

/// Check that a strftime pattern can render a calendar date
///
/// Unknown specifiers and time-of-day fields both fail here instead of at
/// render time.
pub fn validate_date_format(format: &str) -> FinsightResult<()> {
    if format.trim().is_empty() {
        return Err(FinsightError::Config("date_format cannot be empty".into()));
    }

    let mut rendered = String::new();
    let unknown = StrftimeItems::new(format).any(|item| matches!(item, Item::Error));
    if unknown || write!(rendered, "{}", NaiveDate::default().format(format)).is_err() {
        return Err(FinsightError::Config(format!(
            "invalid date_format '{}'",
            format
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.schema_version, 1);
        assert_eq!(settings.currency_symbol, "$");
        assert_eq!(settings.recent_expense_limit, 5);
        assert_eq!(settings.default_sort, SortKey::Date);
    }

    #[test]
    fn test_load_missing_file_gives_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let paths = FinsightPaths::with_base_dir(temp_dir.path());
        assert_eq!(Settings::load_or_create(&paths).unwrap(), Settings::default());
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let paths = FinsightPaths::with_base_dir(temp_dir.path());

        let mut settings = Settings::default();
        settings.currency_symbol = "₹".into();
        settings.default_sort = SortKey::Amount;
        settings.save(&paths).unwrap();

        let loaded = Settings::load_or_create(&paths).unwrap();
        assert_eq!(loaded.currency_symbol, "₹");
        assert_eq!(loaded.default_sort, SortKey::Amount);
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let paths = FinsightPaths::with_base_dir(temp_dir.path());
        std::fs::write(paths.settings_file(), r#"{"default_sort": "description"}"#).unwrap();

        let loaded = Settings::load_or_create(&paths).unwrap();
        assert_eq!(loaded.default_sort, SortKey::Description);
        assert_eq!(loaded.date_format, "%Y-%m-%d");
    }

    #[test]
    fn test_corrupt_file_is_config_error() {
        let temp_dir = TempDir::new().unwrap();
        let paths = FinsightPaths::with_base_dir(temp_dir.path());
        std::fs::write(paths.settings_file(), "not json").unwrap();

        let err = Settings::load_or_create(&paths).unwrap_err();
        assert!(matches!(err, FinsightError::Config(_)));
    }

    #[test]
    fn test_set() {
        let mut settings = Settings::default();
        settings.set("recent_expense_limit", "10").unwrap();
        settings.set("default_sort", "amount").unwrap();
        assert_eq!(settings.recent_expense_limit, 10);
        assert_eq!(settings.default_sort, SortKey::Amount);

        assert!(settings.set("recent_expense_limit", "ten").is_err());
        assert!(settings.set("default_sort", "color").is_err());
        assert!(settings.set("theme", "dark").is_err());
    }

    #[test]
    fn test_set_date_format() {
        let mut settings = Settings::default();
        settings.set("date_format", "%d/%m/%Y").unwrap();
        assert_eq!(settings.date_format, "%d/%m/%Y");

        for bad in ["%Q", "%H:%M", "  ", "%"] {
            let err = settings.set("date_format", bad).unwrap_err();
            assert!(matches!(err, FinsightError::Config(_)), "{bad}");
        }
        assert_eq!(settings.date_format, "%d/%m/%Y");
    }

    #[test]
    fn test_invalid_date_format_in_file_is_config_error() {
        let temp_dir = TempDir::new().unwrap();
        let paths = FinsightPaths::with_base_dir(temp_dir.path());
        std::fs::write(paths.settings_file(), r#"{"date_format": "%Q"}"#).unwrap();

        let err = Settings::load_or_create(&paths).unwrap_err();
        assert!(matches!(err, FinsightError::Config(_)));
        assert!(err.to_string().contains("%Q"));
    }
}
