// Settings module
// Raw on-disk configuration plus the validated grid shape built from it

use std::collections::HashSet;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::models::slot::MINUTES_PER_HOUR;
use crate::utils::error::ConfigError;

pub const DEFAULT_DAYS: [&str; 7] = [
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
    "Sunday",
];
pub const DEFAULT_STEP: u16 = 10;
pub const DEFAULT_LOCALE: &str = "en-US";
pub const DEFAULT_TIME_FORMAT: &str = "HH:mm";
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 20;

/// Toolbar captions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ToolbarLabels {
    pub draw: String,
    pub erase: String,
    pub save: String,
    pub clear: String,
}

impl Default for ToolbarLabels {
    fn default() -> Self {
        Self {
            draw: "✍️ Draw".to_string(),
            erase: "❌ Erase".to_string(),
            save: "💾 Save".to_string(),
            clear: "🗑 Clear".to_string(),
        }
    }
}

/// Everything `timebrush.toml` may contain. Every key is optional.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TimeBrushConfig {
    pub days: Vec<String>,
    pub step: u16,
    pub locale: String,
    pub time_format: String,
    pub fetch_url: Option<String>,
    pub save_url: Option<String>,
    pub storage_path: Option<PathBuf>,
    pub request_timeout_secs: u64,
    pub labels: ToolbarLabels,
}

impl Default for TimeBrushConfig {
    fn default() -> Self {
        Self {
            days: DEFAULT_DAYS.iter().map(|day| day.to_string()).collect(),
            step: DEFAULT_STEP,
            locale: DEFAULT_LOCALE.to_string(),
            time_format: DEFAULT_TIME_FORMAT.to_string(),
            fetch_url: None,
            save_url: None,
            storage_path: None,
            request_timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
            labels: ToolbarLabels::default(),
        }
    }
}

impl TimeBrushConfig {
    /// Validates the grid-shaping part of the config.
    pub fn grid_config(&self) -> Result<GridConfig, ConfigError> {
        GridConfig::new(self.days.clone(), self.step)
            .map(|grid| grid.with_display(&self.locale, &self.time_format))
    }
}

/// A grid shape that is known to be buildable: non-empty unique day labels and
/// a step that tiles the hour.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridConfig {
    days: Vec<String>,
    step: u16,
    locale: String,
    time_format: String,
}

impl GridConfig {
    pub fn new(days: Vec<String>, step: u16) -> Result<Self, ConfigError> {
        if step == 0 || step > MINUTES_PER_HOUR {
            return Err(ConfigError::StepOutOfRange(step));
        }
        if MINUTES_PER_HOUR % step != 0 {
            return Err(ConfigError::StepNotDivisor(step));
        }
        if days.is_empty() {
            return Err(ConfigError::NoDays);
        }

        let mut seen = HashSet::new();
        for day in &days {
            if !seen.insert(day.as_str()) {
                return Err(ConfigError::DuplicateDay(day.clone()));
            }
        }

        Ok(Self {
            days,
            step,
            locale: DEFAULT_LOCALE.to_string(),
            time_format: DEFAULT_TIME_FORMAT.to_string(),
        })
    }

    pub fn with_display(mut self, locale: &str, time_format: &str) -> Self {
        self.locale = locale.to_string();
        self.time_format = time_format.to_string();
        self
    }

    pub fn days(&self) -> &[String] {
        &self.days
    }

    pub fn day_count(&self) -> usize {
        self.days.len()
    }

    pub fn step(&self) -> u16 {
        self.step
    }

    pub fn locale(&self) -> &str {
        &self.locale
    }

    pub fn time_format(&self) -> &str {
        &self.time_format
    }
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            days: DEFAULT_DAYS.iter().map(|day| day.to_string()).collect(),
            step: DEFAULT_STEP,
            locale: DEFAULT_LOCALE.to_string(),
            time_format: DEFAULT_TIME_FORMAT.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    fn days(labels: &[&str]) -> Vec<String> {
        labels.iter().map(|label| label.to_string()).collect()
    }

    #[test]
    fn test_default_config_is_a_valid_week() {
        let grid = TimeBrushConfig::default().grid_config().unwrap();
        assert_eq!(grid.day_count(), 7);
        assert_eq!(grid.days()[0], "Monday");
        assert_eq!(grid.step(), 10);
        assert_eq!(grid, GridConfig::default());
    }

    #[test_case(1; "one minute")]
    #[test_case(15; "quarter hour")]
    #[test_case(30; "half hour")]
    #[test_case(60; "full hour")]
    fn test_steps_that_tile_the_hour_are_accepted(step: u16) {
        assert!(GridConfig::new(days(&["Mon"]), step).is_ok());
    }

    #[test_case(0, ConfigError::StepOutOfRange(0); "zero")]
    #[test_case(90, ConfigError::StepOutOfRange(90); "longer than an hour")]
    #[test_case(7, ConfigError::StepNotDivisor(7); "seven")]
    #[test_case(25, ConfigError::StepNotDivisor(25); "twenty five")]
    fn test_bad_steps_are_rejected(step: u16, expected: ConfigError) {
        assert_eq!(GridConfig::new(days(&["Mon"]), step), Err(expected));
    }

    #[test]
    fn test_empty_day_list_is_rejected() {
        assert_eq!(GridConfig::new(Vec::new(), 10), Err(ConfigError::NoDays));
    }

    #[test]
    fn test_duplicate_day_labels_are_rejected() {
        assert_eq!(
            GridConfig::new(days(&["Mon", "Tue", "Mon"]), 10),
            Err(ConfigError::DuplicateDay("Mon".to_string()))
        );
    }

    #[test]
    fn test_partial_toml_falls_back_to_defaults() {
        let config: TimeBrushConfig = toml::from_str(
            r#"
            step = 30
            save_url = "https://example.com/save"

            [labels]
            save = "Store"
            clear = "Reset"
            "#,
        )
        .unwrap();

        assert_eq!(config.step, 30);
        assert_eq!(config.days.len(), 7);
        assert_eq!(config.save_url.as_deref(), Some("https://example.com/save"));
        assert_eq!(config.fetch_url, None);
        assert_eq!(config.labels.save, "Store");
        assert_eq!(config.labels.clear, "Reset");
        assert_eq!(config.labels.draw, ToolbarLabels::default().draw);
    }

    #[test]
    fn test_display_options_flow_into_grid_config() {
        let config = TimeBrushConfig {
            locale: "en-GB".to_string(),
            time_format: "hh:mm a".to_string(),
            ..TimeBrushConfig::default()
        };
        let grid = config.grid_config().unwrap();
        assert_eq!(grid.locale(), "en-GB");
        assert_eq!(grid.time_format(), "hh:mm a");
    }
}
