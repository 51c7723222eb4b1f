//! Configuration management module
//!
//! Handles loading, saving, and validation of the card setup, gesture
//! tuning and user preferences.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::vote::{DEFAULT_FILL_DURATION, SWIPE_THRESHOLD};
use crate::{PondusError, Result, APP_NAME, CONFIG_FILE};

pub mod persistence;

/// Application configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Name recorded on polls and votes made from this machine
    pub user: String,
    /// Gauge fill duration in milliseconds
    pub animation_ms: u64,
    /// UI redraw interval in milliseconds
    pub tick_rate_ms: u64,
    /// Polls shown per page by `poll list`
    pub polls_per_page: usize,
    /// Content and starting tallies of the home card
    pub card: CardConfig,
    /// Swipe recognition
    pub gesture: GestureConfig,
}

/// The card shown on the Home tab
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CardConfig {
    pub question: String,
    /// Top option label (stands in for the first image)
    pub label_a: String,
    /// Bottom option label (stands in for the second image)
    pub label_b: String,
    pub initial_a: u64,
    pub initial_b: u64,
}

/// Swipe tuning
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GestureConfig {
    /// Displacement a swipe must exceed (strictly) to vote
    pub swipe_threshold: f64,
    /// Displacement units per terminal row dragged
    pub units_per_row: f64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            user: default_user(),
            animation_ms: DEFAULT_FILL_DURATION.as_millis() as u64,
            tick_rate_ms: 50,
            polls_per_page: 10,
            card: CardConfig::default(),
            gesture: GestureConfig::default(),
        }
    }
}

impl Default for CardConfig {
    fn default() -> Self {
        Self {
            question: "Which one should I pick?".to_string(),
            label_a: "Matiz".to_string(),
            label_b: "BMW".to_string(),
            initial_a: 10,
            initial_b: 20,
        }
    }
}

impl Default for GestureConfig {
    fn default() -> Self {
        Self {
            swipe_threshold: SWIPE_THRESHOLD,
            units_per_row: 25.0,
        }
    }
}

fn default_user() -> String {
    std::env::var("USER")
        .or_else(|_| std::env::var("USERNAME"))
        .unwrap_or_else(|_| "anonymous".to_string())
}

impl AppConfig {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate the configuration parameters
    pub fn validate(&self) -> Result<()> {
        if self.user.trim().is_empty() {
            return Err(PondusError::Config("User name must not be empty".to_string()));
        }

        if self.card.question.trim().is_empty() {
            return Err(PondusError::Config("Card question must not be empty".to_string()));
        }

        if self.card.label_a.trim().is_empty() || self.card.label_b.trim().is_empty() {
            return Err(PondusError::Config("Option labels must not be empty".to_string()));
        }

        // Room for the one vote the card will take
        let room = self
            .card
            .initial_a
            .checked_add(self.card.initial_b)
            .and_then(|total| total.checked_add(1));
        if room.is_none() {
            return Err(PondusError::Config("Initial counts are too large".to_string()));
        }

        if !self.gesture.swipe_threshold.is_finite() || self.gesture.swipe_threshold <= 0.0 {
            return Err(PondusError::Config(
                "Swipe threshold must be a positive number".to_string(),
            ));
        }

        if !self.gesture.units_per_row.is_finite() || self.gesture.units_per_row <= 0.0 {
            return Err(PondusError::Config(
                "Units per row must be a positive number".to_string(),
            ));
        }

        const MIN_ANIMATION_MS: u64 = 500;
        const MAX_ANIMATION_MS: u64 = 1000;
        if !(MIN_ANIMATION_MS..=MAX_ANIMATION_MS).contains(&self.animation_ms) {
            return Err(PondusError::Config(format!(
                "Animation duration must be between {} and {} ms",
                MIN_ANIMATION_MS, MAX_ANIMATION_MS
            )));
        }

        const MIN_TICK_MS: u64 = 10;
        const MAX_TICK_MS: u64 = 1000;
        if !(MIN_TICK_MS..=MAX_TICK_MS).contains(&self.tick_rate_ms) {
            return Err(PondusError::Config(format!(
                "Tick rate must be between {} and {} ms",
                MIN_TICK_MS, MAX_TICK_MS
            )));
        }

        const MAX_PER_PAGE: usize = 100;
        if self.polls_per_page == 0 || self.polls_per_page > MAX_PER_PAGE {
            return Err(PondusError::Config(format!(
                "Polls per page must be between 1 and {}",
                MAX_PER_PAGE
            )));
        }

        Ok(())
    }

    pub fn animation_duration(&self) -> Duration {
        Duration::from_millis(self.animation_ms)
    }

    pub fn tick_rate(&self) -> Duration {
        Duration::from_millis(self.tick_rate_ms)
    }

    /// Set the acting user
    pub fn with_user(mut self, user: impl Into<String>) -> Self {
        self.user = user.into();
        self
    }

    /// Set the card question and option labels
    pub fn with_card(mut self, card: CardConfig) -> Self {
        self.card = card;
        self
    }

    /// Set the swipe threshold
    pub fn with_swipe_threshold(mut self, threshold: f64) -> Self {
        self.gesture.swipe_threshold = threshold;
        self
    }

    /// Set the gauge fill duration
    pub fn with_animation_ms(mut self, ms: u64) -> Self {
        self.animation_ms = ms;
        self
    }

    /// Set the listing page size
    pub fn with_polls_per_page(mut self, per_page: usize) -> Self {
        self.polls_per_page = per_page;
        self
    }

    /// Load configuration from the standard config file location
    /// Returns default configuration if file doesn't exist
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_file_path()?)
    }

    /// Load configuration from an explicit path
    pub fn load_from(config_path: &Path) -> Result<Self> {
        if !config_path.exists() {
            debug!(path = %config_path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }

        let content = fs::read_to_string(config_path).map_err(|e| {
            PondusError::Config(format!(
                "Failed to read config file {}: {}",
                config_path.display(),
                e
            ))
        })?;

        let config: Self = toml::from_str(&content).map_err(|e| {
            PondusError::Config(format!(
                "Failed to parse config file {}: {}",
                config_path.display(),
                e
            ))
        })?;

        config.validate()?;

        Ok(config)
    }

    /// Save configuration to the standard config file location
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_file_path()?)
    }

    /// Save configuration to an explicit path
    pub fn save_to(&self, config_path: &Path) -> Result<()> {
        self.validate()?;

        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent).map_err(|e| {
                PondusError::Config(format!(
                    "Failed to create config directory {}: {}",
                    parent.display(),
                    e
                ))
            })?;
        }

        let content = toml::to_string_pretty(self)?;

        fs::write(config_path, content).map_err(|e| {
            PondusError::Config(format!(
                "Failed to write config file {}: {}",
                config_path.display(),
                e
            ))
        })?;

        Ok(())
    }

    /// Get the standard configuration file path
    /// Uses $CONFIG_HOME/pondus/pondus.toml
    pub fn config_file_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| PondusError::Config("Unable to determine config directory".to_string()))?;

        Ok(config_dir.join(APP_NAME).join(CONFIG_FILE))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_is_valid() {
        let config = AppConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.card.initial_a, 10);
        assert_eq!(config.card.initial_b, 20);
        assert_eq!(config.gesture.swipe_threshold, 50.0);
    }

    #[test]
    fn test_toml_round_trip() {
        let config = AppConfig::default()
            .with_user("alice")
            .with_animation_ms(500)
            .with_swipe_threshold(40.0);
        let toml_str = toml::to_string(&config).expect("Failed to serialize to TOML");
        let deserialized: AppConfig = toml::from_str(&toml_str).expect("Failed to deserialize from TOML");
        assert_eq!(config, deserialized);
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let config: AppConfig = toml::from_str(
            r#"
            user = "bob"

            [card]
            question = "Tea or coffee?"
            "#,
        )
        .unwrap();

        assert_eq!(config.user, "bob");
        assert_eq!(config.card.question, "Tea or coffee?");
        assert_eq!(config.card.label_a, "Matiz");
        assert_eq!(config.animation_ms, 800);
    }

    #[test]
    fn test_validation_rejects_bad_values() {
        assert!(AppConfig::default().with_animation_ms(200).validate().is_err());
        assert!(AppConfig::default().with_animation_ms(1500).validate().is_err());
        assert!(AppConfig::default().with_swipe_threshold(0.0).validate().is_err());
        assert!(AppConfig::default().with_swipe_threshold(f64::NAN).validate().is_err());
        assert!(AppConfig::default().with_polls_per_page(0).validate().is_err());
        assert!(AppConfig::default().with_user("  ").validate().is_err());

        let mut config = AppConfig::default();
        config.card.label_b = String::new();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_rejects_counts_that_cannot_take_a_vote() {
        let mut config = AppConfig::default();
        config.card.initial_a = u64::MAX - 1;
        config.card.initial_b = 5;
        assert!(matches!(config.validate(), Err(PondusError::Config(_))));

        config.card.initial_a = u64::MAX - 6;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nested").join(CONFIG_FILE);

        let config = AppConfig::default().with_user("carol");
        config.save_to(&path).unwrap();

        let loaded = AppConfig::load_from(&path).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_load_missing_file_gives_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let loaded = AppConfig::load_from(&temp_dir.path().join("missing.toml")).unwrap();
        assert_eq!(loaded, AppConfig::default());
    }

    #[test]
    fn test_load_invalid_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join(CONFIG_FILE);
        fs::write(&path, "animation_ms = 5").unwrap();

        assert!(matches!(AppConfig::load_from(&path), Err(PondusError::Config(_))));
    }

    #[test]
    fn test_config_file_path() {
        let path = AppConfig::config_file_path().unwrap();
        assert!(path.to_string_lossy().contains("pondus"));
        assert!(path.to_string_lossy().contains("pondus.toml"));
    }
}
