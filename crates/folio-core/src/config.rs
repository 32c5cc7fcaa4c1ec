//! Folio configuration
//!
//! Loaded from `~/.folio/config.toml` when present:
//!
//! ```toml
//! [tracker]
//! threshold = 0.1
//! root_margin = 0
//! mode = "once"
//!
//! [spy]
//! look_ahead = 100
//! scrolled_threshold = 50
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::constants::spy::{DEFAULT_LOOK_AHEAD, DEFAULT_SCROLLED_THRESHOLD};
use crate::constants::terminal::{LOOK_AHEAD_ROWS, SCROLLED_ROWS};
use crate::error::{non_negative, FolioError, Result};
use crate::intersection::{ActivationMode, ObserverConfig};
use crate::paths;

/// Scroll-spy settings
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpySettings {
    /// Added to the scroll position before resolving the active region
    pub look_ahead: f64,
    /// Scroll offset past which the document counts as scrolled
    pub scrolled_threshold: f64,
}

impl Default for SpySettings {
    fn default() -> Self {
        Self {
            look_ahead: DEFAULT_LOOK_AHEAD,
            scrolled_threshold: DEFAULT_SCROLLED_THRESHOLD,
        }
    }
}

/// Config file as written: every key optional
#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct ConfigFile {
    tracker: TrackerSection,
    spy: SpySection,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct TrackerSection {
    threshold: Option<f64>,
    root_margin: Option<f64>,
    mode: Option<ActivationMode>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct SpySection {
    look_ahead: Option<f64>,
    scrolled_threshold: Option<f64>,
}

impl ConfigFile {
    fn overlay(self, base: FolioConfig) -> FolioConfig {
        let tracker = ObserverConfig {
            threshold: self.tracker.threshold.unwrap_or(base.tracker.threshold),
            root_margin: self.tracker.root_margin.unwrap_or(base.tracker.root_margin),
            mode: self.tracker.mode.unwrap_or(base.tracker.mode),
        };
        let spy = SpySettings {
            look_ahead: self.spy.look_ahead.unwrap_or(base.spy.look_ahead),
            scrolled_threshold: self
                .spy
                .scrolled_threshold
                .unwrap_or(base.spy.scrolled_threshold),
        };
        FolioConfig { tracker, spy }
    }
}

/// Top-level configuration
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FolioConfig {
    pub tracker: ObserverConfig,
    pub spy: SpySettings,
}

impl FolioConfig {
    /// Defaults for documents measured in terminal rows
    pub fn terminal() -> Self {
        Self {
            tracker: ObserverConfig::default(),
            spy: SpySettings {
                look_ahead: LOOK_AHEAD_ROWS,
                scrolled_threshold: SCROLLED_ROWS,
            },
        }
    }

    /// Parse a config file on top of the web defaults
    pub fn from_toml_str(raw: &str) -> Result<Self> {
        Self::from_toml_str_over(raw, Self::default())
    }

    /// Parse a config file; keys it leaves out keep their value from `base`
    pub fn from_toml_str_over(raw: &str, base: Self) -> Result<Self> {
        let file: ConfigFile = toml::from_str(raw).map_err(FolioError::ConfigParse)?;
        let config = file.overlay(base);
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: &Path) -> Result<Self> {
        Self::load_over(path, Self::default())
    }

    /// Load a config file on top of `base`
    pub fn load_over(path: &Path, base: Self) -> Result<Self> {
        let raw = std::fs::read_to_string(path)?;
        let config = Self::from_toml_str_over(&raw, base).inspect_err(|e| {
            warn!(path = %path.display(), error = %e, "Rejected config file");
        })?;
        debug!(path = %path.display(), "Loaded config");
        Ok(config)
    }

    /// Load `~/.folio/config.toml` on top of `fallback`, or `fallback` itself
    /// when the file does not exist
    pub fn load_or(fallback: Self) -> Result<Self> {
        let path = paths::config_path();
        if path.exists() {
            Self::load_over(&path, fallback)
        } else {
            Ok(fallback)
        }
    }

    pub fn validate(&self) -> Result<()> {
        self.tracker.validate()?;
        if !non_negative(self.spy.look_ahead) {
            return Err(FolioError::InvalidLookAhead(self.spy.look_ahead));
        }
        if !non_negative(self.spy.scrolled_threshold) {
            return Err(FolioError::InvalidScrolledThreshold(
                self.spy.scrolled_threshold,
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_defaults_match_web_values() {
        let config = FolioConfig::default();
        assert_eq!(config.tracker.threshold, 0.1);
        assert_eq!(config.spy.look_ahead, 100.0);
        assert_eq!(config.spy.scrolled_threshold, 50.0);
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let config = FolioConfig::from_toml_str("[tracker]\nthreshold = 0.5\n").unwrap();
        assert_eq!(config.tracker.threshold, 0.5);
        assert_eq!(config.tracker.mode, ActivationMode::Once);
        assert_eq!(config.spy, SpySettings::default());
    }

    #[test]
    fn test_partial_file_over_terminal_defaults() {
        let config =
            FolioConfig::from_toml_str_over("[tracker]\nthreshold = 0.2\n", FolioConfig::terminal())
                .unwrap();
        assert_eq!(config.tracker.threshold, 0.2);
        assert_eq!(config.spy, FolioConfig::terminal().spy);

        let config =
            FolioConfig::from_toml_str_over("[spy]\nlook_ahead = 5\n", FolioConfig::terminal())
                .unwrap();
        assert_eq!(config.spy.look_ahead, 5.0);
        assert_eq!(config.spy.scrolled_threshold, 1.0);
    }

    #[test]
    fn test_unknown_keys_rejected() {
        let err = FolioConfig::from_toml_str("[spy]\nlookahead = 5\n");
        assert!(matches!(err, Err(FolioError::ConfigParse(_))));
    }

    #[test]
    fn test_full_file() {
        let raw = r#"
            [tracker]
            threshold = 0.25
            root_margin = 2
            mode = "repeat"

            [spy]
            look_ahead = 4
            scrolled_threshold = 1
        "#;
        let config = FolioConfig::from_toml_str(raw).unwrap();
        assert_eq!(config.tracker.root_margin, 2.0);
        assert_eq!(config.tracker.mode, ActivationMode::Repeat);
        assert_eq!(config.spy.look_ahead, 4.0);
    }

    #[test]
    fn test_invalid_values_rejected() {
        let err = FolioConfig::from_toml_str("[tracker]\nthreshold = 2.0\n");
        assert!(matches!(err, Err(FolioError::InvalidThreshold(_))));

        let err = FolioConfig::from_toml_str("[spy]\nlook_ahead = -3.0\n");
        assert!(matches!(err, Err(FolioError::InvalidLookAhead(_))));

        let err = FolioConfig::from_toml_str("[tracker]\nmode = \"sometimes\"\n");
        assert!(matches!(err, Err(FolioError::ConfigParse(_))));
    }

    #[test]
    fn test_load_from_file() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let path = temp_dir.path().join("config.toml");
        std::fs::write(&path, "[spy]\nlook_ahead = 6\n").unwrap();

        let config = FolioConfig::load(&path).unwrap();
        assert_eq!(config.spy.look_ahead, 6.0);

        let over = FolioConfig::load_over(&path, FolioConfig::terminal()).unwrap();
        assert_eq!(over.spy.look_ahead, 6.0);
        assert_eq!(over.spy.scrolled_threshold, 1.0);

        let missing = FolioConfig::load(&temp_dir.path().join("nope.toml"));
        assert!(matches!(missing, Err(FolioError::Io(_))));
    }
}
