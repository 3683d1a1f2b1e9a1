//! User settings for the trip budget planner
//!
//! Manages user preferences including the currency symbol, how the final
//! outcome is classified, and where the trip document is written.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use super::paths::TripPaths;
use crate::error::TripError;

/// How the final summary decides between "on budget" and "over budget"
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum OutcomeRule {
    /// On budget when the remaining allowance per day meets the daily target
    #[default]
    DailyTarget,
    /// On budget when any allowance per day remains
    Positive,
}

/// Trip document settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MirrorSettings {
    /// Whether session updates are written to the trip document
    #[serde(default = "default_true")]
    pub enabled: bool,

    /// Document location; defaults to `trip-document.txt` in the base directory
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub document: Option<PathBuf>,

    /// Empty the document before each session instead of appending to it
    #[serde(default)]
    pub clear_on_start: bool,
}

impl Default for MirrorSettings {
    fn default() -> Self {
        Self {
            enabled: true,
            document: None,
            clear_on_start: false,
        }
    }
}

impl MirrorSettings {
    /// Resolve the document path against the configured paths
    pub fn document_path(&self, paths: &TripPaths) -> PathBuf {
        self.document
            .clone()
            .unwrap_or_else(|| paths.document_file())
    }
}

/// User settings for the trip budget planner
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Currency symbol shown before amounts
    #[serde(default = "default_currency")]
    pub currency_symbol: String,

    /// Whether terminal output uses colours and bold text
    #[serde(default = "default_true")]
    pub styled_output: bool,

    /// Rule used to classify the final outcome
    #[serde(default)]
    pub outcome_rule: OutcomeRule,

    /// Intro text file shown at startup; defaults to `intro.txt` in the base directory
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub intro_file: Option<PathBuf>,

    /// Trip document settings
    #[serde(default)]
    pub mirror: MirrorSettings,
}

fn default_schema_version() -> u32 {
    1
}

fn default_currency() -> String {
    crate::models::money::DEFAULT_SYMBOL.to_string()
}

fn default_true() -> bool {
    true
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            currency_symbol: default_currency(),
            styled_output: true,
            outcome_rule: OutcomeRule::default(),
            intro_file: None,
            mirror: MirrorSettings::default(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or create default settings if the file doesn't exist
    pub fn load_or_create(paths: &TripPaths) -> Result<Self, TripError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path)
                .map_err(|e| TripError::Io(format!("Failed to read settings file: {}", e)))?;

            let settings: Settings = serde_json::from_str(&contents)?;
            Ok(settings)
        } else {
            // Don't save yet - let caller decide when to persist
            Ok(Settings::default())
        }
    }

    /// Save settings to disk
    pub fn save(&self, paths: &TripPaths) -> Result<(), TripError> {
        paths.ensure_directories()?;

        let contents = serde_json::to_string_pretty(self)?;

        std::fs::write(paths.settings_file(), contents)
            .map_err(|e| TripError::Io(format!("Failed to write settings file: {}", e)))?;

        Ok(())
    }

    /// Intro file to read at startup
    pub fn intro_path(&self, paths: &TripPaths) -> PathBuf {
        self.intro_file
            .clone()
            .unwrap_or_else(|| paths.intro_file())
    }
}
