//! Path management for the trip budget planner
//!
//! ## Path Resolution Order
//!
//! 1. `TRIP_BUDGET_DIR` environment variable (if set)
//! 2. The platform configuration directory from `directories`
//!    (`~/.config/trip-budget` on Linux, `%APPDATA%\trip-budget` on Windows)

use std::path::PathBuf;

use directories::ProjectDirs;

use crate::error::{TripError, TripResult};

/// Environment variable that overrides the base directory
pub const DIR_ENV_VAR: &str = "TRIP_BUDGET_DIR";

/// Manages all paths used by the planner
#[derive(Debug, Clone)]
pub struct TripPaths {
    base_dir: PathBuf,
}

impl TripPaths {
    /// Resolve the base directory from the environment or the platform default
    ///
    /// # Errors
    ///
    /// Returns an error if no home directory can be determined.
    pub fn new() -> TripResult<Self> {
        let base_dir = match std::env::var(DIR_ENV_VAR) {
            Ok(custom) if !custom.is_empty() => PathBuf::from(custom),
            _ => resolve_default_path()?,
        };

        Ok(Self { base_dir })
    }

    /// Create TripPaths with a custom base directory
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Get the path to the diagnostic log
    pub fn log_file(&self) -> PathBuf {
        self.base_dir.join("trip-budget.log")
    }

    /// Get the path to the optional intro text override
    pub fn intro_file(&self) -> PathBuf {
        self.base_dir.join("intro.txt")
    }

    /// Get the path to the default trip document
    pub fn document_file(&self) -> PathBuf {
        self.base_dir.join("trip-document.txt")
    }

    /// Ensure the base directory exists
    pub fn ensure_directories(&self) -> TripResult<()> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| TripError::Io(format!("Failed to create base directory: {}", e)))
    }
}

fn resolve_default_path() -> TripResult<PathBuf> {
    ProjectDirs::from("", "", "trip-budget")
        .map(|dirs| dirs.config_dir().to_path_buf())
        .ok_or_else(|| TripError::Config("Could not determine a home directory".into()))
}
