//! Startup banner and intro text

use std::io::ErrorKind;
use std::path::Path;

use tracing::{debug, warn};

/// Banner shown before anything else
pub const WELCOME: &str = "✈  Welcome to your Travel Budget Planner  💸";

/// Intro used when no intro file is available
pub const DEFAULT_INTRO: &str = include_str!("../assets/intro.txt");

/// Read the intro text shown before the first prompt
///
/// The file is shown verbatim. A missing or unreadable file falls back to
/// [`DEFAULT_INTRO`].
pub fn load_intro(path: &Path) -> String {
    match std::fs::read_to_string(path) {
        Ok(text) => text,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            debug!(path = %path.display(), "No intro file, using built-in intro");
            DEFAULT_INTRO.to_string()
        }
        Err(e) => {
            warn!(path = %path.display(), error = %e, "Failed to read intro file");
            DEFAULT_INTRO.to_string()
        }
    }
}
