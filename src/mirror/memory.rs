//! In-memory mirror

use crate::error::TripResult;

use super::DocumentMirror;

/// Mirror that keeps appended snippets in memory
#[derive(Debug, Default, Clone)]
pub struct MemoryMirror {
    snippets: Vec<String>,
}

impl MemoryMirror {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snippets in the order they were appended
    pub fn snippets(&self) -> &[String] {
        &self.snippets
    }

    /// Whole document as it would read end to end
    pub fn contents(&self) -> String {
        self.snippets.join("\n")
    }
}

impl DocumentMirror for MemoryMirror {
    fn append(&mut self, text: &str) -> TripResult<()> {
        self.snippets.push(text.to_string());
        Ok(())
    }

    fn clear(&mut self) -> TripResult<()> {
        self.snippets.clear();
        Ok(())
    }
}
