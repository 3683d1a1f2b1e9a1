//! Trip document mirror
//!
//! A human-readable echo of the session is appended to an external document
//! so the user can refer back to it later. The mirror is best-effort: callers
//! log and report failures but never let them affect the ledger.
//!
//! # Implementations
//!
//! - [`FileMirror`]: an append-only text document on disk
//! - [`MemoryMirror`]: keeps snippets in memory
//! - [`NullMirror`]: discards everything (mirroring disabled)

mod file;
mod memory;
mod render;

pub use file::FileMirror;
pub use memory::MemoryMirror;
pub use render::{render_table, AMOUNT_WIDTH, CATEGORY_WIDTH};

use crate::error::TripResult;

/// Destination for rendered session text
pub trait DocumentMirror {
    /// Append text to the end of the document
    fn append(&mut self, text: &str) -> TripResult<()>;

    /// Remove all content, leaving the document empty for reuse
    fn clear(&mut self) -> TripResult<()>;
}

/// Mirror that accepts and discards everything
#[derive(Debug, Default, Clone, Copy)]
pub struct NullMirror;

impl DocumentMirror for NullMirror {
    fn append(&mut self, _text: &str) -> TripResult<()> {
        Ok(())
    }

    fn clear(&mut self) -> TripResult<()> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_null_mirror_accepts_everything() {
        let mut mirror = NullMirror;
        assert!(mirror.append("anything").is_ok());
        assert!(mirror.clear().is_ok());
    }

    #[test]
    fn test_mirrors_are_object_safe() {
        let mut mirrors: Vec<Box<dyn DocumentMirror>> =
            vec![Box::new(NullMirror), Box::new(MemoryMirror::new())];
        for mirror in mirrors.iter_mut() {
            mirror.append("hello").unwrap();
        }
    }
}
