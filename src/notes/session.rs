//! Notes Session
//!
//! Single-slot holder for the most recent extraction result.
//!
//! Each upload builds its `ExtractionResult` off to the side and installs it
//! with one `replace` call, so readers see either the previous upload or the
//! new one, never a half-filled state. There is no history and no per-client
//! isolation: every caller shares the one slot.

use std::sync::Arc;

use parking_lot::RwLock;

use super::types::ExtractionResult;

/// Shared handle to the current notes
#[derive(Clone, Default)]
pub struct NotesSession {
    inner: Arc<RwLock<Arc<ExtractionResult>>>,
}

impl NotesSession {
    /// Create an empty session
    pub fn new() -> Self {
        Self::default()
    }

    /// Discard the current notes and install `result`
    ///
    /// Returns the result that was replaced.
    pub fn replace(&self, result: ExtractionResult) -> Arc<ExtractionResult> {
        let next = Arc::new(result);
        let previous = std::mem::replace(&mut *self.inner.write(), Arc::clone(&next));

        tracing::debug!(
            texts = next.texts.len(),
            images = next.images.len(),
            replaced_texts = previous.texts.len(),
            replaced_images = previous.images.len(),
            "Notes session replaced"
        );

        previous
    }

    /// Snapshot of the current notes (empty before the first upload)
    pub fn read(&self) -> Arc<ExtractionResult> {
        Arc::clone(&self.inner.read())
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn result(texts: &[&str], images: &[&str]) -> ExtractionResult {
        ExtractionResult {
            texts: texts.iter().map(|s| s.to_string()).collect(),
            images: images.iter().map(|s| s.to_string()).collect(),
        }
    }

    #[test]
    fn test_empty_before_first_upload() {
        let session = NotesSession::new();
        assert!(session.read().is_empty());
    }

    #[test]
    fn test_replace_then_read() {
        let session = NotesSession::new();
        let uploaded = result(&["page one", "page two"], &["a_0.png", "a_1.png"]);

        session.replace(uploaded.clone());

        assert_eq!(*session.read(), uploaded);
    }

    #[test]
    fn test_replace_discards_previous() {
        let session = NotesSession::new();
        session.replace(result(&["old"], &["old.png"]));

        let previous = session.replace(result(&["new"], &[]));

        assert_eq!(previous.texts, vec!["old"]);
        assert_eq!(session.read().texts, vec!["new"]);
        assert!(session.read().images.is_empty());
    }

    #[test]
    fn test_snapshot_survives_replace() {
        let session = NotesSession::new();
        session.replace(result(&["first"], &[]));

        let snapshot = session.read();
        session.replace(result(&["second"], &[]));

        assert_eq!(snapshot.texts, vec!["first"]);
        assert_eq!(session.read().texts, vec!["second"]);
    }

    #[test]
    fn test_clones_share_slot() {
        let session = NotesSession::new();
        let handle = session.clone();

        handle.replace(result(&["shared"], &[]));

        assert_eq!(session.read().texts, vec!["shared"]);
    }

    #[test]
    fn test_concurrent_readers_never_see_partial_state() {
        let session = NotesSession::new();
        let full = result(&["a", "b", "c"], &["x_0.png", "x_1.png", "x_2.png"]);

        let writer = {
            let session = session.clone();
            let full = full.clone();
            std::thread::spawn(move || {
                for _ in 0..200 {
                    session.replace(full.clone());
                }
            })
        };

        for _ in 0..200 {
            let seen = session.read();
            assert!(seen.is_empty() || *seen == full);
        }

        writer.join().unwrap();
        assert_eq!(*session.read(), full);
    }
}
