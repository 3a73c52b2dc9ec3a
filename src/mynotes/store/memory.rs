use super::DataStore;
use crate::error::{NotesError, Result};
use crate::format;
use crate::notes::NoteStore;
use std::collections::HashMap;
use std::io;

/// In-memory storage for testing and development.
/// Does NOT persist data.
#[derive(Default)]
pub struct InMemoryStore {
    files: HashMap<String, String>,
    fail_writes: bool,
    writes: usize,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Saved text for `username`, exactly as a file would hold it
    pub fn raw(&self, username: &str) -> Option<&str> {
        self.files.get(username).map(String::as_str)
    }

    /// Replace the saved text for `username` directly
    pub fn set_raw(&mut self, username: &str, text: impl Into<String>) {
        self.files.insert(username.to_string(), text.into());
    }

    /// Make every later `save_notes` fail with an IO error
    pub fn fail_writes(&mut self, fail: bool) {
        self.fail_writes = fail;
    }

    /// Number of successful saves so far
    pub fn writes(&self) -> usize {
        self.writes
    }
}

impl DataStore for InMemoryStore {
    fn load_notes(&self, username: &str) -> Result<Option<NoteStore>> {
        self.files
            .get(username)
            .map(|text| format::parse(text))
            .transpose()
    }

    fn save_notes(&mut self, username: &str, notes: &NoteStore) -> Result<()> {
        if self.fail_writes {
            return Err(NotesError::Io(io::Error::new(
                io::ErrorKind::PermissionDenied,
                "writes disabled",
            )));
        }
        self.files
            .insert(username.to_string(), format::serialize(notes));
        self.writes += 1;
        Ok(())
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;

    pub struct StoreFixture {
        pub store: InMemoryStore,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                store: InMemoryStore::new(),
            }
        }

        /// Seed `username` with `count` subjects of two lines each
        pub fn with_subjects(mut self, username: &str, count: usize) -> Self {
            let mut notes = NoteStore::new();
            for i in 0..count {
                let subject = format!("Subject {}", i + 1);
                notes.add_note(
                    &subject,
                    [format!("First note {}", i + 1), format!("Second note {}", i + 1)],
                );
            }
            self.store.save_notes(username, &notes).unwrap();
            self.store.writes = 0;
            self
        }

        /// Seed `username` with a saved file containing `subject`
        pub fn with_subject(mut self, username: &str, subject: &str, lines: &[&str]) -> Self {
            let mut notes = self
                .store
                .load_notes(username)
                .unwrap()
                .unwrap_or_default();
            notes.add_note(subject, lines.iter().copied());
            self.store.save_notes(username, &notes).unwrap();
            self.store.writes = 0;
            self
        }
    }
}
