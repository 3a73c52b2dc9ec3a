//! # Storage Layer
//!
//! The [`DataStore`] trait abstracts where a user's notes live between sessions.
//! Business logic only ever sees a [`NoteStore`]; the backend decides how its text form
//! (see [`crate::format`]) is kept.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: Production storage, one file per user
//!   - `<data dir>/<username>_notes.txt` (suffix is configurable)
//!   - Writes go through a temp file and a rename
//!
//! - [`memory::InMemoryStore`]: In-memory storage for testing
//!   - Keeps the serialized text per user, so the file format is still exercised
//!   - Can be told to fail writes
//!
//! ## Contract
//!
//! - `load_notes` returns `Ok(None)` when the user has no saved notes yet.
//! - `save_notes` replaces the user's saved notes wholesale.

use crate::error::Result;
use crate::notes::NoteStore;

pub mod fs;
pub mod memory;

/// Abstract interface for per-user notes persistence.
pub trait DataStore {
    /// Read the saved notes for `username`, if any
    fn load_notes(&self, username: &str) -> Result<Option<NoteStore>>;

    /// Overwrite the saved notes for `username`
    fn save_notes(&mut self, username: &str, notes: &NoteStore) -> Result<()>;
}
