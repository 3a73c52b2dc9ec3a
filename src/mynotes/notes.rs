//! # The Note Store
//!
//! [`NoteStore`] is the in-memory mapping from subject to its ordered note lines for a
//! single user's session. It is pure data: no file access, no printing.
//!
//! Subjects are kept in a `BTreeMap`, so every enumeration (display, save) walks them in
//! lexicographic order. That keeps output and the on-disk file deterministic.
//!
//! Within a subject, lines keep insertion order and duplicates are allowed. Adding to a
//! subject that already exists appends; it never replaces.

use std::collections::BTreeMap;

/// Ordered lines belonging to one subject.
pub type NoteList = Vec<String>;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NoteStore {
    subjects: BTreeMap<String, NoteList>,
}

impl NoteStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `notes` to `subject`, creating the subject when absent.
    ///
    /// An empty subject is accepted as a literal key. It is degenerate: it is written
    /// as a bare `:` header and reads back as the empty subject.
    pub fn add_note<I, N>(&mut self, subject: &str, notes: I)
    where
        I: IntoIterator<Item = N>,
        N: Into<String>,
    {
        self.subjects
            .entry(subject.to_string())
            .or_default()
            .extend(notes.into_iter().map(Into::into));
    }

    /// Lines for `subject`, or `None` when the subject does not exist.
    ///
    /// The iterator borrows the store; call again to restart it.
    pub fn display_notes<'a>(&'a self, subject: &str) -> Option<impl Iterator<Item = &'a str>> {
        self.subjects
            .get(subject)
            .map(|notes| notes.iter().map(String::as_str))
    }

    /// Every subject with its lines, in subject order.
    pub fn display_all_notes(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.subjects
            .iter()
            .map(|(subject, notes)| (subject.as_str(), notes.as_slice()))
    }

    /// Removes the subject entirely. Returns the removed lines, if any.
    pub fn remove_subject(&mut self, subject: &str) -> Option<NoteList> {
        self.subjects.remove(subject)
    }

    /// Sets the lines of `subject`, replacing whatever was there.
    pub fn replace_subject(&mut self, subject: &str, notes: NoteList) {
        self.subjects.insert(subject.to_string(), notes);
    }

    /// Copies every subject of `other` over this store. Subjects only present here stay.
    pub fn merge_from(&mut self, other: NoteStore) {
        self.subjects.extend(other.subjects);
    }

    pub fn contains(&self, subject: &str) -> bool {
        self.subjects.contains_key(subject)
    }

    pub fn subjects(&self) -> impl Iterator<Item = &str> {
        self.subjects.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.subjects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.subjects.is_empty()
    }
}
