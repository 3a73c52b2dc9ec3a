//! # Notes File Format
//!
//! A user's notes are stored as plain text, one block per subject:
//!
//! ```text
//! Bio:
//! y
//! z
//!
//! Math:
//! x
//!
//! ```
//!
//! A header is any line ending in `:`, the subject being the line without that colon.
//! Every other non-empty line is a note for the most recent header. Blank lines only
//! separate blocks.
//!
//! ## Limitations
//!
//! The format has no escaping, so two kinds of content do not survive a round trip:
//! - a blank note line is written out but reads back as a separator and is dropped;
//! - a note line ending in `:` reads back as the header of a new subject.
//!
//! Files are read as bytes and decoded leniently: invalid UTF-8 sequences become
//! `U+FFFD` instead of failing the load.
//!
//! A header followed by no note lines does not create a subject when parsed. When a
//! subject appears in more than one block the last block wins. A note line before any
//! header is rejected with [`NotesError::Parse`].

use crate::error::{NotesError, Result};
use crate::notes::{NoteList, NoteStore};

const HEADER_SUFFIX: char = ':';

/// Renders the whole store, in subject order, as notes-file text.
pub fn serialize(store: &NoteStore) -> String {
    let mut out = String::new();
    for (subject, notes) in store.display_all_notes() {
        out.push_str(subject);
        out.push(HEADER_SUFFIX);
        out.push('\n');
        for note in notes {
            out.push_str(note);
            out.push('\n');
        }
        out.push('\n');
    }
    out
}

/// Parses notes-file text into a fresh store.
pub fn parse(text: &str) -> Result<NoteStore> {
    let mut store = NoteStore::new();
    let mut current: Option<(String, NoteList)> = None;

    for (idx, line) in text.lines().enumerate() {
        if let Some(subject) = line.strip_suffix(HEADER_SUFFIX) {
            flush(&mut store, current.take());
            current = Some((subject.to_string(), NoteList::new()));
        } else if !line.is_empty() {
            match current.as_mut() {
                Some((_, notes)) => notes.push(line.to_string()),
                None => {
                    return Err(NotesError::Parse {
                        line: idx + 1,
                        reason: format!("note '{}' appears before any subject header", line),
                    });
                }
            }
        }
    }
    flush(&mut store, current);

    Ok(store)
}

fn flush(store: &mut NoteStore, block: Option<(String, NoteList)>) {
    if let Some((subject, notes)) = block {
        if !notes.is_empty() {
            store.replace_subject(&subject, notes);
        }
    }
}
