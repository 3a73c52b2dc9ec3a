use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::notes::NoteStore;
use crate::store::DataStore;

/// Merges the user's saved notes into `notes`.
///
/// Saved subjects replace same-named ones in memory; subjects only held in memory are
/// kept. With nothing saved yet the store is left as is. On a read or parse error the
/// store is untouched.
pub fn run<S: DataStore>(store: &S, username: &str, notes: &mut NoteStore) -> Result<CmdResult> {
    let Some(saved) = store.load_notes(username)? else {
        return Ok(CmdResult::default().with_message(CmdMessage::info("No saved notes found.")));
    };

    let subjects: Vec<String> = saved.subjects().map(str::to_string).collect();
    notes.merge_from(saved);
    log::debug!("merged {} saved subject(s) for {}", subjects.len(), username);

    Ok(CmdResult::default()
        .with_affected_subjects(subjects)
        .with_message(CmdMessage::success("Notes loaded.")))
}
