use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::notes::NoteStore;
use crate::store::DataStore;

pub fn run<S: DataStore>(store: &mut S, username: &str, notes: &NoteStore) -> Result<CmdResult> {
    store.save_notes(username, notes)?;
    Ok(CmdResult::default()
        .with_affected_subjects(notes.subjects().map(str::to_string).collect())
        .with_message(CmdMessage::success("Notes saved.")))
}
