use crate::commands::{not_found_message, CmdResult};
use crate::error::Result;
use crate::model::SubjectNotes;
use crate::notes::NoteStore;

pub fn run(notes: &NoteStore, subject: &str) -> Result<CmdResult> {
    let result = match notes.display_notes(subject) {
        Some(lines) => CmdResult::default().with_listed(vec![SubjectNotes::new(
            subject,
            lines.map(str::to_string).collect(),
        )]),
        None => CmdResult::default().with_message(not_found_message(subject)),
    };
    Ok(result)
}
