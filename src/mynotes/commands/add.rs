use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::notes::NoteStore;

pub fn run(notes: &mut NoteStore, subject: &str, lines: Vec<String>) -> Result<CmdResult> {
    let count = lines.len();
    let existed = notes.contains(subject);
    notes.add_note(subject, lines);

    if subject.is_empty() {
        log::warn!("added {} note(s) under an empty subject", count);
    } else {
        log::debug!("added {} note(s) to '{}'", count, subject);
    }

    let verb = if existed { "Appended" } else { "Added" };
    Ok(CmdResult::default()
        .with_affected_subjects(vec![subject.to_string()])
        .with_message(CmdMessage::success(format!(
            "{} {} note(s) to Subject '{}'.",
            verb, count, subject
        ))))
}
