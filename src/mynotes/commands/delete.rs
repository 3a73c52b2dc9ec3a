use crate::commands::{not_found_message, CmdMessage, CmdResult};
use crate::error::Result;
use crate::notes::NoteStore;
use crate::store::DataStore;

/// Removes `subject` and immediately re-saves the user's notes.
///
/// A missing subject is reported, not raised, and nothing is written.
pub fn run<S: DataStore>(
    store: &mut S,
    username: &str,
    notes: &mut NoteStore,
    subject: &str,
) -> Result<CmdResult> {
    if notes.remove_subject(subject).is_none() {
        return Ok(CmdResult::default().with_message(not_found_message(subject)));
    }

    store.save_notes(username, notes)?;
    log::debug!("deleted '{}' and re-saved notes for {}", subject, username);

    Ok(CmdResult::default()
        .with_affected_subjects(vec![subject.to_string()])
        .with_message(CmdMessage::success(format!(
            "Notes for Subject '{}' deleted.",
            subject
        ))))
}
