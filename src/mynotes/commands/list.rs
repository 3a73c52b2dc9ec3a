use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::SubjectNotes;
use crate::notes::NoteStore;

pub fn run(notes: &NoteStore) -> Result<CmdResult> {
    let listed: Vec<SubjectNotes> = notes
        .display_all_notes()
        .map(|(subject, lines)| SubjectNotes::new(subject, lines.to_vec()))
        .collect();

    let mut result = CmdResult::default().with_listed(listed);
    if result.listed.is_empty() {
        result.add_message(CmdMessage::info("No notes yet."));
    }
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lists_every_subject_in_order() {
        let mut notes = NoteStore::new();
        notes.add_note("Math", ["x"]);
        notes.add_note("Bio", ["y", "z"]);

        let result = run(&notes).unwrap();
        let subjects: Vec<_> = result.listed.iter().map(|s| s.subject.as_str()).collect();
        assert_eq!(subjects, vec!["Bio", "Math"]);
        assert_eq!(result.listed[0].notes, vec!["y", "z"]);
    }

    #[test]
    fn empty_store_reports_info() {
        let result = run(&NoteStore::new()).unwrap();
        assert!(result.listed.is_empty());
        assert_eq!(result.messages[0].content, "No notes yet.");
    }

    #[test]
    fn listing_does_not_mutate() {
        let mut notes = NoteStore::new();
        notes.add_note("Math", ["x"]);
        let snapshot = notes.clone();

        run(&notes).unwrap();
        assert_eq!(notes, snapshot);
    }
}
