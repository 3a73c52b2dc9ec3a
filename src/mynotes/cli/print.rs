use colored::Colorize;
use mynotes::api::{CmdMessage, MessageLevel};
use mynotes::error::NotesError;
use mynotes::model::SubjectNotes;
use std::io::{self, Write};

pub(super) fn print_messages<W: Write>(out: &mut W, messages: &[CmdMessage]) -> io::Result<()> {
    for message in messages {
        match message.level {
            MessageLevel::Info => writeln!(out, "{}", message.content.dimmed())?,
            MessageLevel::Success => writeln!(out, "{}", message.content.green())?,
            MessageLevel::Warning => writeln!(out, "{}", message.content.yellow())?,
        }
    }
    Ok(())
}

pub(super) fn print_error<W: Write>(out: &mut W, error: &NotesError) -> io::Result<()> {
    writeln!(out, "{}", format!("Error: {}", error).red())
}

pub(super) fn print_subject<W: Write>(out: &mut W, entry: &SubjectNotes) -> io::Result<()> {
    writeln!(out, "Notes for Subject '{}':", entry.subject.bold())?;
    for note in &entry.notes {
        writeln!(out, "{}", note)?;
    }
    Ok(())
}

pub(super) fn print_all_subjects<W: Write>(out: &mut W, listed: &[SubjectNotes]) -> io::Result<()> {
    writeln!(out, "All Subject-wise Notes:")?;
    for entry in listed {
        writeln!(out)?;
        writeln!(out, "Subject: {}", entry.subject.bold())?;
        for note in &entry.notes {
            writeln!(out, "{}", note)?;
        }
    }
    Ok(())
}
