//! Interactive login and menu loop.
//!
//! Everything here reads from a `BufRead` and writes to a `Write`, so the whole session
//! can be scripted in tests. Failures coming back from the API are printed and the menu
//! carries on; only console I/O errors end the loop early.

use super::print::{print_all_subjects, print_error, print_messages, print_subject};
use mynotes::api::{CmdResult, NotesApi};
use mynotes::error::{NotesError, Result};
use mynotes::model::User;
use mynotes::store::DataStore;
use std::io::{self, BufRead, Write};

pub const BANNER: &str = "--- MyNotes Software ---";

const MENU: &str = "Menu:
1. Add Note
2. View Notes for a Subject
3. View All Notes
4. Save Notes
5. Load Notes
6. Delete Notes for a Subject
7. Exit";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    AddNote,
    ViewNotes,
    ViewAllNotes,
    SaveNotes,
    LoadNotes,
    DeleteNotes,
    Exit,
}

impl MenuChoice {
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim().parse::<u32>().ok()? {
            1 => Some(Self::AddNote),
            2 => Some(Self::ViewNotes),
            3 => Some(Self::ViewAllNotes),
            4 => Some(Self::SaveNotes),
            5 => Some(Self::LoadNotes),
            6 => Some(Self::DeleteNotes),
            7 => Some(Self::Exit),
            _ => None,
        }
    }
}

enum Step {
    Continue,
    EndOfInput,
}

pub struct Console<R, W> {
    input: R,
    out: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, out: W) -> Self {
        Self { input, out }
    }

    pub fn say(&mut self, text: &str) -> io::Result<()> {
        writeln!(self.out, "{}", text)
    }

    /// Writes `label` without a newline and reads one line. `None` at end of input.
    pub fn prompt(&mut self, label: &str) -> io::Result<Option<String>> {
        write!(self.out, "{}", label)?;
        self.out.flush()?;
        self.read_line()
    }

    fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut buf = String::new();
        if self.input.read_line(&mut buf)? == 0 {
            return Ok(None);
        }
        if buf.ends_with('\n') {
            buf.pop();
            if buf.ends_with('\r') {
                buf.pop();
            }
        }
        Ok(Some(buf))
    }

    fn report(&mut self, result: Result<CmdResult>) -> io::Result<()> {
        match result {
            Ok(result) => print_messages(&mut self.out, &result.messages),
            Err(e) => {
                log::warn!("operation failed: {}", e);
                print_error(&mut self.out, &e)
            }
        }
    }
}

/// Asks for whatever credentials were not supplied up front, then checks the login
/// password. Running out of input counts as a failed login.
pub fn login<S, R, W>(
    console: &mut Console<R, W>,
    store: S,
    username: Option<String>,
    password: Option<String>,
) -> Result<NotesApi<S>>
where
    S: DataStore,
    R: BufRead,
    W: Write,
{
    let username = match username {
        Some(name) => name,
        None => require(console.prompt("Enter username: ")?)?.trim().to_string(),
    };
    let password = match password {
        Some(pw) => pw,
        None => require(console.prompt("Enter password: ")?)?,
    };
    let entered = console
        .prompt("Enter password to login: ")?
        .ok_or_else(|| NotesError::AuthenticationFailed(username.clone()))?;

    NotesApi::login(store, User::new(username, password), &entered)
}

fn require(answer: Option<String>) -> Result<String> {
    answer.ok_or_else(|| NotesError::Io(io::ErrorKind::UnexpectedEof.into()))
}

/// Runs the numbered menu until the user exits or input runs out.
pub fn run_menu<S, R, W>(
    console: &mut Console<R, W>,
    api: &mut NotesApi<S>,
    end_marker: &str,
) -> io::Result<()>
where
    S: DataStore,
    R: BufRead,
    W: Write,
{
    loop {
        console.say("")?;
        console.say(MENU)?;
        let Some(answer) = console.prompt("Enter your choice: ")? else {
            break;
        };

        let step = match MenuChoice::parse(&answer) {
            Some(MenuChoice::Exit) => break,
            Some(choice) => handle_choice(console, api, choice, end_marker)?,
            None => {
                console.say("Invalid choice. Please try again.")?;
                Step::Continue
            }
        };
        if let Step::EndOfInput = step {
            break;
        }
    }
    console.say("Exiting...")
}

fn handle_choice<S, R, W>(
    console: &mut Console<R, W>,
    api: &mut NotesApi<S>,
    choice: MenuChoice,
    end_marker: &str,
) -> io::Result<Step>
where
    S: DataStore,
    R: BufRead,
    W: Write,
{
    match choice {
        MenuChoice::AddNote => {
            let Some(subject) = console.prompt("Enter subject: ")? else {
                return Ok(Step::EndOfInput);
            };
            let subject = subject.trim().to_string();
            console.say(&format!(
                "Enter notes for {} (end input with '{}' on a new line):",
                subject, end_marker
            ))?;

            let mut lines = Vec::new();
            while let Some(line) = console.read_line()? {
                if line == end_marker {
                    break;
                }
                lines.push(line);
            }
            let result = api.add_note(&subject, lines);
            console.report(result)?;
        }
        MenuChoice::ViewNotes => {
            let Some(subject) = console.prompt("Enter subject to view notes: ")? else {
                return Ok(Step::EndOfInput);
            };
            match api.view_notes(subject.trim()) {
                Ok(result) => {
                    for entry in &result.listed {
                        print_subject(&mut console.out, entry)?;
                    }
                    print_messages(&mut console.out, &result.messages)?;
                }
                Err(e) => print_error(&mut console.out, &e)?,
            }
        }
        MenuChoice::ViewAllNotes => match api.view_all_notes() {
            Ok(result) => {
                print_all_subjects(&mut console.out, &result.listed)?;
                print_messages(&mut console.out, &result.messages)?;
            }
            Err(e) => print_error(&mut console.out, &e)?,
        },
        MenuChoice::SaveNotes => {
            let result = api.save_notes();
            console.report(result)?;
        }
        MenuChoice::LoadNotes => {
            let result = api.load_notes();
            console.report(result)?;
        }
        MenuChoice::DeleteNotes => {
            let Some(subject) = console.prompt("Enter subject to delete notes: ")? else {
                return Ok(Step::EndOfInput);
            };
            let result = api.delete_notes(subject.trim());
            console.report(result)?;
        }
        MenuChoice::Exit => {}
    }
    Ok(Step::Continue)
}

/// Loads the user's saved notes right after login and reports the outcome.
pub fn load_on_start<S, R, W>(console: &mut Console<R, W>, api: &mut NotesApi<S>) -> io::Result<()>
where
    S: DataStore,
    R: BufRead,
    W: Write,
{
    let result = api.load_notes();
    console.report(result)
}
