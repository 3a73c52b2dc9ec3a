//! # API Facade
//!
//! [`NotesApi`] is the single entry point a UI uses for one session. It owns the logged-in
//! [`User`], their in-memory [`NoteStore`] and the [`DataStore`] backend, and dispatches
//! each operation to its command in `commands/`.
//!
//! It does no printing and no prompting: arguments come in as plain values and results
//! go out as [`CmdResult`]s.
//!
//! ## Generic Over DataStore
//!
//! - Production: `NotesApi<FileStore>`
//! - Testing: `NotesApi<InMemoryStore>`

use crate::commands;
use crate::error::{NotesError, Result};
use crate::model::User;
use crate::notes::NoteStore;
use crate::store::DataStore;

pub struct NotesApi<S: DataStore> {
    store: S,
    user: User,
    notes: NoteStore,
}

impl<S: DataStore> NotesApi<S> {
    /// Starts a session with an empty note store. No password check.
    pub fn new(store: S, user: User) -> Self {
        Self {
            store,
            user,
            notes: NoteStore::new(),
        }
    }

    /// Starts a session only if `entered_password` matches the user's password.
    pub fn login(store: S, user: User, entered_password: &str) -> Result<Self> {
        if !user.login(entered_password) {
            log::warn!("login failed for {}", user.username);
            return Err(NotesError::AuthenticationFailed(user.username));
        }
        log::debug!("login succeeded for {}", user.username);
        Ok(Self::new(store, user))
    }

    pub fn add_note(&mut self, subject: &str, lines: Vec<String>) -> Result<CmdResult> {
        commands::add::run(&mut self.notes, subject, lines)
    }

    pub fn view_notes(&self, subject: &str) -> Result<CmdResult> {
        commands::view::run(&self.notes, subject)
    }

    pub fn view_all_notes(&self) -> Result<CmdResult> {
        commands::list::run(&self.notes)
    }

    pub fn save_notes(&mut self) -> Result<CmdResult> {
        commands::save::run(&mut self.store, &self.user.username, &self.notes)
    }

    pub fn load_notes(&mut self) -> Result<CmdResult> {
        commands::load::run(&self.store, &self.user.username, &mut self.notes)
    }

    pub fn delete_notes(&mut self, subject: &str) -> Result<CmdResult> {
        commands::delete::run(
            &mut self.store,
            &self.user.username,
            &mut self.notes,
            subject,
        )
    }

    pub fn user(&self) -> &User {
        &self.user
    }

    pub fn notes(&self) -> &NoteStore {
        &self.notes
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}

pub use commands::{CmdMessage, CmdResult, MessageLevel};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::StoreFixture;
    use crate::store::memory::InMemoryStore;

    fn lines(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    fn session() -> NotesApi<InMemoryStore> {
        NotesApi::login(InMemoryStore::new(), User::new("alice", "pw"), "pw").unwrap()
    }

    #[test]
    fn login_rejects_wrong_password() {
        let result = NotesApi::login(InMemoryStore::new(), User::new("alice", "pw"), "nope");
        assert!(matches!(
            result,
            Err(NotesError::AuthenticationFailed(name)) if name == "alice"
        ));
    }

    #[test]
    fn add_then_view() {
        let mut api = session();
        api.add_note("Math", lines(&["Algebra basics", "Geometry"]))
            .unwrap();
        api.add_note("Math", lines(&["Trigonometry"])).unwrap();

        let result = api.view_notes("Math").unwrap();
        assert_eq!(
            result.listed[0].notes,
            lines(&["Algebra basics", "Geometry", "Trigonometry"])
        );
    }

    #[test]
    fn save_uses_session_username() {
        let mut api = session();
        api.add_note("Math", lines(&["x"])).unwrap();
        api.add_note("Bio", lines(&["y", "z"])).unwrap();
        api.save_notes().unwrap();

        assert_eq!(api.store().raw("alice"), Some("Bio:\ny\nz\n\nMath:\nx\n\n"));
    }

    #[test]
    fn load_restores_previous_session() {
        let store = StoreFixture::new()
            .with_subject("alice", "Math", &["x"])
            .with_subject("alice", "Bio", &["y", "z"])
            .store;
        let mut api = NotesApi::login(store, User::new("alice", "pw"), "pw").unwrap();
        api.load_notes().unwrap();

        let all = api.view_all_notes().unwrap();
        assert_eq!(all.listed.len(), 2);
        assert_eq!(all.listed[0].subject, "Bio");
        assert_eq!(all.listed[1].notes, lines(&["x"]));
    }

    #[test]
    fn delete_resaves_and_hides_subject() {
        let mut api = session();
        api.add_note("Math", lines(&["x"])).unwrap();
        api.add_note("Bio", lines(&["y", "z"])).unwrap();

        api.delete_notes("Bio").unwrap();

        assert_eq!(api.store().raw("alice"), Some("Math:\nx\n\n"));
        assert!(api.view_notes("Bio").unwrap().is_not_found());
        assert!(api.delete_notes("Bio").unwrap().is_not_found());
    }

    #[test]
    fn views_leave_notes_untouched() {
        let mut api = session();
        api.add_note("Math", lines(&["x"])).unwrap();
        let snapshot = api.notes().clone();

        api.view_notes("Math").unwrap();
        api.view_notes("Missing").unwrap();
        api.view_all_notes().unwrap();

        assert_eq!(api.notes(), &snapshot);
    }
}
