/// The account a session runs under.
///
/// Credentials live only for the session; nothing here is persisted.
#[derive(Debug, Clone)]
pub struct User {
    pub username: String,
    password: String,
}

impl User {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }

    pub fn login(&self, entered_password: &str) -> bool {
        self.password == entered_password
    }
}

/// A subject and its lines, as handed back to UI clients.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubjectNotes {
    pub subject: String,
    pub notes: Vec<String>,
}

impl SubjectNotes {
    pub fn new(subject: impl Into<String>, notes: Vec<String>) -> Self {
        Self {
            subject: subject.into(),
            notes,
        }
    }
}
