use crate::model::SubjectNotes;

pub mod add;
pub mod delete;
pub mod list;
pub mod load;
pub mod save;
pub mod view;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    /// Subjects created, changed or removed by the command
    pub affected_subjects: Vec<String>,
    /// Subjects to display, in display order
    pub listed: Vec<SubjectNotes>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_affected_subjects(mut self, subjects: Vec<String>) -> Self {
        self.affected_subjects = subjects;
        self
    }

    pub fn with_listed(mut self, listed: Vec<SubjectNotes>) -> Self {
        self.listed = listed;
        self
    }

    pub fn with_message(mut self, message: CmdMessage) -> Self {
        self.messages.push(message);
        self
    }

    /// True when a subject lookup came back empty
    pub fn is_not_found(&self) -> bool {
        self.listed.is_empty()
            && self.affected_subjects.is_empty()
            && self
                .messages
                .iter()
                .any(|m| m.level == MessageLevel::Warning)
    }
}

pub(crate) fn not_found_message(subject: &str) -> CmdMessage {
    CmdMessage::warning(format!("No notes found for Subject '{}'.", subject))
}
