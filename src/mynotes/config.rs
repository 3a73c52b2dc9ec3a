use crate::error::{NotesError, Result};
use serde::Deserialize;
use std::fs;
use std::path::Path;

const CONFIG_FILENAME: &str = "mynotes.json";
const DEFAULT_FILE_SUFFIX: &str = "_notes.txt";
const DEFAULT_END_MARKER: &str = "end";

/// Configuration for mynotes, stored in `mynotes.json` in the data directory
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct NotesConfig {
    /// Appended to the username to name the notes file (e.g. "_notes.txt")
    #[serde(default = "default_file_suffix")]
    pub file_suffix: String,

    /// Line that terminates free-text note entry
    #[serde(default = "default_end_marker")]
    pub end_marker: String,
}

fn default_file_suffix() -> String {
    DEFAULT_FILE_SUFFIX.to_string()
}

fn default_end_marker() -> String {
    DEFAULT_END_MARKER.to_string()
}

impl Default for NotesConfig {
    fn default() -> Self {
        Self {
            file_suffix: default_file_suffix(),
            end_marker: default_end_marker(),
        }
    }
}

impl NotesConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(NotesError::Io)?;
        let config: NotesConfig =
            serde_json::from_str(&content).map_err(NotesError::Serialization)?;
        log::debug!("loaded config from {}", config_path.display());
        Ok(config)
    }

    /// Name of the notes file for `username`
    pub fn notes_filename(&self, username: &str) -> String {
        format!("{}{}", username, self.file_suffix)
    }
}
