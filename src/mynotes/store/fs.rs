use super::DataStore;
use crate::config::NotesConfig;
use crate::error::{NotesError, Result};
use crate::format;
use crate::notes::NoteStore;
use std::borrow::Cow;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

pub struct FileStore {
    root: PathBuf,
    config: NotesConfig,
}

impl FileStore {
    pub fn new(root: PathBuf) -> Self {
        Self {
            root,
            config: NotesConfig::default(),
        }
    }

    pub fn with_config(mut self, config: &NotesConfig) -> Self {
        self.config = config.clone();
        self
    }

    /// Path of the notes file for `username`, whether or not it exists yet
    pub fn notes_path(&self, username: &str) -> Result<PathBuf> {
        if username.is_empty() || username.contains(['/', '\\']) || username == ".." {
            return Err(NotesError::Store(format!(
                "Username '{}' cannot be used as a file name",
                username
            )));
        }
        Ok(self.root.join(self.config.notes_filename(username)))
    }

    /// Scratch file a save is written to before it replaces the notes file
    pub fn temp_path(&self, username: &str) -> Result<PathBuf> {
        self.notes_path(username)?;
        let filename = self.config.notes_filename(username);
        Ok(self.root.join(format!(".{}.tmp", filename)))
    }

    fn ensure_dir(&self, path: &Path) -> Result<()> {
        if !path.exists() {
            fs::create_dir_all(path).map_err(NotesError::Io)?;
        }
        Ok(())
    }
}

impl DataStore for FileStore {
    fn load_notes(&self, username: &str) -> Result<Option<NoteStore>> {
        let path = self.notes_path(username)?;
        let bytes = match fs::read(&path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                log::debug!("no notes file at {}", path.display());
                return Ok(None);
            }
            Err(e) => return Err(NotesError::Io(e)),
        };

        // Invalid UTF-8 is replaced, not rejected
        let content = String::from_utf8_lossy(&bytes);
        if matches!(content, Cow::Owned(_)) {
            log::warn!("{} is not valid UTF-8; bad bytes replaced", path.display());
        }

        let notes = format::parse(&content)?;
        log::debug!("read {} subject(s) from {}", notes.len(), path.display());
        Ok(Some(notes))
    }

    fn save_notes(&mut self, username: &str, notes: &NoteStore) -> Result<()> {
        let path = self.notes_path(username)?;
        let tmp_file = self.temp_path(username)?;
        self.ensure_dir(&self.root)?;

        let content = format::serialize(notes);

        // Atomic write: a failed save never leaves a half-written notes file
        fs::write(&tmp_file, content).map_err(NotesError::Io)?;
        if let Err(e) = fs::rename(&tmp_file, &path) {
            let _ = fs::remove_file(&tmp_file);
            return Err(NotesError::Io(e));
        }

        log::debug!("wrote {} subject(s) to {}", notes.len(), path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn setup() -> (TempDir, FileStore) {
        let dir = TempDir::new().unwrap();
        let store = FileStore::new(dir.path().to_path_buf());
        (dir, store)
    }

    fn sample() -> NoteStore {
        let mut notes = NoteStore::new();
        notes.add_note("Math", ["x"]);
        notes.add_note("Bio", ["y", "z"]);
        notes
    }

    #[test]
    fn missing_file_loads_as_none() {
        let (_dir, store) = setup();
        assert!(store.load_notes("alice").unwrap().is_none());
    }

    #[test]
    fn save_writes_user_file() {
        let (dir, mut store) = setup();
        store.save_notes("alice", &sample()).unwrap();

        let on_disk = fs::read_to_string(dir.path().join("alice_notes.txt")).unwrap();
        assert_eq!(on_disk, "Bio:\ny\nz\n\nMath:\nx\n\n");
    }

    #[test]
    fn save_then_load() {
        let (_dir, mut store) = setup();
        store.save_notes("alice", &sample()).unwrap();

        assert_eq!(store.load_notes("alice").unwrap(), Some(sample()));
    }

    #[test]
    fn save_overwrites_previous_file() {
        let (dir, mut store) = setup();
        store.save_notes("alice", &sample()).unwrap();

        let mut smaller = NoteStore::new();
        smaller.add_note("Math", ["x"]);
        store.save_notes("alice", &smaller).unwrap();

        let on_disk = fs::read_to_string(dir.path().join("alice_notes.txt")).unwrap();
        assert_eq!(on_disk, "Math:\nx\n\n");
    }

    #[test]
    fn save_leaves_no_temp_files() {
        let (dir, mut store) = setup();
        store.save_notes("alice", &sample()).unwrap();

        for entry in fs::read_dir(dir.path()).unwrap() {
            let path = entry.unwrap().path();
            let name = path.file_name().unwrap().to_str().unwrap();
            assert!(!name.ends_with(".tmp"), "Found leftover tmp file: {}", name);
        }
    }

    #[test]
    fn save_creates_missing_root() {
        let dir = TempDir::new().unwrap();
        let root = dir.path().join("nested").join("notes");
        let mut store = FileStore::new(root.clone());

        store.save_notes("bob", &sample()).unwrap();
        assert!(root.join("bob_notes.txt").exists());
    }

    #[test]
    fn custom_suffix_is_used() {
        let (dir, store) = setup();
        let config = NotesConfig {
            file_suffix: ".notes".to_string(),
            ..NotesConfig::default()
        };
        let mut store = store.with_config(&config);
        store.save_notes("alice", &sample()).unwrap();

        assert!(dir.path().join("alice.notes").exists());
    }

    #[test]
    fn users_are_isolated() {
        let (_dir, mut store) = setup();
        store.save_notes("alice", &sample()).unwrap();

        assert!(store.load_notes("bob").unwrap().is_none());
    }

    #[test]
    fn unusable_username_is_rejected() {
        let (_dir, store) = setup();
        assert!(matches!(
            store.notes_path("../evil"),
            Err(NotesError::Store(_))
        ));
        assert!(matches!(store.notes_path(""), Err(NotesError::Store(_))));
    }

    #[test]
    fn unreadable_content_is_parse_error() {
        let (dir, store) = setup();
        fs::write(dir.path().join("alice_notes.txt"), "orphan line\n").unwrap();

        assert!(matches!(
            store.load_notes("alice"),
            Err(NotesError::Parse { line: 1, .. })
        ));
    }

    #[test]
    fn save_into_unwritable_root_is_error() {
        let dir = TempDir::new().unwrap();
        let blocker = dir.path().join("blocker");
        fs::write(&blocker, "not a directory").unwrap();
        let mut store = FileStore::new(blocker);

        assert!(matches!(
            store.save_notes("alice", &sample()),
            Err(NotesError::Io(_))
        ));
    }

    #[test]
    fn blocked_temp_file_fails_save_and_keeps_old_file() {
        let (dir, mut store) = setup();
        store.save_notes("alice", &sample()).unwrap();
        fs::create_dir(store.temp_path("alice").unwrap()).unwrap();

        let mut smaller = NoteStore::new();
        smaller.add_note("Math", ["x"]);
        assert!(matches!(
            store.save_notes("alice", &smaller),
            Err(NotesError::Io(_))
        ));

        let on_disk = fs::read_to_string(dir.path().join("alice_notes.txt")).unwrap();
        assert_eq!(on_disk, "Bio:\ny\nz\n\nMath:\nx\n\n");
    }

    #[test]
    fn invalid_utf8_is_replaced_not_rejected() {
        let (dir, store) = setup();
        fs::write(
            dir.path().join("alice_notes.txt"),
            b"Math:\nbad \xff byte\nx\n\n",
        )
        .unwrap();

        let notes = store.load_notes("alice").unwrap().unwrap();
        let lines: Vec<_> = notes.display_notes("Math").unwrap().collect();
        assert_eq!(lines, vec!["bad \u{FFFD} byte", "x"]);
    }
}
