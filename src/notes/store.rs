use std::collections::BTreeMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::consts::NOTE_KEY_SEPARATOR;
use crate::error::NoteError;

/// Build the storage key for a note: "2024-01-01_09:00"
pub(crate) fn note_key(date: &str, time: &str) -> String {
    format!("{date}{NOTE_KEY_SEPARATOR}{time}")
}

#[derive(Debug)]
pub(crate) struct NoteStore {
    path: PathBuf,
    notes: BTreeMap<String, String>,
}

impl NoteStore {
    /// Load notes from `path`. A missing file is an empty store.
    pub(crate) fn load(path: impl Into<PathBuf>) -> Result<Self, NoteError> {
        let path = path.into();
        let notes: BTreeMap<String, String> = match fs::read_to_string(&path) {
            Ok(content) => {
                serde_json::from_str(&content).map_err(|source| NoteError::Parse {
                    path: path.clone(),
                    source,
                })?
            }
            Err(e) if e.kind() == ErrorKind::NotFound => BTreeMap::new(),
            Err(source) => return Err(NoteError::Read { path, source }),
        };
        debug!(path = %path.display(), count = notes.len(), "loaded notes");
        Ok(Self { path, notes })
    }

    pub(crate) fn path(&self) -> &Path {
        &self.path
    }

    pub(crate) fn len(&self) -> usize {
        self.notes.len()
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }

    pub(crate) fn get(&self, date: &str, time: &str) -> Option<&str> {
        self.notes.get(&note_key(date, time)).map(String::as_str)
    }

    /// Notes in key order
    pub(crate) fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.notes.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Insert or overwrite a note, then rewrite the backing file.
    ///
    /// The in-memory entry is kept even if the write fails, so a retry
    /// persists it.
    pub(crate) fn insert(
        &mut self,
        date: &str,
        time: &str,
        description: &str,
    ) -> Result<(), NoteError> {
        let key = note_key(date, time);
        debug!(%key, "saving note");
        self.notes.insert(key, description.to_string());
        self.persist()
    }

    fn persist(&self) -> Result<(), NoteError> {
        let json = serde_json::to_string_pretty(&self.notes).map_err(NoteError::Encode)?;

        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent).map_err(|source| self.write_error(source))?;
        }

        // Write beside the target and rename so a crash never leaves a torn file.
        let tmp = self.tmp_path();
        fs::write(&tmp, json).map_err(|source| self.write_error(source))?;
        fs::rename(&tmp, &self.path).map_err(|source| {
            let _ = fs::remove_file(&tmp);
            self.write_error(source)
        })
    }

    fn tmp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_default();
        name.push(".tmp");
        self.path.with_file_name(name)
    }

    fn write_error(&self, source: std::io::Error) -> NoteError {
        NoteError::Write {
            path: self.path.clone(),
            source,
        }
    }
}
