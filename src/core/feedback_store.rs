//! JSON-file persistence for student feedback
//!
//! The whole [`FeedbackStore`] is rewritten on every save. Saves go through
//! a sibling temporary file followed by a rename, so a reader never sees a
//! half-written document. Writers are serialized by a per-repository lock.

use crate::core::error::{Error, Result};
use crate::core::models::{normalize_code, FeedbackEntry, FeedbackStore};
use serde::Serialize;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

/// Load/save access to a feedback JSON file
#[derive(Debug)]
pub struct FeedbackRepository {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl FeedbackRepository {
    /// Create a repository backed by `path`. Nothing is read until [`load`](Self::load).
    #[must_use]
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self {
            path: path.into(),
            write_lock: Mutex::new(()),
        }
    }

    /// Path of the backing file
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Whether the backing file exists yet
    #[must_use]
    pub fn exists(&self) -> bool {
        self.path.is_file()
    }

    /// Load the store, or an empty one when the file does not exist yet
    ///
    /// # Errors
    /// Returns [`Error::FeedbackParse`] if the file is not valid feedback JSON,
    /// or [`Error::Io`] if it cannot be read
    pub fn load(&self) -> Result<FeedbackStore> {
        match self.read() {
            Err(Error::FeedbackNotFound(_)) => {
                crate::debug!(
                    "No feedback file at {}; starting empty",
                    self.path.display()
                );
                Ok(FeedbackStore::default())
            }
            other => other,
        }
    }

    /// Load the store, failing when the file does not exist
    ///
    /// # Errors
    /// Returns [`Error::FeedbackNotFound`] if the file is missing, plus the
    /// errors of [`load`](Self::load)
    pub fn load_required(&self) -> Result<FeedbackStore> {
        self.read()
    }

    fn read(&self) -> Result<FeedbackStore> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                return Err(Error::FeedbackNotFound(self.path.clone()));
            }
            Err(e) => return Err(e.into()),
        };

        let mut store: FeedbackStore =
            serde_json::from_str(&content).map_err(|source| Error::FeedbackParse {
                path: self.path.clone(),
                source,
            })?;
        store.normalize_keys();

        crate::debug!(
            "Loaded {} feedback entries for {} courses from {}",
            store.entry_count(),
            store.courses.len(),
            self.path.display()
        );
        Ok(store)
    }

    /// Replace the persisted store with `store`
    ///
    /// # Errors
    /// Returns an error if the store cannot be serialized or written
    pub fn save(&self, store: &FeedbackStore) -> Result<()> {
        let json = to_pretty_json(store)?;

        let _guard = self
            .write_lock
            .lock()
            .map_err(|_| Error::Io(std::io::Error::other("feedback write lock poisoned")))?;

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }

        let tmp_path = self.temp_path();
        fs::write(&tmp_path, json)?;
        if let Err(e) = fs::rename(&tmp_path, &self.path) {
            let _ = fs::remove_file(&tmp_path);
            return Err(e.into());
        }

        crate::debug!("Saved feedback to {}", self.path.display());
        Ok(())
    }

    /// Append `entry` to the list for `code` and persist immediately
    ///
    /// The code is normalized before use. `store` only changes once the
    /// updated document has been written.
    ///
    /// # Errors
    /// Returns an error if the store cannot be saved; `store` is left as it was
    pub fn append_entry(
        &self,
        store: &mut FeedbackStore,
        code: &str,
        entry: FeedbackEntry,
    ) -> Result<()> {
        let mut updated = store.clone();
        updated.push_entry(code, entry);
        self.save(&updated)?;
        *store = updated;
        crate::info!(
            "Recorded feedback for {} ({} entries)",
            normalize_code(code),
            store.entries_for(code).len()
        );
        Ok(())
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map_or_else(|| "feedback.json".into(), std::ffi::OsStr::to_os_string);
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}

/// Serialize with 4-space indentation, matching hand-edited feedback files
fn to_pretty_json(store: &FeedbackStore) -> Result<Vec<u8>> {
    let mut buf = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
    store.serialize(&mut serializer)?;
    buf.push(b'\n');
    Ok(buf)
}
