//! JSON-backed record store.
//!
//! Each program keeps its whole collection in one JSON document. The document is
//! read eagerly on open, and every mutation is followed by a full rewrite of the
//! file. There is no locking: a store assumes exclusive ownership of its file for
//! the lifetime of the process.

use crate::error::{StorageError, StorageResult};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// A root document persisted by a [`JsonStore`].
pub trait Document: Serialize + DeserializeOwned + Default {
    /// Human-readable label used in logs and error messages.
    const KIND: &'static str;

    /// File name used when no explicit path is configured.
    const DEFAULT_FILE: &'static str;
}

/// Serialize a value as pretty JSON with a 4-space indent.
pub fn to_pretty_json<T: Serialize + ?Sized>(value: &T) -> serde_json::Result<String> {
    let mut buf = Vec::new();
    let formatter = PrettyFormatter::with_indent(b"    ");
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
    value.serialize(&mut ser)?;
    // serde_json only emits valid UTF-8
    Ok(String::from_utf8_lossy(&buf).into_owned())
}

/// In-memory copy of one document plus the file it is synchronized with.
#[derive(Debug)]
pub struct JsonStore<D> {
    path: PathBuf,
    doc: D,
    dirty: bool,
}

impl<D: Document> JsonStore<D> {
    /// Open the store at `path`.
    ///
    /// A missing file yields an empty document. A file that exists but cannot be
    /// parsed is reported as [`StorageError::Corrupt`] and left untouched.
    pub fn open(path: impl Into<PathBuf>) -> StorageResult<Self> {
        let path = path.into();

        let doc = match fs::read_to_string(&path) {
            Ok(content) => serde_json::from_str(&content).map_err(|source| {
                StorageError::Corrupt {
                    path: path.clone(),
                    kind: D::KIND,
                    source,
                }
            })?,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!(kind = D::KIND, path = %path.display(), "no store file, starting empty");
                D::default()
            }
            Err(source) => return Err(StorageError::ReadFailed { path, source }),
        };

        debug!(kind = D::KIND, path = %path.display(), "store loaded");
        Ok(Self {
            path,
            doc,
            dirty: false,
        })
    }

    /// Open the store, moving an unparsable file aside instead of failing.
    ///
    /// Returns the store and, when the file was corrupt, the path the bad file
    /// was moved to (`<file>.corrupt`).
    pub fn open_or_reset(path: impl Into<PathBuf>) -> StorageResult<(Self, Option<PathBuf>)> {
        let path = path.into();

        match Self::open(&path) {
            Ok(store) => Ok((store, None)),
            Err(StorageError::Corrupt { source, .. }) => {
                let quarantine = quarantine_path(&path);
                fs::rename(&path, &quarantine).map_err(|source| {
                    StorageError::QuarantineFailed {
                        path: path.clone(),
                        source,
                    }
                })?;
                warn!(
                    kind = D::KIND,
                    path = %path.display(),
                    moved_to = %quarantine.display(),
                    error = %source,
                    "store file is corrupt, starting empty"
                );
                Ok((
                    Self {
                        path,
                        doc: D::default(),
                        dirty: false,
                    },
                    Some(quarantine),
                ))
            }
            Err(e) => Err(e),
        }
    }

    /// Read-only view of the document.
    pub fn doc(&self) -> &D {
        &self.doc
    }

    /// Apply `f` to the document and persist.
    pub fn mutate<T>(&mut self, f: impl FnOnce(&mut D) -> T) -> StorageResult<T> {
        let out = f(&mut self.doc);
        self.dirty = true;
        self.persist()?;
        Ok(out)
    }

    /// Apply `f` and persist only if it reports a change by returning `Some`.
    ///
    /// A miss leaves the file untouched.
    pub fn mutate_if<T>(&mut self, f: impl FnOnce(&mut D) -> Option<T>) -> StorageResult<Option<T>> {
        match f(&mut self.doc) {
            Some(out) => {
                self.dirty = true;
                self.persist()?;
                Ok(Some(out))
            }
            None => Ok(None),
        }
    }

    /// Write the whole document to the backing file.
    ///
    /// The write is a plain overwrite; a crash mid-write can truncate the file.
    pub fn persist(&mut self) -> StorageResult<()> {
        let content = to_pretty_json(&self.doc)?;
        fs::write(&self.path, content).map_err(|source| StorageError::WriteFailed {
            path: self.path.clone(),
            source,
        })?;
        self.dirty = false;
        debug!(kind = D::KIND, path = %self.path.display(), "store persisted");
        Ok(())
    }

    /// Flush outstanding changes and release the store.
    ///
    /// A change whose write failed is still held in memory and is written here.
    pub fn close(mut self) -> StorageResult<()> {
        if self.dirty {
            self.persist()?;
        }
        Ok(())
    }
}

fn quarantine_path(path: &Path) -> PathBuf {
    let mut name = path.file_name().unwrap_or_default().to_os_string();
    name.push(".corrupt");
    path.with_file_name(name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;
    use tempfile::tempdir;

    #[derive(Debug, Default, PartialEq, Serialize, Deserialize)]
    struct Notes {
        notes: Vec<String>,
    }

    impl Document for Notes {
        const KIND: &'static str = "notes";
        const DEFAULT_FILE: &'static str = "notes.json";
    }

    #[test]
    fn test_missing_file_is_empty() {
        let dir = tempdir().unwrap();
        let store = JsonStore::<Notes>::open(dir.path().join("absent.json")).unwrap();
        assert_eq!(store.doc(), &Notes::default());
    }

    #[test]
    fn test_mutate_persists() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("notes.json");

        let mut store = JsonStore::<Notes>::open(&path).unwrap();
        store.mutate(|d| d.notes.push("first".into())).unwrap();

        let reopened = JsonStore::<Notes>::open(&path).unwrap();
        assert_eq!(reopened.doc().notes, vec!["first".to_string()]);
    }

    #[test]
    fn test_mutate_if_miss_does_not_write() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("notes.json");

        let mut store = JsonStore::<Notes>::open(&path).unwrap();
        let removed = store.mutate_if(|_| None::<()>).unwrap();
        assert!(removed.is_none());
        assert!(!path.exists());
    }

    #[test]
    fn test_close_retries_failed_write() {
        let dir = tempdir().unwrap();
        let nested = dir.path().join("later");
        let path = nested.join("notes.json");

        let mut store = JsonStore::<Notes>::open(&path).unwrap();
        let err = store.mutate(|d| d.notes.push("kept".into())).unwrap_err();
        assert!(matches!(err, StorageError::WriteFailed { .. }));
        assert!(!path.exists());

        fs::create_dir(&nested).unwrap();
        store.close().unwrap();

        let reopened = JsonStore::<Notes>::open(&path).unwrap();
        assert_eq!(reopened.doc().notes, vec!["kept".to_string()]);
    }

    #[test]
    fn test_close_without_changes_does_not_write() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("notes.json");

        let store = JsonStore::<Notes>::open(&path).unwrap();
        store.close().unwrap();
        assert!(!path.exists());
    }

    #[test]
    fn test_corrupt_file_is_reported() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("notes.json");
        fs::write(&path, "{ not json").unwrap();

        let err = JsonStore::<Notes>::open(&path).unwrap_err();
        assert!(matches!(err, StorageError::Corrupt { kind: "notes", .. }));
        assert_eq!(fs::read_to_string(&path).unwrap(), "{ not json");
    }

    #[test]
    fn test_open_or_reset_quarantines() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("notes.json");
        fs::write(&path, "[1, 2").unwrap();

        let (store, moved) = JsonStore::<Notes>::open_or_reset(&path).unwrap();
        let moved = moved.unwrap();
        assert_eq!(moved, dir.path().join("notes.json.corrupt"));
        assert_eq!(fs::read_to_string(moved).unwrap(), "[1, 2");
        assert!(store.doc().notes.is_empty());
        assert!(!path.exists());
    }

    #[test]
    fn test_pretty_json_uses_four_spaces() {
        let doc = Notes {
            notes: vec!["a".into()],
        };
        let json = to_pretty_json(&doc).unwrap();
        assert_eq!(json, "{\n    \"notes\": [\n        \"a\"\n    ]\n}");
    }
}
