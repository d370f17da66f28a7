//! Whole-value save storage addressed by key.
//!
//! The stored value is opaque text; the store never interprets it.

use std::cell::RefCell;
use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::rc::Rc;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("invalid save key '{0}'")]
    InvalidKey(String),
}

pub type Result<T> = std::result::Result<T, StorageError>;

/// Key-value store holding saved games.
pub trait SaveStore {
    /// Replaces the value stored under `key`.
    fn write(&self, key: &str, value: &str) -> Result<()>;

    fn read(&self, key: &str) -> Result<Option<String>>;

    /// Removes the value under `key`. Deleting a missing key is not an error.
    fn delete(&self, key: &str) -> Result<()>;
}

/// One file per key inside a directory.
///
/// Writes go to a temp file first and are renamed into place, so a crash never
/// leaves a half-written save behind.
#[derive(Debug)]
pub struct FileSaveStore {
    base_dir: PathBuf,
}

impl FileSaveStore {
    pub fn new(base_dir: impl AsRef<Path>) -> Result<Self> {
        let base_dir = base_dir.as_ref().to_path_buf();
        fs::create_dir_all(&base_dir)?;
        Ok(Self { base_dir })
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    fn save_path(&self, key: &str) -> Result<PathBuf> {
        let valid = !key.trim().is_empty()
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || matches!(c, ' ' | '-' | '_'));
        if !valid {
            return Err(StorageError::InvalidKey(key.to_owned()));
        }
        Ok(self.base_dir.join(format!("{key}.save")))
    }
}

impl SaveStore for FileSaveStore {
    fn write(&self, key: &str, value: &str) -> Result<()> {
        let path = self.save_path(key)?;
        let temp_path = path.with_extension("save.tmp");

        fs::write(&temp_path, value)?;
        fs::rename(&temp_path, &path)?;

        tracing::debug!(key, path = %path.display(), bytes = value.len(), "wrote save");
        Ok(())
    }

    fn read(&self, key: &str) -> Result<Option<String>> {
        let path = self.save_path(key)?;

        match fs::read_to_string(&path) {
            Ok(value) => {
                tracing::debug!(key, path = %path.display(), "read save");
                Ok(Some(value))
            }
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err.into()),
        }
    }

    fn delete(&self, key: &str) -> Result<()> {
        let path = self.save_path(key)?;

        match fs::remove_file(&path) {
            Ok(()) => {
                tracing::debug!(key, "deleted save");
                Ok(())
            }
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(err) => Err(err.into()),
        }
    }
}

/// Volatile store. Clones share the same contents.
#[derive(Clone, Debug, Default)]
pub struct InMemorySaveStore {
    values: Rc<RefCell<HashMap<String, String>>>,
}

impl InMemorySaveStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SaveStore for InMemorySaveStore {
    fn write(&self, key: &str, value: &str) -> Result<()> {
        self.values
            .borrow_mut()
            .insert(key.to_owned(), value.to_owned());
        Ok(())
    }

    fn read(&self, key: &str) -> Result<Option<String>> {
        Ok(self.values.borrow().get(key).cloned())
    }

    fn delete(&self, key: &str) -> Result<()> {
        self.values.borrow_mut().remove(key);
        Ok(())
    }
}
