//! JSON document adapter for [`ContactRepository`].
//!
//! The document is a pretty-printed array of contacts with two-space
//! indentation. A missing file, unreadable bytes, or anything other than an
//! array of `{ id, firstName, lastName, email }` objects is reported as a read
//! error; field contents are not validated. The adapter never invents an empty
//! collection on its own. [`JsonFileContactRepository::ensure_exists`]
//! is the explicit opt-in for seeding an empty document.

use std::io;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use async_trait::async_trait;
use cap_std::{ambient_authority, fs::Dir};
use tracing::{debug, info};

use crate::domain::Contact;
use crate::domain::ports::{ContactRepository, ContactRepositoryError};

use super::atomic_write::write_atomic;

const EMPTY_DOCUMENT: &str = "[]\n";

/// Contact repository persisting the collection to one JSON file.
#[derive(Clone)]
pub struct JsonFileContactRepository {
    dir: Arc<Dir>,
    file_name: String,
    path: PathBuf,
}

impl JsonFileContactRepository {
    /// Open the directory containing `path`.
    ///
    /// The file itself is not touched; it is read on every `load`.
    ///
    /// # Errors
    ///
    /// Returns an error when `path` has no file name or its parent directory
    /// cannot be opened.
    pub fn open(path: impl AsRef<Path>) -> io::Result<Self> {
        let path = path.as_ref();
        let file_name = path
            .file_name()
            .and_then(|name| name.to_str())
            .ok_or_else(|| {
                io::Error::new(
                    io::ErrorKind::InvalidInput,
                    format!("contact store path {} must name a UTF-8 file", path.display()),
                )
            })?
            .to_owned();
        let parent = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        let dir = Dir::open_ambient_dir(parent, ambient_authority())?;
        Ok(Self {
            dir: Arc::new(dir),
            file_name,
            path: path.to_path_buf(),
        })
    }

    /// Path of the backing document.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Create an empty document when none exists.
    ///
    /// Returns `true` when a document was created.
    ///
    /// # Errors
    ///
    /// Returns [`ContactRepositoryError::Write`] when the document cannot be
    /// created.
    pub async fn ensure_exists(&self) -> Result<bool, ContactRepositoryError> {
        let dir = Arc::clone(&self.dir);
        let file_name = self.file_name.clone();
        let created = run_blocking(ContactRepositoryError::write, move || {
            if dir.exists(&file_name) {
                return Ok(false);
            }
            write_atomic(&dir, &file_name, EMPTY_DOCUMENT)
                .map(|()| true)
                .map_err(|err| ContactRepositoryError::write(err.to_string()))
        })
        .await?;
        if created {
            info!(path = %self.path.display(), "created empty contact store");
        }
        Ok(created)
    }

    fn describe(&self, err: impl std::fmt::Display) -> String {
        format!("{}: {err}", self.path.display())
    }
}

async fn run_blocking<T, F>(
    on_join_error: fn(String) -> ContactRepositoryError,
    task: F,
) -> Result<T, ContactRepositoryError>
where
    F: FnOnce() -> Result<T, ContactRepositoryError> + Send + 'static,
    T: Send + 'static,
{
    tokio::task::spawn_blocking(task)
        .await
        .map_err(|err| on_join_error(format!("storage task failed: {err}")))?
}

#[async_trait]
impl ContactRepository for JsonFileContactRepository {
    async fn load(&self) -> Result<Vec<Contact>, ContactRepositoryError> {
        let dir = Arc::clone(&self.dir);
        let file_name = self.file_name.clone();
        let raw = run_blocking(ContactRepositoryError::read, move || {
            dir.read_to_string(&file_name)
                .map_err(|err| ContactRepositoryError::read(err.to_string()))
        })
        .await
        .map_err(|err| match err {
            ContactRepositoryError::Read { message } => {
                ContactRepositoryError::read(self.describe(message))
            }
            other => other,
        })?;

        let contacts: Vec<Contact> = serde_json::from_str(&raw)
            .map_err(|err| ContactRepositoryError::read(self.describe(err)))?;
        debug!(path = %self.path.display(), count = contacts.len(), "loaded contact store");
        Ok(contacts)
    }

    async fn save(&self, contacts: &[Contact]) -> Result<(), ContactRepositoryError> {
        let document = serde_json::to_string_pretty(contacts)
            .map_err(|err| ContactRepositoryError::write(self.describe(err)))?;
        let count = contacts.len();
        let dir = Arc::clone(&self.dir);
        let file_name = self.file_name.clone();
        run_blocking(ContactRepositoryError::write, move || {
            write_atomic(&dir, &file_name, &document)
                .map_err(|err| ContactRepositoryError::write(err.to_string()))
        })
        .await
        .map_err(|err| match err {
            ContactRepositoryError::Write { message } => {
                ContactRepositoryError::write(self.describe(message))
            }
            other => other,
        })?;
        debug!(path = %self.path.display(), count, "saved contact store");
        Ok(())
    }
}
