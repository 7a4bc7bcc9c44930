/*
[INPUT]:  Session file path and freshly issued sessions
[OUTPUT]: Cached session token backed by a durable JSON record
[POS]:    Auth layer - persistent storage for the session token
[UPDATE]: When the session file format or write discipline changes
*/

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::RwLock;

use tempfile::NamedTempFile;
use tracing::{debug, info};

use super::session::{Session, SessionRecord};
use crate::http::{PaladinsError, Result};

/// Owns the cached session and its on-disk record.
///
/// The store is Empty when no token is cached and Active otherwise. Every
/// transition into Active is written to disk before the new token becomes
/// visible to readers.
#[derive(Debug)]
pub struct SessionStore {
    path: PathBuf,
    current: RwLock<Option<Session>>,
}

impl SessionStore {
    /// Load the record at `path`, creating an empty one if it does not exist.
    ///
    /// A record that exists but cannot be parsed is a configuration error.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();

        let record = match fs::read_to_string(&path) {
            Ok(content) => serde_json::from_str::<SessionRecord>(&content).map_err(|e| {
                PaladinsError::Config(format!(
                    "Corrupt session file {}: {e}",
                    path.display()
                ))
            })?,
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                let record = SessionRecord::default();
                write_record(&path, &record)?;
                info!(path = %path.display(), "created empty session file");
                record
            }
            Err(err) => return Err(err.into()),
        };

        let session = record.session();
        debug!(
            path = %path.display(),
            active = session.is_some(),
            "session store loaded"
        );

        Ok(Self {
            path,
            current: RwLock::new(session),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Cached session, if any
    pub fn current(&self) -> Option<Session> {
        self.read_guard().clone()
    }

    /// Cached token, if any
    pub fn token(&self) -> Option<String> {
        self.read_guard().as_ref().map(|s| s.token.clone())
    }

    pub fn is_active(&self) -> bool {
        self.read_guard().as_ref().is_some_and(Session::is_valid)
    }

    /// Persist `session`, then make it the cached session.
    pub fn replace(&self, session: Session) -> Result<()> {
        if !session.is_valid() {
            return Err(PaladinsError::InvalidResponse(
                "refusing to store a session without a token".to_string(),
            ));
        }

        write_record(&self.path, &SessionRecord::from(&session))?;

        let mut guard = self
            .current
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        *guard = Some(session);
        Ok(())
    }

    /// Persist an empty record, then forget the cached token.
    pub fn clear(&self) -> Result<()> {
        write_record(&self.path, &SessionRecord::default())?;
        self.discard();
        info!(path = %self.path.display(), "session record cleared");
        Ok(())
    }

    /// Forget the cached token. The on-disk record is left untouched.
    pub fn discard(&self) {
        let mut guard = self
            .current
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        *guard = None;
    }

    fn read_guard(&self) -> std::sync::RwLockReadGuard<'_, Option<Session>> {
        self.current
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

/// Write the whole record to a temp file, fsync it, then rename it over `path`.
///
/// Readers see either the previous record or the new one, never a partial file.
fn write_record(path: &Path, record: &SessionRecord) -> Result<()> {
    let parent = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    if !parent.exists() {
        fs::create_dir_all(parent)?;
    }

    let encoded = serde_json::to_vec_pretty(record)?;
    let mut temp_file = NamedTempFile::new_in(parent)?;
    temp_file.write_all(&encoded)?;
    temp_file.as_file().sync_all()?;

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;

        temp_file
            .as_file()
            .set_permissions(fs::Permissions::from_mode(0o600))?;
    }

    temp_file.persist(path).map_err(|err| err.error)?;
    Ok(())
}
