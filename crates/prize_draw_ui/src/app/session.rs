//! Persisted draw route, so relaunching resumes on the same entry.

use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

use prize_draw_core::{EntryId, Route};
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const SESSION_FILE_NAME: &str = "prize_draw_session.json";
const SESSION_FILE_VERSION: u32 = 1;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionStoreError {
    #[error("{0}")]
    Io(String),
    #[error("{0}")]
    InvalidFormat(String),
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
struct SessionFileV1 {
    version: u32,
    entry_id: Option<EntryId>,
}

pub fn session_file_path() -> Result<PathBuf, SessionStoreError> {
    let cwd = std::env::current_dir().map_err(|error| {
        SessionStoreError::Io(format!("failed to read current directory: {error}"))
    })?;
    Ok(cwd.join(SESSION_FILE_NAME))
}

/// A missing file is an empty session.
pub fn load_session(path: &Path) -> Result<Route, SessionStoreError> {
    let contents = match fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(error) if error.kind() == std::io::ErrorKind::NotFound => return Ok(Route::Entry),
        Err(error) => {
            return Err(SessionStoreError::Io(format!(
                "failed to read session file '{}': {error}",
                path.display()
            )))
        }
    };

    let session: SessionFileV1 = serde_json::from_str(&contents).map_err(|error| {
        SessionStoreError::InvalidFormat(format!(
            "invalid session file '{}': {error}",
            path.display()
        ))
    })?;

    if session.version != SESSION_FILE_VERSION {
        return Err(SessionStoreError::InvalidFormat(format!(
            "unsupported session file version {} in '{}'",
            session.version,
            path.display()
        )));
    }

    Ok(match session.entry_id {
        Some(entry_id) => Route::Draw { entry_id },
        None => Route::Entry,
    })
}

/// Writes the route atomically. Saving [`Route::Entry`] clears the session.
pub fn save_session(path: &Path, route: &Route) -> Result<(), SessionStoreError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|error| {
            SessionStoreError::Io(format!(
                "failed to create session directory '{}': {error}",
                parent.display()
            ))
        })?;
    }

    let session = SessionFileV1 {
        version: SESSION_FILE_VERSION,
        entry_id: route.entry_id().cloned(),
    };
    let serialized = serde_json::to_string_pretty(&session).map_err(|error| {
        SessionStoreError::Io(format!("failed to serialize session to json: {error}"))
    })?;

    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|duration| duration.as_nanos())
        .unwrap_or(0);
    let temp_path = path.with_extension(format!("json.tmp.{nanos}"));
    let mut temp_file = File::create(&temp_path).map_err(|error| {
        SessionStoreError::Io(format!(
            "failed to create temp session file '{}': {error}",
            temp_path.display()
        ))
    })?;
    temp_file
        .write_all(serialized.as_bytes())
        .and_then(|()| temp_file.sync_all())
        .map_err(|error| {
            let _ = fs::remove_file(&temp_path);
            SessionStoreError::Io(format!(
                "failed to write temp session file '{}': {error}",
                temp_path.display()
            ))
        })?;

    fs::rename(&temp_path, path).map_err(|error| {
        let _ = fs::remove_file(&temp_path);
        SessionStoreError::Io(format!(
            "failed to move temp session file '{}' to '{}': {error}",
            temp_path.display(),
            path.display()
        ))
    })
}
