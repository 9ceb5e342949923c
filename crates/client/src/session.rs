//! Persisted login state.
//!
//! The token and username survive across invocations so `myshop shop`
//! can pick up where a previous `myshop login` left off. The file is
//! plain JSON; a missing or unreadable file just means logged out.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const SESSION_FILE_VAR: &str = "MYSHOP_SESSION_FILE";

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("could not determine a session file location, set {SESSION_FILE_VAR}")]
    NoPath,
    #[error("could not write session file: {0}")]
    Write(#[from] io::Error),
    #[error("could not encode session: {0}")]
    Encode(#[from] serde_json::Error),
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct SessionData {
    token: String,
    username: String,
}

/// On-disk login state, loaded once per invocation.
#[derive(Debug)]
pub struct Session {
    path: PathBuf,
    data: Option<SessionData>,
}

impl Session {
    /// Loads the session from `path`. Corrupt or absent files are
    /// treated as logged out rather than errors, so a damaged session
    /// never wedges the client.
    pub fn load_from(path: PathBuf) -> Self {
        let data = match fs::read_to_string(&path) {
            Ok(raw) => match serde_json::from_str(&raw) {
                Ok(data) => Some(data),
                Err(err) => {
                    tracing::warn!(path = %path.display(), error = %err, "discarding corrupt session file");
                    None
                }
            },
            Err(err) if err.kind() == io::ErrorKind::NotFound => None,
            Err(err) => {
                tracing::warn!(path = %path.display(), error = %err, "could not read session file");
                None
            }
        };
        Self { path, data }
    }

    /// Loads from the default location: `MYSHOP_SESSION_FILE` if set,
    /// otherwise `.myshop-session.json` under the home directory.
    pub fn load() -> Result<Self, SessionError> {
        Ok(Self::load_from(default_path()?))
    }

    pub fn is_logged_in(&self) -> bool {
        self.data.is_some()
    }

    pub fn username(&self) -> Option<&str> {
        self.data.as_ref().map(|d| d.username.as_str())
    }

    pub fn token(&self) -> Option<&str> {
        self.data.as_ref().map(|d| d.token.as_str())
    }

    /// Records a fresh login and persists it.
    pub fn store(&mut self, token: String, username: String) -> Result<(), SessionError> {
        let data = SessionData { token, username };
        let raw = serde_json::to_string_pretty(&data)?;
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.path, raw)?;
        self.data = Some(data);
        Ok(())
    }

    /// Logs out: drops the in-memory state and removes the file.
    pub fn clear(&mut self) -> Result<(), SessionError> {
        self.data = None;
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(err) => Err(SessionError::Write(err)),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

fn default_path() -> Result<PathBuf, SessionError> {
    if let Ok(path) = std::env::var(SESSION_FILE_VAR) {
        return Ok(PathBuf::from(path));
    }
    std::env::var_os("HOME")
        .map(|home| PathBuf::from(home).join(".myshop-session.json"))
        .ok_or(SessionError::NoPath)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_session_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("myshop-session-{}-{name}.json", std::process::id()))
    }

    #[test]
    fn missing_file_loads_logged_out() {
        let session = Session::load_from(temp_session_path("missing"));
        assert!(!session.is_logged_in());
        assert_eq!(session.username(), None);
    }

    #[test]
    fn store_then_load_round_trips() {
        let path = temp_session_path("roundtrip");
        let mut session = Session::load_from(path.clone());
        session
            .store("tok-123".into(), "ada".into())
            .expect("store");

        let reloaded = Session::load_from(path.clone());
        assert!(reloaded.is_logged_in());
        assert_eq!(reloaded.username(), Some("ada"));
        assert_eq!(reloaded.token(), Some("tok-123"));

        fs::remove_file(path).expect("cleanup");
    }

    #[test]
    fn corrupt_file_loads_logged_out() {
        let path = temp_session_path("corrupt");
        fs::write(&path, "{ not json").expect("write");

        let session = Session::load_from(path.clone());
        assert!(!session.is_logged_in());

        fs::remove_file(path).expect("cleanup");
    }

    #[test]
    fn clear_removes_file_and_state() {
        let path = temp_session_path("clear");
        let mut session = Session::load_from(path.clone());
        session.store("tok".into(), "ada".into()).expect("store");
        session.clear().expect("clear");

        assert!(!session.is_logged_in());
        assert!(!path.exists());

        // clearing twice is fine
        session.clear().expect("clear again");
    }
}
