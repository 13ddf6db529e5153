/**
 * Session Storage
 *
 * Persistence for the client session cache. The token and profile are one
 * record stored under fixed keys (`token`, `user`); they are written and
 * removed together, so a token can never outlive its profile or the other
 * way around.
 */

use std::fs;
use std::path::PathBuf;

use crate::client::error::ClientError;
use crate::client::session::ClientSession;

/// Local cache of the current session.
pub trait SessionStore: Send {
    /// Load the persisted session, if any.
    fn load(&self) -> Option<ClientSession>;

    /// Persist token and profile as one unit.
    fn save(&mut self, session: &ClientSession) -> Result<(), ClientError>;

    /// Remove token and profile together.
    fn clear(&mut self) -> Result<(), ClientError>;
}

/// In-memory store for tests and short-lived tools.
#[derive(Debug, Default)]
pub struct MemorySessionStore {
    session: Option<ClientSession>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStore for MemorySessionStore {
    fn load(&self) -> Option<ClientSession> {
        self.session.clone()
    }

    fn save(&mut self, session: &ClientSession) -> Result<(), ClientError> {
        self.session = Some(session.clone());
        Ok(())
    }

    fn clear(&mut self) -> Result<(), ClientError> {
        self.session = None;
        Ok(())
    }
}

/// File-backed store: one JSON document holding the `token` and `user` keys.
#[derive(Debug)]
pub struct FileSessionStore {
    path: PathBuf,
}

impl FileSessionStore {
    /// Store at an explicit path.
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Store at the platform data directory.
    pub fn default_path() -> Result<Self, ClientError> {
        let dir = dirs::data_dir()
            .ok_or_else(|| ClientError::Storage("no data directory for this platform".to_string()))?;
        Ok(Self {
            path: dir.join("campusflow").join("session.json"),
        })
    }
}

impl SessionStore for FileSessionStore {
    fn load(&self) -> Option<ClientSession> {
        let raw = fs::read_to_string(&self.path).ok()?;
        match serde_json::from_str(&raw) {
            Ok(session) => Some(session),
            Err(e) => {
                tracing::warn!("Discarding unreadable session file: {}", e);
                None
            }
        }
    }

    fn save(&mut self, session: &ClientSession) -> Result<(), ClientError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)
                .map_err(|e| ClientError::Storage(format!("failed to create session dir: {}", e)))?;
        }
        let raw = serde_json::to_string_pretty(session)
            .map_err(|e| ClientError::Storage(format!("failed to encode session: {}", e)))?;
        fs::write(&self.path, raw)
            .map_err(|e| ClientError::Storage(format!("failed to write session: {}", e)))
    }

    fn clear(&mut self) -> Result<(), ClientError> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(ClientError::Storage(format!("failed to remove session: {}", e))),
        }
    }
}
