//! Session state: the current token and user identity, persisted across
//! process restarts.
//!
//! The store is process-wide shared state, but every mutation (login,
//! logout, startup init) replaces the whole snapshot atomically; partial
//! token/user writes are never observable.

use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use parking_lot::{Mutex, RwLock};
use tracing::{debug, warn};

use crate::models::User;

/// Storage key for the opaque session token.
const TOKEN_KEY: &str = "token";

/// Storage key for the serialized user record.
const USER_KEY: &str = "user";

/// An authenticated session snapshot. Immutable once created; the token and
/// user always travel together, which encodes the invariant that one is
/// present exactly when the other is.
#[derive(Debug, Clone)]
pub struct Session {
    pub token: String,
    pub user: User,
}

/// Durable key-value storage backing the session store.
pub trait SessionStorage: Send + Sync {
    fn read(&self, key: &str) -> Result<Option<String>>;
    fn write(&self, key: &str, value: &str) -> Result<()>;
    fn remove(&self, key: &str) -> Result<()>;
}

/// File-backed storage: one file per key under a session directory.
pub struct FileStorage {
    dir: PathBuf,
}

impl FileStorage {
    pub fn new(dir: PathBuf) -> Self {
        Self { dir }
    }

    fn path(&self, key: &str) -> PathBuf {
        self.dir.join(key)
    }
}

impl SessionStorage for FileStorage {
    fn read(&self, key: &str) -> Result<Option<String>> {
        let path = self.path(key);
        if !path.exists() {
            return Ok(None);
        }
        let value = fs::read_to_string(&path)
            .with_context(|| format!("failed to read session key {key:?}"))?;
        Ok(Some(value))
    }

    fn write(&self, key: &str, value: &str) -> Result<()> {
        fs::create_dir_all(&self.dir).context("failed to create session directory")?;
        fs::write(self.path(key), value)
            .with_context(|| format!("failed to write session key {key:?}"))
    }

    fn remove(&self, key: &str) -> Result<()> {
        let path = self.path(key);
        if path.exists() {
            fs::remove_file(&path)
                .with_context(|| format!("failed to remove session key {key:?}"))?;
        }
        Ok(())
    }
}

/// In-memory storage for tests and mock-mode embedding.
#[derive(Default)]
pub struct MemoryStorage {
    map: Mutex<HashMap<String, String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStorage for MemoryStorage {
    fn read(&self, key: &str) -> Result<Option<String>> {
        Ok(self.map.lock().get(key).cloned())
    }

    fn write(&self, key: &str, value: &str) -> Result<()> {
        self.map.lock().insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        self.map.lock().remove(key);
        Ok(())
    }
}

/// Holds the current session snapshot and keeps it in sync with durable
/// storage.
pub struct SessionStore {
    storage: Box<dyn SessionStorage>,
    current: RwLock<Option<Arc<Session>>>,
}

impl SessionStore {
    /// Open the store, restoring any persisted session.
    ///
    /// Fails closed: a structurally invalid token or an undecodable user
    /// record clears all persisted state rather than treating the user as
    /// signed in.
    pub fn open(storage: Box<dyn SessionStorage>) -> Self {
        let restored = match Self::restore(storage.as_ref()) {
            Ok(session) => session,
            Err(e) => {
                warn!(error = %e, "discarding persisted session state");
                let _ = storage.remove(TOKEN_KEY);
                let _ = storage.remove(USER_KEY);
                None
            }
        };

        Self {
            storage,
            current: RwLock::new(restored.map(Arc::new)),
        }
    }

    fn restore(storage: &dyn SessionStorage) -> Result<Option<Session>> {
        let Some(token) = storage.read(TOKEN_KEY)? else {
            return Ok(None);
        };
        if token.trim().is_empty() {
            anyhow::bail!("persisted token is empty");
        }

        let user_json = storage
            .read(USER_KEY)?
            .context("token persisted without a user record")?;
        let user: User =
            serde_json::from_str(&user_json).context("persisted user record is not valid JSON")?;

        debug!(username = %user.username, "restored persisted session");
        Ok(Some(Session { token, user }))
    }

    /// Current session snapshot, if signed in.
    pub fn snapshot(&self) -> Option<Arc<Session>> {
        self.current.read().clone()
    }

    /// Current bearer token, if signed in.
    pub fn token(&self) -> Option<String> {
        self.current.read().as_ref().map(|s| s.token.clone())
    }

    /// Current user identity, if signed in. Synchronous; no network.
    pub fn current_user(&self) -> Option<User> {
        self.current.read().as_ref().map(|s| s.user.clone())
    }

    pub fn is_authenticated(&self) -> bool {
        self.current.read().is_some()
    }

    /// Replace the session wholesale: persist the new snapshot (or clear
    /// storage for `None`), then swap it in. Login, logout, and startup
    /// init are the only intended callers.
    pub fn replace(&self, next: Option<Session>) -> Result<()> {
        match &next {
            Some(session) => {
                let user_json =
                    serde_json::to_string(&session.user).context("failed to encode user record")?;
                self.storage.write(TOKEN_KEY, &session.token)?;
                self.storage.write(USER_KEY, &user_json)?;
            }
            None => {
                self.storage.remove(TOKEN_KEY)?;
                self.storage.remove(USER_KEY)?;
            }
        }

        *self.current.write() = next.map(Arc::new);
        Ok(())
    }

    /// Clear the session unconditionally. Persistence failures are logged
    /// and swallowed; local sign-out must never be blocked.
    pub fn clear(&self) {
        if let Err(e) = self.storage.remove(TOKEN_KEY) {
            warn!(error = %e, "failed to clear persisted token");
        }
        if let Err(e) = self.storage.remove(USER_KEY) {
            warn!(error = %e, "failed to clear persisted user record");
        }
        *self.current.write() = None;
    }
}
