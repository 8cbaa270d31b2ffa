//! Persistent storage for the session token and cached user record.
//!
//! DESIGN
//! ======
//! Implementations only move raw strings in and out of two keys. JSON
//! encoding of the user record and the "write both, clear both" rule live in
//! the provided trait methods, so every backend behaves the same.

#[cfg(test)]
#[path = "store_test.rs"]
mod store_test;

use std::sync::{Mutex, PoisonError};

use crate::net::types::SessionUser;
use crate::util::storage;

pub const TOKEN_KEY: &str = "authToken";
pub const USER_KEY: &str = "authUser";

/// A token with its decoded user record.
#[derive(Clone, Debug, PartialEq)]
pub struct Session {
    pub token: String,
    pub user: SessionUser,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SessionError {
    #[error("session token present without a stored user record")]
    MissingUser,
    #[error("stored user record is corrupted: {0}")]
    Corrupted(String),
    #[error("session could not be stored: {0}")]
    NotStored(String),
}

/// Key/value backing for the session. Single-document, single-threaded use.
pub trait SessionStore {
    fn load_token(&self) -> Option<String>;
    fn load_user(&self) -> Option<String>;
    /// Store both entries or neither.
    ///
    /// # Errors
    ///
    /// [`SessionError::NotStored`] when the backend refuses a write.
    fn save(&self, token: &str, user_json: &str) -> Result<(), SessionError>;
    /// Remove both entries.
    fn clear(&self);

    /// Persist a token and its user record together.
    ///
    /// # Errors
    ///
    /// [`SessionError::NotStored`] when the user cannot be encoded or the
    /// backend refuses the write. Nothing is left half-written.
    fn write(&self, token: &str, user: &SessionUser) -> Result<(), SessionError> {
        let user_json = serde_json::to_string(user).map_err(|e| SessionError::NotStored(e.to_string()))?;
        self.save(token, &user_json)
    }

    /// Current session, `None` when no token is stored.
    ///
    /// # Errors
    ///
    /// [`SessionError::MissingUser`] or [`SessionError::Corrupted`] when a
    /// token exists but its user record is absent or fails to decode.
    fn read(&self) -> Result<Option<Session>, SessionError> {
        let Some(token) = self.load_token() else {
            return Ok(None);
        };
        let raw = self.load_user().ok_or(SessionError::MissingUser)?;
        let user = serde_json::from_str(&raw).map_err(|e| SessionError::Corrupted(e.to_string()))?;
        Ok(Some(Session { token, user }))
    }

    fn has_token(&self) -> bool {
        self.load_token().is_some()
    }
}

/// Origin-scoped `localStorage` backend.
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStorageStore;

impl SessionStore for LocalStorageStore {
    fn load_token(&self) -> Option<String> {
        storage::get_item(TOKEN_KEY)
    }

    fn load_user(&self) -> Option<String> {
        storage::get_item(USER_KEY)
    }

    fn save(&self, token: &str, user_json: &str) -> Result<(), SessionError> {
        save_pair(storage::set_item, storage::remove_item, token, user_json)
    }

    fn clear(&self) {
        storage::remove_item(TOKEN_KEY);
        storage::remove_item(USER_KEY);
    }
}

/// Write the token, then the user. If either write is refused both keys are
/// removed, so a token never outlives its user record.
fn save_pair(
    set_item: impl Fn(&str, &str) -> bool,
    remove_item: impl Fn(&str),
    token: &str,
    user_json: &str,
) -> Result<(), SessionError> {
    if set_item(TOKEN_KEY, token) && set_item(USER_KEY, user_json) {
        return Ok(());
    }
    remove_item(TOKEN_KEY);
    remove_item(USER_KEY);
    log::warn!("storage refused the session write; entries rolled back");
    Err(SessionError::NotStored("storage refused the write".to_owned()))
}

#[derive(Debug, Default)]
struct Entries {
    token: Option<String>,
    user: Option<String>,
}

/// In-memory backend for tests and non-browser builds.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: Mutex<Entries>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed raw entries, including values that would not decode.
    pub fn with_raw(token: Option<&str>, user: Option<&str>) -> Self {
        let entries = Entries { token: token.map(str::to_owned), user: user.map(str::to_owned) };
        Self { entries: Mutex::new(entries) }
    }

    fn with_entries<R>(&self, f: impl FnOnce(&mut Entries) -> R) -> R {
        let mut entries = self.entries.lock().unwrap_or_else(PoisonError::into_inner);
        f(&mut entries)
    }
}

impl SessionStore for MemoryStore {
    fn load_token(&self) -> Option<String> {
        self.with_entries(|e| e.token.clone())
    }

    fn load_user(&self) -> Option<String> {
        self.with_entries(|e| e.user.clone())
    }

    fn save(&self, token: &str, user_json: &str) -> Result<(), SessionError> {
        self.with_entries(|e| {
            e.token = Some(token.to_owned());
            e.user = Some(user_json.to_owned());
        });
        Ok(())
    }

    fn clear(&self) {
        self.with_entries(|e| *e = Entries::default());
    }
}
