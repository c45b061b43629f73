// SPDX-License-Identifier: MIT

//! Persisted client session state.
//!
//! The session mirrors `{user, isAuthenticated}` and persists exactly two
//! values under fixed keys: the bearer token and the cached user summary.
//! It is loaded once at startup from whatever the storage holds — with no
//! server round-trip to confirm the token is still valid — persisted on
//! every mutation, and cleared on logout.

use crate::models::UserSummary;
use std::collections::HashMap;
use std::path::PathBuf;

/// Storage key for the bearer token.
pub const AUTH_TOKEN_KEY: &str = "authToken";
/// Storage key for the cached user summary (JSON).
pub const USER_KEY: &str = "user";

/// Minimal key-value persistence the session store writes through.
pub trait KeyValueStorage {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str);
    fn remove(&mut self, key: &str);
}

/// In-memory storage for tests.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    values: HashMap<String, String>,
}

impl KeyValueStorage for MemoryStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        self.values.insert(key.to_string(), value.to_string());
    }

    fn remove(&mut self, key: &str) {
        self.values.remove(key);
    }
}

/// File-backed storage: a single JSON object rewritten on every mutation.
#[derive(Debug)]
pub struct FileStorage {
    path: PathBuf,
    values: HashMap<String, String>,
}

impl FileStorage {
    /// Open the storage file, starting empty if it is missing or unreadable.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let values = std::fs::read_to_string(&path)
            .ok()
            .and_then(|contents| serde_json::from_str(&contents).ok())
            .unwrap_or_default();
        Self { path, values }
    }

    fn flush(&self) {
        if let Ok(contents) = serde_json::to_string_pretty(&self.values) {
            if let Err(e) = std::fs::write(&self.path, contents) {
                tracing::warn!(path = %self.path.display(), error = %e, "Failed to persist session storage");
            }
        }
    }
}

impl KeyValueStorage for FileStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        self.values.insert(key.to_string(), value.to_string());
        self.flush();
    }

    fn remove(&mut self, key: &str) {
        self.values.remove(key);
        self.flush();
    }
}

/// Client session state backed by a [`KeyValueStorage`].
pub struct SessionStore<S: KeyValueStorage> {
    storage: S,
    token: Option<String>,
    user: Option<UserSummary>,
}

impl<S: KeyValueStorage> SessionStore<S> {
    /// Reconstruct the session from storage. Authenticated only when both
    /// the token and a parseable cached user are present.
    pub fn load(storage: S) -> Self {
        let token = storage.get(AUTH_TOKEN_KEY);
        let user = storage
            .get(USER_KEY)
            .and_then(|raw| serde_json::from_str(&raw).ok());

        Self { storage, token, user }
    }

    pub fn is_authenticated(&self) -> bool {
        self.token.is_some() && self.user.is_some()
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    pub fn user(&self) -> Option<&UserSummary> {
        self.user.as_ref()
    }

    /// Store a successful authentication: both values are persisted before
    /// the in-memory state flips to authenticated.
    pub fn store_auth(&mut self, token: &str, user: &UserSummary) {
        self.storage.set(AUTH_TOKEN_KEY, token);
        if let Ok(raw) = serde_json::to_string(user) {
            self.storage.set(USER_KEY, &raw);
        }
        self.token = Some(token.to_string());
        self.user = Some(user.clone());
    }

    /// Replace the cached user summary (e.g. after a profile update) and
    /// persist it.
    pub fn update_user(&mut self, user: &UserSummary) {
        if self.user.is_none() {
            return;
        }
        if let Ok(raw) = serde_json::to_string(user) {
            self.storage.set(USER_KEY, &raw);
        }
        self.user = Some(user.clone());
    }

    /// Clear the session and remove both persisted values.
    pub fn logout(&mut self) {
        self.storage.remove(AUTH_TOKEN_KEY);
        self.storage.remove(USER_KEY);
        self.token = None;
        self.user = None;
    }

    /// Consume the store, returning the underlying storage.
    pub fn into_storage(self) -> S {
        self.storage
    }
}
