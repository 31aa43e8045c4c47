//! Bearer token persistence.
//!
//! SYSTEM CONTEXT
//! ==============
//! Only the session controller reads or writes a credential store. The browser
//! store mirrors one `localStorage` entry so a page reload restores the token;
//! the memory store backs tests and server-side rendering.

#[cfg(test)]
#[path = "credentials_test.rs"]
mod credentials_test;

use std::sync::{Mutex, PoisonError};

/// `localStorage` key holding the bearer token.
pub const TOKEN_STORAGE_KEY: &str = "token";

/// Durable home of the bearer token. No shape validation is performed.
pub trait CredentialStore: Send + Sync {
    fn get(&self) -> Option<String>;
    fn set(&self, token: &str);
    fn clear(&self);
}

/// Process-local store; nothing survives a restart.
#[derive(Debug, Default)]
pub struct MemoryCredentialStore {
    token: Mutex<Option<String>>,
}

impl MemoryCredentialStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-seeded with `token`, as if left over from a previous run.
    #[must_use]
    pub fn with_token(token: impl Into<String>) -> Self {
        Self { token: Mutex::new(Some(token.into())) }
    }
}

impl CredentialStore for MemoryCredentialStore {
    fn get(&self) -> Option<String> {
        self.token.lock().unwrap_or_else(PoisonError::into_inner).clone()
    }

    fn set(&self, token: &str) {
        *self.token.lock().unwrap_or_else(PoisonError::into_inner) = Some(token.to_owned());
    }

    fn clear(&self) {
        *self.token.lock().unwrap_or_else(PoisonError::into_inner) = None;
    }
}

/// `localStorage`-backed store.
///
/// The stored value is read once by [`BrowserCredentialStore::load`] and cached;
/// writes go through to both the cache and `localStorage`. Storage failures
/// (private mode, quota) degrade to cache-only behavior.
#[derive(Debug, Default)]
pub struct BrowserCredentialStore {
    cached: MemoryCredentialStore,
}

impl BrowserCredentialStore {
    /// Read any token left by a previous page load.
    #[must_use]
    pub fn load() -> Self {
        let cached = match read_persisted() {
            Some(token) => MemoryCredentialStore::with_token(token),
            None => MemoryCredentialStore::new(),
        };
        Self { cached }
    }
}

impl CredentialStore for BrowserCredentialStore {
    fn get(&self) -> Option<String> {
        self.cached.get()
    }

    fn set(&self, token: &str) {
        self.cached.set(token);
        write_persisted(Some(token));
    }

    fn clear(&self) {
        self.cached.clear();
        write_persisted(None);
    }
}

fn read_persisted() -> Option<String> {
    #[cfg(feature = "hydrate")]
    {
        let storage = web_sys::window().and_then(|w| w.local_storage().ok().flatten())?;
        storage.get_item(TOKEN_STORAGE_KEY).ok().flatten().filter(|t| !t.is_empty())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

fn write_persisted(token: Option<&str>) {
    #[cfg(feature = "hydrate")]
    {
        let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) else {
            log::warn!("localStorage unavailable; token kept in memory only");
            return;
        };
        let result = match token {
            Some(value) => storage.set_item(TOKEN_STORAGE_KEY, value),
            None => storage.remove_item(TOKEN_STORAGE_KEY),
        };
        if result.is_err() {
            log::warn!("failed to update persisted token");
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = token;
    }
}
