//! Persistent session tokens and cached user record.
//!
//! Three independent keys (`access_token`, `refresh_token`, `user`) in a
//! [`KeyValueStorage`]. Only the auth session writes these keys; pages go
//! through `login`/`logout`.
//!
//! ERROR HANDLING
//! ==============
//! Storage failures propagate as [`StorageError`]. A malformed cached user is
//! reported as [`TokenStoreError::CorruptUser`] so the caller decides how to
//! downgrade it.

#[cfg(test)]
#[path = "token_store_test.rs"]
mod token_store_test;

use crate::net::types::{SessionTokens, User};
use crate::util::storage::{KeyValueStorage, StorageError};

pub const ACCESS_TOKEN_KEY: &str = "access_token";
pub const REFRESH_TOKEN_KEY: &str = "refresh_token";
pub const USER_KEY: &str = "user";

#[derive(Debug, thiserror::Error)]
pub enum TokenStoreError {
    #[error(transparent)]
    Storage(#[from] StorageError),
    #[error("cached user record is corrupt: {0}")]
    CorruptUser(#[source] serde_json::Error),
    #[error("failed to serialize user record: {0}")]
    Serialize(#[source] serde_json::Error),
}

#[derive(Clone, Debug)]
pub struct TokenStore<S> {
    storage: S,
}

impl<S: KeyValueStorage> TokenStore<S> {
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    /// Both tokens, or `None` if either key is missing or empty.
    ///
    /// # Errors
    ///
    /// Propagates storage read failures.
    pub fn get_tokens(&self) -> Result<Option<SessionTokens>, StorageError> {
        let access = self.storage.get_item(ACCESS_TOKEN_KEY)?.filter(|v| !v.is_empty());
        let refresh = self.storage.get_item(REFRESH_TOKEN_KEY)?.filter(|v| !v.is_empty());
        Ok(access.zip(refresh).map(|(access, refresh)| SessionTokens { access, refresh }))
    }

    /// The cached user; `Ok(None)` when nothing is stored.
    ///
    /// # Errors
    ///
    /// Returns [`TokenStoreError::CorruptUser`] when the stored JSON does not
    /// decode, and propagates storage read failures.
    pub fn get_user(&self) -> Result<Option<User>, TokenStoreError> {
        let Some(raw) = self.storage.get_item(USER_KEY)? else {
            return Ok(None);
        };
        serde_json::from_str(&raw).map(Some).map_err(TokenStoreError::CorruptUser)
    }

    /// Overwrite all three keys.
    ///
    /// A failed write clears every key before returning, so a token is never
    /// left behind without its user.
    ///
    /// # Errors
    ///
    /// Returns the serialization or storage failure.
    pub fn store_auth_data(&self, tokens: &SessionTokens, user: &User) -> Result<(), TokenStoreError> {
        let user_json = serde_json::to_string(user).map_err(TokenStoreError::Serialize)?;
        let written = self
            .storage
            .set_item(ACCESS_TOKEN_KEY, &tokens.access)
            .and_then(|()| self.storage.set_item(REFRESH_TOKEN_KEY, &tokens.refresh))
            .and_then(|()| self.storage.set_item(USER_KEY, &user_json));
        if let Err(e) = written {
            log::error!("failed to persist session: {e}");
            if let Err(clear_err) = self.clear_auth_data() {
                log::error!("failed to roll back partial session: {clear_err}");
            }
            return Err(e.into());
        }
        Ok(())
    }

    /// Replace only the cached user, keeping the stored tokens.
    ///
    /// # Errors
    ///
    /// Returns the serialization or storage failure.
    pub fn store_user(&self, user: &User) -> Result<(), TokenStoreError> {
        let user_json = serde_json::to_string(user).map_err(TokenStoreError::Serialize)?;
        self.storage.set_item(USER_KEY, &user_json)?;
        Ok(())
    }

    /// Remove all three keys. Idempotent.
    ///
    /// # Errors
    ///
    /// Propagates storage failures; every key is attempted regardless.
    pub fn clear_auth_data(&self) -> Result<(), StorageError> {
        let results = [ACCESS_TOKEN_KEY, REFRESH_TOKEN_KEY, USER_KEY].map(|key| self.storage.remove_item(key));
        results.into_iter().collect()
    }

    /// # Errors
    ///
    /// Propagates storage read failures.
    pub fn is_authenticated(&self) -> Result<bool, StorageError> {
        Ok(self.get_tokens()?.is_some())
    }
}
