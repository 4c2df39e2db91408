//! Session state shared by every chat operation.

use std::sync::{Arc, PoisonError, RwLock};

use crate::{cookie::HostCookieJar, error::ChatError};

/// Session token plus the cookie jar the HTTP client writes into.
///
/// The token is written by login only; every other operation reads it.
#[derive(Debug, Default)]
pub struct Session {
    token: RwLock<Option<String>>,
    cookies: Arc<HostCookieJar>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current token, if login has found one
    pub fn token(&self) -> Option<String> {
        self.token
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Replace the current token
    pub fn set_token(&self, token: impl Into<String>) {
        *self.token.write().unwrap_or_else(PoisonError::into_inner) = Some(token.into());
    }

    /// Current token, or [`ChatError::EmptyToken`] when missing or empty
    pub fn require_token(&self) -> Result<String, ChatError> {
        self.token()
            .filter(|token| !token.is_empty())
            .ok_or(ChatError::EmptyToken)
    }

    /// Cookie jar handed to the HTTP client
    pub fn cookie_jar(&self) -> Arc<HostCookieJar> {
        Arc::clone(&self.cookies)
    }
}
