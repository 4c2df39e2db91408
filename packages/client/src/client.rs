//! The chat service client.
//!
//! `ChatClient` exposes the four service operations twice: the `try_*`
//! methods return a [`ChatError`] describing what went wrong, and the plain
//! methods fold every failure into a benign value (a failure marker, an empty
//! list, or an error string) so nothing escapes the call.

use std::sync::Arc;

use anonchat_shared::time::{Clock, SystemClock, fetch_timestamp};
use serde_json::Value;

use crate::{
    config::ChatConfig,
    error::ChatError,
    formatter::MessageFormatter,
    protocol::{
        API_SERVER_PATH, ChatMessage, LOGIN_PATH, ROOM_PATH, browser_headers, create_room_form,
        extract_token, fetch_data_form, parse_data_list, parse_room, send_data_form,
    },
    session::Session,
};

/// Client for one chat service origin.
///
/// Cloning is cheap; clones share the session, so a token obtained by
/// `login` on one clone is visible to all of them.
#[derive(Clone)]
pub struct ChatClient {
    http: reqwest::Client,
    session: Arc<Session>,
    config: Arc<ChatConfig>,
    clock: Arc<dyn Clock>,
}

impl ChatClient {
    /// Create a client using the system clock
    pub fn new(config: ChatConfig) -> Result<Self, ChatError> {
        Self::with_clock(config, Arc::new(SystemClock))
    }

    /// Create a client reading the fetch timestamp from `clock`
    pub fn with_clock(config: ChatConfig, clock: Arc<dyn Clock>) -> Result<Self, ChatError> {
        let session = Arc::new(Session::new());
        let http = reqwest::Client::builder()
            .cookie_provider(session.cookie_jar())
            .build()
            .map_err(ChatError::ClientBuild)?;

        Ok(Self {
            http,
            session,
            config: Arc::new(config),
            clock,
        })
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn config(&self) -> &ChatConfig {
        &self.config
    }

    /// Load the service root and store the token found in it.
    ///
    /// Never fails: returns the token held after the attempt, which is the
    /// previous one (possibly `None`) if the page could not be loaded or held
    /// no token.
    pub async fn login(&self) -> Option<String> {
        match self.fetch_login_page().await {
            Ok(body) => match extract_token(&body) {
                Some(token) => {
                    self.session.set_token(token);
                    tracing::info!("Login succeeded");
                    tracing::debug!("Token: {}", token);
                }
                None => tracing::warn!("Login page did not contain a token"),
            },
            Err(e) => tracing::warn!("Login request failed: {}", e),
        }
        self.session.token()
    }

    async fn fetch_login_page(&self) -> Result<String, ChatError> {
        let body = self
            .http
            .get(self.config.endpoint(LOGIN_PATH))
            .send()
            .await?
            .text()
            .await?;
        Ok(body)
    }

    /// Create a room, returning the server's JSON object unmodified
    pub async fn try_create_room(&self) -> Result<Value, ChatError> {
        let token = self.session.require_token()?;
        let body = self
            .http
            .post(self.config.endpoint(API_SERVER_PATH))
            .form(&create_room_form(&token))
            .send()
            .await?
            .text()
            .await?;
        parse_room(&body)
    }

    /// Create a room; `None` on any failure
    pub async fn create_room(&self) -> Option<Value> {
        self.try_create_room()
            .await
            .inspect_err(|e| tracing::warn!("Room creation failed: {}", e))
            .ok()
    }

    /// Post `text` to a room and return the raw response body.
    ///
    /// `text` is embedded into the `data` field without JSON escaping.
    pub async fn try_send_room(
        &self,
        text: &str,
        room_hash: Option<&str>,
    ) -> Result<String, ChatError> {
        let hash = room_hash
            .filter(|hash| !hash.is_empty())
            .ok_or(ChatError::MissingRoomHash)?;
        tracing::debug!("Target hash: {}", hash);

        let token = self.session.require_token()?;
        let form = send_data_form(&self.config, hash, text, &token);

        let response = self
            .http
            .post(self.config.endpoint(ROOM_PATH))
            .form(&form)
            .headers(browser_headers(&self.config)?)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ChatError::HttpStatus(status.as_u16()));
        }

        let body = response.text().await?;
        tracing::debug!("Response: {}", body);
        Ok(body)
    }

    /// Post `text` to a room.
    ///
    /// Returns the server's response body, or an `Error: ...` string
    /// describing why the message was not sent.
    pub async fn send_room(&self, text: &str, room_hash: Option<&str>) -> String {
        self.try_send_room(text, room_hash)
            .await
            .unwrap_or_else(|e| {
                tracing::warn!("Send failed: {}", e);
                e.to_string()
            })
    }

    /// Fetch the latest messages of a room
    pub async fn try_fetch_messages(
        &self,
        room_hash: Option<&str>,
    ) -> Result<Vec<ChatMessage>, ChatError> {
        let hash = room_hash
            .filter(|hash| !hash.is_empty())
            .ok_or(ChatError::MissingRoomHash)?;
        let token = self.session.require_token()?;
        let num = fetch_timestamp(self.clock.as_ref());

        let body = self
            .http
            .post(self.config.endpoint(ROOM_PATH))
            .form(&fetch_data_form(hash, &token, &num))
            .send()
            .await?
            .text()
            .await?;
        parse_data_list(&body)
    }

    /// Fetch the latest messages of a room as `"<author>: <text>"` lines
    pub async fn try_fetch_room(&self, room_hash: Option<&str>) -> Result<Vec<String>, ChatError> {
        let messages = self.try_fetch_messages(room_hash).await?;
        Ok(messages
            .iter()
            .map(MessageFormatter::format_chat_message)
            .collect())
    }

    /// Fetch the latest messages of a room; empty on any failure
    pub async fn fetch_room(&self, room_hash: Option<&str>) -> Vec<String> {
        match room_hash {
            Some(_) => self.try_fetch_room(room_hash).await.unwrap_or_else(|e| {
                tracing::warn!("Fetch failed: {}", e);
                Vec::new()
            }),
            None => Vec::new(),
        }
    }
}
