//! Wire details of the chat service: endpoints, form fields, headers and
//! response parsing.
//!
//! Everything here is pure; `ChatClient` does the I/O.

use std::sync::LazyLock;

use regex::Regex;
use reqwest::header::{
    ACCEPT, ACCEPT_LANGUAGE, CONTENT_TYPE, HeaderMap, HeaderName, HeaderValue, ORIGIN, REFERER,
    USER_AGENT,
};
use serde::Serialize;
use serde_json::Value;

use crate::{config::ChatConfig, error::ChatError};

/// Login page, scanned for the session token
pub const LOGIN_PATH: &str = "/";
/// Room creation endpoint
pub const API_SERVER_PATH: &str = "/api_server.php";
/// Message send/fetch endpoint
pub const ROOM_PATH: &str = "/room.php";

/// A form body as ordered `(field, value)` pairs
pub type Form = Vec<(&'static str, String)>;

static TOKEN_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[a-zA-Z0-9]{32}").expect("Failed to compile token regex"));

/// A message read back from a room
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChatMessage {
    pub author: Option<String>,
    pub text: String,
}

/// First 32-character alphanumeric run in the login page
pub fn extract_token(body: &str) -> Option<&str> {
    TOKEN_REGEX.find(body).map(|m| m.as_str())
}

/// JSON fragment carried in the `data` field of a send request.
///
/// `text` is interpolated as-is: quotes or control characters in it produce
/// a malformed fragment. The service's expected escaping is unknown.
pub fn chat_payload(text: &str) -> String {
    format!(r#"{{"type":"chat","msg":"{}"}}"#, text)
}

pub fn create_room_form(token: &str) -> Form {
    vec![
        ("action", "createRoom".to_string()),
        ("csrf_token_check", token.to_string()),
    ]
}

pub fn send_data_form(config: &ChatConfig, hash: &str, text: &str, token: &str) -> Form {
    vec![
        ("action", "sendData".to_string()),
        ("hash", hash.to_string()),
        ("profile_name", config.profile_name.clone()),
        ("profile_color", config.profile_color.clone()),
        ("data", chat_payload(text)),
        ("csrf_token_check", token.to_string()),
    ]
}

/// `num` is the local time as `YYYYMMDDHHMMSS`; the service requires it but
/// its meaning is not documented.
pub fn fetch_data_form(hash: &str, token: &str, num: &str) -> Form {
    vec![
        ("action", "fetchData".to_string()),
        ("hash", hash.to_string()),
        ("csrf_token_check", token.to_string()),
        ("mode", "log".to_string()),
        ("type", "last".to_string()),
        ("num", num.to_string()),
    ]
}

/// Headers the service requires before it accepts a message post
pub fn browser_headers(config: &ChatConfig) -> Result<HeaderMap, ChatError> {
    let origin = config.origin();
    let mut headers = HeaderMap::new();
    headers.insert(USER_AGENT, HeaderValue::from_str(&config.user_agent)?);
    headers.insert(
        ACCEPT,
        HeaderValue::from_static("application/json, text/javascript, */*; q=0.01"),
    );
    headers.insert(
        ACCEPT_LANGUAGE,
        HeaderValue::from_static("ja,en-US;q=0.9,en;q=0.8"),
    );
    headers.insert(
        CONTENT_TYPE,
        HeaderValue::from_static("application/x-www-form-urlencoded; charset=UTF-8"),
    );
    headers.insert(ORIGIN, HeaderValue::from_str(origin)?);
    headers.insert(REFERER, HeaderValue::from_str(&format!("{}/", origin))?);
    headers.insert(
        HeaderName::from_static("x-requested-with"),
        HeaderValue::from_static("XMLHttpRequest"),
    );
    Ok(headers)
}

/// Parse a room creation response into the JSON object it carries
pub fn parse_room(body: &str) -> Result<Value, ChatError> {
    if body.trim().is_empty() {
        return Err(ChatError::EmptyBody);
    }
    let value: Value = serde_json::from_str(body)?;
    if !value.is_object() {
        return Err(ChatError::UnexpectedJson("room response is not an object"));
    }
    Ok(value)
}

/// Parse a fetch response into messages, in the order of `data_list`.
///
/// Entries without `data.msg` are skipped. A missing `data_list` yields no
/// messages.
pub fn parse_data_list(body: &str) -> Result<Vec<ChatMessage>, ChatError> {
    let value: Value = serde_json::from_str(body)?;
    let root = value
        .as_object()
        .ok_or(ChatError::UnexpectedJson("fetch response is not an object"))?;

    let Some(entries) = root.get("data_list").and_then(Value::as_object) else {
        return Ok(Vec::new());
    };

    let messages = entries
        .values()
        .filter_map(|entry| entry.get("data").and_then(Value::as_object))
        .filter_map(|data| {
            let text = opt_string(data.get("msg"))?;
            Some(ChatMessage {
                author: opt_string(data.get("name")),
                text,
            })
        })
        .collect();
    Ok(messages)
}

/// Lenient string read: `null` and missing are `None`, other scalars are
/// rendered as JSON text.
fn opt_string(value: Option<&Value>) -> Option<String> {
    match value? {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}
