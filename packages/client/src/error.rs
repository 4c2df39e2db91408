//! Error types for the chat client.
//!
//! Display strings of the precondition, transport and status variants are
//! the exact messages `ChatClient::send_room` hands back to callers.

use thiserror::Error;

/// Client-specific errors
#[derive(Debug, Error)]
pub enum ChatError {
    /// No room hash was supplied
    #[error("Error: ハッシュIDが設定されていません")]
    MissingRoomHash,

    /// No session token, or an empty one (login has not succeeded yet)
    #[error("Error: Tokenが空です")]
    EmptyToken,

    /// The request never produced an HTTP response
    #[error("Error: ネットワークエラー - {}", error_chain(.0))]
    Transport(#[from] reqwest::Error),

    /// The HTTP client itself could not be constructed
    #[error("Error: HTTP client initialization failed - {}", error_chain(.0))]
    ClientBuild(#[source] reqwest::Error),

    /// The server answered with a non-success status
    #[error("Error: サーバーエラー - HTTP {0}")]
    HttpStatus(u16),

    /// The server answered with an empty body where JSON was expected
    #[error("Error: Empty Response")]
    EmptyBody,

    /// The body was not valid JSON
    #[error("Error: JSON parse error - {0}")]
    Json(#[from] serde_json::Error),

    /// The body was valid JSON but not the expected shape
    #[error("Error: unexpected JSON - {0}")]
    UnexpectedJson(&'static str),

    /// A configured value cannot be sent as an HTTP header
    #[error("Error: invalid header value - {0}")]
    InvalidHeader(#[from] reqwest::header::InvalidHeaderValue),
}

/// Render an error followed by every cause in its `source()` chain
pub fn error_chain(error: &dyn std::error::Error) -> String {
    let mut message = error.to_string();
    let mut source = error.source();
    while let Some(cause) = source {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        source = cause.source();
    }
    message
}

/// Failures reported by the command-line front end
#[derive(Debug, Error)]
pub enum CliError {
    /// Login finished without a usable token
    #[error("Login failed: no session token found")]
    LoginFailed,

    /// The room creation call returned its failure marker
    #[error("Room creation failed")]
    RoomCreationFailed,

    /// The send call returned an error string
    #[error("{0}")]
    SendFailed(String),

    /// The interactive session stopped without the user asking
    #[error("Chat session ended unexpectedly: {0}")]
    SessionAborted(String),
}
