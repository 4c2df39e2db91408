//! Thin client for an anonymous web chat service.
//!
//! [`ChatClient`] logs in to obtain a session token, creates rooms, posts
//! messages and polls for recent messages. The `runner` module drives it from
//! the `anonchat` command-line binary.

mod client;
mod domain;
mod interactive;
mod ui;

pub mod config;
pub mod cookie;
pub mod error;
pub mod formatter;
pub mod protocol;
pub mod runner;
pub mod session;

pub use client::ChatClient;
pub use config::ChatConfig;
pub use error::{ChatError, CliError};
pub use protocol::ChatMessage;
