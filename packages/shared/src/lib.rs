//! Shared utilities for the anonchat workspace.

pub mod logger;
pub mod time;
