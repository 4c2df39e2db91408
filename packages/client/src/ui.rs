//! UI utilities for the interactive chat session.

use std::io::Write;

/// Prompt shown while waiting for input in a room
pub fn prompt(room_hash: &str) -> String {
    format!("{}> ", room_hash)
}

/// Redisplay the prompt after printing a message
pub fn redisplay_prompt(room_hash: &str) {
    print!("{}", prompt(room_hash));
    std::io::stdout().flush().ok();
}
