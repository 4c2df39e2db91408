//! Message formatting utilities for display.

use serde_json::Value;

use crate::protocol::ChatMessage;

/// Message formatter for client display
pub struct MessageFormatter;

impl MessageFormatter {
    /// Format a fetched message as `"<author>: <text>"`
    ///
    /// A message without an author renders with an empty author.
    pub fn format_chat_message(message: &ChatMessage) -> String {
        format!(
            "{}: {}",
            message.author.as_deref().unwrap_or_default(),
            message.text
        )
    }

    /// Format a message that arrived while the prompt is displayed
    pub fn format_incoming(line: &str) -> String {
        format!("\n← {}\n", line)
    }

    /// Format the response of a message post
    pub fn format_send_result(result: &str) -> String {
        format!("\n→ {}\n", result)
    }

    /// Format a room creation response for the terminal
    ///
    /// Falls back to compact JSON if pretty-printing fails.
    pub fn format_room_created(room: &Value) -> String {
        serde_json::to_string_pretty(room).unwrap_or_else(|_| room.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_chat_message_with_author() {
        // テスト項目: 投稿者付きのメッセージが "author: text" 形式になる
        // given (前提条件):
        let message = ChatMessage {
            author: Some("bob".to_string()),
            text: "hi".to_string(),
        };

        // when (操作):
        let result = MessageFormatter::format_chat_message(&message);

        // then (期待する結果):
        assert_eq!(result, "bob: hi");
    }

    #[test]
    fn test_format_chat_message_without_author() {
        // テスト項目: 投稿者がないメッセージは空の投稿者で表示される
        // given (前提条件):
        let message = ChatMessage {
            author: None,
            text: "anonymous".to_string(),
        };

        // when (操作):
        let result = MessageFormatter::format_chat_message(&message);

        // then (期待する結果):
        assert_eq!(result, ": anonymous");
    }

    #[test]
    fn test_format_incoming() {
        // テスト項目: 受信メッセージが矢印付きでフォーマットされる
        // given (前提条件):
        let line = "alice: hello";

        // when (操作):
        let result = MessageFormatter::format_incoming(line);

        // then (期待する結果):
        assert_eq!(result, "\n← alice: hello\n");
    }

    #[test]
    fn test_format_send_result() {
        // テスト項目: 送信結果が矢印付きでフォーマットされる
        // given (前提条件):
        let response = r#"{"result":"OK"}"#;

        // when (操作):
        let result = MessageFormatter::format_send_result(response);

        // then (期待する結果):
        assert!(result.contains("→"));
        assert!(result.contains(response));
    }

    #[test]
    fn test_format_room_created_is_pretty_json() {
        // テスト項目: ルーム作成結果が整形された JSON で表示される
        // given (前提条件):
        let room = serde_json::json!({"hash": "abc"});

        // when (操作):
        let result = MessageFormatter::format_room_created(&room);

        // then (期待する結果):
        assert_eq!(result, "{\n  \"hash\": \"abc\"\n}");
    }
}
