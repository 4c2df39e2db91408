//! Command execution for the `anonchat` binary.
//!
//! Every command logs in first, then performs one operation and prints its
//! result to stdout.

use std::time::Duration;

use crate::{
    client::ChatClient, error::CliError, formatter::MessageFormatter,
    interactive::run_chat_session,
};

/// Log in and fail unless a non-empty token was obtained
pub async fn ensure_login(client: &ChatClient) -> Result<(), CliError> {
    client.login().await;
    client
        .session()
        .require_token()
        .map(|_| ())
        .map_err(|_| CliError::LoginFailed)
}

/// Create a room and print the server's JSON
pub async fn run_create_room(client: &ChatClient) -> Result<(), Box<dyn std::error::Error>> {
    ensure_login(client).await?;

    let room = client
        .create_room()
        .await
        .ok_or(CliError::RoomCreationFailed)?;
    println!("{}", MessageFormatter::format_room_created(&room));
    Ok(())
}

/// Post one message and print the server's response
pub async fn run_send(
    client: &ChatClient,
    room_hash: &str,
    text: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    ensure_login(client).await?;

    let result = client.send_room(text, Some(room_hash)).await;
    if result.starts_with("Error:") {
        return Err(Box::new(CliError::SendFailed(result)));
    }
    println!("{}", result);
    Ok(())
}

/// Print the latest messages of a room, one per line (or as JSON lines)
pub async fn run_fetch(
    client: &ChatClient,
    room_hash: &str,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    ensure_login(client).await?;

    if json {
        for message in client.try_fetch_messages(Some(room_hash)).await? {
            println!("{}", serde_json::to_string(&message)?);
        }
    } else {
        for line in client.fetch_room(Some(room_hash)).await {
            println!("{}", line);
        }
    }
    Ok(())
}

/// Log in and start the interactive session for a room
pub async fn run_chat(
    client: ChatClient,
    room_hash: String,
    poll_interval: Duration,
) -> Result<(), Box<dyn std::error::Error>> {
    ensure_login(&client).await?;
    tracing::info!("Joined room '{}'", room_hash);
    run_chat_session(client, room_hash, poll_interval).await
}
