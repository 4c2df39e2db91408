//! Interactive chat session: a readline prompt for posting and a polling
//! task for incoming messages.

use std::time::Duration;

use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;
use tokio::sync::mpsc;

use crate::{
    client::ChatClient,
    domain::unseen_messages,
    error::CliError,
    formatter::MessageFormatter,
    ui::{prompt, redisplay_prompt},
};

/// Run the session until the user exits with Ctrl+C or Ctrl+D
pub async fn run_chat_session(
    client: ChatClient,
    room_hash: String,
    poll_interval: Duration,
) -> Result<(), Box<dyn std::error::Error>> {
    println!(
        "\nRoom '{}'. Type messages and press Enter to send. Press Ctrl+C to exit.\n",
        room_hash
    );

    let mut poll_task = tokio::spawn(poll_messages(
        client.clone(),
        room_hash.clone(),
        poll_interval,
    ));

    // Create channel for rustyline input
    let (input_tx, mut input_rx) = mpsc::unbounded_channel::<String>();

    // Spawn a blocking thread for rustyline (synchronous readline)
    let prompt_text = prompt(&room_hash);
    let _readline_handle = std::thread::spawn(move || {
        let mut rl = match DefaultEditor::new() {
            Ok(rl) => rl,
            Err(e) => {
                eprintln!("Failed to initialize readline: {}", e);
                return;
            }
        };

        loop {
            match rl.readline(&prompt_text) {
                Ok(line) => {
                    let line = line.trim();
                    if !line.is_empty() {
                        rl.add_history_entry(line).ok();
                        if input_tx.send(line.to_string()).is_err() {
                            break;
                        }
                    }
                }
                Err(ReadlineError::Interrupted) => {
                    tracing::info!("Interrupted");
                    break;
                }
                Err(ReadlineError::Eof) => {
                    tracing::info!("EOF");
                    break;
                }
                Err(err) => {
                    tracing::error!("Readline error: {}", err);
                    break;
                }
            }
        }
    });

    // Send each entered line to the room
    let hash_for_send = room_hash.clone();
    let mut send_task = tokio::spawn(async move {
        while let Some(line) = input_rx.recv().await {
            let result = client.send_room(&line, Some(&hash_for_send)).await;
            print!("{}", MessageFormatter::format_send_result(&result));
            redisplay_prompt(&hash_for_send);
        }
    });

    // The send task ends when the prompt thread exits; the poll task only
    // ends if it panics
    tokio::select! {
        poll_result = &mut poll_task => {
            send_task.abort();
            let reason = match poll_result {
                Ok(()) => "polling stopped".to_string(),
                Err(e) => e.to_string(),
            };
            return Err(Box::new(CliError::SessionAborted(reason)));
        }
        _ = &mut send_task => {
            poll_task.abort();
        }
    }

    tracing::info!("Left room '{}'", room_hash);
    Ok(())
}

/// Poll the room forever, printing messages not shown by the previous poll
async fn poll_messages(client: ChatClient, room_hash: String, poll_interval: Duration) {
    let mut shown: Vec<String> = Vec::new();
    let mut ticker = tokio::time::interval(poll_interval);

    loop {
        ticker.tick().await;
        let current = client.fetch_room(Some(&room_hash)).await;
        // An empty result is also what a failed fetch looks like
        if current.is_empty() {
            continue;
        }

        let unseen = unseen_messages(&shown, &current);
        if !unseen.is_empty() {
            for line in unseen {
                print!("{}", MessageFormatter::format_incoming(line));
            }
            redisplay_prompt(&room_hash);
        }
        shown = current;
    }
}
