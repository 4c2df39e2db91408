//! Command-line client for the anonymous web chat service.
//!
//! Logs in, then creates a room, posts a message, prints the latest
//! messages, or opens an interactive session that posts typed lines and
//! polls for new messages.
//!
//! Run with:
//! ```not_rust
//! cargo run --bin anonchat -- create-room
//! cargo run --bin anonchat -- send --room <HASH> "hello"
//! cargo run --bin anonchat -- fetch --room <HASH>
//! cargo run --bin anonchat -- chat --room <HASH> --interval 3
//! ```

use std::time::Duration;

use clap::{Parser, Subcommand};

use anonchat_client::{
    ChatClient, ChatConfig,
    config::{DEFAULT_BASE_URL, DEFAULT_PROFILE_COLOR, DEFAULT_PROFILE_NAME},
    runner,
};
use anonchat_shared::logger::setup_logger;

#[derive(Parser, Debug)]
#[command(name = "anonchat")]
#[command(about = "Client for an anonymous web chat service", long_about = None)]
struct Args {
    /// Chat service origin
    #[arg(short = 'u', long, global = true, default_value = DEFAULT_BASE_URL)]
    base_url: String,

    /// Display name attached to sent messages
    #[arg(long, global = true, default_value = DEFAULT_PROFILE_NAME)]
    profile_name: String,

    /// Display color attached to sent messages
    #[arg(long, global = true, default_value = DEFAULT_PROFILE_COLOR)]
    profile_color: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Create a new room and print the server response
    CreateRoom,

    /// Send one message to a room
    Send {
        /// Room hash
        #[arg(short = 'r', long)]
        room: String,

        /// Message text
        text: String,
    },

    /// Print the latest messages of a room
    Fetch {
        /// Room hash
        #[arg(short = 'r', long)]
        room: String,

        /// Print one JSON object per message
        #[arg(long)]
        json: bool,
    },

    /// Join a room interactively
    Chat {
        /// Room hash
        #[arg(short = 'r', long)]
        room: String,

        /// Seconds between polls for new messages
        #[arg(short = 'i', long, default_value_t = 3)]
        interval: u64,
    },
}

#[tokio::main]
async fn main() {
    // Initialize tracing
    setup_logger(env!("CARGO_BIN_NAME"), "info");

    let args = Args::parse();

    let config = ChatConfig {
        base_url: args.base_url,
        profile_name: args.profile_name,
        profile_color: args.profile_color,
        ..ChatConfig::default()
    };

    let client = match ChatClient::new(config) {
        Ok(client) => client,
        Err(e) => {
            tracing::error!("Failed to build HTTP client: {}", e);
            std::process::exit(1);
        }
    };

    let result = match args.command {
        Command::CreateRoom => runner::run_create_room(&client).await,
        Command::Send { room, text } => runner::run_send(&client, &room, &text).await,
        Command::Fetch { room, json } => runner::run_fetch(&client, &room, json).await,
        Command::Chat { room, interval } => {
            runner::run_chat(client, room, Duration::from_secs(interval.max(1))).await
        }
    };

    if let Err(e) = result {
        tracing::error!("{}", e);
        std::process::exit(1);
    }
}
