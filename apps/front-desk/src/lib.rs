//! # Serenity Desk Library
//!
//! Core library for the Serenity Suites front desk.
//! This is the main entry point that configures and runs the shell.
//!
//! ## Module Organization
//! ```text
//! serenity_desk_lib/
//! ├── lib.rs          ◄─── You are here (startup & run)
//! ├── state/
//! │   ├── mod.rs      ◄─── State type exports
//! │   ├── hotel.rs    ◄─── Shared Hotel (Arc<Mutex>)
//! │   └── config.rs   ◄─── Configuration state
//! ├── commands/
//! │   ├── mod.rs      ◄─── Command exports
//! │   ├── rooms.rs    ◄─── Browse, quote, offers, add room
//! │   ├── booking.rs  ◄─── Book, cancel, reservations
//! │   ├── account.rs  ◄─── Accounts, profile, payment methods
//! │   ├── admin.rs    ◄─── Dashboard
//! │   └── config.rs   ◄─── Configuration retrieval
//! ├── shell.rs        ◄─── Line parsing, session, JSON output
//! └── error.rs        ◄─── API error type for commands
//! ```

pub mod commands;
pub mod error;
pub mod shell;
pub mod state;

use std::path::PathBuf;

use clap::Parser;
use serenity_store::HotelEvent;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::broadcast::{self, error::RecvError};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use error::StartupError;
use shell::{Outcome, Shell};
use state::{HotelConfig, HotelState};

/// Command-line options of the `serenity-desk` binary.
#[derive(Debug, Parser)]
#[command(name = "serenity-desk", version, about = "Serenity Suites front desk")]
pub struct Cli {
    /// Path to the configuration file (default: platform config dir)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Start with an empty hotel instead of the default catalog
    #[arg(long)]
    pub no_seed: bool,
}

/// Runs the front desk until `exit` or end of input.
///
/// ## Startup Sequence
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │                       Front Desk Startup                                │
/// │                                                                         │
/// │  1. Load Configuration ───────────────────────────────────────────────► │
/// │     • defaults → serenity.toml → SERENITY_* → validate                  │
/// │                                                                         │
/// │  2. Initialize Logging ───────────────────────────────────────────────► │
/// │     • tracing-subscriber with env filter, to stderr                     │
/// │     • RUST_LOG wins, then log_filter from config                        │
/// │                                                                         │
/// │  3. Open the Hotel ───────────────────────────────────────────────────► │
/// │     • Seed catalog and default accounts unless disabled                 │
/// │                                                                         │
/// │  4. Spawn Event Logger ───────────────────────────────────────────────► │
/// │     • Subscribes to the hotel's broadcast channel                       │
/// │                                                                         │
/// │  5. Read stdin line by line ──────────────────────────────────────────► │
/// │     • Each line → Shell::execute_line → JSON on stdout                  │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
pub async fn run(cli: Cli) -> Result<(), StartupError> {
    let mut config = HotelConfig::load(cli.config.as_deref())?;
    if cli.no_seed {
        config.seed_defaults = false;
    }

    init_tracing(&config.log_filter);
    info!(hotel = %config.hotel_name, "Starting Serenity Suites front desk");

    let state = HotelState::from_config(&config)?;
    tokio::spawn(log_events(state.subscribe()?));

    let mut shell = Shell::new(state, config);
    println!("{}", shell.banner());

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        match shell.execute_line(&line) {
            Outcome::Reply(text) => println!("{}", text),
            Outcome::Nothing => {}
            Outcome::Exit => break,
        }
    }

    info!("Front desk closed");
    Ok(())
}

/// Initializes the tracing subscriber for structured logging.
///
/// Logs go to stderr so stdout carries only shell replies.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=serenity_core=debug` - Offer evaluation only
/// - Default: the configured `log_filter` (`info`)
pub fn init_tracing(default_filter: &str) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Logs every hotel event until the channel closes.
pub async fn log_events(mut events: broadcast::Receiver<HotelEvent>) {
    loop {
        match events.recv().await {
            Ok(event) => {
                let payload = serde_json::to_string(&event).unwrap_or_default();
                info!(event = event.name(), %payload, "Hotel event");
            }
            Err(RecvError::Lagged(skipped)) => {
                warn!(skipped, "Event logger fell behind");
            }
            Err(RecvError::Closed) => break,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::booking::{book_room, cancel_booking};
    use crate::commands::test_support::state;
    use serenity_core::BookingRequest;

    #[test]
    fn test_cli_flags() {
        let cli = Cli::parse_from(["serenity-desk", "--config", "/tmp/serenity.toml", "--no-seed"]);
        assert_eq!(cli.config, Some(PathBuf::from("/tmp/serenity.toml")));
        assert!(cli.no_seed);

        let cli = Cli::parse_from(["serenity-desk"]);
        assert!(cli.config.is_none());
        assert!(!cli.no_seed);
    }

    #[tokio::test]
    async fn test_event_logger_stops_when_hotel_is_dropped() {
        let state = state();
        let mut events = state.subscribe().unwrap();

        let confirmation = book_room(
            &state,
            BookingRequest {
                room_number: 1,
                check_in: "2025-03-01".to_string(),
                check_out: "2025-03-02".to_string(),
                guests: 1,
                check_in_time: None,
                check_out_time: None,
                payment_method: String::new(),
                username: "guest1".to_string(),
            },
        )
        .unwrap();
        cancel_booking(&state, confirmation.id).unwrap();

        let names: Vec<&str> = [
            events.recv().await.unwrap(),
            events.recv().await.unwrap(),
            events.recv().await.unwrap(),
            events.recv().await.unwrap(),
        ]
        .iter()
        .map(HotelEvent::name)
        .collect();
        assert_eq!(
            names,
            vec![
                "booking_created",
                "room_availability_changed",
                "booking_cancelled",
                "room_availability_changed"
            ]
        );

        let logger = tokio::spawn(log_events(state.subscribe().unwrap()));
        drop(state);
        logger.await.unwrap();
    }
}
