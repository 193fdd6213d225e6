//! # Serenity Desk Entry Point
//!
//! ## Application Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Serenity Suites Front Desk                       │
//! │                                                                         │
//! │  stdin ──► Shell (clap per line) ──► commands/ ──► HotelState           │
//! │                                                        │                │
//! │  stdout ◄── JSON replies ◄─────────────────────────────┘                │
//! │                                                                         │
//! │  stderr ◄── tracing ◄── event logger task ◄── broadcast channel         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The actual setup is in lib.rs for testability.

use clap::Parser;
use serenity_desk_lib::Cli;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    if let Err(e) = serenity_desk_lib::run(cli).await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
