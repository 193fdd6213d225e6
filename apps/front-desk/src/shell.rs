//! # Front Desk Shell
//!
//! One command per line, parsed with clap, answered with JSON.
//!
//! ## Session Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  > login guest1 guest123                                                │
//! │  { "username": "guest1", "role": "GUEST", ... }                         │
//! │                                                                         │
//! │  > search suite                                                         │
//! │  [ { "number": 301, ... }, ... ]                                        │
//! │                                                                         │
//! │  > book 301 2025-01-01 2025-01-08 4 --check-in-time "2:00 PM"           │
//! │  Booked room 301 for 7 night(s): ₱41650.00 (Honeymoon Package)          │
//! │  { "id": 1, "totalPrice": 4165000, ... }                                │
//! │                                                                         │
//! │  > logout                                                               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Who May Run What
//! | Command                          | Needs                    |
//! |----------------------------------|--------------------------|
//! | rooms, search, quote, offers     | nothing                  |
//! | register, login, reset-password  | nothing                  |
//! | book, reservations, profile, ... | any signed-in account    |
//! | bookings, dashboard              | ADMIN or STAFF           |
//! | add-room                         | ADMIN                    |
//!
//! Guests may only view or cancel their own bookings.

use clap::{Parser, Subcommand};
use serde::Serialize;
use serde_json::{json, Value};
use serenity_core::{
    BookingConfirmation, BookingRequest, Money, NewRoom, ProfileUpdate, Registration, Role,
    RoomCategory, TimeSlot,
};
use tracing::debug;

use crate::commands::{account, admin, booking, config, rooms};
use crate::error::{ApiError, ApiResult};
use crate::state::{HotelConfig, HotelState};

/// One parsed shell line.
#[derive(Debug, Parser)]
#[command(name = "serenity", no_binary_name = true, disable_version_flag = true)]
pub struct ShellLine {
    #[command(subcommand)]
    pub command: ShellCommand,
}

#[derive(Debug, Subcommand)]
pub enum ShellCommand {
    /// List every room in catalog order
    Rooms,
    /// Available rooms, optionally of one category
    Search { category: Option<RoomCategory> },
    /// Price preview for a stay (no offers)
    Quote {
        room: u32,
        check_in: String,
        check_out: String,
    },
    /// The promotional offers
    Offers,
    /// Book a room for the signed-in guest
    Book {
        room: u32,
        check_in: String,
        check_out: String,
        guests: u32,
        /// e.g. "2:00 PM" (default 12:00 AM)
        #[arg(long)]
        check_in_time: Option<TimeSlot>,
        /// e.g. "11:30 AM" (default 11:30 PM)
        #[arg(long)]
        check_out_time: Option<TimeSlot>,
        /// Free-text payment label (default "Cash")
        #[arg(long, conflicts_with = "saved")]
        payment: Option<String>,
        /// Pay with the saved payment method at this position
        #[arg(long)]
        saved: Option<usize>,
        /// Book on behalf of another account (ADMIN/STAFF)
        #[arg(long = "for")]
        on_behalf_of: Option<String>,
    },
    /// Cancel a booking by id
    Cancel { id: u64 },
    /// My reservations
    Reservations,
    /// Every active booking (ADMIN/STAFF)
    Bookings,
    /// One booking by id
    Booking { id: u64 },
    /// Bookings, revenue and occupancy (ADMIN/STAFF)
    Dashboard,
    /// Add a room to the catalog (ADMIN)
    AddRoom {
        number: u32,
        name: String,
        category: RoomCategory,
        /// Nightly price in whole pesos
        price: i64,
        /// Defaults to the category's usual capacity
        capacity: Option<u32>,
    },
    /// Create an account
    Register {
        username: String,
        email: String,
        phone: String,
        password: String,
        confirm_password: String,
        #[arg(long, default_value = "GUEST")]
        role: Role,
    },
    /// Sign in
    Login {
        username: String,
        password: String,
        #[arg(long, default_value = "GUEST")]
        role: Role,
    },
    /// Sign out
    Logout,
    /// Show the signed-in profile
    Profile,
    /// Change email and phone, optionally the password
    UpdateProfile {
        email: String,
        phone: String,
        #[arg(long, requires = "confirm_password")]
        new_password: Option<String>,
        #[arg(long)]
        confirm_password: Option<String>,
    },
    /// Set a new password for the account registered with this email
    ResetPassword {
        email: String,
        new_password: String,
        confirm_password: String,
    },
    /// List saved payment methods
    Payments,
    /// Save a payment method (GCash, PayMaya, "Credit Card", "Debit Card")
    AddPayment {
        kind: String,
        number: String,
        account_name: String,
    },
    /// Remove the saved payment method at a position
    RemovePayment { position: usize },
    /// Show configuration
    Config,
    /// Leave the shell
    #[command(alias = "quit")]
    Exit,
}

/// What the shell should do after a line.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// Print this text.
    Reply(String),
    /// Blank line, nothing to print.
    Nothing,
    Exit,
}

#[derive(Debug, Clone)]
struct SignedIn {
    username: String,
    role: Role,
}

impl SignedIn {
    fn is_desk(&self) -> bool {
        matches!(self.role, Role::Admin | Role::Staff)
    }
}

/// Body plus an optional one-line summary printed above it.
struct Response {
    body: Value,
    summary: Option<String>,
}

impl Response {
    fn json<T: Serialize>(value: &T) -> ApiResult<Self> {
        let body = serde_json::to_value(value).map_err(|e| ApiError::internal(e.to_string()))?;
        Ok(Response {
            body,
            summary: None,
        })
    }

    fn with_summary(mut self, summary: String) -> Self {
        self.summary = Some(summary);
        self
    }
}

/// The interactive front desk: shared hotel, config and the current session.
pub struct Shell {
    state: HotelState,
    config: HotelConfig,
    session: Option<SignedIn>,
}

impl Shell {
    pub fn new(state: HotelState, config: HotelConfig) -> Self {
        Shell {
            state,
            config,
            session: None,
        }
    }

    pub fn banner(&self) -> String {
        format!(
            "Welcome to {}. Type `help` for commands, `exit` to leave.",
            self.config.hotel_name
        )
    }

    /// Username of the signed-in account.
    pub fn current_user(&self) -> Option<&str> {
        self.session.as_ref().map(|s| s.username.as_str())
    }

    /// Parses and runs one line.
    pub fn execute_line(&mut self, line: &str) -> Outcome {
        let words = match split_words(line) {
            Ok(words) if words.is_empty() => return Outcome::Nothing,
            Ok(words) => words,
            Err(err) => return Outcome::Reply(render_error(&err)),
        };

        let parsed = match ShellLine::try_parse_from(words) {
            Ok(parsed) => parsed,
            // Help and usage errors are already formatted by clap.
            Err(err) => return Outcome::Reply(err.to_string().trim_end().to_string()),
        };

        if matches!(parsed.command, ShellCommand::Exit) {
            return Outcome::Exit;
        }
        debug!(user = ?self.current_user(), "shell line");

        match self.dispatch(parsed.command) {
            Ok(response) => Outcome::Reply(render(response)),
            Err(err) => Outcome::Reply(render_error(&err)),
        }
    }

    fn require_user(&self) -> ApiResult<&SignedIn> {
        self.session
            .as_ref()
            .ok_or_else(|| ApiError::unauthorized("Please sign in first"))
    }

    fn require_desk(&self) -> ApiResult<&SignedIn> {
        let user = self.require_user()?;
        if user.is_desk() {
            Ok(user)
        } else {
            Err(ApiError::forbidden("Only admin or staff accounts can do that"))
        }
    }

    fn require_admin(&self) -> ApiResult<&SignedIn> {
        let user = self.require_user()?;
        if user.role == Role::Admin {
            Ok(user)
        } else {
            Err(ApiError::forbidden("Only admin accounts can do that"))
        }
    }

    /// Guests may only touch their own bookings.
    fn require_booking_access(&self, id: u64) -> ApiResult<()> {
        let user = self.require_user()?;
        if user.is_desk() {
            return Ok(());
        }
        let row = booking::get_booking(&self.state, id)?;
        if row.username == user.username {
            Ok(())
        } else {
            Err(ApiError::forbidden(format!(
                "Reservation #{} belongs to another guest",
                id
            )))
        }
    }

    fn dispatch(&mut self, command: ShellCommand) -> ApiResult<Response> {
        let state = &self.state;

        match command {
            ShellCommand::Rooms => Response::json(&rooms::list_rooms(state)?),
            ShellCommand::Search { category } => {
                Response::json(&rooms::search_rooms(state, category)?)
            }
            ShellCommand::Quote {
                room,
                check_in,
                check_out,
            } => {
                let quote = rooms::quote_stay(state, room, &check_in, &check_out)?;
                let summary = format!(
                    "{} night(s) × {} = {}",
                    quote.nights,
                    self.config.format_money(quote.price_per_night),
                    self.config.format_money(quote.total_price)
                );
                Ok(Response::json(&quote)?.with_summary(summary))
            }
            ShellCommand::Offers => Response::json(&rooms::list_offers(state)?),

            ShellCommand::Book {
                room,
                check_in,
                check_out,
                guests,
                check_in_time,
                check_out_time,
                payment,
                saved,
                on_behalf_of,
            } => {
                let user = self.require_user()?;
                let username = match on_behalf_of {
                    Some(other) if other != user.username => {
                        self.require_desk()?;
                        other
                    }
                    _ => user.username.clone(),
                };
                let payment_method = match saved {
                    Some(position) => saved_label(state, &username, position)?,
                    None => payment.unwrap_or_default(),
                };

                let confirmation = booking::book_room(
                    state,
                    BookingRequest {
                        room_number: room,
                        check_in,
                        check_out,
                        guests,
                        check_in_time,
                        check_out_time,
                        payment_method,
                        username,
                    },
                )?;
                let summary = self.booking_summary(&confirmation);
                Ok(Response::json(&confirmation)?.with_summary(summary))
            }
            ShellCommand::Cancel { id } => {
                self.require_booking_access(id)?;
                let cancelled = booking::cancel_booking(&self.state, id)?;
                let summary = format!(
                    "Reservation #{} cancelled, room {} is available again",
                    cancelled.id, cancelled.room_number
                );
                Ok(Response::json(&cancelled)?.with_summary(summary))
            }
            ShellCommand::Reservations => {
                let user = self.require_user()?;
                Response::json(&booking::my_reservations(state, &user.username)?)
            }
            ShellCommand::Bookings => {
                self.require_desk()?;
                Response::json(&booking::all_bookings(state)?)
            }
            ShellCommand::Booking { id } => {
                self.require_booking_access(id)?;
                Response::json(&booking::get_booking(&self.state, id)?)
            }
            ShellCommand::Dashboard => {
                self.require_desk()?;
                let dashboard = admin::get_dashboard(state)?;
                let summary = format!(
                    "{} booking(s), revenue {}, occupancy {:.1}%",
                    dashboard.total_bookings,
                    self.config.format_money(dashboard.total_revenue),
                    dashboard.occupancy_rate
                );
                Ok(Response::json(&dashboard)?.with_summary(summary))
            }
            ShellCommand::AddRoom {
                number,
                name,
                category,
                price,
                capacity,
            } => {
                self.require_admin()?;
                let room = NewRoom {
                    number,
                    name,
                    category,
                    nightly_price: Money::from_pesos(price),
                    capacity: capacity.unwrap_or_else(|| category.default_capacity()),
                };
                Response::json(&rooms::add_room(&self.state, room)?)
            }

            ShellCommand::Register {
                username,
                email,
                phone,
                password,
                confirm_password,
                role,
            } => {
                if role != Role::Guest {
                    self.require_admin()?;
                }
                let form = Registration {
                    username,
                    email,
                    phone,
                    password,
                    confirm_password,
                    role,
                };
                Response::json(&account::register(state, form)?)
            }
            ShellCommand::Login {
                username,
                password,
                role,
            } => {
                let account = account::login(state, &username, &password, role)?;
                self.session = Some(SignedIn {
                    username: account.username.clone(),
                    role: account.role,
                });
                Ok(Response::json(&account)?.with_summary(format!(
                    "Signed in as {} ({:?})",
                    account.username, account.role
                )))
            }
            ShellCommand::Logout => {
                let user = self.session.take();
                Response::json(&json!({ "signedOut": user.map(|u| u.username) }))
            }
            ShellCommand::Profile => {
                let user = self.require_user()?;
                Response::json(&account::get_profile(state, &user.username)?)
            }
            ShellCommand::UpdateProfile {
                email,
                phone,
                new_password,
                confirm_password,
            } => {
                let user = self.require_user()?;
                let form = ProfileUpdate {
                    email,
                    phone,
                    new_password: new_password.unwrap_or_default(),
                    confirm_password: confirm_password.unwrap_or_default(),
                };
                Response::json(&account::update_profile(state, &user.username, form)?)
            }
            ShellCommand::ResetPassword {
                email,
                new_password,
                confirm_password,
            } => Response::json(&account::reset_password(
                state,
                &email,
                &new_password,
                &confirm_password,
            )?),
            ShellCommand::Payments => {
                let user = self.require_user()?;
                Response::json(&account::list_payment_methods(state, &user.username)?)
            }
            ShellCommand::AddPayment {
                kind,
                number,
                account_name,
            } => {
                let user = self.require_user()?;
                Response::json(&account::add_payment_method(
                    state,
                    &user.username,
                    &kind,
                    &number,
                    &account_name,
                )?)
            }
            ShellCommand::RemovePayment { position } => {
                let user = self.require_user()?;
                Response::json(&account::remove_payment_method(
                    state,
                    &user.username,
                    position,
                )?)
            }
            ShellCommand::Config => Response::json(&config::get_config(&self.config)),
            ShellCommand::Exit => Response::json(&Value::Null),
        }
    }

    fn booking_summary(&self, confirmation: &BookingConfirmation) -> String {
        format!(
            "Booked room {} for {} night(s): {} ({})",
            confirmation.room_number,
            confirmation.nights,
            self.config.format_money(confirmation.total_price),
            confirmation.applied_offer
        )
    }
}

/// Label of a saved payment method, for the booking's payment field.
fn saved_label(state: &HotelState, username: &str, position: usize) -> ApiResult<String> {
    account::list_payment_methods(state, username)?
        .into_iter()
        .find(|m| m.position == position)
        .map(|m| m.label)
        .ok_or_else(|| ApiError::validation(format!("No saved payment method at position {}", position)))
}

fn render(response: Response) -> String {
    let body = serde_json::to_string_pretty(&response.body).unwrap_or_else(|_| "null".to_string());
    match response.summary {
        Some(summary) => format!("{}\n{}", summary, body),
        None => body,
    }
}

fn render_error(err: &ApiError) -> String {
    serde_json::to_string_pretty(&json!({ "error": err }))
        .unwrap_or_else(|_| err.to_string())
}

/// Splits a line on whitespace, keeping `"double quoted"` runs together.
pub fn split_words(line: &str) -> ApiResult<Vec<String>> {
    let mut words = Vec::new();
    let mut current = String::new();
    let mut in_word = false;
    let mut quoted = false;

    for c in line.chars() {
        match c {
            '"' => {
                quoted = !quoted;
                in_word = true;
            }
            c if c.is_whitespace() && !quoted => {
                if in_word {
                    words.push(std::mem::take(&mut current));
                    in_word = false;
                }
            }
            c => {
                current.push(c);
                in_word = true;
            }
        }
    }

    if quoted {
        return Err(ApiError::validation("Unterminated quote"));
    }
    if in_word {
        words.push(current);
    }
    Ok(words)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::test_support::state;

    fn shell() -> Shell {
        Shell::new(state(), HotelConfig::default())
    }

    fn reply(shell: &mut Shell, line: &str) -> String {
        match shell.execute_line(line) {
            Outcome::Reply(text) => text,
            other => panic!("expected a reply to {:?}, got {:?}", line, other),
        }
    }

    /// The JSON part of a reply (after an optional summary line).
    fn body(text: &str) -> Value {
        let start = text.find(&['{', '['][..]).unwrap();
        serde_json::from_str(&text[start..]).unwrap()
    }

    #[test]
    fn test_split_words() {
        assert_eq!(
            split_words(r#"book 301 2025-01-01 2025-01-08 4 --check-in-time "2:00 PM""#).unwrap(),
            vec!["book", "301", "2025-01-01", "2025-01-08", "4", "--check-in-time", "2:00 PM"]
        );
        assert_eq!(split_words(r#"register "" x"#).unwrap(), vec!["register", "", "x"]);
        assert!(split_words("   ").unwrap().is_empty());
        assert!(split_words(r#"add-room 1 "Garden"#).is_err());
    }

    #[test]
    fn test_blank_and_exit() {
        let mut shell = shell();
        assert_eq!(shell.execute_line(""), Outcome::Nothing);
        assert_eq!(shell.execute_line("exit"), Outcome::Exit);
        assert_eq!(shell.execute_line("quit"), Outcome::Exit);
    }

    #[test]
    fn test_unknown_command_shows_usage() {
        let mut shell = shell();
        let text = reply(&mut shell, "teleport 301");
        assert!(text.contains("teleport"));
    }

    #[test]
    fn test_browsing_needs_no_sign_in() {
        let mut shell = shell();
        let rooms = body(&reply(&mut shell, "search suite"));
        assert_eq!(rooms.as_array().unwrap().len(), 10);

        let text = reply(&mut shell, "quote 301 2025-01-01 2025-01-08");
        assert!(text.starts_with("7 night(s) × ₱8500.00 = ₱59500.00"));
    }

    #[test]
    fn test_booking_requires_sign_in() {
        let mut shell = shell();
        let err = body(&reply(&mut shell, "book 1 2025-03-01 2025-03-02 1"));
        assert_eq!(err["error"]["code"], "UNAUTHORIZED");
    }

    #[test]
    fn test_guest_books_and_cancels() {
        let mut shell = shell();
        reply(&mut shell, "login guest1 guest123");
        assert_eq!(shell.current_user(), Some("guest1"));

        let text = reply(
            &mut shell,
            r#"book 301 2025-01-01 2025-01-08 4 --check-in-time "2:00 PM" --payment GCash"#,
        );
        assert!(text.starts_with("Booked room 301 for 7 night(s): ₱41650.00 (Honeymoon Package)"));
        let confirmation = body(&text);
        assert_eq!(confirmation["id"], 1);

        let mine = body(&reply(&mut shell, "reservations"));
        assert_eq!(mine[0]["checkInTime"], "2:00 PM");
        assert_eq!(mine[0]["paymentMethod"], "GCash");

        let again = body(&reply(&mut shell, "book 301 2025-02-01 2025-02-02 1"));
        assert_eq!(again["error"]["code"], "CONFLICT");

        reply(&mut shell, "cancel 1");
        let again = body(&reply(&mut shell, "cancel 1"));
        assert_eq!(again["error"]["code"], "NOT_FOUND");
    }

    #[test]
    fn test_guest_cannot_touch_other_bookings() {
        let mut shell = shell();
        reply(&mut shell, "login admin admin123 --role admin");
        reply(&mut shell, "book 2 2025-03-01 2025-03-02 1");
        reply(&mut shell, "logout");

        reply(&mut shell, "login guest1 guest123");
        let err = body(&reply(&mut shell, "cancel 1"));
        assert_eq!(err["error"]["code"], "FORBIDDEN");
        let err = body(&reply(&mut shell, "dashboard"));
        assert_eq!(err["error"]["code"], "FORBIDDEN");
        let err = body(&reply(&mut shell, "book 3 2025-03-01 2025-03-02 1 --for admin"));
        assert_eq!(err["error"]["code"], "FORBIDDEN");
    }

    #[test]
    fn test_pay_with_saved_method() {
        let mut shell = shell();
        reply(&mut shell, "login guest1 guest123");
        reply(&mut shell, r#"add-payment gcash 09171234567 "Juan Cruz""#);

        let text = reply(&mut shell, "book 1 2025-03-01 2025-03-02 1 --saved 1");
        let id = body(&text)["id"].as_u64().unwrap();
        let row = body(&reply(&mut shell, &format!("booking {}", id)));
        assert_eq!(row["paymentMethod"], "GCash (**** 4567)");

        let err = body(&reply(&mut shell, "book 2 2025-03-01 2025-03-02 1 --saved 9"));
        assert_eq!(err["error"]["code"], "VALIDATION_ERROR");
    }

    #[test]
    fn test_staff_desk_and_admin_only_rooms() {
        let mut shell = shell();
        reply(&mut shell, "login staff1 staff123 --role staff");

        let text = reply(&mut shell, "book 401 2025-01-01 2025-01-03 8 --for guest1");
        assert!(text.starts_with("Booked room 401"));
        let text = reply(&mut shell, "dashboard");
        assert!(text.starts_with("1 booking(s), revenue ₱8000.00, occupancy 2.0%"));

        let err = body(&reply(&mut shell, r#"add-room 501 "Garden View" deluxe 2800"#));
        assert_eq!(err["error"]["code"], "FORBIDDEN");

        reply(&mut shell, "login admin admin123 --role admin");
        let room = body(&reply(&mut shell, r#"add-room 501 "Garden View" deluxe 2800"#));
        assert_eq!(room["capacity"], 2);
        assert_eq!(room["nightlyPrice"], 280000);
    }

    #[test]
    fn test_add_room_rejects_oversized_price() {
        let mut shell = shell();
        reply(&mut shell, "login admin admin123 --role admin");

        for line in [
            "add-room 500 X standard 92233720368547759",
            "add-room 500 X standard 10000001",
        ] {
            let err = body(&reply(&mut shell, line));
            assert_eq!(err["error"]["code"], "VALIDATION_ERROR");
        }

        let room = body(&reply(&mut shell, "add-room 500 X standard 10000000"));
        assert_eq!(room["nightlyPrice"], 1_000_000_000i64);
    }

    #[test]
    fn test_register_and_reset_password() {
        let mut shell = shell();
        let account = body(&reply(
            &mut shell,
            "register maria maria@email.com 09171234567 secret123 secret123",
        ));
        assert_eq!(account["role"], "GUEST");

        let err = body(&reply(
            &mut shell,
            "register boss boss@email.com 09171234567 secret123 secret123 --role admin",
        ));
        assert_eq!(err["error"]["code"], "UNAUTHORIZED");

        let reset = body(&reply(&mut shell, "reset-password maria@email.com fresh123 fresh123"));
        assert_eq!(reset["username"], "maria");
        let signed_in = body(&reply(&mut shell, "login maria fresh123"));
        assert_eq!(signed_in["username"], "maria");
    }

    #[test]
    fn test_config_command() {
        let mut shell = shell();
        let config = body(&reply(&mut shell, "config"));
        assert_eq!(config["hotel_name"], "Serenity Suites");
        assert!(shell.banner().contains("Serenity Suites"));
    }
}
