//! # Hotel
//!
//! The one object that owns all hotel state and the booking lifecycle.
//!
//! ## Booking Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    create_booking(request)                              │
//! │                                                                         │
//! │  1. VALIDATE (fail fast, nothing changes on error)                     │
//! │     ├── dates blank?              → MissingDates                       │
//! │     ├── dates not YYYY-MM-DD?     → DateFormat                         │
//! │     ├── check-out <= check-in?    → InvalidDateRange                   │
//! │     ├── room unknown?             → RoomNotFound                       │
//! │     ├── guests == 0?              → Validation                         │
//! │     ├── guests > capacity?        → CapacityExceeded                   │
//! │     ├── account unknown?          → UserNotFound                       │
//! │     └── room.booked?              → RoomUnavailable                    │
//! │                                                                         │
//! │  2. PRICE                                                              │
//! │     └── price_stay(room, stay, clock.today())                          │
//! │                                                                         │
//! │  3. COMMIT                                                             │
//! │     ├── id = next id (never reused)                                    │
//! │     ├── store Booking (price snapshot)                                 │
//! │     ├── room.booked = true                                             │
//! │     └── publish BookingCreated, RoomAvailabilityChanged                │
//! │                                                                         │
//! │                    cancel_booking(id)                                   │
//! │     ├── unknown id?               → NotFound                           │
//! │     ├── remove Booking                                                 │
//! │     ├── room.booked = false                                            │
//! │     └── publish BookingCancelled, RoomAvailabilityChanged              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Room States
//! ```text
//!              create_booking
//!   Available ───────────────► Booked
//!       ▲                         │
//!       └─────────────────────────┘
//!              cancel_booking
//! ```
//!
//! ## Concurrency
//! Every mutating method takes `&mut self`, so the availability check and
//! the flag update in `create_booking` can never interleave with another
//! writer. Callers that share a hotel across threads wrap it in one
//! `Mutex` and hold the guard for the whole call.

use chrono::NaiveDate;
use tokio::sync::broadcast;
use tracing::{info, warn};

use serenity_core::calendar::{parse_date, StayDates};
use serenity_core::offers::{self, OfferDetails};
use serenity_core::pricing::{self, price_stay, Quote};
use serenity_core::validation::{
    validate_guest_count, validate_new_room, validate_passwords_match, validate_payment_method,
    validate_profile_update, validate_registration,
};
use serenity_core::{
    Booking, BookingConfirmation, BookingError, BookingRequest, BookingResult, GuestAccount,
    NewRoom, ProfileUpdate, Registration, Role, Room, RoomCategory, SavedPaymentMethod, TimeSlot,
    ValidationError, DEFAULT_PAYMENT_METHOD,
};

use crate::clock::{Clock, SystemClock};
use crate::dashboard::Dashboard;
use crate::events::{EventBus, HotelEvent};
use crate::password::{hash_password, verify_password};
use crate::repository::{AccountRepository, BookingRepository, RoomRepository};
use crate::seed;

/// All rooms, bookings and accounts of the hotel.
#[derive(Debug)]
pub struct Hotel {
    rooms: RoomRepository,
    bookings: BookingRepository,
    accounts: AccountRepository,
    events: EventBus,
    clock: Box<dyn Clock>,
}

impl Hotel {
    /// An empty hotel: no rooms, no accounts.
    pub fn new(clock: impl Clock + 'static) -> Self {
        Hotel {
            rooms: RoomRepository::new(),
            bookings: BookingRepository::new(),
            accounts: AccountRepository::new(),
            events: EventBus::new(),
            clock: Box::new(clock),
        }
    }

    /// An empty hotel on the machine's clock.
    pub fn with_system_clock() -> Self {
        Self::new(SystemClock)
    }

    /// A hotel with the default catalog and accounts loaded.
    pub fn seeded(clock: impl Clock + 'static) -> BookingResult<Self> {
        let mut hotel = Self::new(clock);
        seed::seed_rooms(&mut hotel)?;
        seed::seed_accounts(&mut hotel)?;
        Ok(hotel)
    }

    /// Receiver for every event published after this call.
    pub fn subscribe(&self) -> broadcast::Receiver<HotelEvent> {
        self.events.subscribe()
    }

    /// Today's date according to the hotel clock.
    pub fn today(&self) -> NaiveDate {
        self.clock.today()
    }

    // =========================================================================
    // Rooms
    // =========================================================================

    /// Adds a room to the catalog (admin).
    ///
    /// ## Errors
    /// - `Validation` for a zero number, blank or long name, non-positive
    ///   price, or capacity outside 1-10
    /// - `DuplicateRoomNumber` if the number is taken
    pub fn add_room(&mut self, new_room: NewRoom) -> BookingResult<Room> {
        let number = new_room.number;
        self.try_add_room(new_room).map_err(|err| {
            warn!(room_number = number, kind = err.kind(), error = %err, "Room rejected");
            err
        })
    }

    fn try_add_room(&mut self, new_room: NewRoom) -> BookingResult<Room> {
        validate_new_room(&new_room)?;

        let mut room = Room::from(new_room);
        room.name = room.name.trim().to_string();
        let room = self.rooms.insert(room)?.clone();

        info!(
            room_number = room.number,
            category = %room.category,
            nightly_price = %room.nightly_price,
            capacity = room.capacity,
            "Room added"
        );
        self.events.publish(HotelEvent::RoomAdded { room: room.clone() });

        Ok(room)
    }

    /// Every room, in catalog order.
    pub fn rooms(&self) -> &[Room] {
        self.rooms.all()
    }

    pub fn room(&self, number: u32) -> BookingResult<&Room> {
        self.rooms
            .get(number)
            .ok_or(BookingError::RoomNotFound(number))
    }

    /// Unbooked rooms, optionally of one category (the search screen).
    pub fn available_rooms(&self, category: Option<RoomCategory>) -> Vec<&Room> {
        self.rooms.available(category)
    }

    // =========================================================================
    // Pricing
    // =========================================================================

    /// Price preview for a room card, before any offer.
    ///
    /// Same-day or reversed ranges quote as one night; only
    /// [`create_booking`](Self::create_booking) rejects them.
    pub fn quote(&self, room_number: u32, check_in: &str, check_out: &str) -> BookingResult<Quote> {
        if check_in.trim().is_empty() || check_out.trim().is_empty() {
            return Err(BookingError::MissingDates);
        }
        let check_in = parse_date(check_in)?;
        let check_out = parse_date(check_out)?;
        let room = self.room(room_number)?;

        Ok(pricing::quote(room, check_in, check_out))
    }

    /// The offer catalog, in display order.
    pub fn offers(&self) -> Vec<OfferDetails> {
        offers::catalog()
    }

    // =========================================================================
    // Booking Lifecycle
    // =========================================================================

    /// Validates, prices and commits a booking.
    ///
    /// On any error the hotel is unchanged and no event is published.
    pub fn create_booking(&mut self, request: BookingRequest) -> BookingResult<BookingConfirmation> {
        let room_number = request.room_number;
        let username = request.username.clone();

        self.try_create_booking(request).map_err(|err| {
            warn!(
                room_number,
                username = %username,
                kind = err.kind(),
                error = %err,
                "Booking rejected"
            );
            err
        })
    }

    fn try_create_booking(&mut self, request: BookingRequest) -> BookingResult<BookingConfirmation> {
        let stay = StayDates::parse(&request.check_in, &request.check_out)?;

        let room = self.room(request.room_number)?.clone();

        validate_guest_count(request.guests)?;
        if !room.fits(request.guests) {
            return Err(BookingError::CapacityExceeded {
                room_number: room.number,
                capacity: room.capacity,
                requested: request.guests,
            });
        }

        if !self.accounts.contains(&request.username) {
            return Err(BookingError::UserNotFound(request.username));
        }

        if room.booked {
            return Err(BookingError::RoomUnavailable(room.number));
        }

        let price = price_stay(&room, &stay, self.clock.today());

        let payment_method = match request.payment_method.trim() {
            "" => DEFAULT_PAYMENT_METHOD.to_string(),
            label => label.to_string(),
        };

        let booking = Booking {
            id: self.bookings.allocate_id(),
            username: request.username,
            room_number: room.number,
            check_in: stay.check_in(),
            check_out: stay.check_out(),
            check_in_time: request.check_in_time.unwrap_or_else(TimeSlot::earliest),
            check_out_time: request.check_out_time.unwrap_or_else(TimeSlot::latest),
            guests: request.guests,
            price_per_night: price.price_per_night,
            payment_method,
            discount_amount: price.discount_amount,
            discount_percent: price.discount_percent,
            applied_offer: price.applied_offer_name().to_string(),
            total_price: price.total_price,
            created_at: self.clock.now(),
        };
        let confirmation = BookingConfirmation::new(&booking, &price);

        self.set_booked(room.number, true);
        self.bookings.insert(booking.clone());

        info!(
            booking_id = booking.id,
            room_number = booking.room_number,
            username = %booking.username,
            nights = price.nights,
            offer = %booking.applied_offer,
            total = %booking.total_price,
            "Booking created"
        );

        self.events.publish(HotelEvent::BookingCreated { booking });
        self.events.publish(HotelEvent::RoomAvailabilityChanged {
            room_number: room.number,
            available: false,
        });

        Ok(confirmation)
    }

    /// Cancels an active booking and frees its room.
    ///
    /// ## Returns
    /// The removed booking. A second cancel of the same id is `NotFound`.
    pub fn cancel_booking(&mut self, id: u64) -> BookingResult<Booking> {
        let Some(booking) = self.bookings.remove(id) else {
            let err = BookingError::NotFound(id);
            warn!(booking_id = id, kind = err.kind(), "Cancellation rejected");
            return Err(err);
        };

        self.set_booked(booking.room_number, false);

        info!(
            booking_id = booking.id,
            room_number = booking.room_number,
            username = %booking.username,
            "Booking cancelled"
        );

        self.events.publish(HotelEvent::BookingCancelled {
            booking: booking.clone(),
        });
        self.events.publish(HotelEvent::RoomAvailabilityChanged {
            room_number: booking.room_number,
            available: true,
        });

        Ok(booking)
    }

    fn set_booked(&mut self, room_number: u32, booked: bool) {
        if let Some(room) = self.rooms.get_mut(room_number) {
            room.booked = booked;
        }
    }

    pub fn booking(&self, id: u64) -> BookingResult<&Booking> {
        self.bookings.get(id).ok_or(BookingError::NotFound(id))
    }

    /// Every active booking, oldest first (admin table).
    pub fn bookings(&self) -> Vec<&Booking> {
        self.bookings.all()
    }

    /// One account's active bookings, oldest first ("My Reservations").
    pub fn bookings_for(&self, username: &str) -> Vec<&Booking> {
        self.bookings.for_user(username)
    }

    /// The active booking holding a room, if any.
    pub fn booking_for_room(&self, room_number: u32) -> Option<&Booking> {
        self.bookings.for_room(room_number)
    }

    /// Id the next successful booking will receive.
    pub fn next_booking_id(&self) -> u64 {
        self.bookings.peek_next_id()
    }

    pub fn dashboard(&self) -> Dashboard {
        Dashboard::compute(&self.rooms, &self.bookings)
    }

    // =========================================================================
    // Accounts
    // =========================================================================

    /// Creates an account from the sign-up form.
    pub fn register(&mut self, form: Registration) -> BookingResult<&GuestAccount> {
        validate_registration(&form)?;

        let username = form.username.trim().to_string();
        if self.accounts.contains(&username) {
            let err = BookingError::UsernameTaken(username);
            warn!(kind = err.kind(), error = %err, "Registration rejected");
            return Err(err);
        }

        let account = GuestAccount {
            username: username.clone(),
            password_hash: hash_password(&form.password)?,
            role: form.role,
            email: form.email.trim().to_string(),
            phone: form.phone.trim().to_string(),
            payment_methods: Vec::new(),
        };
        self.accounts.insert(account)?;

        info!(username = %username, role = ?form.role, "Account registered");
        self.account(&username)
    }

    /// Signs in. Unknown user, wrong password and wrong role all give the
    /// same `InvalidCredentials`.
    pub fn authenticate(
        &self,
        username: &str,
        password: &str,
        role: Role,
    ) -> BookingResult<&GuestAccount> {
        let account = self
            .accounts
            .get(username.trim())
            .filter(|a| a.role == role && verify_password(password, &a.password_hash));

        match account {
            Some(account) => {
                info!(username = %account.username, role = ?role, "Signed in");
                Ok(account)
            }
            None => {
                warn!(username = %username.trim(), "Sign-in rejected");
                Err(BookingError::InvalidCredentials)
            }
        }
    }

    pub fn account(&self, username: &str) -> BookingResult<&GuestAccount> {
        self.accounts
            .get(username)
            .ok_or_else(|| BookingError::UserNotFound(username.to_string()))
    }

    fn account_mut(&mut self, username: &str) -> BookingResult<&mut GuestAccount> {
        self.accounts
            .get_mut(username)
            .ok_or_else(|| BookingError::UserNotFound(username.to_string()))
    }

    /// Saves the profile screen: email, phone and optionally a new password.
    pub fn update_profile(
        &mut self,
        username: &str,
        form: ProfileUpdate,
    ) -> BookingResult<&GuestAccount> {
        validate_profile_update(&form)?;

        let password_hash = match form.new_password.as_str() {
            "" => None,
            new_password => Some(hash_password(new_password)?),
        };

        let account = self.account_mut(username)?;
        account.email = form.email.trim().to_string();
        account.phone = form.phone.trim().to_string();
        if let Some(hash) = password_hash {
            account.password_hash = hash;
        }

        info!(username = %username, "Profile updated");
        self.account(username)
    }

    /// Forgot-password flow: finds the account by email and sets a new
    /// password. Returns the username so the sign-in form can be prefilled.
    pub fn reset_password(
        &mut self,
        email: &str,
        new_password: &str,
        confirm_password: &str,
    ) -> BookingResult<String> {
        let email = email.trim();
        if email.is_empty() {
            return Err(ValidationError::Required {
                field: "email".to_string(),
            }
            .into());
        }
        validate_passwords_match(new_password, confirm_password)?;

        let username = self
            .accounts
            .find_by_email(email)
            .map(|a| a.username.clone())
            .ok_or_else(|| BookingError::UserNotFound(email.to_string()))?;

        let hash = hash_password(new_password)?;
        self.account_mut(&username)?.password_hash = hash;

        info!(username = %username, "Password reset");
        Ok(username)
    }

    /// Saves a payment method on a profile.
    pub fn add_payment_method(
        &mut self,
        username: &str,
        kind: &str,
        number: &str,
        account_name: &str,
    ) -> BookingResult<SavedPaymentMethod> {
        let kind = validate_payment_method(kind, number, account_name)?;
        let method = SavedPaymentMethod {
            kind: kind.to_string(),
            number: number.trim().to_string(),
            account_name: account_name.trim().to_string(),
        };

        self.account_mut(username)?
            .payment_methods
            .push(method.clone());

        info!(username = %username, method = %method.label(), "Payment method saved");
        Ok(method)
    }

    /// Removes the saved payment method at `index` (0-based, as listed).
    pub fn remove_payment_method(
        &mut self,
        username: &str,
        index: usize,
    ) -> BookingResult<SavedPaymentMethod> {
        let methods = &mut self.account_mut(username)?.payment_methods;
        if methods.is_empty() {
            return Err(ValidationError::NoneSaved {
                field: "payment methods".to_string(),
            }
            .into());
        }
        if index >= methods.len() {
            return Err(ValidationError::OutOfRange {
                field: "payment method".to_string(),
                min: 1,
                max: methods.len() as i64,
            }
            .into());
        }

        let removed = methods.remove(index);
        info!(username = %username, method = %removed.label(), "Payment method removed");
        Ok(removed)
    }

    pub fn payment_methods(&self, username: &str) -> BookingResult<&[SavedPaymentMethod]> {
        Ok(&self.account(username)?.payment_methods)
    }
}

impl Default for Hotel {
    fn default() -> Self {
        Self::with_system_clock()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
