//! # Validation Module
//!
//! Input validation for the admin, booking and account forms.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Front desk (shell / screens)                                 │
//! │  ├── Type validation (clap / serde deserialization)                    │
//! │  └── Immediate feedback                                                │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: THIS MODULE: field rules                                     │
//! │  ├── blank / too long / out of range                                   │
//! │  └── phone and email shape                                             │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Hotel (serenity-store)                                       │
//! │  ├── uniqueness (room number, username)                                │
//! │  └── availability and capacity                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use serenity_core::validation::{validate_capacity, validate_phone};
//!
//! validate_capacity(6).unwrap();
//! validate_phone("09123456789").unwrap();
//! ```

use crate::error::ValidationError;
use crate::money::Money;
use crate::types::{NewRoom, ProfileUpdate, Registration};
use crate::{MAX_NIGHTLY_PRICE, MAX_ROOM_CAPACITY};

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Longest room display name accepted.
pub const MAX_ROOM_NAME_LEN: usize = 100;

/// Longest username accepted.
pub const MAX_USERNAME_LEN: usize = 50;

/// Digits in a mobile number (`09XXXXXXXXX`).
pub const PHONE_DIGITS: usize = 11;

/// Payment method types a guest can save on their profile.
pub const PAYMENT_METHOD_KINDS: [&str; 4] = ["GCash", "PayMaya", "Credit Card", "Debit Card"];

fn required(field: &str) -> ValidationError {
    ValidationError::Required {
        field: field.to_string(),
    }
}

// =============================================================================
// Room Validators
// =============================================================================

/// Validates a room number.
///
/// ## Rules
/// - Must be positive (> 0)
pub fn validate_room_number(number: u32) -> ValidationResult<()> {
    if number == 0 {
        return Err(ValidationError::MustBePositive {
            field: "room number".to_string(),
        });
    }

    Ok(())
}

/// Validates a room display name.
///
/// ## Rules
/// - Must not be blank
/// - At most 100 characters
///
/// ## Example
/// ```rust
/// use serenity_core::validation::validate_room_name;
///
/// assert!(validate_room_name("Presidential Suite").is_ok());
/// assert!(validate_room_name("   ").is_err());
/// ```
pub fn validate_room_name(name: &str) -> ValidationResult<()> {
    let name = name.trim();

    if name.is_empty() {
        return Err(required("room name"));
    }

    if name.chars().count() > MAX_ROOM_NAME_LEN {
        return Err(ValidationError::TooLong {
            field: "room name".to_string(),
            max: MAX_ROOM_NAME_LEN,
        });
    }

    Ok(())
}

/// Validates a nightly price. Free rooms are not sold.
///
/// ## Rules
/// - Above zero
/// - At most MAX_NIGHTLY_PRICE (₱10,000,000), which keeps every stay total
///   well inside i64 centavos
pub fn validate_nightly_price(price: Money) -> ValidationResult<()> {
    if !price.is_positive() {
        return Err(ValidationError::MustBePositive {
            field: "price".to_string(),
        });
    }

    if price > MAX_NIGHTLY_PRICE {
        return Err(ValidationError::OutOfRange {
            field: "price".to_string(),
            min: 1,
            max: MAX_NIGHTLY_PRICE.pesos(),
        });
    }

    Ok(())
}

/// Validates a room capacity.
///
/// ## Rules
/// - Between 1 and MAX_ROOM_CAPACITY (10)
pub fn validate_capacity(capacity: u32) -> ValidationResult<()> {
    if capacity == 0 || capacity > MAX_ROOM_CAPACITY {
        return Err(ValidationError::OutOfRange {
            field: "capacity".to_string(),
            min: 1,
            max: i64::from(MAX_ROOM_CAPACITY),
        });
    }

    Ok(())
}

/// Runs every room rule in form order: number, name, price, capacity.
pub fn validate_new_room(room: &NewRoom) -> ValidationResult<()> {
    validate_room_number(room.number)?;
    validate_room_name(&room.name)?;
    validate_nightly_price(room.nightly_price)?;
    validate_capacity(room.capacity)
}

// =============================================================================
// Booking Validators
// =============================================================================

/// Validates the guest count on a booking request.
///
/// Only the lower bound lives here; the upper bound depends on the room and
/// is reported as `BookingError::CapacityExceeded` by the hotel.
pub fn validate_guest_count(guests: u32) -> ValidationResult<()> {
    if guests == 0 {
        return Err(ValidationError::MustBePositive {
            field: "guests".to_string(),
        });
    }

    Ok(())
}

// =============================================================================
// Account Validators
// =============================================================================

/// Validates a username.
///
/// ## Rules
/// - Must not be blank
/// - At most 50 characters
/// - No whitespace inside
pub fn validate_username(username: &str) -> ValidationResult<()> {
    let username = username.trim();

    if username.is_empty() {
        return Err(required("username"));
    }

    if username.chars().count() > MAX_USERNAME_LEN {
        return Err(ValidationError::TooLong {
            field: "username".to_string(),
            max: MAX_USERNAME_LEN,
        });
    }

    if username.chars().any(char::is_whitespace) {
        return Err(ValidationError::InvalidFormat {
            field: "username".to_string(),
            reason: "must not contain spaces".to_string(),
        });
    }

    Ok(())
}

/// Validates an email address shape (`local@domain.tld`).
///
/// ## Rules
/// ```text
///   local  @  domain  .  tld
///   ─────     ──────     ───
///   A-Z a-z 0-9         A-Z a-z 0-9         letters only,
///   + _ . -             . -                 2 or more
/// ```
///
/// ## Example
/// ```rust
/// use serenity_core::validation::validate_email;
///
/// assert!(validate_email("guest@email.com").is_ok());
/// assert!(validate_email("guest@email.c").is_err());
/// assert!(validate_email("guest.email.com").is_err());
/// ```
pub fn validate_email(email: &str) -> ValidationResult<()> {
    let email = email.trim();

    if email.is_empty() {
        return Err(required("email"));
    }

    let invalid = || ValidationError::InvalidFormat {
        field: "email".to_string(),
        reason: "must look like name@domain.com".to_string(),
    };

    let (local, host) = email.split_once('@').ok_or_else(invalid)?;
    let (domain, tld) = host.rsplit_once('.').ok_or_else(invalid)?;

    let local_ok = !local.is_empty()
        && local
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '_' | '.' | '-'));
    let domain_ok = !domain.is_empty()
        && domain
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '-'));
    let tld_ok = tld.len() >= 2 && tld.chars().all(|c| c.is_ascii_alphabetic());

    if local_ok && domain_ok && tld_ok {
        Ok(())
    } else {
        Err(invalid())
    }
}

/// Validates a mobile phone number: exactly 11 digits.
pub fn validate_phone(phone: &str) -> ValidationResult<()> {
    let phone = phone.trim();

    if phone.is_empty() {
        return Err(required("phone number"));
    }

    if phone.len() != PHONE_DIGITS || !phone.chars().all(|c| c.is_ascii_digit()) {
        return Err(ValidationError::InvalidFormat {
            field: "phone number".to_string(),
            reason: format!("must be exactly {} digits", PHONE_DIGITS),
        });
    }

    Ok(())
}

/// Validates a password and its confirmation.
pub fn validate_passwords_match(password: &str, confirm: &str) -> ValidationResult<()> {
    if password.is_empty() {
        return Err(required("password"));
    }

    if password != confirm {
        return Err(ValidationError::PasswordMismatch);
    }

    Ok(())
}

/// Runs every sign-up rule in form order.
///
/// ## User Workflow
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │  Sign Up                                                                │
/// │                                                                         │
/// │  validate_registration(form) ← THIS FUNCTION                           │
/// │       │                                                                 │
/// │       ├── username blank?          → "username is required"            │
/// │       ├── email blank / malformed? → "email has invalid format"        │
/// │       ├── phone not 11 digits?     → "phone number has invalid format" │
/// │       ├── passwords differ?        → "Passwords do not match"          │
/// │       │                                                                 │
/// │       └── OK → Hotel::register checks the username is free             │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
pub fn validate_registration(form: &Registration) -> ValidationResult<()> {
    validate_username(&form.username)?;
    validate_email(&form.email)?;
    validate_phone(&form.phone)?;
    validate_passwords_match(&form.password, &form.confirm_password)
}

/// Runs the profile screen rules. The password pair is only checked when a
/// new password was typed.
pub fn validate_profile_update(form: &ProfileUpdate) -> ValidationResult<()> {
    validate_email(&form.email)?;
    validate_phone(&form.phone)?;
    if !form.new_password.is_empty() {
        validate_passwords_match(&form.new_password, &form.confirm_password)?;
    }
    Ok(())
}

// =============================================================================
// Payment Validators
// =============================================================================

/// Validates a saved payment method before it is stored on a profile.
///
/// ## Rules
/// - Kind is one of GCash, PayMaya, Credit Card, Debit Card
/// - Account/card number is not blank
/// - Account name is not blank
///
/// ## Returns
/// The canonical spelling of the kind.
pub fn validate_payment_method(
    kind: &str,
    number: &str,
    account_name: &str,
) -> ValidationResult<&'static str> {
    let kind = PAYMENT_METHOD_KINDS
        .into_iter()
        .find(|k| k.eq_ignore_ascii_case(kind.trim()))
        .ok_or_else(|| ValidationError::NotAllowed {
            field: "payment method".to_string(),
            allowed: PAYMENT_METHOD_KINDS.iter().map(|k| k.to_string()).collect(),
        })?;

    if number.trim().is_empty() {
        return Err(required("account/card number"));
    }

    if account_name.trim().is_empty() {
        return Err(required("account name"));
    }

    Ok(kind)
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{RoomCategory, Role};

    #[test]
    fn test_validate_room_name() {
        assert!(validate_room_name("Family Room").is_ok());
        assert!(validate_room_name(&"A".repeat(100)).is_ok());

        assert!(validate_room_name("").is_err());
        assert!(validate_room_name(&"A".repeat(101)).is_err());
    }

    #[test]
    fn test_validate_capacity() {
        assert!(validate_capacity(1).is_ok());
        assert!(validate_capacity(10).is_ok());

        assert!(validate_capacity(0).is_err());
        assert!(validate_capacity(11).is_err());
    }

    #[test]
    fn test_validate_new_room_reports_first_failure() {
        let room = NewRoom {
            number: 0,
            name: String::new(),
            category: RoomCategory::Standard,
            nightly_price: Money::zero(),
            capacity: 0,
        };
        assert_eq!(
            validate_new_room(&room),
            Err(ValidationError::MustBePositive {
                field: "room number".to_string()
            })
        );

        let room = NewRoom {
            number: 501,
            name: "Garden View".to_string(),
            nightly_price: Money::zero(),
            capacity: 2,
            ..room
        };
        assert!(matches!(
            validate_new_room(&room),
            Err(ValidationError::MustBePositive { .. })
        ));
    }

    #[test]
    fn test_validate_nightly_price_cap() {
        assert!(validate_nightly_price(Money::from_pesos(1500)).is_ok());
        assert!(validate_nightly_price(MAX_NIGHTLY_PRICE).is_ok());
        assert_eq!(
            validate_nightly_price(MAX_NIGHTLY_PRICE + Money::from_centavos(1)),
            Err(ValidationError::OutOfRange {
                field: "price".to_string(),
                min: 1,
                max: 10_000_000,
            })
        );
        assert!(validate_nightly_price(Money::from_centavos(i64::MAX / 2)).is_err());
    }

    #[test]
    fn test_validate_guest_count() {
        assert!(validate_guest_count(1).is_ok());
        assert!(validate_guest_count(0).is_err());
    }

    #[test]
    fn test_validate_username() {
        assert!(validate_username("guest1").is_ok());
        assert!(validate_username("  ").is_err());
        assert!(validate_username("two words").is_err());
        assert!(validate_username(&"u".repeat(51)).is_err());
    }

    #[test]
    fn test_validate_email() {
        assert!(validate_email("admin@serenitysuites.com").is_ok());
        assert!(validate_email("first.last+tag@mail.example.ph").is_ok());

        assert!(validate_email("").is_err());
        assert!(validate_email("@email.com").is_err());
        assert!(validate_email("guest@.com").is_err());
        assert!(validate_email("guest@email").is_err());
        assert!(validate_email("guest@email.c0m").is_err());
        assert!(validate_email("gu est@email.com").is_err());
    }

    #[test]
    fn test_validate_phone() {
        assert!(validate_phone("09123456789").is_ok());

        assert!(validate_phone("").is_err());
        assert!(validate_phone("0912345678").is_err());
        assert!(validate_phone("091234567890").is_err());
        assert!(validate_phone("0912345678a").is_err());
    }

    #[test]
    fn test_validate_passwords_match() {
        assert!(validate_passwords_match("secret", "secret").is_ok());
        assert_eq!(
            validate_passwords_match("secret", "Secret"),
            Err(ValidationError::PasswordMismatch)
        );
        assert!(validate_passwords_match("", "").is_err());
    }

    #[test]
    fn test_validate_registration() {
        let form = Registration {
            username: "maria".to_string(),
            email: "maria@email.com".to_string(),
            phone: "09171234567".to_string(),
            password: "pass123".to_string(),
            confirm_password: "pass123".to_string(),
            role: Role::Guest,
        };
        assert!(validate_registration(&form).is_ok());

        let bad_phone = Registration {
            phone: "12345".to_string(),
            ..form.clone()
        };
        assert!(matches!(
            validate_registration(&bad_phone),
            Err(ValidationError::InvalidFormat { .. })
        ));
    }

    #[test]
    fn test_validate_profile_update() {
        let form = ProfileUpdate {
            email: "guest@email.com".to_string(),
            phone: "09234567890".to_string(),
            new_password: String::new(),
            confirm_password: "ignored".to_string(),
        };
        assert!(validate_profile_update(&form).is_ok());

        let mismatch = ProfileUpdate {
            new_password: "newpass".to_string(),
            ..form.clone()
        };
        assert_eq!(
            validate_profile_update(&mismatch),
            Err(ValidationError::PasswordMismatch)
        );
    }

    #[test]
    fn test_validate_payment_method() {
        assert_eq!(
            validate_payment_method("gcash", "09171234567", "Maria"),
            Ok("GCash")
        );
        assert!(validate_payment_method("Bitcoin", "123", "Maria").is_err());
        assert!(validate_payment_method("PayMaya", " ", "Maria").is_err());
        assert!(validate_payment_method("Credit Card", "4111", "").is_err());
    }
}
