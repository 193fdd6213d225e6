//! # Account Commands
//!
//! Sign-up, sign-in, the profile screen and saved payment methods.
//!
//! Password hashes never leave the hotel: every response goes through
//! [`AccountDto`].

use serde::{Deserialize, Serialize};
use serenity_core::{GuestAccount, ProfileUpdate, Registration, Role, SavedPaymentMethod};
use tracing::debug;
use ts_rs::TS;

use crate::error::{ApiError, ApiResult};
use crate::state::HotelState;

/// A saved payment method as listed on the profile screen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct PaymentMethodDto {
    /// 1-based position, used to remove it.
    pub position: usize,
    pub kind: String,
    pub masked_number: String,
    pub account_name: String,
    /// What a booking paid with this method records ("GCash (**** 4567)").
    pub label: String,
}

impl PaymentMethodDto {
    fn new(position: usize, method: &SavedPaymentMethod) -> Self {
        PaymentMethodDto {
            position,
            kind: method.kind.clone(),
            masked_number: method.masked_number(),
            account_name: method.account_name.clone(),
            label: method.label(),
        }
    }

    fn list(methods: &[SavedPaymentMethod]) -> Vec<Self> {
        methods
            .iter()
            .enumerate()
            .map(|(i, m)| PaymentMethodDto::new(i + 1, m))
            .collect()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct AccountDto {
    pub username: String,
    pub role: Role,
    pub email: String,
    pub phone: String,
    pub payment_methods: Vec<PaymentMethodDto>,
}

impl From<&GuestAccount> for AccountDto {
    fn from(account: &GuestAccount) -> Self {
        AccountDto {
            username: account.username.clone(),
            role: account.role,
            email: account.email.clone(),
            phone: account.phone.clone(),
            payment_methods: PaymentMethodDto::list(&account.payment_methods),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct PasswordResetDto {
    /// Prefills the sign-in form.
    pub username: String,
}

pub fn register(state: &HotelState, form: Registration) -> ApiResult<AccountDto> {
    debug!(username = %form.username, "register command");
    state.try_with_hotel_mut(|h| h.register(form).map(AccountDto::from))
}

/// Signs in with username, password and the chosen user type.
pub fn login(state: &HotelState, username: &str, password: &str, role: Role) -> ApiResult<AccountDto> {
    debug!(username, ?role, "login command");
    state.try_with_hotel(|h| h.authenticate(username, password, role).map(AccountDto::from))
}

pub fn get_profile(state: &HotelState, username: &str) -> ApiResult<AccountDto> {
    debug!(username, "get_profile command");
    state.try_with_hotel(|h| h.account(username).map(AccountDto::from))
}

pub fn update_profile(
    state: &HotelState,
    username: &str,
    form: ProfileUpdate,
) -> ApiResult<AccountDto> {
    debug!(username, "update_profile command");
    state.try_with_hotel_mut(|h| h.update_profile(username, form).map(AccountDto::from))
}

/// Forgot-password flow.
pub fn reset_password(
    state: &HotelState,
    email: &str,
    new_password: &str,
    confirm_password: &str,
) -> ApiResult<PasswordResetDto> {
    debug!(email, "reset_password command");
    let username =
        state.try_with_hotel_mut(|h| h.reset_password(email, new_password, confirm_password))?;
    Ok(PasswordResetDto { username })
}

pub fn list_payment_methods(state: &HotelState, username: &str) -> ApiResult<Vec<PaymentMethodDto>> {
    debug!(username, "list_payment_methods command");
    state.try_with_hotel(|h| h.payment_methods(username).map(PaymentMethodDto::list))
}

pub fn add_payment_method(
    state: &HotelState,
    username: &str,
    kind: &str,
    number: &str,
    account_name: &str,
) -> ApiResult<PaymentMethodDto> {
    debug!(username, kind, "add_payment_method command");
    state.try_with_hotel_mut(|h| {
        let method = h.add_payment_method(username, kind, number, account_name)?;
        let position = h.payment_methods(username)?.len();
        Ok(PaymentMethodDto::new(position, &method))
    })
}

/// Removes the payment method at a 1-based `position`.
pub fn remove_payment_method(
    state: &HotelState,
    username: &str,
    position: usize,
) -> ApiResult<PaymentMethodDto> {
    debug!(username, position, "remove_payment_method command");
    let index = position
        .checked_sub(1)
        .ok_or_else(|| ApiError::validation("Payment method positions start at 1"))?;
    state.try_with_hotel_mut(|h| {
        h.remove_payment_method(username, index)
            .map(|m| PaymentMethodDto::new(position, &m))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::test_support::state;
    use crate::error::ErrorCode;

    fn form(username: &str) -> Registration {
        Registration {
            username: username.to_string(),
            email: format!("{}@email.com", username),
            phone: "09171234567".to_string(),
            password: "secret123".to_string(),
            confirm_password: "secret123".to_string(),
            role: Role::Guest,
        }
    }

    #[test]
    fn test_register_then_login() {
        let state = state();
        let account = register(&state, form("maria")).unwrap();
        assert_eq!(account.username, "maria");
        assert!(account.payment_methods.is_empty());

        let signed_in = login(&state, "maria", "secret123", Role::Guest).unwrap();
        assert_eq!(signed_in, account);
    }

    #[test]
    fn test_account_json_has_no_password() {
        let state = state();
        let account = login(&state, "guest1", "guest123", Role::Guest).unwrap();
        let json = serde_json::to_string(&account).unwrap();
        assert!(!json.contains("password"));
        assert!(!json.contains("argon2"));
    }

    #[test]
    fn test_login_failures_are_unauthorized() {
        let state = state();
        for (user, pass, role) in [
            ("guest1", "wrong", Role::Guest),
            ("guest1", "guest123", Role::Admin),
            ("nobody", "guest123", Role::Guest),
        ] {
            assert_eq!(
                login(&state, user, pass, role).unwrap_err().code,
                ErrorCode::Unauthorized
            );
        }
    }

    #[test]
    fn test_duplicate_username_is_conflict() {
        let err = register(&state(), form("guest1")).unwrap_err();
        assert_eq!(err.code, ErrorCode::Conflict);
    }

    #[test]
    fn test_profile_update() {
        let state = state();
        let updated = update_profile(
            &state,
            "guest1",
            ProfileUpdate {
                email: "juan@email.com".to_string(),
                phone: "09998887777".to_string(),
                new_password: String::new(),
                confirm_password: String::new(),
            },
        )
        .unwrap();
        assert_eq!(updated.email, "juan@email.com");
        assert_eq!(get_profile(&state, "guest1").unwrap().phone, "09998887777");
        assert!(login(&state, "guest1", "guest123", Role::Guest).is_ok());
    }

    #[test]
    fn test_reset_password() {
        let state = state();
        let reset = reset_password(&state, "guest@email.com", "newpass1", "newpass1").unwrap();
        assert_eq!(reset.username, "guest1");
        assert!(login(&state, "guest1", "newpass1", Role::Guest).is_ok());

        assert_eq!(
            reset_password(&state, "guest@email.com", "a", "b")
                .unwrap_err()
                .code,
            ErrorCode::ValidationError
        );
    }

    #[test]
    fn test_payment_methods_add_list_remove() {
        let state = state();
        let gcash = add_payment_method(&state, "guest1", "gcash", "09171234567", "Juan Cruz").unwrap();
        assert_eq!(gcash.position, 1);
        assert_eq!(gcash.kind, "GCash");
        assert_eq!(gcash.label, "GCash (**** 4567)");

        let card = add_payment_method(&state, "guest1", "Credit Card", "4111111111111111", "Juan Cruz")
            .unwrap();
        assert_eq!(card.position, 2);

        let removed = remove_payment_method(&state, "guest1", 1).unwrap();
        assert_eq!(removed.kind, "GCash");

        let left = list_payment_methods(&state, "guest1").unwrap();
        assert_eq!(left.len(), 1);
        assert_eq!(left[0].position, 1);
        assert_eq!(left[0].kind, "Credit Card");

        assert_eq!(
            remove_payment_method(&state, "guest1", 0).unwrap_err().code,
            ErrorCode::ValidationError
        );
        assert_eq!(
            remove_payment_method(&state, "guest1", 5).unwrap_err().code,
            ErrorCode::ValidationError
        );
    }

    #[test]
    fn test_unknown_payment_kind_rejected() {
        let err = add_payment_method(&state(), "guest1", "Bitcoin", "123", "Juan").unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationError);
    }
}
