//! # Account Repository
//!
//! Registered accounts keyed by username (case-sensitive).

use std::collections::HashMap;

use serenity_core::{BookingError, BookingResult, GuestAccount};

#[derive(Debug, Clone, Default)]
pub struct AccountRepository {
    accounts: HashMap<String, GuestAccount>,
}

impl AccountRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores a new account. Fails if the username is taken.
    pub fn insert(&mut self, account: GuestAccount) -> BookingResult<()> {
        if self.accounts.contains_key(&account.username) {
            return Err(BookingError::UsernameTaken(account.username));
        }
        self.accounts.insert(account.username.clone(), account);
        Ok(())
    }

    pub fn contains(&self, username: &str) -> bool {
        self.accounts.contains_key(username)
    }

    pub fn get(&self, username: &str) -> Option<&GuestAccount> {
        self.accounts.get(username)
    }

    pub fn get_mut(&mut self, username: &str) -> Option<&mut GuestAccount> {
        self.accounts.get_mut(username)
    }

    /// An account registered with this email (exact match).
    pub fn find_by_email(&self, email: &str) -> Option<&GuestAccount> {
        self.accounts.values().find(|a| a.email == email)
    }

    pub fn len(&self) -> usize {
        self.accounts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }
}
