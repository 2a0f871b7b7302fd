//! # Account State
//!
//! Holds the signed-in shopper's eligibility profile.
//!
//! ## Thread Safety
//! The account is wrapped in `RwLock` because:
//! 1. Every eligibility check and rent-mode cart add reads it
//! 2. Writes only happen on login/logout or after an order sync
//!
//! ## Guest Default
//! A fresh session starts as a guest: KYC not approved, zero active
//! rentals. Guests can browse and buy; renting requires a refreshed
//! account with `kyc_approved = true`.

use std::sync::RwLock;

use voltkart_core::Account;

/// Shared, replaceable shopper account.
pub struct AccountState {
    account: RwLock<Account>,
}

impl AccountState {
    /// Creates a guest account state.
    pub fn new() -> Self {
        AccountState {
            account: RwLock::new(Account::default()),
        }
    }

    /// Returns a copy of the current account.
    ///
    /// `Account` is `Copy` (two small fields); copying out keeps the
    /// read lock window short and lets eligibility evaluation run
    /// lock-free.
    pub fn snapshot(&self) -> Account {
        let account = self.account.read().expect("Account lock poisoned");
        *account
    }

    /// Replaces the account, e.g. after login or an order-status sync.
    pub fn replace(&self, account: Account) {
        let mut current = self.account.write().expect("Account lock poisoned");
        *current = account;
    }
}

impl Default for AccountState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fresh_state_is_guest() {
        let state = AccountState::new();
        let account = state.snapshot();

        assert!(!account.kyc_approved);
        assert_eq!(account.active_rental_count, 0);
    }

    #[test]
    fn test_replace_swaps_account() {
        let state = AccountState::new();

        state.replace(Account {
            kyc_approved: true,
            active_rental_count: 2,
        });

        let account = state.snapshot();
        assert!(account.kyc_approved);
        assert_eq!(account.active_rental_count, 2);
    }
}
