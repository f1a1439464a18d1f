//! Accounts present in a freshly started store.

use rust_decimal::Decimal;

use crate::account::Account;
use crate::id::AccountId;

/// Returns the seed accounts in their listing order.
///
/// Ids are contiguous from [`AccountId::FIRST`].
#[must_use]
pub fn seed_accounts() -> Vec<Account> {
    let checking = Account::new(AccountId::FIRST, "Checking", Decimal::new(125_050, 2));
    let savings = Account::new(AccountId(2), "Savings", Decimal::new(820_000, 2));
    vec![checking, savings]
}
