use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::id::AccountId;

/// A bank account as held by the store.
///
/// Accounts are value types: the store hands out clones and never mutates a
/// record after inserting it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[non_exhaustive]
pub struct Account {
    /// Store-assigned identifier, unique for the lifetime of the process.
    pub id: AccountId,
    /// Display name, never blank.
    pub name: String,
    /// Current balance. Rendered as a JSON number with its exact digits.
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    pub balance: Decimal,
}

impl Account {
    /// Creates an account record with an already assigned id.
    pub fn new(id: AccountId, name: impl Into<String>, balance: Decimal) -> Self {
        Self { id, name: name.into(), balance }
    }
}

/// A validated request to open an account.
///
/// The only way to obtain one is [`NewAccount::new`], so a store accepting a
/// `NewAccount` never sees a blank name or a negative opening balance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewAccount {
    name: String,
    initial_balance: Decimal,
}

impl NewAccount {
    /// Validates the name and opening balance.
    ///
    /// The name is checked first; it is kept exactly as supplied.
    ///
    /// # Errors
    /// Returns [`CoreError::NameRequired`] if `name` is empty after trimming.
    /// Returns [`CoreError::NegativeBalance`] if `initial_balance` is below zero.
    pub fn new(name: impl Into<String>, initial_balance: Decimal) -> Result<Self, CoreError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(CoreError::NameRequired);
        }
        if initial_balance < Decimal::ZERO {
            return Err(CoreError::NegativeBalance);
        }
        Ok(Self { name, initial_balance })
    }

    /// Returns the account name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the opening balance.
    #[must_use]
    pub fn initial_balance(&self) -> Decimal {
        self.initial_balance
    }

    /// Turns the request into a stored record under `id`.
    #[must_use]
    pub fn into_account(self, id: AccountId) -> Account {
        Account { id, name: self.name, balance: self.initial_balance }
    }
}
