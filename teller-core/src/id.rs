use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// Identifier of an account held by the store.
///
/// Always strictly positive. Ids are issued by the store in increasing order
/// and never reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u64", into = "u64")]
pub struct AccountId(pub(crate) u64);

impl AccountId {
    /// The id handed to the first account of an empty store.
    pub const FIRST: Self = Self(1);

    /// Creates an `AccountId` from a raw value.
    ///
    /// # Errors
    /// Returns [`CoreError::InvalidAccountId`] if `value` is zero.
    pub const fn new(value: u64) -> Result<Self, CoreError> {
        if value == 0 {
            return Err(CoreError::InvalidAccountId { value });
        }
        Ok(Self(value))
    }

    /// Returns the raw value.
    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }

    /// Returns the id immediately after this one.
    ///
    /// # Errors
    /// Returns [`CoreError::IdSpaceExhausted`] if no larger id exists.
    pub fn successor(self) -> Result<Self, CoreError> {
        self.0
            .checked_add(1)
            .map(Self)
            .ok_or(CoreError::IdSpaceExhausted)
    }
}

impl fmt::Display for AccountId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<u64> for AccountId {
    type Error = CoreError;

    fn try_from(value: u64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<AccountId> for u64 {
    fn from(id: AccountId) -> Self {
        id.0
    }
}
