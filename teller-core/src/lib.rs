//! Core types for the Teller account service.
//!
//! Defines the account record, its identifier, the validated creation
//! request and the seed data a fresh store starts from.

#![warn(clippy::pedantic)]
#![deny(clippy::unwrap_used)]

pub mod account;
pub mod error;
pub mod id;
pub mod seed;

pub use account::{Account, NewAccount};
pub use error::CoreError;
pub use id::AccountId;
pub use seed::seed_accounts;
