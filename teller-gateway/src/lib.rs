//! HTTP gateway for the Teller account service.
//!
//! Serves account listing, lookup and creation over an in-memory
//! [`store::AccountStore`], plus liveness and database reachability checks.

#![warn(clippy::pedantic)]
#![deny(clippy::unwrap_used)]

pub mod config;
pub mod error;
pub mod probe;
pub mod routes;
pub mod store;
