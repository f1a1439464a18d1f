//! Fuzz target: JSON deserialization of `CreateAccountBody`.
//!
//! Arbitrary bytes fed to the body decoder must never panic; decoded bodies
//! are pushed through validation and a store to exercise the whole create
//! path.

#![no_main]

use libfuzzer_sys::fuzz_target;
use teller_core::NewAccount;
use teller_gateway::{routes::CreateAccountBody, store::AccountStore};

fuzz_target!(|data: &[u8]| {
    let Ok(body) = serde_json::from_slice::<CreateAccountBody>(data) else {
        return;
    };
    let Ok(new) = NewAccount::new(body.name.unwrap_or_default(), body.initial_balance) else {
        return;
    };
    let store = AccountStore::new();
    if let Ok(account) = store.create(new) {
        assert_eq!(account.id.get(), 3);
        assert_eq!(store.get(account.id), Some(account));
    }
});
