//! Fuzz target: account validation.
//!
//! Whatever the input, a validated account has a non-blank name and a
//! non-negative opening balance.

#![no_main]

use libfuzzer_sys::fuzz_target;
use rust_decimal::Decimal;
use teller_core::NewAccount;

fuzz_target!(|input: (&str, i64, u32)| {
    let (name, mantissa, scale) = input;
    let Ok(balance) = Decimal::try_new(mantissa, scale % 29) else {
        return;
    };
    if let Ok(new) = NewAccount::new(name, balance) {
        assert!(!new.name().trim().is_empty());
        assert!(new.initial_balance() >= Decimal::ZERO);
    }
});
