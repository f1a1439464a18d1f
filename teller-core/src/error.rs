/// Errors produced by the `teller-core` crate.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum CoreError {
    /// The account name was empty or whitespace only.
    #[error("Name is required.")]
    NameRequired,

    /// The opening balance was below zero.
    #[error("InitialBalance cannot be negative.")]
    NegativeBalance,

    /// Account ids start at 1.
    #[error("invalid account id {value}: must be greater than zero")]
    InvalidAccountId { value: u64 },

    /// Every representable account id has already been issued.
    #[error("account id space exhausted")]
    IdSpaceExhausted,
}
