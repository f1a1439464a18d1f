//! In-memory account store.
//!
//! The single authority over account records for the lifetime of the
//! process. One `RwLock` guards both the ordered records and the id
//! high-water mark, so readers always see an id together with its account
//! and concurrent creates can never be handed the same id.

use std::sync::RwLock;

use indexmap::IndexMap;
use teller_core::{seed_accounts, Account, AccountId, CoreError, NewAccount};
use tracing::info;

#[derive(Debug, Default)]
struct Accounts {
    /// Records in insertion order.
    by_id: IndexMap<AccountId, Account>,
    /// Largest id ever issued, `None` until the first account exists.
    last_issued: Option<AccountId>,
}

impl Accounts {
    /// `insert` keeps `last_issued` at or above every stored id.
    fn next_id(&self) -> Result<AccountId, CoreError> {
        self.last_issued.map_or(Ok(AccountId::FIRST), AccountId::successor)
    }

    fn insert(&mut self, account: Account) {
        self.last_issued = self.last_issued.max(Some(account.id));
        self.by_id.insert(account.id, account);
    }
}

/// Thread-safe store of accounts.
#[derive(Debug)]
pub struct AccountStore {
    accounts: RwLock<Accounts>,
}

impl AccountStore {
    /// Create a store holding the seed accounts.
    #[must_use]
    pub fn new() -> Self {
        let mut accounts = Accounts::default();
        for account in seed_accounts() {
            accounts.insert(account);
        }
        Self { accounts: RwLock::new(accounts) }
    }

    /// Create a store with no accounts.
    #[must_use]
    pub fn empty() -> Self {
        Self { accounts: RwLock::new(Accounts::default()) }
    }

    /// Return every account in insertion order.
    ///
    /// # Panics
    /// Panics if the internal `RwLock` is poisoned.
    #[must_use]
    pub fn list(&self) -> Vec<Account> {
        #[expect(clippy::expect_used, reason = "lock poisoning is unrecoverable")]
        self.accounts
            .read()
            .expect("account store read lock poisoned")
            .by_id
            .values()
            .cloned()
            .collect()
    }

    /// Look up an account by id.
    ///
    /// # Panics
    /// Panics if the internal `RwLock` is poisoned.
    #[must_use]
    pub fn get(&self, id: AccountId) -> Option<Account> {
        #[expect(clippy::expect_used, reason = "lock poisoning is unrecoverable")]
        self.accounts
            .read()
            .expect("account store read lock poisoned")
            .by_id
            .get(&id)
            .cloned()
    }

    /// Store a validated account under the next id and return it.
    ///
    /// # Errors
    /// Returns [`CoreError::IdSpaceExhausted`] if no further id can be issued.
    /// The store is left unchanged in that case.
    ///
    /// # Panics
    /// Panics if the internal `RwLock` is poisoned.
    pub fn create(&self, new: NewAccount) -> Result<Account, CoreError> {
        #[expect(clippy::expect_used, reason = "lock poisoning is unrecoverable")]
        let mut accounts = self.accounts.write().expect("account store write lock poisoned");
        let id = accounts.next_id()?;
        let account = new.into_account(id);
        accounts.insert(account.clone());
        drop(accounts);

        info!(id = %account.id, name = %account.name, balance = %account.balance, "account created");
        Ok(account)
    }

    /// Number of stored accounts.
    ///
    /// # Panics
    /// Panics if the internal `RwLock` is poisoned.
    #[must_use]
    pub fn len(&self) -> usize {
        #[expect(clippy::expect_used, reason = "lock poisoning is unrecoverable")]
        self.accounts.read().expect("account store read lock poisoned").by_id.len()
    }

    /// Return `true` if the store holds no accounts.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for AccountStore {
    fn default() -> Self {
        Self::new()
    }
}
