//! Storage layer for the account editor
//!
//! Provides JSON file storage with atomic writes and the persistence seam
//! the edit form talks to.

pub mod accounts;
pub mod file_io;

pub use accounts::AccountRepository;
pub use file_io::{read_json, write_json_atomic};

use crate::error::AccountEditorResult;
use crate::models::{Account, AccountId};

/// Persistence collaborator of the edit form
pub trait AccountStore {
    /// Load one account, `None` if no record has that identifier
    fn load(&self, id: AccountId) -> AccountEditorResult<Option<Account>>;

    /// Insert or update `account` and return its identifier
    ///
    /// Updates return the account's own identifier; inserts return the
    /// identifier assigned by the store.
    fn save(&self, account: &Account) -> AccountEditorResult<AccountId>;
}

impl<S: AccountStore + ?Sized> AccountStore for &S {
    fn load(&self, id: AccountId) -> AccountEditorResult<Option<Account>> {
        (**self).load(id)
    }

    fn save(&self, account: &Account) -> AccountEditorResult<AccountId> {
        (**self).save(account)
    }
}

impl<S: AccountStore + ?Sized> AccountStore for std::sync::Arc<S> {
    fn load(&self, id: AccountId) -> AccountEditorResult<Option<Account>> {
        (**self).load(id)
    }

    fn save(&self, account: &Account) -> AccountEditorResult<AccountId> {
        (**self).save(account)
    }
}
