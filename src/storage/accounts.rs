//! Account repository for JSON storage
//!
//! Manages loading and saving accounts to accounts.json and hands out
//! integer identifiers for newly inserted accounts.

use std::collections::BTreeMap;
use std::path::PathBuf;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use chrono::Utc;

use crate::error::AccountEditorError;
use crate::models::{Account, AccountId};

use super::file_io::{read_json, write_json_atomic};

/// Serializable account file layout
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
struct AccountData {
    /// Highest identifier handed out so far
    #[serde(default)]
    last_id: AccountId,
    accounts: Vec<Account>,
}

#[derive(Debug, Default)]
struct RepositoryState {
    last_id: AccountId,
    accounts: BTreeMap<AccountId, Account>,
}

/// Repository for account persistence
pub struct AccountRepository {
    path: PathBuf,
    data: RwLock<RepositoryState>,
}

impl AccountRepository {
    /// Create a new account repository
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            data: RwLock::new(RepositoryState::default()),
        }
    }

    fn read_state(&self) -> Result<RwLockReadGuard<'_, RepositoryState>, AccountEditorError> {
        self.data.read().map_err(|e| {
            AccountEditorError::Storage(format!("Failed to acquire read lock: {}", e))
        })
    }

    fn write_state(&self) -> Result<RwLockWriteGuard<'_, RepositoryState>, AccountEditorError> {
        self.data.write().map_err(|e| {
            AccountEditorError::Storage(format!("Failed to acquire write lock: {}", e))
        })
    }

    /// Load accounts from disk
    pub fn load(&self) -> Result<(), AccountEditorError> {
        let file_data: AccountData = read_json(&self.path)?;
        let mut state = self.write_state()?;

        state.accounts.clear();
        let mut last_id = file_data.last_id;
        for account in file_data.accounts {
            last_id = last_id.max(account.id);
            state.accounts.insert(account.id, account);
        }
        state.last_id = last_id;

        Ok(())
    }

    /// Save accounts to disk
    pub fn save(&self) -> Result<(), AccountEditorError> {
        let state = self.read_state()?;

        let file_data = AccountData {
            last_id: state.last_id,
            accounts: state.accounts.values().cloned().collect(),
        };

        write_json_atomic(&self.path, &file_data)
    }

    /// Get an account by ID
    pub fn get(&self, id: AccountId) -> Result<Option<Account>, AccountEditorError> {
        Ok(self.read_state()?.accounts.get(&id).cloned())
    }

    /// Insert a new account or replace an existing one
    ///
    /// An account carrying `AccountId::NEW` receives the next free
    /// identifier. Any other identifier must already exist.
    pub fn upsert(&self, mut account: Account) -> Result<AccountId, AccountEditorError> {
        let mut state = self.write_state()?;
        let now = Utc::now();

        if account.id.is_persisted() {
            let existing = state
                .accounts
                .get(&account.id)
                .ok_or(AccountEditorError::AccountNotFound(account.id))?;
            account.created_at = existing.created_at;
        } else {
            state.last_id = state.last_id.next();
            account.id = state.last_id;
            account.created_at = now;
        }
        account.updated_at = now;

        let id = account.id;
        state.accounts.insert(id, account);
        Ok(id)
    }

    /// Apply `change` to a stored account, returning the before and after copies
    pub fn modify<F>(
        &self,
        id: AccountId,
        change: F,
    ) -> Result<(Account, Account), AccountEditorError>
    where
        F: FnOnce(&mut Account),
    {
        let mut state = self.write_state()?;
        let account = state
            .accounts
            .get_mut(&id)
            .ok_or(AccountEditorError::AccountNotFound(id))?;

        let before = account.clone();
        change(account);
        account.id = id;
        account.updated_at = Utc::now();
        Ok((before, account.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Currency, Money};
    use tempfile::TempDir;

    fn create_test_repo() -> (TempDir, AccountRepository) {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("accounts.json");
        let repo = AccountRepository::new(path);
        (temp_dir, repo)
    }

    fn named(label: &str) -> Account {
        Account::with_opening_balance(label, Currency::Eur, Money::from_minor(1000))
    }

    #[test]
    fn test_empty_load() {
        let (_temp_dir, repo) = create_test_repo();
        repo.load().unwrap();
        assert!(repo.get(AccountId::new(1)).unwrap().is_none());
    }

    #[test]
    fn test_insert_assigns_sequential_ids() {
        let (_temp_dir, repo) = create_test_repo();
        repo.load().unwrap();

        let first = repo.upsert(named("Wallet")).unwrap();
        let second = repo.upsert(named("Giro")).unwrap();

        assert_eq!(first, AccountId::new(1));
        assert_eq!(second, AccountId::new(2));
        assert_eq!(repo.get(first).unwrap().unwrap().label, "Wallet");
    }

    #[test]
    fn test_update_keeps_id_and_created_at() {
        let (_temp_dir, repo) = create_test_repo();
        let id = repo.upsert(named("Wallet")).unwrap();
        let stored = repo.get(id).unwrap().unwrap();

        let mut edited = stored.clone();
        edited.label = "Purse".into();
        let same = repo.upsert(edited).unwrap();

        assert_eq!(same, id);
        let reloaded = repo.get(id).unwrap().unwrap();
        assert_eq!(reloaded.label, "Purse");
        assert_eq!(reloaded.created_at, stored.created_at);
        assert!(repo.get(id.next()).unwrap().is_none());
    }

    #[test]
    fn test_update_of_unknown_id_fails() {
        let (_temp_dir, repo) = create_test_repo();
        let mut account = named("Ghost");
        account.id = AccountId::new(99);

        let err = repo.upsert(account).unwrap_err();
        assert!(matches!(err, AccountEditorError::AccountNotFound(_)));
    }

    #[test]
    fn test_save_and_reload_continues_numbering() {
        let (temp_dir, repo) = create_test_repo();
        repo.upsert(named("Wallet")).unwrap();
        repo.upsert(named("Giro")).unwrap();
        repo.save().unwrap();

        let repo2 = AccountRepository::new(temp_dir.path().join("accounts.json"));
        repo2.load().unwrap();
        assert_eq!(repo2.get(AccountId::new(2)).unwrap().unwrap().label, "Giro");

        let third = repo2.upsert(named("Savings")).unwrap();
        assert_eq!(third, AccountId::new(3));
    }

    #[test]
    fn test_modify() {
        let (_temp_dir, repo) = create_test_repo();
        let id = repo.upsert(named("Wallet")).unwrap();

        let (before, after) = repo.modify(id, |a| a.exclude_from_totals = true).unwrap();
        assert!(!before.exclude_from_totals);
        assert!(after.exclude_from_totals);
        assert!(repo.get(id).unwrap().unwrap().exclude_from_totals);

        assert!(matches!(
            repo.modify(AccountId::new(7), |_| {}),
            Err(AccountEditorError::AccountNotFound(_))
        ));
    }
}
