//! Account service
//!
//! Persistence collaborator of the edit form: validates records, writes
//! them through the repository, and records every write in the audit log.

use crate::audit::{AuditEntry, AuditLogger};
use crate::config::paths::EditorPaths;
use crate::error::{AccountEditorError, AccountEditorResult};
use crate::models::{Account, AccountId, MAX_SORT_KEY};
use crate::storage::{AccountRepository, AccountStore};

/// Service for account persistence
pub struct AccountService {
    repository: AccountRepository,
    audit: AuditLogger,
}

impl AccountService {
    /// Create a service over an existing repository and audit log
    pub fn new(repository: AccountRepository, audit: AuditLogger) -> Self {
        Self { repository, audit }
    }

    /// Open the repository and audit log under `paths`, loading accounts from disk
    pub fn open(paths: &EditorPaths) -> AccountEditorResult<Self> {
        paths.ensure_directories()?;
        let repository = AccountRepository::new(paths.accounts_file());
        repository.load()?;
        Ok(Self::new(repository, AuditLogger::new(paths.audit_log())))
    }

    /// Get an account by ID
    pub fn get(&self, id: AccountId) -> AccountEditorResult<Option<Account>> {
        self.repository.get(id)
    }

    /// Insert or update an account
    pub fn save_account(&self, account: &Account) -> AccountEditorResult<AccountId> {
        account
            .validate()
            .map_err(|e| AccountEditorError::Validation(e.to_string()))?;

        let before = if account.is_persisted() {
            Some(
                self.repository
                    .get(account.id)?
                    .ok_or(AccountEditorError::AccountNotFound(account.id))?,
            )
        } else {
            None
        };

        let id = self.repository.upsert(account.clone())?;
        self.repository.save()?;

        let stored = self
            .repository
            .get(id)?
            .ok_or(AccountEditorError::AccountNotFound(id))?;
        let entry = match before {
            Some(before) => AuditEntry::update(&before, &stored, "save"),
            None => AuditEntry::create(&stored, "save"),
        };
        self.audit.log(&entry)?;

        Ok(id)
    }

    /// Set the exclude-from-totals flag of a stored account
    pub fn set_exclude_from_totals(&self, id: AccountId, exclude: bool) -> AccountEditorResult<()> {
        let (before, after) = self
            .repository
            .modify(id, |account| account.exclude_from_totals = exclude)?;
        self.repository.save()?;
        self.audit
            .log(&AuditEntry::update(&before, &after, "toggle-exclude"))
    }

    /// Set the sort key of a stored account
    pub fn set_sort_key(&self, id: AccountId, sort_key: i32) -> AccountEditorResult<()> {
        if !(0..=MAX_SORT_KEY).contains(&sort_key) {
            return Err(AccountEditorError::Validation(format!(
                "Sort key {} out of range (0 to {})",
                sort_key, MAX_SORT_KEY
            )));
        }
        let (before, after) = self
            .repository
            .modify(id, |account| account.sort_key = sort_key)?;
        self.repository.save()?;
        self.audit
            .log(&AuditEntry::update(&before, &after, "sort-key"))
    }

    pub fn audit_log(&self) -> &AuditLogger {
        &self.audit
    }
}

impl AccountStore for AccountService {
    fn load(&self, id: AccountId) -> AccountEditorResult<Option<Account>> {
        self.get(id)
    }

    fn save(&self, account: &Account) -> AccountEditorResult<AccountId> {
        self.save_account(account)
    }
}
