use crate::models::Account;

/// The account record being edited, plus bookkeeping
#[derive(Debug, Clone)]
pub struct EditDraft {
    account: Account,
    dirty: bool,
    is_new: bool,
}

impl EditDraft {
    /// Wrap a freshly built or loaded account
    ///
    /// Whether the draft is new is decided here, from the id it arrives with,
    /// and does not change when a later save assigns an id.
    pub fn new(account: Account) -> Self {
        Self {
            is_new: !account.is_persisted(),
            account,
            dirty: false,
        }
    }

    pub fn account(&self) -> &Account {
        &self.account
    }

    pub fn is_new(&self) -> bool {
        self.is_new
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Apply a change and mark the draft dirty
    pub fn update<R>(&mut self, f: impl FnOnce(&mut Account) -> R) -> R {
        self.dirty = true;
        f(&mut self.account)
    }

    /// Mark a pending change that has not reached the record yet
    pub fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    /// Replace the record with what was just persisted
    pub fn commit(&mut self, saved: Account) {
        self.account = saved;
        self.dirty = false;
    }
}
