//! Edit session state machine
//!
//! A form starts `Loaded` from `initialize`, becomes `Dirty` on the first
//! change and ends either `Saved` or `Discarded`. Both end states refuse
//! further changes.

use std::fmt;

use crate::audit::Diagnostics;
use crate::config::Settings;
use crate::models::{Account, AccountId, AccountType, Currency, Money, Rgb, MAX_SORT_KEY};
use crate::storage::AccountStore;
use crate::tasks::{AccountTask, TaskSubmitter};

use super::amount::{AmountFormat, AmountParseError};
use super::draft::EditDraft;
use super::event::{
    DialogResult, EditorEvent, EditorOutcome, MenuCommand, MenuState, Selector, SortKeyRequest,
    TextField,
};
use super::palette::ColorPalette;
use super::selector::SelectionTable;
use super::{EditorError, ValidationError};

const SORT_KEY_DIALOG_TITLE: &str = "Set sort key";
const SORT_KEY_MAX_LEN: usize = 9;

/// Where an edit session is in its lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Loaded,
    Dirty,
    Saved,
    Discarded,
}

impl SessionState {
    pub fn is_closed(&self) -> bool {
        matches!(self, Self::Saved | Self::Discarded)
    }
}

impl fmt::Display for SessionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Loaded => write!(f, "loaded"),
            Self::Dirty => write!(f, "dirty"),
            Self::Saved => write!(f, "saved"),
            Self::Discarded => write!(f, "discarded"),
        }
    }
}

/// Sign applied to the opening balance on save
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AmountSign {
    #[default]
    Income,
    Expense,
}

impl AmountSign {
    pub fn toggled(self) -> Self {
        match self {
            Self::Income => Self::Expense,
            Self::Expense => Self::Income,
        }
    }
}

impl fmt::Display for AmountSign {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Income => write!(f, "+"),
            Self::Expense => write!(f, "-"),
        }
    }
}

/// Settings an edit session runs with
#[derive(Debug, Clone)]
pub struct EditorConfig {
    pub format: AmountFormat,
    pub default_currency: Currency,
    pub unsupported_currencies: Vec<Currency>,
    pub diagnostics: Diagnostics,
}

impl EditorConfig {
    pub fn from_settings(settings: &Settings, diagnostics: Diagnostics) -> Self {
        Self {
            format: AmountFormat::from(&settings.locale),
            default_currency: settings.default_currency,
            unsupported_currencies: settings.unsupported_currencies.clone(),
            diagnostics,
        }
    }

    fn supports_currency(&self, currency: Currency) -> bool {
        !self.unsupported_currencies.contains(&currency)
    }
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self::from_settings(&Settings::default(), Diagnostics::in_memory())
    }
}

/// Form for creating or editing one account
pub struct AccountEditForm<S, T> {
    store: S,
    tasks: T,
    config: EditorConfig,
    draft: EditDraft,
    state: SessionState,
    currencies: SelectionTable<Currency>,
    account_types: SelectionTable<AccountType>,
    palette: ColorPalette,
    label: String,
    description: String,
    amount_text: String,
    sign: AmountSign,
    currency_index: usize,
    type_index: usize,
    label_error: Option<ValidationError>,
}

impl<S: AccountStore, T: TaskSubmitter> AccountEditForm<S, T> {
    /// Open a session for an existing account or a new one
    ///
    /// A persisted `existing_id` is loaded from `store`. Otherwise a new
    /// account gets the default currency, or `currency_hint` if it names a
    /// known currency.
    pub fn initialize(
        store: S,
        tasks: T,
        config: EditorConfig,
        existing_id: Option<AccountId>,
        currency_hint: Option<&str>,
    ) -> Result<Self, EditorError> {
        let account = match existing_id.filter(AccountId::is_persisted) {
            Some(id) => store.load(id)?.ok_or(EditorError::LoadFailure(id))?,
            None => {
                let mut account = Account::new(config.default_currency);
                if let Some(hint) = currency_hint {
                    // Unknown codes leave the default in place
                    let _ = account.set_currency_code(hint);
                }
                account
            }
        };

        let currencies = SelectionTable::new(Currency::ALL);
        let account_types = SelectionTable::new(AccountType::ALL);

        let digits = account.currency.fraction_digits();
        let amount_text = config
            .format
            .format(account.opening_balance.abs().to_major(digits), digits);
        let sign = if account.opening_balance.is_negative() {
            AmountSign::Expense
        } else {
            AmountSign::Income
        };

        Ok(Self {
            currency_index: currencies.index_of(account.currency).unwrap_or_default(),
            type_index: account_types
                .index_of(account.account_type)
                .unwrap_or_default(),
            palette: ColorPalette::build(account.color),
            label: account.label.clone(),
            description: account.description.clone(),
            amount_text,
            sign,
            store,
            tasks,
            config,
            draft: EditDraft::new(account),
            state: SessionState::Loaded,
            currencies,
            account_types,
            label_error: None,
        })
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn draft(&self) -> &EditDraft {
        &self.draft
    }

    pub fn title(&self) -> &'static str {
        if self.draft.is_new() {
            "Create account"
        } else {
            "Edit account"
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn amount_text(&self) -> &str {
        &self.amount_text
    }

    pub fn sign(&self) -> AmountSign {
        self.sign
    }

    pub fn label_error(&self) -> Option<&ValidationError> {
        self.label_error.as_ref()
    }

    pub fn currencies(&self) -> &SelectionTable<Currency> {
        &self.currencies
    }

    pub fn currency_index(&self) -> usize {
        self.currency_index
    }

    /// Currency currently shown in the selector (not yet committed)
    pub fn selected_currency(&self) -> Currency {
        self.currencies
            .value_at(self.currency_index)
            .unwrap_or(self.draft.account().currency)
    }

    pub fn account_types(&self) -> &SelectionTable<AccountType> {
        &self.account_types
    }

    pub fn type_index(&self) -> usize {
        self.type_index
    }

    pub fn selected_account_type(&self) -> AccountType {
        self.account_types
            .value_at(self.type_index)
            .unwrap_or(self.draft.account().account_type)
    }

    pub fn palette(&self) -> &ColorPalette {
        &self.palette
    }

    /// Rebuild the palette after the screen was laid out again
    pub fn rebuild_palette(&mut self) {
        self.palette = self.palette.rebuilt(self.draft.account().color);
    }

    fn ensure_open(&self) -> Result<(), EditorError> {
        if self.state.is_closed() {
            return Err(EditorError::SessionClosed(self.state));
        }
        Ok(())
    }

    fn mark_dirty(&mut self) {
        self.draft.mark_dirty();
        self.state = SessionState::Dirty;
    }

    fn update_account(&mut self, f: impl FnOnce(&mut Account)) {
        self.draft.update(f);
        self.state = SessionState::Dirty;
    }

    /// Replace the text of one field
    pub fn set_text(
        &mut self,
        field: TextField,
        value: impl Into<String>,
    ) -> Result<(), EditorError> {
        self.ensure_open()?;
        let value = value.into();
        let slot = match field {
            TextField::Label => &mut self.label,
            TextField::Description => &mut self.description,
            TextField::Amount => &mut self.amount_text,
        };
        if *slot == value {
            return Ok(());
        }
        *slot = value;
        if field == TextField::Label {
            self.label_error = None;
        }
        self.mark_dirty();
        Ok(())
    }

    /// Move one selector to `index`
    pub fn select(&mut self, selector: Selector, index: usize) -> Result<(), EditorError> {
        self.ensure_open()?;
        let out_of_range = EditorError::SelectionOutOfRange { selector, index };
        match selector {
            Selector::Currency => {
                let currency = self.currencies.value_at(index).ok_or(out_of_range)?;
                if index != self.currency_index {
                    let previous = self.selected_currency();
                    self.currency_index = index;
                    self.rescale_amount(previous.fraction_digits(), currency.fraction_digits());
                    self.mark_dirty();
                }
            }
            Selector::AccountType => {
                self.account_types.value_at(index).ok_or(out_of_range)?;
                if index != self.type_index {
                    self.type_index = index;
                    self.mark_dirty();
                }
            }
            Selector::Color => {
                let color = self.palette.select(index).ok_or(out_of_range)?;
                if color != self.draft.account().color {
                    self.update_account(|account| account.color = color);
                }
            }
        }
        Ok(())
    }

    /// Re-render the amount text with another currency's fraction digits
    ///
    /// Text that does not parse is left for validation to report.
    fn rescale_amount(&mut self, from_digits: u32, to_digits: u32) {
        if from_digits == to_digits {
            return;
        }
        if let Ok(value) = self.config.format.parse(&self.amount_text, from_digits) {
            self.amount_text = self.config.format.format(value, to_digits);
        }
    }

    pub fn toggle_sign(&mut self) -> Result<AmountSign, EditorError> {
        self.ensure_open()?;
        self.sign = self.sign.toggled();
        self.mark_dirty();
        Ok(self.sign)
    }

    /// Take the result of the custom color picker
    pub fn apply_color_pick(&mut self, picked: Option<Rgb>) -> Result<(), EditorError> {
        self.ensure_open()?;
        // Black packs to the unset sentinel and counts as no pick
        let Some(color) = picked.filter(|color| !color.is_unset()) else {
            return Ok(());
        };
        self.palette.apply_pick(color);
        self.update_account(|account| account.color = color);
        Ok(())
    }

    /// Validate the form, commit it to the draft and persist it
    ///
    /// Nothing is committed unless every check passes and the store accepts
    /// the record.
    pub fn validate_and_save(&mut self) -> Result<AccountId, EditorError> {
        self.ensure_open()?;

        let currency = self.selected_currency();
        let digits = currency.fraction_digits();
        let magnitude = self
            .config
            .format
            .parse(&self.amount_text, digits)
            .map_err(ValidationError::InvalidAmount)?;

        if !self.config.supports_currency(currency) {
            return Err(ValidationError::UnsupportedCurrency(currency).into());
        }

        let label = self.label.trim().to_string();
        if label.is_empty() {
            self.label_error = Some(ValidationError::MissingLabel);
            return Err(ValidationError::MissingLabel.into());
        }

        let signed = match self.sign {
            AmountSign::Income => magnitude,
            AmountSign::Expense => -magnitude,
        };
        let opening_balance = Money::from_major(signed, digits)
            .map_err(|_| ValidationError::InvalidAmount(AmountParseError::OutOfRange))?;

        let mut account = self.draft.account().clone();
        account.label = label;
        account.description = self.description.clone();
        account.currency = currency;
        account.account_type = self.selected_account_type();
        account.opening_balance = opening_balance;

        let id = self.store.save(&account)?;
        account.id = id;
        self.draft.commit(account);
        self.label_error = None;
        self.state = SessionState::Saved;
        Ok(id)
    }

    /// Flip the exclude-from-totals flag, returning the new value
    ///
    /// Persisted accounts get the flag written in the background; new ones
    /// carry it into their first save.
    pub fn toggle_exclude_from_totals(&mut self) -> Result<bool, EditorError> {
        self.ensure_open()?;
        let value = !self.draft.account().exclude_from_totals;
        self.update_account(|account| account.exclude_from_totals = value);

        let id = self.draft.account().id;
        if id.is_persisted() {
            self.tasks.submit(AccountTask::ToggleExclude { id, value });
        }
        Ok(value)
    }

    /// What the sort-key dialog should show
    pub fn sort_key_request(&self) -> SortKeyRequest {
        SortKeyRequest {
            title: SORT_KEY_DIALOG_TITLE,
            current: self.draft.account().sort_key.to_string(),
            max_len: SORT_KEY_MAX_LEN,
        }
    }

    /// Set the sort key from dialog text
    pub fn set_sort_key(&mut self, raw: &str) -> Result<i32, EditorError> {
        self.ensure_open()?;
        let value = raw
            .trim()
            .parse::<i32>()
            .ok()
            .filter(|value| (0..=MAX_SORT_KEY).contains(value))
            .ok_or_else(|| EditorError::SortKeyParse(raw.to_string()))?;

        self.update_account(|account| account.sort_key = value);
        let id = self.draft.account().id;
        if id.is_persisted() {
            self.tasks.submit(AccountTask::UpdateSortKey { id, value });
        }
        Ok(value)
    }

    /// Ask to leave the form without saving
    ///
    /// A clean form is discarded at once and `None` is returned. A dirty one
    /// stays open and returns the question to put to the user; their answer
    /// goes to `confirm_discard`.
    pub fn request_cancel(&mut self) -> Result<Option<&'static str>, EditorError> {
        self.ensure_open()?;
        if !self.draft.is_dirty() {
            self.state = SessionState::Discarded;
            return Ok(None);
        }
        Ok(Some(if self.draft.is_new() {
            "Discard the new account?"
        } else {
            "Discard unsaved changes?"
        }))
    }

    /// Apply the answer to the discard question; returns whether the form closed
    pub fn confirm_discard(&mut self, accepted: bool) -> Result<bool, EditorError> {
        self.ensure_open()?;
        if accepted {
            self.state = SessionState::Discarded;
        }
        Ok(accepted)
    }

    /// Prepare the menu for drawing
    ///
    /// Never fails: a menu requested for a finished session is reported to
    /// diagnostics and comes back disabled.
    pub fn menu_state(&self) -> MenuState {
        let checked = self.draft.account().exclude_from_totals;
        if self.state.is_closed() {
            self.config.diagnostics.report(
                "menu",
                format!("menu requested for a {} session", self.state),
            );
            return MenuState {
                exclude_from_totals_checked: checked,
                enabled: false,
            };
        }
        MenuState {
            exclude_from_totals_checked: checked,
            enabled: true,
        }
    }

    /// Handle one event and tell the host what to do next
    pub fn handle_event(&mut self, event: EditorEvent) -> EditorOutcome {
        self.dispatch(event).unwrap_or_else(EditorOutcome::Rejected)
    }

    fn dispatch(&mut self, event: EditorEvent) -> Result<EditorOutcome, EditorError> {
        let outcome = match event {
            EditorEvent::FieldChanged { field, value } => {
                self.set_text(field, value)?;
                EditorOutcome::Updated
            }
            EditorEvent::SelectionChanged { selector, index } => {
                self.select(selector, index)?;
                EditorOutcome::Updated
            }
            EditorEvent::SignToggled => {
                self.toggle_sign()?;
                EditorOutcome::Updated
            }
            EditorEvent::ColorPicked(picked) => {
                let picked = picked.filter(|color| !color.is_unset());
                self.apply_color_pick(picked)?;
                if picked.is_some() {
                    EditorOutcome::Updated
                } else {
                    EditorOutcome::Ignored
                }
            }
            EditorEvent::SortKeyEntered(DialogResult::Submitted(text)) => {
                self.set_sort_key(&text)?;
                EditorOutcome::Updated
            }
            EditorEvent::SortKeyEntered(DialogResult::Cancelled) => EditorOutcome::Ignored,
            EditorEvent::DiscardConfirmed(accepted) => {
                if self.confirm_discard(accepted)? {
                    EditorOutcome::Discarded
                } else {
                    EditorOutcome::Ignored
                }
            }
            EditorEvent::Menu(command) => self.run_command(command)?,
        };
        Ok(outcome)
    }

    fn run_command(&mut self, command: MenuCommand) -> Result<EditorOutcome, EditorError> {
        self.ensure_open()?;
        let outcome = match command {
            MenuCommand::SetSortKey => EditorOutcome::OpenSortKeyDialog(self.sort_key_request()),
            MenuCommand::ToggleExcludeFromTotals => {
                self.toggle_exclude_from_totals()?;
                EditorOutcome::Updated
            }
            MenuCommand::PickColor => EditorOutcome::OpenColorPicker {
                current: self.draft.account().color,
            },
            MenuCommand::Save => EditorOutcome::Saved(self.validate_and_save()?),
            MenuCommand::Cancel => match self.request_cancel()? {
                Some(message) => EditorOutcome::ConfirmDiscard { message },
                None => EditorOutcome::Discarded,
            },
        };
        Ok(outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{AccountEditorError, AccountEditorResult};
    use crate::models::{THEME_PALETTE, DEFAULT_ACCOUNT_COLOR};
    use crate::tasks::RecordingSubmitter;
    use std::cell::{Cell, RefCell};
    use std::collections::BTreeMap;
    use tempfile::TempDir;

    #[derive(Default)]
    struct MemoryStore {
        accounts: RefCell<BTreeMap<AccountId, Account>>,
        saves: Cell<usize>,
        failing: Cell<bool>,
    }

    impl MemoryStore {
        fn with(account: Account) -> Self {
            let store = Self::default();
            store.accounts.borrow_mut().insert(account.id, account);
            store
        }
    }

    impl AccountStore for MemoryStore {
        fn load(&self, id: AccountId) -> AccountEditorResult<Option<Account>> {
            Ok(self.accounts.borrow().get(&id).cloned())
        }

        fn save(&self, account: &Account) -> AccountEditorResult<AccountId> {
            self.saves.set(self.saves.get() + 1);
            if self.failing.get() {
                return Err(AccountEditorError::Storage("disk full".into()));
            }
            let mut account = account.clone();
            if !account.is_persisted() {
                let last = self.accounts.borrow().keys().last().copied();
                account.id = last.unwrap_or(AccountId::NEW).next();
            }
            let id = account.id;
            self.accounts.borrow_mut().insert(id, account);
            Ok(id)
        }
    }

    type TestForm<'a> = AccountEditForm<&'a MemoryStore, &'a RecordingSubmitter>;

    fn new_form<'a>(store: &'a MemoryStore, tasks: &'a RecordingSubmitter) -> TestForm<'a> {
        AccountEditForm::initialize(store, tasks, EditorConfig::default(), None, None).unwrap()
    }

    fn existing_form<'a>(
        store: &'a MemoryStore,
        tasks: &'a RecordingSubmitter,
        id: i64,
    ) -> TestForm<'a> {
        let config = EditorConfig::default();
        AccountEditForm::initialize(store, tasks, config, Some(AccountId::new(id)), None).unwrap()
    }

    fn stored(id: i64, opening_balance: i64) -> Account {
        let balance = Money::from_minor(opening_balance);
        let mut account = Account::with_opening_balance("Checking", Currency::Usd, balance);
        account.id = AccountId::new(id);
        account
    }

    #[test]
    fn test_save_then_load_yields_signed_balance() {
        let store = MemoryStore::default();
        let tasks = RecordingSubmitter::default();
        let mut form = new_form(&store, &tasks);
        assert_eq!(form.title(), "Create account");

        let eur = form.currencies().index_of(Currency::Eur).unwrap();
        let card = form.account_types().index_of(AccountType::CreditCard).unwrap();
        form.set_text(TextField::Label, "  Visa  ").unwrap();
        form.set_text(TextField::Amount, "1,250.50").unwrap();
        form.select(Selector::Currency, eur).unwrap();
        form.select(Selector::AccountType, card).unwrap();
        assert_eq!(form.toggle_sign().unwrap(), AmountSign::Expense);

        let id = form.validate_and_save().unwrap();
        assert!(id.is_persisted());
        assert_eq!(form.state(), SessionState::Saved);

        let saved = store.load(id).unwrap().unwrap();
        assert_eq!(saved.label, "Visa");
        assert_eq!(saved.currency, Currency::Eur);
        assert_eq!(saved.account_type, AccountType::CreditCard);
        assert_eq!(saved.opening_balance, Money::from_minor(-125_050));
        assert!(tasks.tasks().is_empty());
    }

    #[test]
    fn test_empty_label_never_reaches_store() {
        let store = MemoryStore::default();
        let tasks = RecordingSubmitter::default();
        let mut form = new_form(&store, &tasks);
        form.set_text(TextField::Label, "   ").unwrap();

        let err = form.validate_and_save().unwrap_err();
        assert!(matches!(err, EditorError::Validation(ValidationError::MissingLabel)));
        assert_eq!(form.label_error(), Some(&ValidationError::MissingLabel));
        assert_eq!(store.saves.get(), 0);
        assert_eq!(form.state(), SessionState::Dirty);

        form.set_text(TextField::Label, "Cash").unwrap();
        assert_eq!(form.label_error(), None);
    }

    #[test]
    fn test_failed_save_of_untouched_form_stays_loaded() {
        let store = MemoryStore::default();
        let tasks = RecordingSubmitter::default();
        let mut form = new_form(&store, &tasks);

        let err = form.validate_and_save().unwrap_err();
        assert!(matches!(err, EditorError::Validation(ValidationError::MissingLabel)));
        assert_eq!(form.state(), SessionState::Loaded);
        assert_eq!(store.saves.get(), 0);
    }

    #[test]
    fn test_currency_switch_rescales_amount() {
        let store = MemoryStore::default();
        let tasks = RecordingSubmitter::default();
        let mut form = new_form(&store, &tasks);
        assert_eq!(form.amount_text(), "0.00");

        let jpy = form.currencies().index_of(Currency::Jpy).unwrap();
        form.set_text(TextField::Label, "Tokyo").unwrap();
        form.select(Selector::Currency, jpy).unwrap();
        assert_eq!(form.amount_text(), "0");

        let id = form.validate_and_save().unwrap();
        let saved = store.load(id).unwrap().unwrap();
        assert_eq!(saved.currency, Currency::Jpy);
        assert_eq!(saved.opening_balance, Money::zero());
    }

    #[test]
    fn test_currency_switch_rounds_to_new_digits() {
        let store = MemoryStore::default();
        let tasks = RecordingSubmitter::default();
        let mut form = new_form(&store, &tasks);
        form.set_text(TextField::Amount, "1,250.50").unwrap();

        let jpy = form.currencies().index_of(Currency::Jpy).unwrap();
        form.select(Selector::Currency, jpy).unwrap();
        assert_eq!(form.amount_text(), "1,251");

        let kwd = form.currencies().index_of(Currency::Kwd).unwrap();
        form.select(Selector::Currency, kwd).unwrap();
        assert_eq!(form.amount_text(), "1,251.000");

        form.set_text(TextField::Amount, "12x").unwrap();
        form.select(Selector::Currency, jpy).unwrap();
        assert_eq!(form.amount_text(), "12x");
    }

    #[test]
    fn test_invalid_amount_is_checked_first() {
        let store = MemoryStore::default();
        let tasks = RecordingSubmitter::default();
        let mut form = new_form(&store, &tasks);
        form.set_text(TextField::Amount, "abc").unwrap();

        let err = form.validate_and_save().unwrap_err();
        assert!(matches!(
            err,
            EditorError::Validation(ValidationError::InvalidAmount(AmountParseError::Invalid(_)))
        ));
        // The empty label is not reported while the amount is wrong
        assert_eq!(form.label_error(), None);
        assert_eq!(store.saves.get(), 0);
    }

    #[test]
    fn test_empty_amount_is_rejected() {
        let store = MemoryStore::default();
        let tasks = RecordingSubmitter::default();
        let mut form = new_form(&store, &tasks);
        form.set_text(TextField::Label, "Cash").unwrap();
        form.set_text(TextField::Amount, "").unwrap();

        assert!(matches!(
            form.validate_and_save(),
            Err(EditorError::Validation(ValidationError::InvalidAmount(AmountParseError::Empty)))
        ));
    }

    #[test]
    fn test_unsupported_currency_keeps_draft_currency() {
        let store = MemoryStore::default();
        let tasks = RecordingSubmitter::default();
        let config = EditorConfig {
            unsupported_currencies: vec![Currency::Jpy],
            ..EditorConfig::default()
        };
        let mut form = AccountEditForm::initialize(&store, &tasks, config, None, None).unwrap();
        let jpy = form.currencies().index_of(Currency::Jpy).unwrap();
        form.set_text(TextField::Label, "Tokyo").unwrap();
        form.set_text(TextField::Amount, "1000").unwrap();
        form.select(Selector::Currency, jpy).unwrap();

        let err = form.validate_and_save().unwrap_err();
        assert!(matches!(
            err,
            EditorError::Validation(ValidationError::UnsupportedCurrency(Currency::Jpy))
        ));
        assert_eq!(form.draft().account().currency, Currency::Usd);
        assert_eq!(form.selected_currency(), Currency::Jpy);
        assert_eq!(store.saves.get(), 0);
    }

    #[test]
    fn test_color_picks_share_one_pending_slot() {
        let store = MemoryStore::default();
        let tasks = RecordingSubmitter::default();
        let mut form = new_form(&store, &tasks);
        let base_len = form.palette().len();
        let first = Rgb::new(0x123456);
        let second = Rgb::new(0x654321);

        form.apply_color_pick(Some(first)).unwrap();
        form.apply_color_pick(Some(first)).unwrap();
        assert_eq!(form.palette().len(), base_len + 1);
        assert_eq!(form.draft().account().color, first);

        form.apply_color_pick(Some(second)).unwrap();
        assert_eq!(form.palette().len(), base_len + 1);
        assert_eq!(form.palette().index_of(first), None);
        assert_eq!(form.palette().selected(), form.palette().index_of(second));
        assert_eq!(form.draft().account().color, second);
    }

    #[test]
    fn test_no_color_pick_is_a_no_op() {
        let store = MemoryStore::default();
        let tasks = RecordingSubmitter::default();
        let mut form = new_form(&store, &tasks);

        let outcome = form.handle_event(EditorEvent::ColorPicked(None));
        assert!(matches!(outcome, EditorOutcome::Ignored));
        assert_eq!(form.state(), SessionState::Loaded);
        assert_eq!(form.draft().account().color, DEFAULT_ACCOUNT_COLOR);
    }

    #[test]
    fn test_black_pick_counts_as_no_pick() {
        let store = MemoryStore::default();
        let tasks = RecordingSubmitter::default();
        let mut form = new_form(&store, &tasks);
        let base_len = form.palette().len();

        let outcome = form.handle_event(EditorEvent::ColorPicked(Some(Rgb::new(0x000000))));
        assert!(matches!(outcome, EditorOutcome::Ignored));
        assert_eq!(form.palette().len(), base_len);
        assert_eq!(form.palette().pending(), None);
        assert_eq!(form.state(), SessionState::Loaded);
        assert_eq!(form.draft().account().color, DEFAULT_ACCOUNT_COLOR);
    }

    #[test]
    fn test_selecting_palette_slot_sets_color() {
        let store = MemoryStore::default();
        let tasks = RecordingSubmitter::default();
        let mut form = new_form(&store, &tasks);

        form.select(Selector::Color, 0).unwrap();
        assert_eq!(form.draft().account().color, THEME_PALETTE[0]);
        assert!(matches!(
            form.select(Selector::Color, 99),
            Err(EditorError::SelectionOutOfRange { selector: Selector::Color, index: 99 })
        ));
    }

    #[test]
    fn test_toggle_exclude_submits_for_persisted_account() {
        let store = MemoryStore::with(stored(42, 0));
        let tasks = RecordingSubmitter::default();
        let mut form = existing_form(&store, &tasks, 42);
        let id = AccountId::new(42);

        assert!(form.toggle_exclude_from_totals().unwrap());
        assert_eq!(tasks.tasks(), vec![AccountTask::ToggleExclude { id, value: true }]);

        assert!(!form.toggle_exclude_from_totals().unwrap());
        assert_eq!(
            tasks.tasks(),
            vec![
                AccountTask::ToggleExclude { id, value: true },
                AccountTask::ToggleExclude { id, value: false },
            ]
        );
        assert_eq!(form.state(), SessionState::Dirty);
    }

    #[test]
    fn test_toggle_exclude_on_new_account_travels_with_save() {
        let store = MemoryStore::default();
        let tasks = RecordingSubmitter::default();
        let mut form = new_form(&store, &tasks);
        form.set_text(TextField::Label, "Savings").unwrap();

        assert!(form.toggle_exclude_from_totals().unwrap());
        assert!(tasks.tasks().is_empty());

        let id = form.validate_and_save().unwrap();
        assert!(store.load(id).unwrap().unwrap().exclude_from_totals);
    }

    #[test]
    fn test_sort_key() {
        let store = MemoryStore::with(stored(7, 0));
        let tasks = RecordingSubmitter::default();
        let mut form = existing_form(&store, &tasks, 7);

        assert_eq!(form.set_sort_key(" 123456789 ").unwrap(), 123_456_789);
        assert_eq!(form.draft().account().sort_key, 123_456_789);

        assert!(matches!(
            form.set_sort_key("12a"),
            Err(EditorError::SortKeyParse(raw)) if raw == "12a"
        ));
        assert!(matches!(form.set_sort_key("-1"), Err(EditorError::SortKeyParse(_))));
        assert_eq!(form.draft().account().sort_key, 123_456_789);

        assert_eq!(
            tasks.tasks(),
            vec![AccountTask::UpdateSortKey {
                id: AccountId::new(7),
                value: 123_456_789
            }]
        );
    }

    #[test]
    fn test_currency_hint() {
        let store = MemoryStore::default();
        let tasks = RecordingSubmitter::default();
        let config = EditorConfig {
            default_currency: Currency::Chf,
            ..EditorConfig::default()
        };

        let form =
            AccountEditForm::initialize(&store, &tasks, config.clone(), None, Some("XYZ")).unwrap();
        assert_eq!(form.selected_currency(), Currency::Chf);

        let form = AccountEditForm::initialize(&store, &tasks, config, None, Some("eur")).unwrap();
        assert_eq!(form.selected_currency(), Currency::Eur);
    }

    #[test]
    fn test_currency_hint_ignored_for_existing_account() {
        let store = MemoryStore::with(stored(3, 0));
        let tasks = RecordingSubmitter::default();
        let form = AccountEditForm::initialize(
            &store,
            &tasks,
            EditorConfig::default(),
            Some(AccountId::new(3)),
            Some("EUR"),
        )
        .unwrap();
        assert_eq!(form.selected_currency(), Currency::Usd);
        assert_eq!(form.title(), "Edit account");
    }

    #[test]
    fn test_negative_balance_round_trip() {
        let store = MemoryStore::with(stored(5, -5000));
        let tasks = RecordingSubmitter::default();
        let mut form = existing_form(&store, &tasks, 5);

        assert_eq!(form.amount_text(), "50.00");
        assert_eq!(form.sign(), AmountSign::Expense);

        assert_eq!(form.validate_and_save().unwrap(), AccountId::new(5));
        let saved = store.load(AccountId::new(5)).unwrap().unwrap();
        assert_eq!(saved.opening_balance, Money::from_minor(-5000));
    }

    #[test]
    fn test_zero_balance_defaults_to_income() {
        let store = MemoryStore::default();
        let tasks = RecordingSubmitter::default();
        let form = new_form(&store, &tasks);
        assert_eq!(form.amount_text(), "0.00");
        assert_eq!(form.sign(), AmountSign::Income);
    }

    #[test]
    fn test_missing_account_fails_to_load() {
        let store = MemoryStore::default();
        let tasks = RecordingSubmitter::default();
        let result = AccountEditForm::initialize(
            &store,
            &tasks,
            EditorConfig::default(),
            Some(AccountId::new(99)),
            None,
        );
        assert!(matches!(result, Err(EditorError::LoadFailure(id)) if id == AccountId::new(99)));
    }

    #[test]
    fn test_cancel_clean_form_discards_immediately() {
        let store = MemoryStore::default();
        let tasks = RecordingSubmitter::default();
        let mut form = new_form(&store, &tasks);

        assert!(matches!(
            form.handle_event(EditorEvent::Menu(MenuCommand::Cancel)),
            EditorOutcome::Discarded
        ));
        assert!(matches!(
            form.set_text(TextField::Label, "late"),
            Err(EditorError::SessionClosed(SessionState::Discarded))
        ));
    }

    #[test]
    fn test_cancel_dirty_form_needs_confirmation() {
        let store = MemoryStore::with(stored(1, 0));
        let tasks = RecordingSubmitter::default();
        let mut form = existing_form(&store, &tasks, 1);
        form.set_text(TextField::Description, "joint").unwrap();

        match form.handle_event(EditorEvent::Menu(MenuCommand::Cancel)) {
            EditorOutcome::ConfirmDiscard { message } => {
                assert_eq!(message, "Discard unsaved changes?")
            }
            other => panic!("unexpected outcome: {:?}", other),
        }
        assert!(matches!(
            form.handle_event(EditorEvent::DiscardConfirmed(false)),
            EditorOutcome::Ignored
        ));
        assert_eq!(form.state(), SessionState::Dirty);

        assert!(form.handle_event(EditorEvent::DiscardConfirmed(true)).is_final());
        assert_eq!(form.state(), SessionState::Discarded);
        assert_eq!(store.saves.get(), 0);
    }

    #[test]
    fn test_discard_message_for_new_account() {
        let store = MemoryStore::default();
        let tasks = RecordingSubmitter::default();
        let mut form = new_form(&store, &tasks);
        form.set_text(TextField::Label, "x").unwrap();
        assert_eq!(form.request_cancel().unwrap(), Some("Discard the new account?"));
    }

    #[test]
    fn test_storage_failure_keeps_session_open() {
        let store = MemoryStore::default();
        store.failing.set(true);
        let tasks = RecordingSubmitter::default();
        let mut form = new_form(&store, &tasks);
        form.set_text(TextField::Label, "Wallet").unwrap();

        assert!(matches!(form.validate_and_save(), Err(EditorError::Storage(_))));
        assert_eq!(form.state(), SessionState::Dirty);
        assert!(form.draft().is_dirty());

        store.failing.set(false);
        assert!(form.validate_and_save().is_ok());
        assert_eq!(store.saves.get(), 2);
    }

    #[test]
    fn test_saved_session_rejects_changes() {
        let store = MemoryStore::default();
        let tasks = RecordingSubmitter::default();
        let mut form = new_form(&store, &tasks);
        form.set_text(TextField::Label, "Wallet").unwrap();
        form.validate_and_save().unwrap();

        let outcome = form.handle_event(EditorEvent::Menu(MenuCommand::ToggleExcludeFromTotals));
        assert!(matches!(
            outcome,
            EditorOutcome::Rejected(EditorError::SessionClosed(SessionState::Saved))
        ));
        assert!(tasks.tasks().is_empty());
    }

    #[test]
    fn test_menu_state_for_closed_session_is_reported() {
        let temp = TempDir::new().unwrap();
        let diagnostics = Diagnostics::new(temp.path().join("diagnostics.log"));
        let config = EditorConfig {
            diagnostics: diagnostics.clone(),
            ..EditorConfig::default()
        };
        let store = MemoryStore::default();
        let tasks = RecordingSubmitter::default();
        let mut form = AccountEditForm::initialize(&store, &tasks, config, None, None).unwrap();

        let menu = form.menu_state();
        assert!(menu.enabled);
        assert!(!menu.exclude_from_totals_checked);
        assert!(diagnostics.read_all().unwrap().is_empty());

        form.request_cancel().unwrap();
        let menu = form.menu_state();
        assert!(!menu.enabled);

        let reports = diagnostics.read_all().unwrap();
        assert_eq!(reports.len(), 1);
        assert_eq!(reports[0].context, "menu");
        assert!(reports[0].message.contains("discarded"));
    }

    #[test]
    fn test_event_flow_through_dialogs() {
        let store = MemoryStore::default();
        let tasks = RecordingSubmitter::default();
        let mut form = new_form(&store, &tasks);

        match form.handle_event(EditorEvent::Menu(MenuCommand::SetSortKey)) {
            EditorOutcome::OpenSortKeyDialog(request) => {
                assert_eq!(request.title, "Set sort key");
                assert_eq!(request.current, "0");
                assert_eq!(request.max_len, 9);
            }
            other => panic!("unexpected outcome: {:?}", other),
        }
        assert!(matches!(
            form.handle_event(EditorEvent::SortKeyEntered(DialogResult::Submitted("12".into()))),
            EditorOutcome::Updated
        ));
        assert!(matches!(
            form.handle_event(EditorEvent::SortKeyEntered(DialogResult::Submitted("x".into()))),
            EditorOutcome::Rejected(EditorError::SortKeyParse(_))
        ));

        assert!(matches!(
            form.handle_event(EditorEvent::Menu(MenuCommand::PickColor)),
            EditorOutcome::OpenColorPicker { current } if current == DEFAULT_ACCOUNT_COLOR
        ));

        form.handle_event(EditorEvent::FieldChanged {
            field: TextField::Label,
            value: "Wallet".into(),
        });
        match form.handle_event(EditorEvent::Menu(MenuCommand::Save)) {
            EditorOutcome::Saved(id) => {
                assert_eq!(store.load(id).unwrap().unwrap().sort_key, 12);
            }
            other => panic!("unexpected outcome: {:?}", other),
        }
    }

    #[test]
    fn test_rebuild_palette_keeps_selection() {
        let store = MemoryStore::default();
        let tasks = RecordingSubmitter::default();
        let mut form = new_form(&store, &tasks);
        let custom = Rgb::new(0xabcdef);
        form.apply_color_pick(Some(custom)).unwrap();

        form.rebuild_palette();
        let selected = form.palette().selected().unwrap();
        assert_eq!(form.palette().get(selected), Some(custom));
    }
}
