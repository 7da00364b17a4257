//! Service layer for the account editor
//!
//! The service layer sits on top of the storage layer, adding validation
//! and audit logging to every account write.

pub mod account;

pub use account::AccountService;
