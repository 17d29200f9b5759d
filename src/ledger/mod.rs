//! The expense ledger: an ordered list of named amounts.
//!
//! This module contains everything related to the ledger itself:
//! - The `Expense` model and `ExpenseName` validation
//! - The in-memory `Ledger` with its add/delete/clear/total operations
//! - Persistence of the ledger to the key-value storage collaborator

mod core;
mod persistence;

pub use self::core::{Expense, ExpenseName, Ledger};
pub use persistence::{LEDGER_KEY, load_ledger, remove_ledger, save_ledger};
