//! Defines the endpoint for deleting the expense at a given position.

use std::sync::{Arc, Mutex};

use axum::{
    extract::{FromRef, Path, State},
    response::{IntoResponse, Response},
};
use rusqlite::Connection;

use crate::{
    AppState, Error,
    ledger::{Ledger, save_ledger},
};

use super::view::{ExpenseFormValues, ledger_section};

/// The state needed to delete an expense.
#[derive(Debug, Clone)]
pub struct DeleteExpenseState {
    /// The in-memory ledger.
    pub ledger: Arc<Mutex<Ledger>>,
    /// The database connection backing the key-value storage.
    pub db_connection: Arc<Mutex<Connection>>,
}

impl FromRef<AppState> for DeleteExpenseState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            ledger: state.ledger.clone(),
            db_connection: state.db_connection.clone(),
        }
    }
}

/// A route handler for deleting the expense at `index`.
///
/// The index refers to the position in the currently rendered list,
/// which always matches the ledger because the list is fully re-rendered
/// after every mutation. An out-of-range index is a no-op; either way
/// the response is the re-rendered ledger section.
pub async fn delete_expense_endpoint(
    State(state): State<DeleteExpenseState>,
    Path(index): Path<usize>,
) -> Response {
    let mut ledger = match state.ledger.lock() {
        Ok(ledger) => ledger,
        Err(error) => {
            tracing::error!("could not acquire ledger lock: {error}");
            return Error::LedgerLockError.into_alert_response();
        }
    };

    if ledger.delete(index).is_some() {
        let connection = match state.db_connection.lock() {
            Ok(connection) => connection,
            Err(error) => {
                tracing::error!("could not acquire database lock: {error}");
                return Error::DatabaseLockError.into_alert_response();
            }
        };

        if let Err(error) = save_ledger(&ledger, &connection) {
            tracing::error!("Could not persist the ledger: {error}");
            return error.into_alert_response();
        }
    } else {
        tracing::debug!("Ignoring delete for out-of-range index {index}");
    }

    ledger_section(ledger.records(), ledger.total(), &ExpenseFormValues::default())
        .into_response()
}
