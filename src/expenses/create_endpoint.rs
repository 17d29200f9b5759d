//! Defines the endpoint for adding an expense to the ledger.

use std::sync::{Arc, Mutex};

use axum::{
    extract::{FromRef, State},
    response::{IntoResponse, Response},
};
// Must use axum_extra's Form since that parses an empty string as None instead
// of crashing like axum::Form.
use axum_extra::extract::Form;
use rusqlite::Connection;
use serde::{Deserialize, Serialize};

use crate::{
    AppState, Error,
    ledger::{Expense, Ledger, save_ledger},
};

use super::view::{ExpenseFormValues, ledger_section};

/// The state needed to add an expense.
#[derive(Debug, Clone)]
pub struct CreateExpenseState {
    /// The in-memory ledger.
    pub ledger: Arc<Mutex<Ledger>>,
    /// The database connection backing the key-value storage.
    pub db_connection: Arc<Mutex<Connection>>,
}

impl FromRef<AppState> for CreateExpenseState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            ledger: state.ledger.clone(),
            db_connection: state.db_connection.clone(),
        }
    }
}

/// The form data for adding an expense.
///
/// The amount is taken as raw text so that validation failures are
/// handled by the endpoint rather than the form extractor.
#[derive(Debug, Serialize, Deserialize)]
pub struct ExpenseForm {
    /// What the money was spent on.
    pub name: String,
    /// How much was spent, as typed.
    pub amount: String,
}

/// A route handler for adding an expense.
///
/// On success the expense is appended to the ledger, the full ledger is
/// persisted, and the re-rendered ledger section (with a reset form) is
/// returned. Invalid input leaves the ledger and storage untouched and
/// returns the section with the submitted values and an error message.
pub async fn create_expense_endpoint(
    State(state): State<CreateExpenseState>,
    Form(form): Form<ExpenseForm>,
) -> Response {
    let mut ledger = match state.ledger.lock() {
        Ok(ledger) => ledger,
        Err(error) => {
            tracing::error!("could not acquire ledger lock: {error}");
            return Error::LedgerLockError.into_alert_response();
        }
    };

    let expense = match Expense::parse(&form.name, &form.amount) {
        Ok(expense) => expense,
        Err(error) => {
            let error_message = error.to_string();
            return ledger_section(
                ledger.records(),
                ledger.total(),
                &ExpenseFormValues {
                    name: &form.name,
                    amount: &form.amount,
                    error: Some(&error_message),
                },
            )
            .into_response();
        }
    };

    ledger.add(expense);

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

    ledger_section(ledger.records(), ledger.total(), &ExpenseFormValues::default())
        .into_response()
}
