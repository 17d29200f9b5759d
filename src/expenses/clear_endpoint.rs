//! Defines the endpoint for clearing the whole ledger.

use std::sync::{Arc, Mutex};

use axum::{
    http::StatusCode,
    extract::{FromRef, State},
    response::{IntoResponse, Response},
};
use axum_htmx::HxRedirect;
use rusqlite::Connection;

use crate::{
    AppState, Error, endpoints,
    ledger::{Ledger, remove_ledger},
};

/// The state needed to clear the ledger.
#[derive(Debug, Clone)]
pub struct ClearExpensesState {
    /// The in-memory ledger.
    pub ledger: Arc<Mutex<Ledger>>,
    /// The database connection backing the key-value storage.
    pub db_connection: Arc<Mutex<Connection>>,
}

impl FromRef<AppState> for ClearExpensesState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            ledger: state.ledger.clone(),
            db_connection: state.db_connection.clone(),
        }
    }
}

/// A route handler for clearing all expenses.
///
/// The clear button asks the user to confirm before the request is
/// issued, so a request reaching this handler IS the confirmation.
/// The ledger is emptied and its storage key removed entirely (not
/// replaced with an empty list), then the client is redirected back to
/// the expenses page for a full re-render.
pub async fn clear_expenses_endpoint(State(state): State<ClearExpensesState>) -> Response {
    let mut ledger = match state.ledger.lock() {
        Ok(ledger) => ledger,
        Err(error) => {
            tracing::error!("could not acquire ledger lock: {error}");
            return Error::LedgerLockError.into_alert_response();
        }
    };

    ledger.clear();

    let connection = match state.db_connection.lock() {
        Ok(connection) => connection,
        Err(error) => {
            tracing::error!("could not acquire database lock: {error}");
            return Error::DatabaseLockError.into_alert_response();
        }
    };

    if let Err(error) = remove_ledger(&connection) {
        tracing::error!("Could not remove the stored ledger: {error}");
        return error.into_alert_response();
    }

    (
        HxRedirect(endpoints::ROOT.to_owned()),
        StatusCode::SEE_OTHER,
    )
        .into_response()
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use axum::extract::State;
    use axum_htmx::HX_REDIRECT;
    use rusqlite::Connection;

    use crate::{
        db::initialize,
        ledger::{Expense, LEDGER_KEY, Ledger, save_ledger},
        storage,
    };

    use super::{ClearExpensesState, clear_expenses_endpoint};

    fn get_test_state() -> ClearExpensesState {
        let conn = Connection::open_in_memory().unwrap();
        initialize(&conn).unwrap();
        let ledger = Ledger::from_records(vec![
            Expense::parse("Coffee", "3.5").unwrap(),
            Expense::parse("Rent", "1200").unwrap(),
        ]);
        save_ledger(&ledger, &conn).unwrap();

        ClearExpensesState {
            ledger: Arc::new(Mutex::new(ledger)),
            db_connection: Arc::new(Mutex::new(conn)),
        }
    }

    #[tokio::test]
    async fn clear_empties_ledger_and_removes_storage_key() {
        let state = get_test_state();

        clear_expenses_endpoint(State(state.clone())).await;

        let ledger = state.ledger.lock().unwrap();
        assert!(ledger.is_empty());

        let connection = state.db_connection.lock().unwrap();
        assert_eq!(
            storage::get(LEDGER_KEY, &connection).unwrap(),
            None,
            "want the storage key removed, not set to an empty list"
        );
    }

    #[tokio::test]
    async fn clear_redirects_back_to_the_expenses_page() {
        let state = get_test_state();

        let response = clear_expenses_endpoint(State(state)).await;

        let location = response
            .headers()
            .get(HX_REDIRECT)
            .expect("expected response to have the header hx-redirect");
        assert_eq!(location, "/");
    }

    #[tokio::test]
    async fn clearing_an_empty_ledger_is_fine() {
        let state = get_test_state();

        clear_expenses_endpoint(State(state.clone())).await;
        let response = clear_expenses_endpoint(State(state.clone())).await;

        assert!(response.headers().get(HX_REDIRECT).is_some());
        assert!(state.ledger.lock().unwrap().is_empty());
    }
}
