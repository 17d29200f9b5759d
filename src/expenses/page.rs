//! Defines the route handler for the expenses page.

use std::sync::{Arc, Mutex};

use axum::{
    extract::{FromRef, State},
    response::{IntoResponse, Response},
};
use maud::{Markup, html};

use crate::{
    AppState, Error, OperatingMode,
    dates::{current_local_date, format_long_date},
    endpoints,
    html::{PAGE_CONTAINER_STYLE, base, dollar_input_styles},
    ledger::Ledger,
    navigation::NavBar,
};

use super::view::{ExpenseFormValues, backend_expense_form, ledger_section};

/// The state needed for the expenses page.
#[derive(Debug, Clone)]
pub struct ExpensesPageState {
    /// Whether the built-in ledger or an external backend handles the form.
    pub mode: OperatingMode,
    /// The local timezone as a canonical timezone name, e.g. "Pacific/Auckland".
    pub local_timezone: String,
    /// The in-memory ledger.
    pub ledger: Arc<Mutex<Ledger>>,
}

impl FromRef<AppState> for ExpensesPageState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            mode: state.mode,
            local_timezone: state.local_timezone.clone(),
            ledger: state.ledger.clone(),
        }
    }
}

/// Render the expenses page: today's date, the add-expense form, the
/// itemized list and the running total.
pub async fn get_expenses_page(State(state): State<ExpensesPageState>) -> Result<Response, Error> {
    let today = current_local_date(&state.local_timezone)?;

    let main_content = match state.mode {
        OperatingMode::ClientOnly => {
            let ledger = state
                .ledger
                .lock()
                .inspect_err(|error| tracing::error!("could not acquire ledger lock: {error}"))
                .map_err(|_| Error::LedgerLockError)?;

            ledger_section(ledger.records(), ledger.total(), &ExpenseFormValues::default())
        }
        OperatingMode::ServerBacked => backend_expense_form(),
    };

    let content = page_content(&format_long_date(today), &main_content);

    Ok(base("Expenses", &[dollar_input_styles()], &content).into_response())
}

fn page_content(date_heading: &str, main_content: &Markup) -> Markup {
    let nav_bar = NavBar::new(endpoints::ROOT).into_html();

    html! {
        (nav_bar)

        div class=(PAGE_CONTAINER_STYLE)
        {
            h1 class="text-3xl font-bold text-gray-900 dark:text-white" { "Expense Tracker" }

            p id="current-date" class="mb-6 text-gray-500 dark:text-gray-400"
            {
                (date_heading)
            }

            (main_content)
        }
    }
}
