//! Application router configuration.

use axum::{
    Router,
    routing::{delete, get, post},
};
use tower_http::services::ServeDir;

use crate::{
    AppState, OperatingMode, endpoints,
    expenses::{
        clear_expenses_endpoint, create_expense_endpoint, delete_expense_endpoint,
        get_expenses_page,
    },
    internal_server_error::get_internal_server_error_page,
    log_in::get_log_in_page,
    log_out::get_log_out,
    not_found::get_404_not_found,
};

/// Return a router with all the app's routes.
///
/// In [OperatingMode::ServerBacked] the built-in ledger endpoints are not
/// registered: the expense form posts to the external backend and
/// mutation requests to this server fall through to the 404 handler.
pub fn build_router(state: AppState) -> Router {
    let router = Router::new()
        .route(endpoints::ROOT, get(get_expenses_page))
        .route(endpoints::LOG_IN_VIEW, get(get_log_in_page))
        .route(endpoints::LOG_OUT, get(get_log_out))
        .route(
            endpoints::INTERNAL_ERROR_VIEW,
            get(get_internal_server_error_page),
        );

    let router = match state.mode {
        OperatingMode::ClientOnly => router
            .route(
                endpoints::EXPENSES_API,
                post(create_expense_endpoint).delete(clear_expenses_endpoint),
            )
            .route(endpoints::DELETE_EXPENSE, delete(delete_expense_endpoint)),
        OperatingMode::ServerBacked => router,
    };

    router
        .nest_service(endpoints::STATIC, ServeDir::new("static/"))
        .fallback(get_404_not_found)
        .with_state(state)
}

#[cfg(test)]
mod router_tests {
    use axum::http::StatusCode;
    use axum_test::TestServer;
    use rusqlite::Connection;
    use scraper::{Html, Selector};

    use crate::{AppState, OperatingMode, endpoints, expenses::ExpenseForm};

    use super::build_router;

    fn get_test_server(mode: OperatingMode) -> TestServer {
        let conn = Connection::open_in_memory().unwrap();
        let state = AppState::new(conn, mode, "Etc/UTC").unwrap();

        TestServer::new(build_router(state))
    }

    fn form(name: &str, amount: &str) -> ExpenseForm {
        ExpenseForm {
            name: name.to_owned(),
            amount: amount.to_owned(),
        }
    }

    fn count_expense_rows(page_text: &str) -> usize {
        Html::parse_document(page_text)
            .select(&Selector::parse("tr[data-expense-row='true']").unwrap())
            .count()
    }

    #[tokio::test]
    async fn add_delete_and_clear_via_http() {
        let server = get_test_server(OperatingMode::ClientOnly);

        let page = server.get(endpoints::ROOT).await;
        page.assert_status_ok();
        assert_eq!(count_expense_rows(&page.text()), 0);

        server
            .post(endpoints::EXPENSES_API)
            .form(&form("Coffee", "3.5"))
            .await
            .assert_status_ok();
        server
            .post(endpoints::EXPENSES_API)
            .form(&form("Rent", "1200"))
            .await
            .assert_status_ok();

        let page = server.get(endpoints::ROOT).await;
        assert_eq!(count_expense_rows(&page.text()), 2);
        assert!(page.text().contains("1203.50"));

        server
            .delete("/api/expenses/0")
            .await
            .assert_status_ok();

        let page = server.get(endpoints::ROOT).await;
        assert_eq!(count_expense_rows(&page.text()), 1);
        assert!(page.text().contains("1200.00"));

        let response = server.delete(endpoints::EXPENSES_API).await;
        response.assert_status(StatusCode::SEE_OTHER);

        let page = server.get(endpoints::ROOT).await;
        assert_eq!(count_expense_rows(&page.text()), 0);
    }

    #[tokio::test]
    async fn unknown_route_renders_the_404_page() {
        let server = get_test_server(OperatingMode::ClientOnly);

        let response = server.get("/definitely/not/a/page").await;

        response.assert_status(StatusCode::NOT_FOUND);
        assert!(response.text().contains("404"));
    }

    #[tokio::test]
    async fn log_out_redirects_to_the_log_in_page() {
        let server = get_test_server(OperatingMode::ClientOnly);

        let response = server.get(endpoints::LOG_OUT).await;

        response.assert_status(StatusCode::SEE_OTHER);
        let location = response.header("location");
        assert_eq!(location, "/log_in?logged_out=true");
    }

    #[tokio::test]
    async fn server_backed_mode_registers_no_mutation_routes() {
        let server = get_test_server(OperatingMode::ServerBacked);

        let response = server
            .post(endpoints::EXPENSES_API)
            .form(&form("Coffee", "3.5"))
            .await;
        response.assert_status(StatusCode::NOT_FOUND);

        let response = server.delete("/api/expenses/0").await;
        response.assert_status(StatusCode::NOT_FOUND);

        let page = server.get(endpoints::ROOT).await;
        page.assert_status_ok();
        assert!(page.text().contains("action=\"/add_expense\""));
    }
}
