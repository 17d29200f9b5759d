//! The cosmetic log in page.
//!
//! There is no session model: the ledger belongs to whoever can reach
//! the server. The page exists as the landing spot for the logout
//! affordance and simply links back to the expenses page.

use axum::{
    extract::Query,
    response::{IntoResponse, Response},
};
use maud::html;
use serde::Deserialize;

use crate::{
    alert::Alert,
    endpoints,
    html::{BUTTON_PRIMARY_STYLE, base, form_card},
};

/// The query parameters accepted by the log in page.
#[derive(Debug, Deserialize)]
pub struct LogInQuery {
    /// Set by the logout redirect so the page can confirm the "log out".
    #[serde(default)]
    pub logged_out: bool,
}

/// Display the log in page.
pub async fn get_log_in_page(Query(query): Query<LogInQuery>) -> Response {
    let card_body = html! {
        @if query.logged_out {
            (Alert::success("Logged out successfully.", "").into_markup())
        }

        p class="text-sm font-light text-gray-500 dark:text-gray-400"
        {
            "Spendlog has no accounts. Your expenses live in this app's local \
            storage and nowhere else."
        }

        a
            href=(endpoints::ROOT)
            class=(BUTTON_PRIMARY_STYLE)
        {
            "Continue to your expenses"
        }
    };

    let content = form_card("Welcome back", &card_body);
    base("Log In", &[], &content).into_response()
}

#[cfg(test)]
mod log_in_tests {
    use axum::{body::to_bytes, extract::Query};
    use scraper::{Html, Selector};

    use crate::endpoints;

    use super::{LogInQuery, get_log_in_page};

    async fn get_page_html(logged_out: bool) -> Html {
        let response = get_log_in_page(Query(LogInQuery { logged_out })).await;
        let body = to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("Could not get response body");

        Html::parse_document(&String::from_utf8_lossy(&body))
    }

    #[tokio::test]
    async fn page_links_back_to_expenses() {
        let html = get_page_html(false).await;

        let link = html
            .select(&Selector::parse("a").unwrap())
            .find(|link| link.value().attr("href") == Some(endpoints::ROOT))
            .expect("No link back to the expenses page");

        assert!(
            link.text().collect::<String>().contains("Continue"),
            "want the continue button to link to the expenses page"
        );
    }

    #[tokio::test]
    async fn logged_out_query_shows_confirmation() {
        let html = get_page_html(true).await;

        let alert = html
            .select(&Selector::parse("div[role='alert']").unwrap())
            .next()
            .expect("No logged-out alert found");

        assert!(
            alert
                .text()
                .collect::<String>()
                .contains("Logged out successfully.")
        );
    }

    #[tokio::test]
    async fn no_alert_without_logged_out_query() {
        let html = get_page_html(false).await;

        assert!(
            html.select(&Selector::parse("div[role='alert']").unwrap())
                .next()
                .is_none()
        );
    }
}
