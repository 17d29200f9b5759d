use axum::{http::StatusCode, response::Response};

use crate::html::{error_view, render};

pub struct InternalServerErrorPage<'a> {
    pub description: &'a str,
    pub fix: &'a str,
}

impl Default for InternalServerErrorPage<'_> {
    fn default() -> Self {
        Self {
            description: "Sorry, something went wrong.",
            fix: "Try again later or check the server logs",
        }
    }
}

pub async fn get_internal_server_error_page() -> Response {
    render_internal_server_error(Default::default())
}

pub fn render_internal_server_error(page: InternalServerErrorPage) -> Response {
    render(
        StatusCode::INTERNAL_SERVER_ERROR,
        error_view("Internal Server Error", "500", page.description, page.fix),
    )
}

#[cfg(test)]
mod internal_server_error_tests {
    use axum::http::StatusCode;

    use super::get_internal_server_error_page;

    #[tokio::test]
    async fn error_page_has_500_status() {
        let response = get_internal_server_error_page().await;

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
