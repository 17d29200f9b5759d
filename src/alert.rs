//! Alert fragments for displaying success and error messages to users.
//!
//! Error alerts are returned by endpoints and routed into the page's
//! alert container by the htmx response-targets extension; success
//! alerts are rendered inline where a page wants them.

use maud::{Markup, html};

/// Alert message types for styling.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AlertType {
    Success,
    Error,
}

/// An alert message with a short headline and optional details.
pub struct Alert<'a> {
    pub alert_type: AlertType,
    pub message: &'a str,
    pub details: &'a str,
}

impl<'a> Alert<'a> {
    /// Create a new success alert.
    pub fn success(message: &'a str, details: &'a str) -> Self {
        Self {
            alert_type: AlertType::Success,
            message,
            details,
        }
    }

    /// Create a new error alert.
    pub fn error(message: &'a str, details: &'a str) -> Self {
        Self {
            alert_type: AlertType::Error,
            message,
            details,
        }
    }

    pub fn into_markup(self) -> Markup {
        let container_style = match self.alert_type {
            AlertType::Success => {
                "p-4 mb-4 text-sm rounded-lg border text-green-800 bg-green-50 \
                border-green-300 dark:bg-gray-800 dark:text-green-400 dark:border-green-800"
            }
            AlertType::Error => {
                "p-4 mb-4 text-sm rounded-lg border text-red-800 bg-red-50 \
                border-red-300 dark:bg-gray-800 dark:text-red-400 dark:border-red-800"
            }
        };

        html! {
            div class=(container_style) role="alert"
            {
                p class="font-medium" { (self.message) }

                @if !self.details.is_empty() {
                    p { (self.details) }
                }
            }
        }
    }
}

#[cfg(test)]
mod alert_tests {
    use scraper::{Html, Selector};

    use super::Alert;

    #[test]
    fn error_alert_renders_message_and_details() {
        let markup = Alert::error("Something went wrong", "Check the logs.").into_markup();

        let html = Html::parse_fragment(&markup.into_string());
        let alert = html
            .select(&Selector::parse("div[role='alert']").unwrap())
            .next()
            .expect("No alert element found");
        let text = alert.text().collect::<String>();

        assert!(text.contains("Something went wrong"));
        assert!(text.contains("Check the logs."));
    }

    #[test]
    fn success_alert_omits_empty_details() {
        let markup = Alert::success("Logged out successfully.", "").into_markup();

        let html = Html::parse_fragment(&markup.into_string());
        let paragraphs = html
            .select(&Selector::parse("p").unwrap())
            .collect::<Vec<_>>();

        assert_eq!(paragraphs.len(), 1, "want only the headline paragraph");
    }
}
