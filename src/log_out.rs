//! The logout affordance.
//!
//! There is no session to end, so logging out always "succeeds": the
//! client is redirected to the log in page with a flag that makes the
//! page confirm the log out.

use axum::response::Redirect;

use crate::endpoints;

/// "Log out" and redirect to the log in page.
pub async fn get_log_out() -> Redirect {
    Redirect::to(&format!("{}?logged_out=true", endpoints::LOG_IN_VIEW))
}
