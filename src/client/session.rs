//! Session Guard
//!
//! Every protected page starts here. The guard asks the backend whether
//! the session cookie is still good, paints the user-display region on
//! success, and bounces unauthenticated visitors to the login page.

use tracing::error;

use crate::client::page::{PageContext, Route};
use crate::client::render;

/// Pages that unauthenticated visitors are allowed to stay on
pub fn is_auth_page(path: &str) -> bool {
    path.contains("login.html") || path.contains("register.html")
}

/// Check the session and return whether the visitor is authenticated.
///
/// On success the user-display fragment is refreshed. When the backend
/// says "not authenticated" and the current page is protected, this
/// redirects to login. A transport failure is logged and treated as
/// unauthenticated without redirecting; no error escapes to the caller.
pub async fn check_auth(ctx: &PageContext) -> bool {
    match ctx.api.check_auth().await {
        Ok(status) if status.authenticated => {
            ctx.surface()
                .set_fragment("userDisplay", &render::user_info_html(&status));
            true
        }
        Ok(_) => {
            if !is_auth_page(&ctx.current_path()) {
                ctx.redirect(Route::Login);
            }
            false
        }
        Err(e) => {
            error!("Auth check failed: {e}");
            false
        }
    }
}
