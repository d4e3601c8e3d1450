//! Placeholder landing page

use axum::response::Html;

const HOME_PAGE: &str = "<!DOCTYPE html>\n<html>\n<head><title>Gupshup Relay</title></head>\n<body>\n<h1>Gupshup Relay</h1>\n<p>Webhook endpoint: <code>POST /callback</code></p>\n<p>Send endpoint: <code>POST /msg</code></p>\n</body>\n</html>\n";

/// Static HTML for `GET /`
pub async fn index() -> Html<&'static str> {
    Html(HOME_PAGE)
}
