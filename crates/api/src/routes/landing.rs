//! Backend landing page.

use axum::response::Html;

const LANDING_PAGE: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="utf-8">
  <title>BYU 590R Monorepo Backend</title>
</head>
<body>
  <h1>BYU 590R Monorepo Backend</h1>
  <p>The API is running. Try <a href="/api/hello">/api/hello</a> or <a href="/api/health">/api/health</a>.</p>
</body>
</html>
"#;

/// GET / — human-readable page confirming the backend is up.
pub async fn index() -> Html<&'static str> {
    Html(LANDING_PAGE)
}
