//! Static maintenance page.

use crate::{middleware::maintenance::MAINTENANCE_PATH, state::AppState};
use axum::{response::Html, routing::get, Router};

const MAINTENANCE_PAGE: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="utf-8">
  <meta name="viewport" content="width=device-width, initial-scale=1">
  <title>Footprint is under maintenance</title>
  <style>
    body { font-family: system-ui, sans-serif; display: flex; min-height: 100vh;
           align-items: center; justify-content: center; margin: 0; background: #0b0d12; color: #e6e8ee; }
    main { text-align: center; max-width: 32rem; padding: 2rem; }
    h1 { font-size: 1.75rem; margin-bottom: 0.75rem; }
    p { color: #9aa3b5; line-height: 1.5; }
  </style>
</head>
<body>
  <main>
    <h1>We'll be right back</h1>
    <p>Footprint is undergoing scheduled maintenance. Please check back shortly.</p>
    <p>系统维护中，请稍后再试。</p>
  </main>
</body>
</html>
"#;

/// Maintenance page route
pub fn routes() -> Router<AppState> {
    Router::new().route(MAINTENANCE_PATH, get(maintenance_page))
}

async fn maintenance_page() -> Html<&'static str> {
    Html(MAINTENANCE_PAGE)
}
