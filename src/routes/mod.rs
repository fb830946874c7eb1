// HTTP routes: dashboard page and its two static assets

mod http;

use axum::{Router, routing::get};
use tower_http::trace::TraceLayer;

use crate::config::AppConfig;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) config: AppConfig,
}

pub fn app(config: AppConfig) -> Router {
    let state = AppState { config };
    Router::new()
        .route("/", get(http::dashboard_handler)) // GET /?year=&month=&day=
        .route("/style.css", get(http::style_handler)) // GET /style.css
        .route("/js/settimedrefresh.js", get(http::refresh_script_handler)) // GET /js/settimedrefresh.js
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
