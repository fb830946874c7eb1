// GET handlers: dashboard, stylesheet, refresh script

use axum::{
    extract::{Query, State},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use maud::Markup;
use thiserror::Error;
use tracing::{error, info, instrument};

use super::AppState;
use crate::dashboard::{DashboardView, assemble};
use crate::filter::FilterSelection;
use crate::parser::{LogError, load_samples};
use crate::views;

#[derive(Debug, Error)]
pub(super) enum DashboardError {
    #[error(transparent)]
    Log(#[from] LogError),
    #[error("dashboard task failed: {0}")]
    Task(#[from] tokio::task::JoinError),
}

impl DashboardError {
    fn user_message(&self) -> &'static str {
        match self {
            DashboardError::Log(LogError::Open { .. }) => "Could not open CSV file",
            DashboardError::Log(LogError::Csv(_)) => "Could not read CSV data",
            DashboardError::Task(_) => "Could not build the dashboard",
        }
    }
}

/// Renders the empty dashboard with the error notice and a 500 status.
impl IntoResponse for DashboardError {
    fn into_response(self) -> Response {
        let view = DashboardView::empty(FilterSelection::default());
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            views::dashboard_page(&view, Some(self.user_message())),
        )
            .into_response()
    }
}

/// GET / — reads the whole log, aggregates it and renders the page.
#[instrument(skip_all, fields(year = ?selection.year, month = ?selection.month, day = ?selection.day))]
pub(super) async fn dashboard_handler(
    State(state): State<AppState>,
    Query(selection): Query<FilterSelection>,
) -> Result<Markup, DashboardError> {
    let view = build_view(&state, selection).await.inspect_err(|e| {
        error!(error = %e, path = %state.config.log.path.display(), "could not load speedtest log");
    })?;
    info!(
        samples = view.total_samples,
        results = view.results.len(),
        "rendered dashboard"
    );
    Ok(views::dashboard_page(&view, None))
}

async fn build_view(
    state: &AppState,
    selection: FilterSelection,
) -> Result<DashboardView, DashboardError> {
    let path = state.config.log.path.clone();
    let view = tokio::task::spawn_blocking(move || {
        load_samples(&path).map(|samples| assemble(&samples, selection))
    })
    .await??;
    Ok(view)
}

/// GET /style.css
pub(super) async fn style_handler() -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "text/css; charset=utf-8")],
        views::STYLE_SHEET,
    )
}

/// GET /js/settimedrefresh.js — reloads the page after the next hourly test.
pub(super) async fn refresh_script_handler() -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "text/javascript; charset=utf-8")],
        views::REFRESH_SCRIPT,
    )
}
