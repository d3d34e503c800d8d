use crate::AppState;

use axum::{
    extract::State,
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use metrics::counter;

/// Metrics collector for checklist requests
#[derive(Clone)]
pub struct Metrics {
    prefix: &'static str,
}

impl Metrics {
    pub fn new() -> Self {
        Self { prefix: "checklists" }
    }

    /// Record a handled action
    pub fn action(&self, action: &'static str) {
        counter!(format!("{}.actions.total", self.prefix)).increment(1);
        counter!(format!("{}.actions.{}", self.prefix, action)).increment(1);
    }

    /// Record a request refused by authorization
    pub fn denied(&self, action: &'static str) {
        counter!(format!("{}.denied.total", self.prefix)).increment(1);
        counter!(format!("{}.denied.{}", self.prefix, action)).increment(1);
    }

    /// Record a save rejected by validation
    pub fn invalid(&self, action: &'static str) {
        counter!(format!("{}.invalid.{}", self.prefix, action)).increment(1);
    }

    pub fn done_ratio_recalculated(&self) {
        counter!(format!("{}.done_ratio.recalculated", self.prefix)).increment(1);
    }
}

impl Default for Metrics {
    fn default() -> Self {
        Self::new()
    }
}

/// GET /metrics - Prometheus text exposition
pub async fn render(State(state): State<AppState>) -> Response {
    match state.prometheus {
        Some(ref handle) => (
            StatusCode::OK,
            [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
            handle.render(),
        )
            .into_response(),
        None => (StatusCode::NOT_FOUND, "Metrics recorder not installed").into_response(),
    }
}
