use crate::api::AppState;
use axum::{extract::State, Json};
use serde::Serialize;

#[derive(Serialize)]
pub struct HealthResponse {
    status: String,
    database_connected: bool,
    registrations: usize,
    uptime_seconds: u64,
}

pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let database_connected = state.enrollments.healthy().await;

    Json(HealthResponse {
        status: if database_connected {
            "healthy".to_string()
        } else {
            "degraded".to_string()
        },
        database_connected,
        registrations: state.registrations.len(),
        uptime_seconds: state.started_at.elapsed().as_secs(),
    })
}
