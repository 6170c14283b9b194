mod enroll;
mod health;
mod register;

pub use enroll::create_enrollment;
pub use health::health_check;
pub use register::{create_registration, list_registrations};

use crate::schema::{Enrollment, EnrollmentForm};
use crate::store::{IntakeStore, RegistrationStore};
use axum::{
    routing::{get, post},
    Router,
};
use serde::Serialize;
use std::sync::Arc;
use std::time::Instant;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

/// Shared handler state, constructed once in `main` and injected into the
/// router. Tests build their own with a fresh in-memory backend per case.
#[derive(Clone)]
pub struct AppState {
    pub registrations: Arc<RegistrationStore>,
    pub enrollments: Arc<dyn IntakeStore<Form = EnrollmentForm, Record = Enrollment>>,
    pub started_at: Instant,
}

#[derive(Serialize)]
pub(crate) struct SubmissionResponse<T> {
    pub message: &'static str,
    pub data: T,
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/api/register", post(create_registration))
        .route("/api/registrations", get(list_registrations))
        .route("/api/enroll", post(create_enrollment))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
