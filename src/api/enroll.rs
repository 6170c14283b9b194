use crate::api::{AppState, SubmissionResponse};
use crate::error::Result;
use crate::intake;
use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde_json::Value;
use tracing::info;

/// `POST /api/enroll` — validate a course enrollment form and persist it to
/// the relational store. Storage failures come back as a bare 500; the cause
/// stays in the server log.
pub async fn create_enrollment(
    State(state): State<AppState>,
    Json(payload): Json<Value>,
) -> Result<impl IntoResponse> {
    let enrollment = intake::submit(state.enrollments.as_ref(), payload).await?;

    info!(
        "Enrollment stored with id {} for course {}",
        enrollment.id, enrollment.course_title
    );

    Ok((
        StatusCode::CREATED,
        Json(SubmissionResponse {
            message: "Enrollment successful",
            data: enrollment,
        }),
    ))
}
