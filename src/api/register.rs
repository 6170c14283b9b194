use crate::api::{AppState, SubmissionResponse};
use crate::error::Result;
use crate::intake;
use crate::schema::Registration;
use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde_json::Value;
use tracing::info;

/// `POST /api/register` — validate a lead-capture form and store it in the
/// process-lifetime registration store.
pub async fn create_registration(
    State(state): State<AppState>,
    Json(payload): Json<Value>,
) -> Result<impl IntoResponse> {
    let registration = intake::submit(state.registrations.as_ref(), payload).await?;

    info!("Registration stored with id {}", registration.id);

    Ok((
        StatusCode::CREATED,
        Json(SubmissionResponse {
            message: "Registration successful",
            data: registration,
        }),
    ))
}

/// `GET /api/registrations` — the full list, insertion order, no paging.
pub async fn list_registrations(State(state): State<AppState>) -> Json<Vec<Registration>> {
    Json(state.registrations.list_all())
}
