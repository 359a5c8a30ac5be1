//! Axum route handler for the tailoring front door.

use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::auth::gate::AuthUser;
use crate::errors::AppError;
use crate::state::AppState;

/// Missing fields deserialize as empty so the service reports them as invalid input.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TailorRequest {
    pub resume: String,
    pub job_description: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TailorResponse {
    pub tailored_resume: String,
}

/// POST /api/v1/tailor-resume
///
/// Tailors the resume to the job description. Nothing is saved; saving is a
/// separate call to `POST /api/v1/resumes`.
pub async fn handle_tailor_resume(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
    payload: Result<Json<TailorRequest>, JsonRejection>,
) -> Result<Json<TailorResponse>, AppError> {
    let Json(request) = payload?;

    info!("Tailoring resume for user {}", user.user_id);
    let tailored_resume = state
        .tailor
        .tailor(&request.resume, &request.job_description)
        .await?;

    Ok(Json(TailorResponse { tailored_resume }))
}
