//! Axum route handlers for saved resumes.

use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    http::{
        header::{CONTENT_DISPOSITION, CONTENT_TYPE},
        StatusCode,
    },
    response::IntoResponse,
    Json,
};
use tracing::info;
use uuid::Uuid;

use crate::auth::gate::AuthUser;
use crate::errors::AppError;
use crate::models::resume::{ResumeDraft, SavedResume};
use crate::state::AppState;

fn validated(payload: Result<Json<ResumeDraft>, JsonRejection>) -> Result<ResumeDraft, AppError> {
    let Json(draft) = payload?;
    let missing = draft.missing_fields();
    if !missing.is_empty() {
        return Err(AppError::Validation(format!(
            "Missing required fields: {}",
            missing.join(", ")
        )));
    }
    Ok(draft)
}

fn not_found(id: Uuid) -> AppError {
    AppError::NotFound(format!("Resume {id} not found"))
}

/// An id that is not a UUID cannot name a saved resume.
fn resume_id(path: Result<Path<Uuid>, PathRejection>) -> Result<Uuid, AppError> {
    path.map(|Path(id)| id).map_err(|_| AppError::NotFound("Resume not found".to_string()))
}

/// GET /api/v1/resumes
///
/// All of the caller's saved resumes, newest first.
pub async fn handle_list_resumes(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
) -> Result<Json<Vec<SavedResume>>, AppError> {
    Ok(Json(state.resumes.list(user.user_id).await?))
}

/// POST /api/v1/resumes
pub async fn handle_create_resume(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
    payload: Result<Json<ResumeDraft>, JsonRejection>,
) -> Result<(StatusCode, Json<SavedResume>), AppError> {
    let draft = validated(payload)?;
    let saved = state.resumes.create(user.user_id, &draft).await?;
    Ok((StatusCode::CREATED, Json(saved)))
}

/// GET /api/v1/resumes/:id
pub async fn handle_get_resume(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
    path: Result<Path<Uuid>, PathRejection>,
) -> Result<Json<SavedResume>, AppError> {
    let id = resume_id(path)?;
    let resume = state
        .resumes
        .get(user.user_id, id)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(resume))
}

/// PUT /api/v1/resumes/:id
///
/// Replaces title, original resume, job description and tailored text.
pub async fn handle_update_resume(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
    path: Result<Path<Uuid>, PathRejection>,
    payload: Result<Json<ResumeDraft>, JsonRejection>,
) -> Result<Json<SavedResume>, AppError> {
    let id = resume_id(path)?;
    let draft = validated(payload)?;
    let updated = state
        .resumes
        .update(user.user_id, id, &draft)
        .await?
        .ok_or_else(|| not_found(id))?;
    info!("Updated resume {id} for user {}", user.user_id);
    Ok(Json(updated))
}

/// DELETE /api/v1/resumes/:id
pub async fn handle_delete_resume(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
    path: Result<Path<Uuid>, PathRejection>,
) -> Result<StatusCode, AppError> {
    let id = resume_id(path)?;
    if state.resumes.delete(user.user_id, id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(not_found(id))
    }
}

/// GET /api/v1/resumes/:id/download
///
/// The tailored text as a plain-text attachment named after the title.
pub async fn handle_download_resume(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
    path: Result<Path<Uuid>, PathRejection>,
) -> Result<impl IntoResponse, AppError> {
    let id = resume_id(path)?;
    let resume = state
        .resumes
        .get(user.user_id, id)
        .await?
        .ok_or_else(|| not_found(id))?;

    let disposition = content_disposition(&download_filename(&resume.title));

    Ok((
        [
            (CONTENT_TYPE, "text/plain; charset=utf-8".to_string()),
            (CONTENT_DISPOSITION, disposition),
        ],
        resume.tailored_resume,
    ))
}

/// `<title>.txt` with every whitespace run replaced by a single `_`.
pub fn download_filename(title: &str) -> String {
    let mut name = String::with_capacity(title.len() + 4);
    let mut in_whitespace = false;
    for c in title.chars() {
        if c.is_whitespace() {
            if !in_whitespace {
                name.push('_');
            }
            in_whitespace = true;
        } else {
            name.push(c);
            in_whitespace = false;
        }
    }
    name.push_str(".txt");
    name
}

/// RFC 6266 attachment header: the exact UTF-8 name in `filename*`, plus an
/// ASCII `filename` fallback for clients that ignore it.
pub fn content_disposition(filename: &str) -> String {
    let fallback: String = filename
        .chars()
        .map(|c| {
            if c.is_ascii_graphic() && c != '"' && c != '\\' {
                c
            } else {
                '_'
            }
        })
        .collect();
    format!(
        "attachment; filename=\"{fallback}\"; filename*=UTF-8''{}",
        urlencoding::encode(filename)
    )
}
