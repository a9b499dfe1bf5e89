use axum::{
    extract::{Multipart, Path, Query, State},
    http::{HeaderMap, StatusCode},
    response::Html,
    Json,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::resume::Resume;
use crate::models::user::CurrentUser;
use crate::render::export_document;
use crate::state::AppState;
use crate::storage::images::upload_image;
use crate::storage::resumes::ResumeSummary;
use crate::storage::users::get_current_user;

#[derive(Deserialize)]
pub struct UserIdQuery {
    pub user_id: Uuid,
}

/// GET /api/v1/resumes
pub async fn handle_list_resumes(
    State(state): State<AppState>,
    Query(params): Query<UserIdQuery>,
) -> Result<Json<Vec<ResumeSummary>>, AppError> {
    let summaries = state.store.list(params.user_id).await?;
    Ok(Json(summaries))
}

/// POST /api/v1/resumes
/// Insert when the document still carries a placeholder id, update otherwise.
pub async fn handle_save_resume(
    State(state): State<AppState>,
    Json(resume): Json<Resume>,
) -> Result<Json<Resume>, AppError> {
    let saved = state.store.save(&resume).await?;
    Ok(Json(saved))
}

/// GET /api/v1/resumes/:id
pub async fn handle_get_resume(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Resume>, AppError> {
    let resume = state
        .store
        .get(&id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Resume {id} not found")))?;
    Ok(Json(resume))
}

/// DELETE /api/v1/resumes/:id
pub async fn handle_delete_resume(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, AppError> {
    if state.store.delete(&id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::NotFound(format!("Resume {id} not found")))
    }
}

/// POST /api/v1/resumes/:id/duplicate
pub async fn handle_duplicate_resume(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Resume>, AppError> {
    let original = state
        .store
        .get(&id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Resume {id} not found")))?;
    let saved = state.store.save(&original.duplicate()).await?;
    Ok(Json(saved))
}

/// GET /api/v1/resumes/:id/export
/// Standalone printable HTML for the print/PDF pipeline.
pub async fn handle_export_resume(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Html<String>, AppError> {
    let resume = state
        .store
        .get(&id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Resume {id} not found")))?;
    Ok(Html(export_document(&resume)))
}

#[derive(Serialize)]
pub struct UploadResponse {
    pub url: String,
}

/// POST /api/v1/images
/// Multipart upload of a profile photo; returns the public URL. The caller
/// assigns it to `personalInfo.photoUrl` — the document is not touched here.
pub async fn handle_upload_image(
    State(state): State<AppState>,
    Query(params): Query<UserIdQuery>,
    mut multipart: Multipart,
) -> Result<Json<UploadResponse>, AppError> {
    let field = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("Invalid multipart payload: {e}")))?
        .ok_or_else(|| AppError::Validation("No file in upload".to_string()))?;

    let content_type = field
        .content_type()
        .unwrap_or("application/octet-stream")
        .to_string();
    let bytes = field
        .bytes()
        .await
        .map_err(|e| AppError::Validation(format!("Failed to read upload: {e}")))?;

    let url = upload_image(state.images.as_ref(), params.user_id, &content_type, bytes).await?;
    Ok(Json(UploadResponse { url }))
}

/// GET /api/v1/me
/// Identity comes from the session headers the gateway forwards.
pub async fn handle_me(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Json<CurrentUser>, AppError> {
    let user_id = headers
        .get("x-user-id")
        .and_then(|v| v.to_str().ok())
        .and_then(|v| Uuid::parse_str(v).ok())
        .ok_or(AppError::Unauthorized)?;
    let session_name = headers.get("x-user-name").and_then(|v| v.to_str().ok());
    let session_email = headers.get("x-user-email").and_then(|v| v.to_str().ok());

    let user = get_current_user(&state.db, user_id, session_name, session_email).await?;
    Ok(Json(user))
}
