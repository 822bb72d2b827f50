use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::error::ApiError;
use crate::routes::middleware_auth::CurrentUser;
use crate::state::AppState;
use super::dto::{validate_title, CreateTaskRequest};
use super::queries;

/// List the tasks of a project the caller owns
pub async fn list(
    State(state): State<AppState>,
    CurrentUser(user_id): CurrentUser,
    Path(project_id): Path<i64>,
) -> Result<impl IntoResponse, ApiError> {
    if !queries::project_owned_by(&state.db, project_id, user_id).await? {
        return Err(ApiError::NotFound(
            "Project not found or access denied".to_string(),
        ));
    }

    let tasks = queries::list_tasks(&state.db, project_id).await?;
    Ok(Json(tasks))
}

/// Create a task under a project the caller owns. The task's project comes
/// from the path, not the payload.
pub async fn create(
    State(state): State<AppState>,
    CurrentUser(user_id): CurrentUser,
    Path(project_id): Path<i64>,
    Json(body): Json<CreateTaskRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let title = validate_title(body.title).map_err(ApiError::Validation)?;

    if !queries::project_owned_by(&state.db, project_id, user_id).await? {
        return Err(ApiError::NotFound(
            "Project not found or access denied".to_string(),
        ));
    }

    let task = queries::create_task(&state.db, project_id, &title).await?;
    Ok((StatusCode::OK, Json(task)))
}

/// Flip a task's completion flag
pub async fn toggle_complete(
    State(state): State<AppState>,
    CurrentUser(user_id): CurrentUser,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, ApiError> {
    if queries::toggle_task(&state.db, user_id, id).await? == 0 {
        return Err(ApiError::NotFound("Task not found".to_string()));
    }

    Ok(StatusCode::NO_CONTENT)
}

/// Delete a task
pub async fn delete(
    State(state): State<AppState>,
    CurrentUser(user_id): CurrentUser,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, ApiError> {
    if queries::delete_task(&state.db, user_id, id).await? == 0 {
        return Err(ApiError::NotFound("Task not found".to_string()));
    }

    Ok(StatusCode::NO_CONTENT)
}
