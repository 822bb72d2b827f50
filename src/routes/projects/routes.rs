// src/routes/projects/routes.rs
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::error::ApiError;
use crate::routes::middleware_auth::CurrentUser;
use crate::state::AppState;
use super::{validate_project_name, CreateProjectRequest, Project, UpdateProjectRequest};

// HANDLERS

/// List all projects owned by the caller
pub async fn list(
    State(state): State<AppState>,
    CurrentUser(user_id): CurrentUser,
) -> Result<impl IntoResponse, ApiError> {
    let projects = sqlx::query_as::<_, Project>(
        r#"
        SELECT id, name, description, user_id, created_at
        FROM projects
        WHERE user_id = $1
        ORDER BY created_at DESC
        "#,
    )
    .bind(user_id)
    .fetch_all(&state.db)
    .await?;

    Ok(Json(projects))
}

/// Create a new project owned by the caller
pub async fn create(
    State(state): State<AppState>,
    CurrentUser(user_id): CurrentUser,
    Json(payload): Json<CreateProjectRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let name = validate_project_name(payload.name).map_err(ApiError::Validation)?;

    // Owner and creation time are stamped here, never taken from the payload.
    let project = sqlx::query_as::<_, Project>(
        r#"
        INSERT INTO projects (name, description, user_id)
        VALUES ($1, $2, $3)
        RETURNING id, name, description, user_id, created_at
        "#,
    )
    .bind(&name)
    .bind(&payload.description)
    .bind(user_id)
    .fetch_one(&state.db)
    .await?;

    Ok((StatusCode::CREATED, Json(project)))
}

/// Update a project's name and description. Owner and creation time are
/// immutable.
pub async fn update(
    State(state): State<AppState>,
    CurrentUser(user_id): CurrentUser,
    Path(project_id): Path<i64>,
    Json(payload): Json<UpdateProjectRequest>,
) -> Result<impl IntoResponse, ApiError> {
    if payload.id != project_id {
        return Err(ApiError::Validation(
            "path id and payload id do not match".to_string(),
        ));
    }

    let name = validate_project_name(payload.name).map_err(ApiError::Validation)?;

    let result = sqlx::query(
        r#"
        UPDATE projects
        SET name = $2, description = $3
        WHERE id = $1 AND user_id = $4
        "#,
    )
    .bind(project_id)
    .bind(&name)
    .bind(&payload.description)
    .bind(user_id)
    .execute(&state.db)
    .await?;

    if result.rows_affected() == 0 {
        return Err(ApiError::NotFound("Project not found".to_string()));
    }

    Ok(StatusCode::NO_CONTENT)
}

/// Delete a project (tasks go with it via the foreign key)
pub async fn delete(
    State(state): State<AppState>,
    CurrentUser(user_id): CurrentUser,
    Path(project_id): Path<i64>,
) -> Result<impl IntoResponse, ApiError> {
    let result = sqlx::query(
        r#"
        DELETE FROM projects
        WHERE id = $1 AND user_id = $2
        "#,
    )
    .bind(project_id)
    .bind(user_id)
    .execute(&state.db)
    .await?;

    if result.rows_affected() == 0 {
        return Err(ApiError::NotFound("Project not found".to_string()));
    }

    Ok(StatusCode::NO_CONTENT)
}
