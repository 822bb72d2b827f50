pub mod routes;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// MODELS

#[derive(Debug, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub user_id: i64,
    pub created_at: DateTime<Utc>,
}

/// Create payload. Any id, owner or timestamp a client sends is ignored;
/// those columns are stamped server-side.
#[derive(Debug, Deserialize)]
pub struct CreateProjectRequest {
    pub name: Option<String>,
    #[serde(default)]
    pub description: String,
}

/// Update payload. `id` must match the path id; a payload without an id
/// deserializes to 0 and therefore never matches.
#[derive(Debug, Deserialize)]
pub struct UpdateProjectRequest {
    #[serde(default)]
    pub id: i64,
    pub name: Option<String>,
    #[serde(default)]
    pub description: String,
}

// HELPER FUNCTIONS

/// A project name is required and may not be blank.
pub fn validate_project_name(name: Option<String>) -> Result<String, String> {
    match name {
        Some(n) if !n.trim().is_empty() => Ok(n),
        _ => Err("name is required".to_string()),
    }
}
