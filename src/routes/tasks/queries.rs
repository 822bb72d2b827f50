use sqlx::{PgPool, Result};

use super::model::Task;

/// Ownership gate for the nested task routes: the parent project must exist
/// and belong to the caller.
pub async fn project_owned_by(pool: &PgPool, project_id: i64, user_id: i64) -> Result<bool> {
    sqlx::query_scalar::<_, bool>(
        "SELECT EXISTS(SELECT 1 FROM projects WHERE id = $1 AND user_id = $2)",
    )
    .bind(project_id)
    .bind(user_id)
    .fetch_one(pool)
    .await
}

pub async fn list_tasks(pool: &PgPool, project_id: i64) -> Result<Vec<Task>> {
    sqlx::query_as::<_, Task>(
        r#"
        SELECT id, title, is_completed, project_id
        FROM tasks
        WHERE project_id = $1
        ORDER BY id
        "#,
    )
    .bind(project_id)
    .fetch_all(pool)
    .await
}

pub async fn create_task(pool: &PgPool, project_id: i64, title: &str) -> Result<Task> {
    sqlx::query_as::<_, Task>(
        r#"
        INSERT INTO tasks (title, project_id)
        VALUES ($1, $2)
        RETURNING id, title, is_completed, project_id
        "#,
    )
    .bind(title)
    .bind(project_id)
    .fetch_one(pool)
    .await
}

/// Flip completion on a task reachable through a project the caller owns.
/// Returns the rows touched; 0 means absent or owned by someone else.
pub async fn toggle_task(pool: &PgPool, user_id: i64, id: i64) -> Result<u64> {
    let result = sqlx::query(
        r#"
        UPDATE tasks t
        SET is_completed = NOT t.is_completed
        FROM projects p
        WHERE t.id = $1 AND p.id = t.project_id AND p.user_id = $2
        "#,
    )
    .bind(id)
    .bind(user_id)
    .execute(pool)
    .await?;

    Ok(result.rows_affected())
}

pub async fn delete_task(pool: &PgPool, user_id: i64, id: i64) -> Result<u64> {
    let result = sqlx::query(
        r#"
        DELETE FROM tasks t
        USING projects p
        WHERE t.id = $1 AND p.id = t.project_id AND p.user_id = $2
        "#,
    )
    .bind(id)
    .bind(user_id)
    .execute(pool)
    .await?;

    Ok(result.rows_affected())
}
