//! HTTP client for the service, one method per endpoint. This is what the
//! frontend goes through; every call carries the caller's bearer token.

use serde::Serialize;
use thiserror::Error;

use crate::routes::projects::Project;
use crate::routes::tasks::model::Task;

#[derive(Debug, Error)]
pub enum ClientError {
    #[error(transparent)]
    Transport(#[from] reqwest::Error),

    #[error("{message}")]
    Api {
        status: reqwest::StatusCode,
        message: String,
    },
}

#[derive(Debug, Serialize)]
pub struct NewProject {
    pub name: String,
    pub description: String,
}

#[derive(Debug, Serialize)]
pub struct ProjectUpdate {
    pub id: i64,
    pub name: String,
    pub description: String,
}

#[derive(Debug, Serialize)]
pub struct NewTask {
    pub title: String,
}

pub struct ProjectServiceClient {
    http: reqwest::Client,
    base_url: String,
    token: String,
}

impl ProjectServiceClient {
    pub fn new(base_url: impl Into<String>, token: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            token: token.into(),
        }
    }

    pub async fn get_all_projects(&self) -> Result<Vec<Project>, ClientError> {
        let response = self
            .http
            .get(format!("{}/projects", self.base_url))
            .bearer_auth(&self.token)
            .send()
            .await?;

        Ok(check(response).await?.json().await?)
    }

    pub async fn create_project(&self, project: &NewProject) -> Result<Project, ClientError> {
        let response = self
            .http
            .post(format!("{}/projects", self.base_url))
            .bearer_auth(&self.token)
            .json(project)
            .send()
            .await?;

        Ok(check(response).await?.json().await?)
    }

    pub async fn update_project(&self, id: i64, project: &ProjectUpdate) -> Result<(), ClientError> {
        let response = self
            .http
            .put(format!("{}/projects/{id}", self.base_url))
            .bearer_auth(&self.token)
            .json(project)
            .send()
            .await?;

        check(response).await?;
        Ok(())
    }

    pub async fn delete_project(&self, id: i64) -> Result<(), ClientError> {
        let response = self
            .http
            .delete(format!("{}/projects/{id}", self.base_url))
            .bearer_auth(&self.token)
            .send()
            .await?;

        check(response).await?;
        Ok(())
    }

    pub async fn get_tasks(&self, project_id: i64) -> Result<Vec<Task>, ClientError> {
        let response = self
            .http
            .get(format!("{}/projects/{project_id}/tasks", self.base_url))
            .bearer_auth(&self.token)
            .send()
            .await?;

        Ok(check(response).await?.json().await?)
    }

    pub async fn create_task(&self, project_id: i64, task: &NewTask) -> Result<Task, ClientError> {
        let response = self
            .http
            .post(format!("{}/projects/{project_id}/tasks", self.base_url))
            .bearer_auth(&self.token)
            .json(task)
            .send()
            .await?;

        Ok(check(response).await?.json().await?)
    }

    pub async fn toggle_task_completion(&self, task_id: i64) -> Result<(), ClientError> {
        let response = self
            .http
            .put(format!("{}/tasks/{task_id}/complete", self.base_url))
            .bearer_auth(&self.token)
            .send()
            .await?;

        check(response).await?;
        Ok(())
    }

    pub async fn delete_task(&self, task_id: i64) -> Result<(), ClientError> {
        let response = self
            .http
            .delete(format!("{}/tasks/{task_id}", self.base_url))
            .bearer_auth(&self.token)
            .send()
            .await?;

        check(response).await?;
        Ok(())
    }
}

/// Turn non-success responses into `ClientError::Api`, surfacing the body's
/// `message` field when there is one.
async fn check(response: reqwest::Response) -> Result<reqwest::Response, ClientError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let message = response
        .text()
        .await
        .ok()
        .and_then(|body| serde_json::from_str::<serde_json::Value>(&body).ok())
        .and_then(|v| v.get("message").and_then(|m| m.as_str()).map(str::to_string))
        .unwrap_or_else(|| "request failed".to_string());

    Err(ClientError::Api { status, message })
}
