use serde::Deserialize;

/// Create payload. A `projectId` or `isCompleted` in the body is ignored:
/// the project comes from the path and new tasks start incomplete.
#[derive(Debug, Deserialize)]
pub struct CreateTaskRequest {
    pub title: Option<String>,
}

/// A task title is required and may not be blank.
pub fn validate_title(title: Option<String>) -> Result<String, String> {
    match title {
        Some(t) if !t.trim().is_empty() => Ok(t),
        _ => Err("title is required".to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_title() {
        assert_eq!(validate_title(Some("Ship it".into())).unwrap(), "Ship it");
        assert!(validate_title(None).is_err());
        assert!(validate_title(Some("  ".into())).is_err());
    }

    #[test]
    fn test_create_request_drops_conflicting_fields() {
        let req: CreateTaskRequest =
            serde_json::from_str(r#"{"title":"T","projectId":999,"isCompleted":true}"#).unwrap();
        assert_eq!(req.title.as_deref(), Some("T"));
    }
}
