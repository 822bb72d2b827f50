use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: i64,
    pub title: String,
    pub is_completed: bool,
    pub project_id: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_task_wire_shape_is_camel_case() {
        let task = Task {
            id: 3,
            title: "Write docs".into(),
            is_completed: false,
            project_id: 1,
        };

        let value = serde_json::to_value(&task).unwrap();
        assert_eq!(value["isCompleted"], false);
        assert_eq!(value["projectId"], 1);
        assert!(value.get("is_completed").is_none());
    }
}
