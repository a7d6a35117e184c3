use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A to-do task.
///
/// Used unchanged as the create/update request body, the response body and
/// the stored document. The database's own `_id` is ignored when reading.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[schema(example = json!({
    "id": 1,
    "title": "Buy milk",
    "description": "2 litres",
    "completed": false
}))]
pub struct Task {
    /// Client-chosen identifier, unique across the collection
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub completed: bool,
}

impl Task {
    /// A new, not yet completed task without a description
    pub fn new(id: i64, title: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            description: None,
            completed: false,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn completed(mut self) -> Self {
        self.completed = true;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_optional_fields_default() {
        let task: Task = serde_json::from_value(json!({ "id": 1, "title": "Buy milk" })).unwrap();
        assert_eq!(task, Task::new(1, "Buy milk"));
    }

    #[test]
    fn test_missing_description_serializes_as_null() {
        let value = serde_json::to_value(Task::new(1, "Buy milk")).unwrap();
        assert_eq!(
            value,
            json!({ "id": 1, "title": "Buy milk", "description": null, "completed": false })
        );
    }

    #[test]
    fn test_missing_title_is_rejected() {
        let result = serde_json::from_value::<Task>(json!({ "id": 1 }));
        assert!(result.is_err());
    }

    #[test]
    fn test_non_integer_id_is_rejected() {
        let result = serde_json::from_value::<Task>(json!({ "id": "one", "title": "x" }));
        assert!(result.is_err());
    }

    #[test]
    fn test_stored_object_id_is_ignored() {
        let task: Task = serde_json::from_value(json!({
            "_id": { "$oid": "65f000000000000000000000" },
            "id": 7,
            "title": "Walk dog",
            "description": null,
            "completed": true
        }))
        .unwrap();
        assert_eq!(task, Task::new(7, "Walk dog").completed());
    }
}
