use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use uuid::Uuid;

use crate::tasks::repo::{Task, TaskStatus};

/// Request body for task creation. `titulo` is optional at the serde level so
/// an absent title surfaces as a domain validation error, not a 422.
#[derive(Debug, Deserialize)]
pub struct CreateTaskRequest {
    #[serde(default, rename = "titulo")]
    pub title: Option<String>,
    #[serde(default, rename = "descricao")]
    pub description: Option<String>,
    #[serde(default, rename = "data", with = "time::serde::rfc3339::option")]
    pub due_date: Option<OffsetDateTime>,
}

#[derive(Debug, Deserialize)]
pub struct UpdateStatusRequest {
    pub status: TaskStatus,
}

#[derive(Debug, Serialize)]
pub struct TaskResponse {
    pub id: Uuid,
    #[serde(rename = "usuarioId")]
    pub user_id: Uuid,
    #[serde(rename = "titulo")]
    pub title: String,
    #[serde(rename = "descricao")]
    pub description: Option<String>,
    #[serde(rename = "data", with = "time::serde::rfc3339::option")]
    pub due_date: Option<OffsetDateTime>,
    pub status: TaskStatus,
    #[serde(rename = "dataCriacao", with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
}

impl From<Task> for TaskResponse {
    fn from(t: Task) -> Self {
        Self {
            id: t.id,
            user_id: t.user_id,
            title: t.title,
            description: t.description,
            due_date: t.due_date,
            status: t.status,
            created_at: t.created_at,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::datetime;

    #[test]
    fn create_request_uses_portuguese_wire_names() {
        let req: CreateTaskRequest = serde_json::from_str(
            r#"{"titulo":"Comprar leite","descricao":"integral","data":"2024-10-02T09:00:00Z"}"#,
        )
        .expect("deserialize");
        assert_eq!(req.title.as_deref(), Some("Comprar leite"));
        assert_eq!(req.description.as_deref(), Some("integral"));
        assert_eq!(req.due_date, Some(datetime!(2024-10-02 09:00 UTC)));
    }

    #[test]
    fn create_request_tolerates_missing_fields() {
        let req: CreateTaskRequest = serde_json::from_str(r#"{}"#).expect("deserialize");
        assert!(req.title.is_none());
        assert!(req.description.is_none());
        assert!(req.due_date.is_none());
    }

    #[test]
    fn update_request_parses_status() {
        let req: UpdateStatusRequest =
            serde_json::from_str(r#"{"status":"finalizada"}"#).expect("deserialize");
        assert_eq!(req.status, TaskStatus::Done);
    }

    #[test]
    fn task_response_serializes_wire_names() {
        let task = Task {
            id: Uuid::nil(),
            user_id: Uuid::nil(),
            title: "Comprar leite".into(),
            description: None,
            due_date: None,
            status: TaskStatus::Pending,
            created_at: datetime!(2024-10-01 12:00 UTC),
        };
        let json = serde_json::to_value(TaskResponse::from(task)).expect("serialize");
        assert_eq!(json["titulo"], "Comprar leite");
        assert_eq!(json["status"], "pendente");
        assert_eq!(json["dataCriacao"], "2024-10-01T12:00:00Z");
        assert!(json.get("usuarioId").is_some());
        assert!(json.get("descricao").is_some());
        assert!(json.get("data").is_some());
    }
}
