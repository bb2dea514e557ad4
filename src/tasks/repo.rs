use serde::{Deserialize, Serialize};
use sqlx::{FromRow, PgPool};
use time::OffsetDateTime;
use uuid::Uuid;

/// Task completion state. Wire and database values keep the original
/// Portuguese spelling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "task_status")]
pub enum TaskStatus {
    #[serde(rename = "pendente")]
    #[sqlx(rename = "pendente")]
    Pending,
    #[serde(rename = "finalizada")]
    #[sqlx(rename = "finalizada")]
    Done,
}

#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Task {
    pub id: Uuid,
    pub user_id: Uuid,
    pub title: String,
    pub description: Option<String>,
    pub due_date: Option<OffsetDateTime>,
    pub status: TaskStatus,
    pub created_at: OffsetDateTime,
}

/// Point-in-time snapshot of a task taken when it is deleted. Write-once.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct FinishedTask {
    pub user_id: Uuid,
    pub title: String,
    pub description: Option<String>,
    pub due_date: Option<OffsetDateTime>,
    pub status: TaskStatus,
    pub created_at: OffsetDateTime,
    pub finished_at: OffsetDateTime,
}

impl FinishedTask {
    /// Copies every task field; only `finished_at` is new.
    pub fn snapshot(task: &Task, finished_at: OffsetDateTime) -> Self {
        Self {
            user_id: task.user_id,
            title: task.title.clone(),
            description: task.description.clone(),
            due_date: task.due_date,
            status: task.status,
            created_at: task.created_at,
            finished_at,
        }
    }
}

impl Task {
    /// All tasks for one owner, in creation order.
    pub async fn list_by_user(db: &PgPool, user_id: Uuid) -> sqlx::Result<Vec<Task>> {
        sqlx::query_as::<_, Task>(
            r#"
            SELECT id, user_id, title, description, due_date, status, created_at
            FROM tasks
            WHERE user_id = $1
            ORDER BY created_at ASC
            "#,
        )
        .bind(user_id)
        .fetch_all(db)
        .await
    }

    pub async fn create(
        db: &PgPool,
        user_id: Uuid,
        title: &str,
        description: Option<&str>,
        due_date: Option<OffsetDateTime>,
    ) -> sqlx::Result<Task> {
        sqlx::query_as::<_, Task>(
            r#"
            INSERT INTO tasks (user_id, title, description, due_date)
            VALUES ($1, $2, $3, $4)
            RETURNING id, user_id, title, description, due_date, status, created_at
            "#,
        )
        .bind(user_id)
        .bind(title)
        .bind(description)
        .bind(due_date)
        .fetch_one(db)
        .await
    }

    pub async fn find_by_id(db: &PgPool, id: Uuid) -> sqlx::Result<Option<Task>> {
        sqlx::query_as::<_, Task>(
            r#"
            SELECT id, user_id, title, description, due_date, status, created_at
            FROM tasks
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(db)
        .await
    }

    /// Overwrites only the status column. `None` when the row is gone.
    pub async fn set_status(
        db: &PgPool,
        id: Uuid,
        status: TaskStatus,
    ) -> sqlx::Result<Option<Task>> {
        sqlx::query_as::<_, Task>(
            r#"
            UPDATE tasks
            SET status = $2
            WHERE id = $1
            RETURNING id, user_id, title, description, due_date, status, created_at
            "#,
        )
        .bind(id)
        .bind(status)
        .fetch_optional(db)
        .await
    }
}
