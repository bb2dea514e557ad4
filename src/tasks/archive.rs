use sqlx::PgPool;
use time::OffsetDateTime;
use tracing::{info, instrument};

use crate::error::ApiError;
use crate::tasks::repo::{FinishedTask, Task};

/// Moves a task into the finished collection and removes the original.
///
/// Both writes run in one transaction; the snapshot insert strictly precedes
/// the delete, so a deletion can never silently lose the task. Insert failure
/// surfaces as `ArchivalFailed` with nothing persisted; delete or commit
/// failure rolls everything back and surfaces as `CleanupFailed`. A task that
/// vanished between the caller's read and the delete reports `TaskNotFound`,
/// leaving whichever archive row the competing delete wrote as the only one.
#[instrument(skip(db, task), fields(task_id = %task.id))]
pub async fn archive_and_remove(db: &PgPool, task: &Task) -> Result<(), ApiError> {
    let snapshot = FinishedTask::snapshot(task, OffsetDateTime::now_utc());

    let mut tx = db.begin().await?;

    insert_snapshot(&mut tx, &snapshot)
        .await
        .map_err(ApiError::ArchivalFailed)?;

    let deleted = sqlx::query("DELETE FROM tasks WHERE id = $1")
        .bind(task.id)
        .execute(&mut *tx)
        .await
        .map_err(ApiError::CleanupFailed)?
        .rows_affected();

    if deleted == 0 {
        tx.rollback().await.ok();
        return Err(ApiError::TaskNotFound);
    }

    tx.commit().await.map_err(ApiError::CleanupFailed)?;

    info!(user_id = %task.user_id, "task archived");
    Ok(())
}

async fn insert_snapshot(
    tx: &mut sqlx::Transaction<'_, sqlx::Postgres>,
    snap: &FinishedTask,
) -> sqlx::Result<()> {
    sqlx::query(
        r#"
        INSERT INTO finished_tasks
            (user_id, title, description, due_date, status, created_at, finished_at)
        VALUES ($1, $2, $3, $4, $5, $6, $7)
        "#,
    )
    .bind(snap.user_id)
    .bind(&snap.title)
    .bind(&snap.description)
    .bind(snap.due_date)
    .bind(snap.status)
    .bind(snap.created_at)
    .bind(snap.finished_at)
    .execute(&mut **tx)
    .await?;
    Ok(())
}
