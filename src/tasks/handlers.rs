use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, put},
    Json, Router,
};
use tracing::{info, instrument, warn};
use uuid::Uuid;

use crate::{
    auth::jwt::AuthUser,
    error::ApiError,
    state::AppState,
    tasks::{
        archive,
        dto::{CreateTaskRequest, MessageResponse, TaskResponse, UpdateStatusRequest},
        repo::Task,
    },
};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/tasks", get(list_tasks).post(create_task))
        .route("/tasks/:id", put(update_status).delete(remove_task))
}

#[instrument(skip(state))]
pub async fn list_tasks(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
) -> Result<Json<Vec<TaskResponse>>, ApiError> {
    let tasks = Task::list_by_user(&state.db, user_id).await?;
    Ok(Json(tasks.into_iter().map(TaskResponse::from).collect()))
}

#[instrument(skip(state, payload))]
pub async fn create_task(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    Json(payload): Json<CreateTaskRequest>,
) -> Result<(StatusCode, Json<TaskResponse>), ApiError> {
    let title = payload
        .title
        .as_deref()
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .ok_or(ApiError::Validation("Título é obrigatório"))?;

    let task = Task::create(
        &state.db,
        user_id,
        title,
        payload.description.as_deref(),
        payload.due_date,
    )
    .await?;

    info!(task_id = %task.id, "task created");
    Ok((StatusCode::CREATED, Json(TaskResponse::from(task))))
}

#[instrument(skip(state, payload))]
pub async fn update_status(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateStatusRequest>,
) -> Result<Json<TaskResponse>, ApiError> {
    let task = Task::find_by_id(&state.db, id)
        .await?
        .ok_or(ApiError::TaskNotFound)?;
    if task.user_id != user_id {
        warn!(task_id = %id, owner = %task.user_id, "status update on foreign task");
        return Err(ApiError::Forbidden);
    }

    // The row can vanish between the ownership read and the update.
    let task = Task::set_status(&state.db, id, payload.status)
        .await?
        .ok_or(ApiError::TaskNotFound)?;

    info!(task_id = %id, status = ?task.status, "task status updated");
    Ok(Json(TaskResponse::from(task)))
}

#[instrument(skip(state))]
pub async fn remove_task(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<MessageResponse>, ApiError> {
    let task = Task::find_by_id(&state.db, id)
        .await?
        .ok_or(ApiError::TaskNotFound)?;
    if task.user_id != user_id {
        warn!(task_id = %id, owner = %task.user_id, "delete on foreign task");
        return Err(ApiError::Forbidden);
    }

    archive::archive_and_remove(&state.db, &task).await?;

    Ok(Json(MessageResponse {
        message: "Tarefa movida para finalizadas com sucesso".into(),
    }))
}
