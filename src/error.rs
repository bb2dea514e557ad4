use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;
use tracing::error;

/// Domain error taxonomy. Client-facing messages stay in Portuguese because
/// the frontend displays them verbatim.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    Validation(&'static str),
    #[error("Usuário já existe")]
    AlreadyExists,
    #[error("Usuário não encontrado")]
    UserNotFound,
    #[error("Senha inválida")]
    InvalidCredentials,
    #[error("Token não fornecido ou inválido")]
    TokenMissing,
    #[error("Token inválido")]
    TokenMalformed,
    #[error("Token expirado")]
    TokenExpired,
    #[error("Tarefa não encontrada")]
    TaskNotFound,
    #[error("Tarefa pertence a outro usuário")]
    Forbidden,
    #[error("Erro ao mover tarefa para finalizadas")]
    ArchivalFailed(#[source] sqlx::Error),
    #[error("Erro ao mover tarefa para finalizadas")]
    CleanupFailed(#[source] sqlx::Error),
    #[error("Erro interno no servidor")]
    Store(#[from] sqlx::Error),
    #[error("Erro interno no servidor")]
    Internal(#[from] anyhow::Error),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Validation(_)
            | ApiError::AlreadyExists
            | ApiError::UserNotFound
            | ApiError::InvalidCredentials => StatusCode::BAD_REQUEST,
            ApiError::TokenMissing | ApiError::TokenMalformed | ApiError::TokenExpired => {
                StatusCode::UNAUTHORIZED
            }
            ApiError::Forbidden => StatusCode::FORBIDDEN,
            ApiError::TaskNotFound => StatusCode::NOT_FOUND,
            ApiError::ArchivalFailed(_)
            | ApiError::CleanupFailed(_)
            | ApiError::Store(_)
            | ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            // Sources carry store detail; only the safe message leaves the process.
            error!(error = ?self, "request failed");
        }
        (status, Json(json!({ "message": self.to_string() }))).into_response()
    }
}

/// Postgres unique-constraint violation (SQLSTATE 23505), used to surface a
/// lost check-then-insert race on the email column as `AlreadyExists`.
pub fn is_unique_violation(err: &sqlx::Error) -> bool {
    matches!(err, sqlx::Error::Database(db) if db.code().as_deref() == Some("23505"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn domain_errors_map_to_expected_status() {
        assert_eq!(
            ApiError::Validation("Título é obrigatório").status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(ApiError::AlreadyExists.status(), StatusCode::BAD_REQUEST);
        assert_eq!(ApiError::UserNotFound.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            ApiError::InvalidCredentials.status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(ApiError::TokenMissing.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(ApiError::TokenExpired.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(ApiError::Forbidden.status(), StatusCode::FORBIDDEN);
        assert_eq!(ApiError::TaskNotFound.status(), StatusCode::NOT_FOUND);
        assert_eq!(
            ApiError::Store(sqlx::Error::PoolClosed).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn archive_errors_are_server_errors_with_safe_message() {
        let err = ApiError::ArchivalFailed(sqlx::Error::PoolClosed);
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.to_string(), "Erro ao mover tarefa para finalizadas");
        let err = ApiError::CleanupFailed(sqlx::Error::PoolClosed);
        assert_eq!(err.to_string(), "Erro ao mover tarefa para finalizadas");
    }

    #[test]
    fn store_errors_never_leak_detail() {
        let err = ApiError::Store(sqlx::Error::PoolClosed);
        assert_eq!(err.to_string(), "Erro interno no servidor");
    }

    #[test]
    fn into_response_carries_status() {
        let resp = ApiError::TaskNotFound.into_response();
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
        let resp = ApiError::TokenExpired.into_response();
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    }
}
