use crate::errors::{error::ErrorResponse, repository::RepositoryError, service::ServiceError};
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use tracing::{error, info, warn};

#[derive(Debug)]
pub struct AppErrorHttp(pub ServiceError);

impl From<ServiceError> for AppErrorHttp {
    fn from(err: ServiceError) -> Self {
        Self(err)
    }
}

impl IntoResponse for AppErrorHttp {
    fn into_response(self) -> Response {
        let (status, msg) = match self.0 {
            ServiceError::NotFound(msg) => {
                info!("🔍 Resource not found: {msg}");
                (StatusCode::NOT_FOUND, msg)
            }

            err @ ServiceError::InvalidRange { .. } => {
                warn!("📅 Invalid date range: {err}");
                (StatusCode::BAD_REQUEST, err.to_string())
            }

            ServiceError::Validation(errors) => {
                warn!("📝 Validation failed: {errors:?}");
                (
                    StatusCode::BAD_REQUEST,
                    format!("Validation failed: {}", errors.join(", ")),
                )
            }

            ServiceError::Repo(repo_err) => match repo_err {
                RepositoryError::Sqlx(err) => {
                    error!("💾 Database error: {err}");
                    (
                        StatusCode::INTERNAL_SERVER_ERROR,
                        "Database error".to_string(),
                    )
                }
                RepositoryError::Custom(msg) => {
                    error!("⚙️ Custom repository error: {msg}");
                    (StatusCode::INTERNAL_SERVER_ERROR, msg)
                }
            },
        };

        let body = Json(ErrorResponse {
            status: "error".to_string(),
            message: msg,
        });

        (status, body).into_response()
    }
}
