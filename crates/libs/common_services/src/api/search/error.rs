use crate::database::DbError;
use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use color_eyre::eyre;
use serde_json::json;
use thiserror::Error;
use tracing::{error, warn};

#[derive(Debug, Error)]
pub enum SearchError {
    #[error("keyword is {length} characters long, at most {max} are allowed")]
    InvalidKeyword { length: usize, max: usize },

    #[error("limit must be at least 1, got {0}")]
    InvalidLimit(i64),

    #[error("database error")]
    Database(#[from] sqlx::Error),

    #[error("internal error")]
    Internal(#[from] eyre::Report),
}

fn log_error(error: &SearchError) {
    match error {
        SearchError::InvalidKeyword { .. } | SearchError::InvalidLimit(_) => {
            warn!("Rejected search request: {}", error);
        }
        SearchError::Database(e) => error!("Database query failed: {}", e),
        SearchError::Internal(e) => error!("Internal error: {}", e),
    }
}

impl IntoResponse for SearchError {
    fn into_response(self) -> Response {
        log_error(&self);

        match self {
            Self::InvalidKeyword { .. } | Self::InvalidLimit(_) => {
                let body = Json(json!({ "error": self.to_string() }));
                (StatusCode::BAD_REQUEST, body).into_response()
            }
            // Backend failures carry no body, the status is the whole answer.
            Self::Database(_) | Self::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR.into_response()
            }
        }
    }
}

impl From<DbError> for SearchError {
    fn from(err: DbError) -> Self {
        match err {
            DbError::Sqlx(err) => Self::Database(err),
            DbError::Migrate(err) => Self::Internal(eyre::Report::new(err)),
        }
    }
}
