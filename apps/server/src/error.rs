use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use budget_core::errors::Error as CoreError;
use serde::Serialize;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("{0}")]
    Core(#[from] CoreError),
    #[error("Method Not Allowed")]
    MethodNotAllowed,
    #[error("Not Found")]
    NotFound,
    #[error("{0}")]
    BadRequest(String),
    /// The bank link flow reported an error instead of a public token.
    #[error("{0}")]
    ExpectationFailed(String),
    #[error("{0}")]
    Internal(String),
    #[error("{0}")]
    Anyhow(#[from] anyhow::Error),
}

#[derive(Serialize)]
struct ErrorBody {
    status_code: u16,
    message: String,
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Core(e) => match e {
                CoreError::Validation(_) => StatusCode::BAD_REQUEST,
                CoreError::Upstream(_) => StatusCode::BAD_GATEWAY,
                CoreError::Database(_) | CoreError::Unexpected(_) => {
                    StatusCode::INTERNAL_SERVER_ERROR
                }
            },
            ApiError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            ApiError::NotFound => StatusCode::NOT_FOUND,
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::ExpectationFailed(_) => StatusCode::EXPECTATION_FAILED,
            ApiError::Internal(_) | ApiError::Anyhow(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = self.to_string();
        if status.is_server_error() {
            tracing::error!(status = status.as_u16(), "{}", message);
        } else {
            tracing::warn!(status = status.as_u16(), "{}", message);
        }
        let body = Json(ErrorBody {
            status_code: status.as_u16(),
            message,
        });
        (status, body).into_response()
    }
}

pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;
    use budget_core::errors::{DatabaseError, ValidationError};

    #[test]
    fn core_errors_map_to_statuses() {
        let validation = ApiError::from(CoreError::Validation(ValidationError::InvalidInput(
            "bad".into(),
        )));
        assert_eq!(validation.status(), StatusCode::BAD_REQUEST);

        let database = ApiError::from(CoreError::Database(DatabaseError::QueryFailed(
            "locked".into(),
        )));
        assert_eq!(database.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let upstream = ApiError::from(CoreError::Upstream("timeout".into()));
        assert_eq!(upstream.status(), StatusCode::BAD_GATEWAY);
    }

    #[test]
    fn link_errors_are_expectation_failed() {
        assert_eq!(
            ApiError::ExpectationFailed("user cancelled".into()).status(),
            StatusCode::EXPECTATION_FAILED
        );
    }
}
