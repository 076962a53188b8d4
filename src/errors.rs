use axum::http::StatusCode;
use thiserror::Error;

/// Failures raised by the pure aggregation functions.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AnalyticsError {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("empty input")]
    EmptyInput,
}

impl AnalyticsError {
    pub fn invalid(message: impl Into<String>) -> Self {
        Self::InvalidArgument(message.into())
    }
}

#[derive(Debug)]
pub struct AppError {
    pub status: StatusCode,
    pub message: String,
}

impl AppError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            message: message.into(),
        }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::NOT_FOUND,
            message: message.into(),
        }
    }

    pub fn internal(err: impl std::error::Error) -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            message: err.to_string(),
        }
    }
}

impl From<AnalyticsError> for AppError {
    fn from(err: AnalyticsError) -> Self {
        Self::bad_request(err.to_string())
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        Self::internal(err)
    }
}

impl axum::response::IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        (self.status, self.message).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn analytics_errors_map_to_bad_request() {
        let err: AppError = AnalyticsError::EmptyInput.into();
        assert_eq!(err.status, StatusCode::BAD_REQUEST);
        assert_eq!(err.message, "empty input");

        let err: AppError = AnalyticsError::invalid("q must be within [0, 100]").into();
        assert_eq!(err.message, "invalid argument: q must be within [0, 100]");
    }
}
