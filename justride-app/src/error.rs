use justride_booking::{CsvError, RequestError, StoreError};
use justride_catalog::CatalogError;
use justride_core::CoreError;
use serde_json::{json, Value};

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("{0}")]
    ValidationError(String),
    #[error("{0}")]
    NotFoundError(String),
    #[error("{0}")]
    ConflictError(String),
    #[error("{0}")]
    InternalServerError(String),
}

impl AppError {
    pub fn kind(&self) -> &'static str {
        match self {
            AppError::ValidationError(_) => "validation",
            AppError::NotFoundError(_) => "not_found",
            AppError::ConflictError(_) => "conflict",
            AppError::InternalServerError(_) => "internal",
        }
    }

    /// Response body for the command driver
    pub fn to_json(&self) -> Value {
        let message = match self {
            AppError::InternalServerError(msg) => {
                tracing::error!("Internal error: {}", msg);
                "Internal error".to_string()
            }
            other => other.to_string(),
        };
        json!({ "error": message })
    }
}

impl From<CoreError> for AppError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::ValidationError(msg) => AppError::ValidationError(msg),
            CoreError::IdentityError(msg) => AppError::ValidationError(msg),
            CoreError::InternalError(msg) => AppError::InternalServerError(msg),
        }
    }
}

impl From<StoreError> for AppError {
    fn from(err: StoreError) -> Self {
        AppError::NotFoundError(err.to_string())
    }
}

impl From<RequestError> for AppError {
    fn from(err: RequestError) -> Self {
        match err {
            RequestError::AlreadySubmitted(_) => AppError::ConflictError(err.to_string()),
            _ => AppError::ValidationError(err.to_string()),
        }
    }
}

impl From<CatalogError> for AppError {
    fn from(err: CatalogError) -> Self {
        match err {
            CatalogError::NotFound(_) => AppError::NotFoundError(err.to_string()),
            _ => AppError::ValidationError(err.to_string()),
        }
    }
}

impl From<CsvError> for AppError {
    fn from(err: CsvError) -> Self {
        AppError::InternalServerError(err.to_string())
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::InternalServerError(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use justride_booking::BookingId;

    #[test]
    fn test_error_body() {
        let err = AppError::from(StoreError::BookingNotFound(BookingId(4)));
        assert_eq!(err.kind(), "not_found");
        assert_eq!(err.to_json(), json!({"error": "Booking not found: 4"}));
    }

    #[test]
    fn test_validation_message_passes_through() {
        let err = AppError::from(CoreError::ValidationError("Passwords do not match".into()));
        assert_eq!(err.to_json(), json!({"error": "Passwords do not match"}));
    }

    #[test]
    fn test_internal_detail_is_hidden() {
        let err = AppError::InternalServerError("serializer blew up".into());
        assert_eq!(err.to_json(), json!({"error": "Internal error"}));
    }

    #[test]
    fn test_double_submit_is_conflict() {
        let err = AppError::from(RequestError::AlreadySubmitted(BookingId(1)));
        assert_eq!(err.kind(), "conflict");
    }
}
