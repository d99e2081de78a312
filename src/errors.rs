use actix_web::HttpResponse;
use thiserror::Error;

use crate::domain::errors::CommitError;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Invalid request")]
    Unauthorized,

    #[error("{0}")]
    Validation(String),

    #[error("Reservation not found")]
    NotFound,

    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<CommitError> for AppError {
    fn from(e: CommitError) -> Self {
        match e {
            CommitError::Validation(msg) => AppError::Validation(msg),
            CommitError::NotFound => AppError::NotFound,
            CommitError::Persistence(msg) => AppError::Internal(msg),
        }
    }
}

impl From<diesel::result::Error> for AppError {
    fn from(e: diesel::result::Error) -> Self {
        AppError::Internal(e.to_string())
    }
}

impl From<r2d2::Error> for AppError {
    fn from(e: r2d2::Error) -> Self {
        AppError::Internal(e.to_string())
    }
}

impl actix_web::ResponseError for AppError {
    fn error_response(&self) -> HttpResponse {
        // Validation and not-found messages are safe to echo; anything
        // internal is masked so SQL or pool detail never leaves the process.
        match self {
            AppError::Unauthorized | AppError::Validation(_) => {
                HttpResponse::BadRequest().json(serde_json::json!({
                    "status": "error",
                    "message": self.to_string()
                }))
            }
            AppError::NotFound => HttpResponse::NotFound().json(serde_json::json!({
                "status": "error",
                "message": self.to_string()
            })),
            AppError::Internal(_) => HttpResponse::InternalServerError().json(serde_json::json!({
                "status": "error",
                "message": "Database error"
            })),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::ResponseError;

    #[test]
    fn unauthorized_returns_400() {
        let resp = AppError::Unauthorized.error_response();
        assert_eq!(resp.status(), actix_web::http::StatusCode::BAD_REQUEST);
    }

    #[test]
    fn validation_returns_400() {
        let resp = AppError::Validation("Missing required data".to_string()).error_response();
        assert_eq!(resp.status(), actix_web::http::StatusCode::BAD_REQUEST);
    }

    #[test]
    fn not_found_returns_404() {
        let resp = AppError::NotFound.error_response();
        assert_eq!(resp.status(), actix_web::http::StatusCode::NOT_FOUND);
    }

    #[test]
    fn internal_error_returns_500() {
        let err = AppError::Internal("something went wrong".to_string());
        assert_eq!(
            err.error_response().status(),
            actix_web::http::StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn unauthorized_display() {
        assert_eq!(AppError::Unauthorized.to_string(), "Invalid request");
    }

    #[test]
    fn not_found_display() {
        assert_eq!(AppError::NotFound.to_string(), "Reservation not found");
    }

    #[test]
    fn commit_validation_maps_to_app_validation() {
        let app_err: AppError = CommitError::Validation("Missing required data".to_string()).into();
        assert!(matches!(app_err, AppError::Validation(_)));
    }

    #[test]
    fn commit_not_found_maps_to_app_not_found() {
        let app_err: AppError = CommitError::NotFound.into();
        assert!(matches!(app_err, AppError::NotFound));
    }

    #[test]
    fn commit_persistence_maps_to_app_internal() {
        let app_err: AppError = CommitError::Persistence("oops".to_string()).into();
        assert!(matches!(app_err, AppError::Internal(_)));
    }
}
