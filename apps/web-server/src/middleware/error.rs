//! Error handling - HTML error pages and RFC 7807 JSON responses.

use actix_web::{HttpResponse, ResponseError, http::StatusCode, http::header::ContentType};
use inkwell_core::DomainError;
use inkwell_shared::ErrorResponse;
use std::fmt;

use crate::views;

/// Application-level error type, rendered as an HTML error page.
#[derive(Debug)]
pub enum AppError {
    NotFound(String),
    Validation(String),
    Internal(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::NotFound(msg) => write!(f, "Not found: {}", msg),
            AppError::Validation(msg) => write!(f, "Validation failed: {}", msg),
            AppError::Internal(msg) => write!(f, "Internal error: {}", msg),
        }
    }
}

impl AppError {
    /// Title and public detail shown to the visitor. Internal details stay
    /// in the logs.
    fn public_parts(&self) -> (&'static str, String) {
        match self {
            AppError::NotFound(detail) => ("Not Found", detail.clone()),
            AppError::Validation(detail) => ("Submission Rejected", detail.clone()),
            AppError::Internal(_) => (
                "Something Went Wrong",
                "The request could not be completed. Please try again later.".to_string(),
            ),
        }
    }

    fn log(&self) {
        if let AppError::Internal(detail) = self {
            tracing::error!("Internal error: {}", detail);
        }
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        self.log();

        let status = self.status_code();
        let (title, detail) = self.public_parts();

        match views::render_error(status.as_u16(), title, &detail) {
            Ok(html) => HttpResponse::build(status)
                .content_type(ContentType::html())
                .body(html),
            Err(e) => {
                tracing::error!("Error page rendering failed: {}", e);
                HttpResponse::build(status)
                    .content_type(ContentType::plaintext())
                    .body(format!("{} {}", status.as_u16(), title))
            }
        }
    }
}

// Conversion from domain errors
impl From<DomainError> for AppError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::NotFound { entity_type, id } => {
                AppError::NotFound(format!("{} with id {} not found", entity_type, id))
            }
            DomainError::Validation(msg) => AppError::Validation(msg),
            DomainError::Storage(msg) => AppError::Internal(format!("Storage error: {}", msg)),
        }
    }
}

impl From<askama::Error> for AppError {
    fn from(err: askama::Error) -> Self {
        AppError::Internal(format!("Template rendering failed: {}", err))
    }
}

/// JSON flavour of [`AppError`] for the `/api` routes.
#[derive(Debug)]
pub struct ApiError {
    error: AppError,
    instance: Option<String>,
}

impl ApiError {
    /// Attach the request path reported as the problem `instance`.
    pub fn at(mut self, path: &str) -> Self {
        self.instance = Some(path.to_string());
        self
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.error.fmt(f)
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        self.error.status_code()
    }

    fn error_response(&self) -> HttpResponse {
        self.error.log();

        let mut problem = match &self.error {
            AppError::NotFound(detail) => ErrorResponse::not_found(detail),
            AppError::Validation(detail) => ErrorResponse::validation_failed(detail),
            AppError::Internal(_) => ErrorResponse::internal_error(),
        };
        if let Some(path) = &self.instance {
            problem = problem.at(path);
        }

        HttpResponse::build(self.status_code())
            .content_type("application/problem+json")
            .json(problem)
    }
}

impl From<AppError> for ApiError {
    fn from(error: AppError) -> Self {
        ApiError {
            error,
            instance: None,
        }
    }
}

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        AppError::from(err).into()
    }
}

/// Result type alias for HTML handlers.
pub type AppResult<T> = Result<T, AppError>;

/// Result type alias for JSON handlers.
pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::body::MessageBody;

    fn body_text(response: HttpResponse) -> String {
        let bytes = response.into_body().try_into_bytes().unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    #[test]
    fn domain_errors_map_to_status_codes() {
        let not_found: AppError = DomainError::post_not_found("abc").into();
        assert_eq!(not_found.status_code(), StatusCode::NOT_FOUND);

        let invalid: AppError = DomainError::Validation("title".into()).into();
        assert_eq!(invalid.status_code(), StatusCode::UNPROCESSABLE_ENTITY);

        let storage: AppError = DomainError::Storage("refused".into()).into();
        assert_eq!(storage.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn internal_details_are_not_rendered() {
        let err = AppError::Internal("password=hunter2 connection refused".into());
        let html = body_text(err.error_response());
        assert!(html.contains("Something Went Wrong"));
        assert!(!html.contains("hunter2"));
    }

    #[test]
    fn api_errors_are_problem_details() {
        let err = ApiError::from(DomainError::post_not_found("abc"));
        let response = err.error_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let json: serde_json::Value = serde_json::from_str(&body_text(response)).unwrap();
        assert_eq!(json["status"], 404);
        assert_eq!(json["title"], "Not Found");
        assert_eq!(json["detail"], "Post with id abc not found");
        assert!(json.get("instance").is_none());
    }

    #[test]
    fn api_errors_report_request_path() {
        let err = ApiError::from(DomainError::post_not_found("abc")).at("/api/posts/abc");
        let response = err.error_response();
        assert_eq!(
            response.headers().get("content-type").unwrap(),
            "application/problem+json"
        );

        let json: serde_json::Value = serde_json::from_str(&body_text(response)).unwrap();
        assert_eq!(json["instance"], "/api/posts/abc");
    }
}
