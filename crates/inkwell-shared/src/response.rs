//! JSON envelopes for the read-only `/api` projection.

use serde::{Deserialize, Serialize};

/// Successful API payload: `{"success": true, "data": ...}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub data: T,
}

impl<T> ApiResponse<T> {
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data,
        }
    }
}

/// RFC 7807 problem details.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    #[serde(rename = "type")]
    pub error_type: String,
    pub title: String,
    pub status: u16,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
    /// Request path the problem occurred on.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instance: Option<String>,
}

impl ErrorResponse {
    fn problem(status: u16, title: &str, detail: Option<String>) -> Self {
        Self {
            error_type: "about:blank".to_string(),
            title: title.to_string(),
            status,
            detail,
            instance: None,
        }
    }

    pub fn not_found(detail: impl Into<String>) -> Self {
        Self::problem(404, "Not Found", Some(detail.into()))
    }

    pub fn validation_failed(detail: impl Into<String>) -> Self {
        Self::problem(422, "Validation Failed", Some(detail.into()))
    }

    /// No detail: storage internals are never exposed.
    pub fn internal_error() -> Self {
        Self::problem(500, "Internal Server Error", None)
    }

    pub fn at(mut self, path: impl Into<String>) -> Self {
        self.instance = Some(path.into());
        self
    }
}
