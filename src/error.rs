//! Application error type and its HTTP mapping.
//!
//! Every fallible operation in the service returns [`AppError`]. Handlers
//! propagate it with `?` and axum renders it through [`IntoResponse`] as
//!
//! ```json
//! { "error": { "code": "not_found", "message": "Publisher not found", "details": {} } }
//! ```

use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use serde_json::{Map, Value, json};
use validator::ValidationErrors;

#[derive(Serialize)]
struct ErrorBody {
    error: ErrorInfo,
}

/// Error payload embedded in every error response.
#[derive(Debug, Serialize)]
pub struct ErrorInfo {
    pub code: &'static str,
    pub message: String,
    pub details: Value,
}

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Missing or invalid input. Rendered as 400.
    #[error("{message}")]
    Validation { message: String, details: Value },

    /// Publisher or domain does not exist. Rendered as 404.
    #[error("{message}")]
    NotFound { message: String, details: Value },

    /// Name already taken. Rendered as 409.
    #[error("{message}")]
    Conflict { message: String, details: Value },

    /// Name already taken, on endpoints whose contract reports it as 400.
    #[error("{message}")]
    Duplicate { message: String, details: Value },
}

impl AppError {
    pub fn bad_request(message: impl Into<String>, details: Value) -> Self {
        Self::Validation {
            message: message.into(),
            details,
        }
    }

    pub fn not_found(message: impl Into<String>, details: Value) -> Self {
        Self::NotFound {
            message: message.into(),
            details,
        }
    }

    pub fn conflict(message: impl Into<String>, details: Value) -> Self {
        Self::Conflict {
            message: message.into(),
            details,
        }
    }

    pub fn duplicate(message: impl Into<String>, details: Value) -> Self {
        Self::Duplicate {
            message: message.into(),
            details,
        }
    }

    /// Builds a 400 error from `validator` output, keeping per-field errors as details.
    ///
    /// Field names are reported the way they appear in request bodies (`desktopAds`).
    pub fn invalid(message: impl Into<String>, errors: ValidationErrors) -> Self {
        let details: Map<String, Value> = errors
            .field_errors()
            .into_iter()
            .map(|(field, errs)| {
                let errs = serde_json::to_value(errs).unwrap_or_else(|_| json!([]));
                (camel_case(&field), errs)
            })
            .collect();
        Self::bad_request(message, Value::Object(details))
    }

    /// True for both uniqueness failures, regardless of the status they render as.
    pub fn is_conflict(&self) -> bool {
        matches!(self, Self::Conflict { .. } | Self::Duplicate { .. })
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Validation { .. } | Self::Duplicate { .. } => StatusCode::BAD_REQUEST,
            Self::NotFound { .. } => StatusCode::NOT_FOUND,
            Self::Conflict { .. } => StatusCode::CONFLICT,
        }
    }

    pub fn to_error_info(&self) -> ErrorInfo {
        let (code, message, details) = match self {
            Self::Validation { message, details } => ("validation_error", message, details),
            Self::NotFound { message, details } => ("not_found", message, details),
            Self::Conflict { message, details } => ("conflict", message, details),
            Self::Duplicate { message, details } => ("duplicate", message, details),
        };

        ErrorInfo {
            code,
            message: message.clone(),
            details: details.clone(),
        }
    }
}

/// `desktop_ads` -> `desktopAds`.
fn camel_case(field: &str) -> String {
    let mut out = String::with_capacity(field.len());
    let mut upper = false;
    for c in field.chars() {
        if c == '_' {
            upper = true;
        } else if upper {
            out.extend(c.to_uppercase());
            upper = false;
        } else {
            out.push(c);
        }
    }
    out
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::bad_request(
            "Invalid JSON body",
            json!({ "reason": rejection.body_text() }),
        )
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = ErrorBody {
            error: self.to_error_info(),
        };

        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(
            AppError::bad_request("x", json!({})).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AppError::not_found("x", json!({})).status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            AppError::conflict("x", json!({})).status_code(),
            StatusCode::CONFLICT
        );
        assert_eq!(
            AppError::duplicate("x", json!({})).status_code(),
            StatusCode::BAD_REQUEST
        );
    }

    #[test]
    fn test_is_conflict() {
        assert!(AppError::conflict("x", json!({})).is_conflict());
        assert!(AppError::duplicate("x", json!({})).is_conflict());
        assert!(!AppError::bad_request("x", json!({})).is_conflict());
        assert!(!AppError::not_found("x", json!({})).is_conflict());
    }

    #[test]
    fn test_error_info() {
        let err = AppError::not_found("Publisher not found", json!({"publisher": "p1"}));
        let info = err.to_error_info();

        assert_eq!(info.code, "not_found");
        assert_eq!(info.message, "Publisher not found");
        assert_eq!(info.details["publisher"], "p1");
        assert_eq!(err.to_string(), "Publisher not found");
    }

    #[test]
    fn test_invalid_reports_body_field_names() {
        let mut errors = ValidationErrors::new();
        errors.add("desktop_ads", validator::ValidationError::new("range"));
        errors.add("domain", validator::ValidationError::new("length"));

        let info = AppError::invalid("Invalid domain data", errors).to_error_info();

        assert_eq!(info.code, "validation_error");
        assert_eq!(info.details["desktopAds"][0]["code"], "range");
        assert_eq!(info.details["domain"][0]["code"], "length");
        assert!(info.details.get("desktop_ads").is_none());
    }
}
