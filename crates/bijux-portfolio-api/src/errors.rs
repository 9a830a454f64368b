// SPDX-License-Identifier: Apache-2.0

use bijux_portfolio_model::{FieldViolation, ProjectId, ValidationError};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use std::fmt::{Display, Formatter};

pub const REQUEST_ID_UNKNOWN: &str = "req-unknown";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[non_exhaustive]
pub enum ApiErrorCode {
    ValidationFailed,
    InvalidQueryParameter,
    InvalidPathParameter,
    InvalidRequestBody,
    ProjectNotFound,
    StaticAssetNotFound,
    RouteNotFound,
    PayloadTooLarge,
    Internal,
}

impl ApiErrorCode {
    pub const ALL: [Self; 9] = [
        Self::ValidationFailed,
        Self::InvalidQueryParameter,
        Self::InvalidPathParameter,
        Self::InvalidRequestBody,
        Self::ProjectNotFound,
        Self::StaticAssetNotFound,
        Self::RouteNotFound,
        Self::PayloadTooLarge,
        Self::Internal,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::ValidationFailed => "ValidationFailed",
            Self::InvalidQueryParameter => "InvalidQueryParameter",
            Self::InvalidPathParameter => "InvalidPathParameter",
            Self::InvalidRequestBody => "InvalidRequestBody",
            Self::ProjectNotFound => "ProjectNotFound",
            Self::StaticAssetNotFound => "StaticAssetNotFound",
            Self::RouteNotFound => "RouteNotFound",
            Self::PayloadTooLarge => "PayloadTooLarge",
            Self::Internal => "Internal",
        }
    }
}

impl Display for ApiErrorCode {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ApiError {
    pub code: ApiErrorCode,
    pub message: String,
    pub details: Value,
    pub request_id: String,
}

impl ApiError {
    #[must_use]
    pub fn new(
        code: ApiErrorCode,
        message: impl Into<String>,
        details: Value,
        request_id: impl Into<String>,
    ) -> Self {
        Self {
            code,
            message: message.into(),
            details,
            request_id: request_id.into(),
        }
    }

    #[must_use]
    pub fn with_request_id(mut self, request_id: impl Into<String>) -> Self {
        self.request_id = request_id.into();
        self
    }

    fn from_violations(code: ApiErrorCode, violations: Vec<FieldViolation>) -> Self {
        Self::new(
            code,
            "validation failed",
            json!({"field_errors": violations}),
            REQUEST_ID_UNKNOWN,
        )
    }

    #[must_use]
    pub fn validation_failed(violations: Vec<FieldViolation>) -> Self {
        Self::from_violations(ApiErrorCode::ValidationFailed, violations)
    }

    #[must_use]
    pub fn invalid_query(violations: Vec<FieldViolation>) -> Self {
        Self::from_violations(ApiErrorCode::InvalidQueryParameter, violations)
    }

    #[must_use]
    pub fn invalid_path(violation: FieldViolation) -> Self {
        Self::from_violations(ApiErrorCode::InvalidPathParameter, vec![violation])
    }

    #[must_use]
    pub fn invalid_body(violations: Vec<FieldViolation>) -> Self {
        Self::from_violations(ApiErrorCode::InvalidRequestBody, violations)
    }

    #[must_use]
    pub fn project_not_found(id: ProjectId) -> Self {
        Self::new(
            ApiErrorCode::ProjectNotFound,
            format!("Project with ID {id} not found"),
            json!({"project_id": id.get()}),
            REQUEST_ID_UNKNOWN,
        )
    }

    /// Same as [`ApiError::project_not_found`] for a digit string wider than
    /// any allocatable id; the digits are echoed verbatim.
    #[must_use]
    pub fn project_not_found_raw(digits: &str) -> Self {
        Self::new(
            ApiErrorCode::ProjectNotFound,
            format!("Project with ID {digits} not found"),
            json!({"project_id": digits}),
            REQUEST_ID_UNKNOWN,
        )
    }

    #[must_use]
    pub fn static_asset_not_found(path: &str) -> Self {
        Self::new(
            ApiErrorCode::StaticAssetNotFound,
            "Not Found",
            json!({"path": path}),
            REQUEST_ID_UNKNOWN,
        )
    }

    #[must_use]
    pub fn route_not_found(method: &str, path: &str) -> Self {
        Self::new(
            ApiErrorCode::RouteNotFound,
            "Not Found",
            json!({"method": method, "path": path}),
            REQUEST_ID_UNKNOWN,
        )
    }

    #[must_use]
    pub fn payload_too_large(limit_bytes: usize) -> Self {
        Self::new(
            ApiErrorCode::PayloadTooLarge,
            "request body too large",
            json!({"limit_bytes": limit_bytes}),
            REQUEST_ID_UNKNOWN,
        )
    }

    /// Details stay empty; the cause is logged server side only.
    #[must_use]
    pub fn internal() -> Self {
        Self::new(
            ApiErrorCode::Internal,
            "Internal Server Error",
            json!({}),
            REQUEST_ID_UNKNOWN,
        )
    }

    /// Field violations carried in `details.field_errors`, if any.
    #[must_use]
    pub fn field_errors(&self) -> Vec<FieldViolation> {
        self.details
            .get("field_errors")
            .cloned()
            .and_then(|v| serde_json::from_value(v).ok())
            .unwrap_or_default()
    }
}

impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        Self::validation_failed(err.into_violations())
    }
}

impl Display for ApiError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.code, self.message)
    }
}

impl std::error::Error for ApiError {}
