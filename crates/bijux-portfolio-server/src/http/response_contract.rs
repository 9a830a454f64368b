// SPDX-License-Identifier: Apache-2.0

use crate::http::request_tracing::RequestTrace;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use bijux_portfolio_api::{map_error, ApiError, ApiErrorCode};
use serde_json::json;

#[must_use]
pub(crate) fn api_error_status(err: &ApiError) -> StatusCode {
    StatusCode::from_u16(map_error(err).status_code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
}

/// Renders `{"error": ApiError}` with the request id of the current request.
#[must_use]
pub(crate) fn api_error_response(err: ApiError, trace: &RequestTrace) -> Response {
    let err = err.with_request_id(trace.request_id.as_str());
    let status = api_error_status(&err);
    if err.code == ApiErrorCode::Internal {
        tracing::error!(code = %err.code, "internal error");
    } else {
        tracing::debug!(
            code = %err.code,
            status = status.as_u16(),
            details = %err.details,
            "request rejected"
        );
    }
    (status, Json(json!({"error": err}))).into_response()
}
