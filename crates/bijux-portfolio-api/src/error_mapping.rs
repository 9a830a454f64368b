// SPDX-License-Identifier: Apache-2.0

use crate::{ApiError, ApiErrorCode};

pub const API_ERROR_SCHEMA_REF: &str = "#/components/schemas/ApiError";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ApiErrorMapping {
    pub status_code: u16,
    pub schema_ref: &'static str,
}

#[must_use]
pub fn map_error(error: &ApiError) -> ApiErrorMapping {
    let status_code = match error.code {
        ApiErrorCode::ValidationFailed
        | ApiErrorCode::InvalidQueryParameter
        | ApiErrorCode::InvalidPathParameter
        | ApiErrorCode::InvalidRequestBody => 422,
        ApiErrorCode::ProjectNotFound
        | ApiErrorCode::StaticAssetNotFound
        | ApiErrorCode::RouteNotFound => 404,
        ApiErrorCode::PayloadTooLarge => 413,
        ApiErrorCode::Internal => 500,
    };

    ApiErrorMapping {
        status_code,
        schema_ref: API_ERROR_SCHEMA_REF,
    }
}
