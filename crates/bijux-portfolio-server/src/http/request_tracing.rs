// SPDX-License-Identifier: Apache-2.0

use crate::AppState;
use axum::http::HeaderMap;
use std::sync::atomic::{AtomicU64, Ordering};

pub(crate) const REQUEST_ID_HEADER: &str = "x-request-id";

/// Per-request identity, inserted into request extensions by the tracing middleware.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct RequestTrace {
    pub request_id: String,
}

fn next_request_id(seed: &AtomicU64) -> String {
    let id = seed.fetch_add(1, Ordering::Relaxed);
    format!("req-{id:016x}")
}

#[must_use]
pub(crate) fn extract_request_trace(headers: &HeaderMap, state: &AppState) -> RequestTrace {
    let request_id = headers
        .get(REQUEST_ID_HEADER)
        .and_then(|v| v.to_str().ok())
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(ToString::to_string)
        .unwrap_or_else(|| next_request_id(&state.request_id_seed));
    RequestTrace { request_id }
}
