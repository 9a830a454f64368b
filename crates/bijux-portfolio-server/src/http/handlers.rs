// SPDX-License-Identifier: Apache-2.0

use crate::http::request_tracing::RequestTrace;
use crate::http::response_contract::api_error_response;
use crate::AppState;
use axum::body::Bytes;
use axum::extract::rejection::{BytesRejection, PathRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use axum::http::{header, Method, StatusCode, Uri};
use axum::response::{IntoResponse, Response};
use axum::{Extension, Json};
use bijux_portfolio_api::{
    openapi_spec, parse_create_project_body, parse_list_projects_params, parse_project_id,
    ApiError,
};
use bijux_portfolio_model::{Constraint, FieldViolation};
use serde_json::Value;
use std::collections::BTreeMap;
use tracing::info;

pub(crate) const LANDING_LOCATION: &str = "/static/index.html";

pub(crate) async fn landing_handler() -> Response {
    (StatusCode::FOUND, [(header::LOCATION, LANDING_LOCATION)]).into_response()
}

pub(crate) async fn healthz_handler() -> &'static str {
    "ok"
}

pub(crate) async fn openapi_handler() -> Json<Value> {
    Json(openapi_spec())
}

pub(crate) async fn portfolio_handler(State(state): State<AppState>) -> Response {
    Json(state.store.portfolio().await).into_response()
}

pub(crate) async fn list_projects_handler(
    State(state): State<AppState>,
    Extension(trace): Extension<RequestTrace>,
    query: Result<Query<BTreeMap<String, String>>, QueryRejection>,
) -> Response {
    let Query(query) = match query {
        Ok(query) => query,
        Err(rejection) => {
            let violation = FieldViolation::new(
                &["query"],
                Constraint::Type,
                rejection.body_text(),
                Value::Null,
            );
            return api_error_response(ApiError::invalid_query(vec![violation]), &trace);
        }
    };
    let params = match parse_list_projects_params(&query) {
        Ok(params) => params,
        Err(err) => return api_error_response(err, &trace),
    };
    Json(state.store.list_projects(params.skip, params.limit).await).into_response()
}

pub(crate) async fn project_handler(
    State(state): State<AppState>,
    Extension(trace): Extension<RequestTrace>,
    raw_id: Result<Path<String>, PathRejection>,
) -> Response {
    let id = match raw_id {
        Ok(Path(raw)) => parse_project_id(&raw),
        Err(rejection) => Err(ApiError::invalid_path(FieldViolation::new(
            &["path", "project_id"],
            Constraint::Type,
            rejection.body_text(),
            Value::Null,
        ))),
    };
    let id = match id {
        Ok(id) => id,
        Err(err) => return api_error_response(err, &trace),
    };
    match state.store.project_by_id(id).await {
        Some(project) => Json(project).into_response(),
        None => api_error_response(ApiError::project_not_found(id), &trace),
    }
}

pub(crate) async fn create_project_handler(
    State(state): State<AppState>,
    Extension(trace): Extension<RequestTrace>,
    body: Result<Bytes, BytesRejection>,
) -> Response {
    let body = match body {
        Ok(body) => body,
        Err(rejection) if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE => {
            return api_error_response(
                ApiError::payload_too_large(state.config.max_body_bytes),
                &trace,
            );
        }
        Err(rejection) => {
            let violation = FieldViolation::new(
                &["body"],
                Constraint::Type,
                rejection.body_text(),
                Value::Null,
            );
            return api_error_response(ApiError::invalid_body(vec![violation]), &trace);
        }
    };
    let data = match parse_create_project_body(&body) {
        Ok(data) => data,
        Err(err) => return api_error_response(err, &trace),
    };
    let project = state.store.create_project(data).await;
    info!(project_id = project.id.get(), "project created");
    (StatusCode::CREATED, Json(project)).into_response()
}

pub(crate) async fn route_not_found_handler(
    Extension(trace): Extension<RequestTrace>,
    method: Method,
    uri: Uri,
) -> Response {
    api_error_response(
        ApiError::route_not_found(method.as_str(), uri.path()),
        &trace,
    )
}
