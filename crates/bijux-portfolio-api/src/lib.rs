#![forbid(unsafe_code)]
//! HTTP-free contract of the portfolio API.
//!
//! Every handler validates its inputs through this crate before touching the
//! store, so a rejected request is described here once for all transports.

mod body;
mod error_mapping;
mod errors;
mod openapi;
mod params;

pub use body::{parse_create_project_body, PROJECT_ENVELOPE_KEY};
pub use error_mapping::{map_error, ApiErrorMapping, API_ERROR_SCHEMA_REF};
pub use errors::{ApiError, ApiErrorCode, REQUEST_ID_UNKNOWN};
pub use openapi::{openapi_drift, openapi_spec, API_TITLE, API_VERSION};
pub use params::{
    parse_list_projects_params, parse_project_id, ListProjectsParams, DEFAULT_LIMIT, MAX_LIMIT,
};

pub const CRATE_NAME: &str = "bijux-portfolio-api";
