// SPDX-License-Identifier: Apache-2.0

use crate::errors::ApiError;
use bijux_portfolio_model::{Constraint, FieldViolation, ProjectId};
use serde_json::Value;
use std::collections::BTreeMap;

pub const DEFAULT_LIMIT: usize = 10;
pub const MAX_LIMIT: usize = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListProjectsParams {
    pub skip: usize,
    pub limit: usize,
}

impl Default for ListProjectsParams {
    fn default() -> Self {
        Self {
            skip: 0,
            limit: DEFAULT_LIMIT,
        }
    }
}

fn int_parsing(location: &[&str], raw: &str) -> FieldViolation {
    FieldViolation::new(
        location,
        Constraint::IntParsing,
        "Input should be a valid integer, unable to parse string as an integer",
        Value::String(raw.to_string()),
    )
}

/// A query or path integer after sign and digit checks; digit strings too
/// long for `u64` saturate instead of failing to parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum IntInput {
    Negative,
    NonNegative(u64),
    AboveU64,
}

fn parse_int(location: &[&str], raw: &str) -> Result<IntInput, FieldViolation> {
    let trimmed = raw.trim();
    let (negative, digits) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(int_parsing(location, raw));
    }
    let magnitude = digits.parse::<u64>().ok();
    Ok(match (negative, magnitude) {
        (true, Some(0)) => IntInput::NonNegative(0),
        (true, _) => IntInput::Negative,
        (false, Some(value)) => IntInput::NonNegative(value),
        (false, None) => IntInput::AboveU64,
    })
}

/// Parses `skip` and `limit`; unknown keys are ignored and every bad value is reported.
pub fn parse_list_projects_params(
    query: &BTreeMap<String, String>,
) -> Result<ListProjectsParams, ApiError> {
    let mut violations = Vec::new();
    let mut params = ListProjectsParams::default();

    if let Some(raw) = query.get("skip") {
        let location = ["query", "skip"];
        match parse_int(&location, raw) {
            Ok(IntInput::Negative) => violations.push(FieldViolation::new(
                &location,
                Constraint::Ge,
                "Input should be greater than or equal to 0",
                Value::String(raw.clone()),
            )),
            Ok(IntInput::NonNegative(value)) => {
                params.skip = usize::try_from(value).unwrap_or(usize::MAX);
            }
            Ok(IntInput::AboveU64) => params.skip = usize::MAX,
            Err(violation) => violations.push(violation),
        }
    }

    if let Some(raw) = query.get("limit") {
        let location = ["query", "limit"];
        match parse_int(&location, raw) {
            Ok(IntInput::Negative | IntInput::NonNegative(0)) => {
                violations.push(FieldViolation::new(
                    &location,
                    Constraint::Ge,
                    "Input should be greater than or equal to 1",
                    Value::String(raw.clone()),
                ));
            }
            Ok(IntInput::NonNegative(value)) if value <= MAX_LIMIT as u64 => {
                params.limit = usize::try_from(value).unwrap_or(MAX_LIMIT);
            }
            Ok(IntInput::NonNegative(_) | IntInput::AboveU64) => {
                violations.push(FieldViolation::new(
                    &location,
                    Constraint::Le,
                    format!("Input should be less than or equal to {MAX_LIMIT}"),
                    Value::String(raw.clone()),
                ));
            }
            Err(violation) => violations.push(violation),
        }
    }

    if violations.is_empty() {
        Ok(params)
    } else {
        Err(ApiError::invalid_query(violations))
    }
}

/// Ids past `u64::MAX` can never have been allocated, so they resolve to
/// `ProjectNotFound` rather than a parameter error.
pub fn parse_project_id(raw: &str) -> Result<ProjectId, ApiError> {
    let location = ["path", "project_id"];
    match parse_int(&location, raw).map_err(ApiError::invalid_path)? {
        IntInput::NonNegative(value) => ProjectId::new(value).map_err(|_| not_positive(raw)),
        IntInput::Negative => Err(not_positive(raw)),
        IntInput::AboveU64 => Err(ApiError::project_not_found_raw(raw.trim())),
    }
}

fn not_positive(raw: &str) -> ApiError {
    ApiError::invalid_path(FieldViolation::new(
        &["path", "project_id"],
        Constraint::Gt,
        "Input should be greater than 0",
        Value::String(raw.to_string()),
    ))
}
