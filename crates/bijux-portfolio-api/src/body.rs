// SPDX-License-Identifier: Apache-2.0

use crate::errors::ApiError;
use bijux_portfolio_model::{Constraint, FieldViolation, ProjectCreate, ValidationError};
use serde_json::{Map, Value};

pub const PROJECT_ENVELOPE_KEY: &str = "project_data";

const BODY: &str = "body";

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

fn type_violation(location: &[&str], expected: &str, value: &Value) -> FieldViolation {
    FieldViolation::new(
        location,
        Constraint::Type,
        format!(
            "Input should be a valid {expected}, got {}",
            json_type_name(value)
        ),
        value.clone(),
    )
}

fn required_string(
    data: &Map<String, Value>,
    field: &str,
    violations: &mut Vec<FieldViolation>,
) -> Option<String> {
    match data.get(field) {
        None => {
            violations.push(FieldViolation::missing(&[field]));
            None
        }
        Some(Value::String(s)) => Some(s.clone()),
        Some(other) => {
            violations.push(type_violation(&[field], "string", other));
            None
        }
    }
}

fn technologies(data: &Map<String, Value>, violations: &mut Vec<FieldViolation>) -> Vec<String> {
    let items = match data.get("technologies") {
        None => {
            violations.push(FieldViolation::missing(&["technologies"]));
            return Vec::new();
        }
        Some(Value::Array(items)) => items,
        Some(other) => {
            violations.push(type_violation(&["technologies"], "list", other));
            return Vec::new();
        }
    };
    let mut out = Vec::with_capacity(items.len());
    for (idx, item) in items.iter().enumerate() {
        match item {
            Value::String(s) => out.push(s.clone()),
            other => {
                let index = idx.to_string();
                violations.push(type_violation(
                    &["technologies", index.as_str()],
                    "string",
                    other,
                ));
            }
        }
    }
    out
}

fn optional_url(data: &Map<String, Value>, violations: &mut Vec<FieldViolation>) -> Option<String> {
    match data.get("url") {
        None | Some(Value::Null) => None,
        Some(Value::String(s)) => Some(s.clone()),
        Some(other) => {
            violations.push(type_violation(&["url"], "string", other));
            None
        }
    }
}

const FIELD_ORDER: [&str; 4] = ["title", "description", "technologies", "url"];

fn field_rank(violation: &FieldViolation) -> usize {
    violation
        .location
        .first()
        .and_then(|head| FIELD_ORDER.iter().position(|f| *f == head.as_str()))
        .unwrap_or(FIELD_ORDER.len())
}

/// Decodes the payload shape, then runs the model rules on every field that
/// decoded. A field with a shape error is not rule checked as well.
fn project_fields(data: &Map<String, Value>) -> Result<ProjectCreate, ValidationError> {
    let mut violations = Vec::new();
    let title = required_string(data, "title", &mut violations);
    let description = required_string(data, "description", &mut violations);
    let technologies = technologies(data, &mut violations);
    let url = optional_url(data, &mut violations);

    let undecoded: Vec<&str> = [
        ("title", title.is_none()),
        ("description", description.is_none()),
    ]
    .into_iter()
    .filter_map(|(field, missing)| missing.then_some(field))
    .collect();
    let candidate = ProjectCreate::new(
        title.unwrap_or_default(),
        description.unwrap_or_default(),
        technologies,
        url,
    );
    if let Err(err) = candidate.validate() {
        violations.extend(
            err.into_violations()
                .into_iter()
                .filter(|v| !undecoded.iter().any(|field| v.field() == Some(*field))),
        );
    }

    if violations.is_empty() {
        Ok(candidate)
    } else {
        violations.sort_by_key(field_rank);
        Err(ValidationError(violations))
    }
}

fn body_error(violation: FieldViolation) -> ApiError {
    ApiError::from(ValidationError::single(violation))
}

/// Decodes a creation request body of shape `{"project_data": {...}}`.
///
/// Every field problem is collected and reported at once under
/// `body.project_data.*`. Unknown keys, including a client supplied `id`,
/// are ignored.
pub fn parse_create_project_body(bytes: &[u8]) -> Result<ProjectCreate, ApiError> {
    let root: Value = serde_json::from_slice(bytes).map_err(|e| {
        body_error(FieldViolation::new(
            &[BODY],
            Constraint::JsonInvalid,
            format!("JSON decode error: {e}"),
            Value::String(String::from_utf8_lossy(bytes).into_owned()),
        ))
    })?;

    let Value::Object(root) = root else {
        return Err(body_error(type_violation(&[BODY], "object", &root)));
    };

    let data = match root.get(PROJECT_ENVELOPE_KEY) {
        None => {
            return Err(body_error(FieldViolation::missing(&[
                BODY,
                PROJECT_ENVELOPE_KEY,
            ])))
        }
        Some(Value::Object(data)) => data,
        Some(other) => {
            return Err(body_error(type_violation(
                &[BODY, PROJECT_ENVELOPE_KEY],
                "object",
                other,
            )))
        }
    };

    project_fields(data).map_err(|err| {
        ApiError::from(ValidationError(
            err.into_violations()
                .into_iter()
                .map(|v| v.prefixed(&[BODY, PROJECT_ENVELOPE_KEY]))
                .collect(),
        ))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn type_names_follow_json_vocabulary() {
        assert_eq!(json_type_name(&Value::Null), "null");
        assert_eq!(json_type_name(&serde_json::json!([1])), "array");
        assert_eq!(json_type_name(&serde_json::json!(1.5)), "number");
    }

    #[test]
    fn missing_fields_are_reported_together() {
        let err = parse_create_project_body(br#"{"project_data":{}}"#).expect_err("empty");
        let locations: Vec<String> = err
            .field_errors()
            .into_iter()
            .map(|v| v.location.join("."))
            .collect();
        assert_eq!(
            locations,
            vec![
                "body.project_data.title",
                "body.project_data.description",
                "body.project_data.technologies",
            ]
        );
    }
}
