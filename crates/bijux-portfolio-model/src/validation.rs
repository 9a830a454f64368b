// SPDX-License-Identifier: Apache-2.0

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt::{Display, Formatter};

/// Rule a rejected input failed to satisfy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[non_exhaustive]
pub enum Constraint {
    Missing,
    Type,
    MinLength,
    MaxLength,
    Url,
    Unique,
    Ge,
    Le,
    Gt,
    IntParsing,
    JsonInvalid,
}

impl Constraint {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Missing => "missing",
            Self::Type => "type",
            Self::MinLength => "min_length",
            Self::MaxLength => "max_length",
            Self::Url => "url",
            Self::Unique => "unique",
            Self::Ge => "ge",
            Self::Le => "le",
            Self::Gt => "gt",
            Self::IntParsing => "int_parsing",
            Self::JsonInvalid => "json_invalid",
        }
    }
}

impl Display for Constraint {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One rejected input: where it was, what rule it broke, and what was sent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FieldViolation {
    pub location: Vec<String>,
    pub message: String,
    pub constraint: Constraint,
    pub value: Value,
}

impl FieldViolation {
    #[must_use]
    pub fn new(
        location: &[&str],
        constraint: Constraint,
        message: impl Into<String>,
        value: Value,
    ) -> Self {
        Self {
            location: location.iter().map(ToString::to_string).collect(),
            message: message.into(),
            constraint,
            value,
        }
    }

    #[must_use]
    pub fn missing(location: &[&str]) -> Self {
        Self::new(location, Constraint::Missing, "Field required", Value::Null)
    }

    /// Re-roots the location under `prefix`, e.g. `title` -> `body.project_data.title`.
    #[must_use]
    pub fn prefixed(mut self, prefix: &[&str]) -> Self {
        let mut location: Vec<String> = prefix.iter().map(ToString::to_string).collect();
        location.append(&mut self.location);
        self.location = location;
        self
    }

    #[must_use]
    pub fn field(&self) -> Option<&str> {
        self.location.last().map(String::as_str)
    }
}

impl Display for FieldViolation {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}: {} ({})",
            self.location.join("."),
            self.message,
            self.constraint
        )
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError(pub Vec<FieldViolation>);

impl ValidationError {
    #[must_use]
    pub fn single(violation: FieldViolation) -> Self {
        Self(vec![violation])
    }

    #[must_use]
    pub fn violations(&self) -> &[FieldViolation] {
        &self.0
    }

    #[must_use]
    pub fn into_violations(self) -> Vec<FieldViolation> {
        self.0
    }
}

impl Display for ValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let parts: Vec<String> = self.0.iter().map(ToString::to_string).collect();
        write!(f, "validation failed: {}", parts.join("; "))
    }
}

impl std::error::Error for ValidationError {}
