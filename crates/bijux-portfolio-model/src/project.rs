// SPDX-License-Identifier: Apache-2.0

use crate::validation::{Constraint, FieldViolation, ValidationError};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use std::fmt::{Display, Formatter};
use url::Url;

pub const TITLE_MIN_LEN: usize = 3;
pub const DESCRIPTION_MIN_LEN: usize = 10;
pub const URL_MAX_LEN: usize = 2083;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProjectId(u64);

impl ProjectId {
    pub const FIRST: Self = Self(1);

    pub fn new(raw: u64) -> Result<Self, ValidationError> {
        if raw == 0 {
            return Err(ValidationError::single(FieldViolation::new(
                &["id"],
                Constraint::Gt,
                "Input should be greater than 0",
                json!(raw),
            )));
        }
        Ok(Self(raw))
    }

    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }

    /// The id the allocator hands out after this one.
    #[must_use]
    pub const fn successor(self) -> Self {
        Self(self.0 + 1)
    }
}

impl Display for ProjectId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
#[non_exhaustive]
pub struct Project {
    pub id: ProjectId,
    pub title: String,
    pub description: String,
    pub technologies: Vec<String>,
    pub url: Option<String>,
}

impl Project {
    #[must_use]
    pub fn from_create(id: ProjectId, data: ProjectCreate) -> Self {
        Self {
            id,
            title: data.title,
            description: data.description,
            technologies: data.technologies,
            url: data.url,
        }
    }
}

/// Creation payload. Ids are never client supplied; wire decoding lives at
/// the API boundary, which hands the decoded fields to [`ProjectCreate::validate`].
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub struct ProjectCreate {
    pub title: String,
    pub description: String,
    pub technologies: Vec<String>,
    pub url: Option<String>,
}

impl ProjectCreate {
    #[must_use]
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        technologies: Vec<String>,
        url: Option<String>,
    ) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            technologies,
            url,
        }
    }

    /// Checks every field constraint and reports all failures at once,
    /// in field order. Locations are relative to the payload object.
    pub fn validate(&self) -> Result<(), ValidationError> {
        let violations: Vec<FieldViolation> = [
            check_title(&self.title),
            check_description(&self.description),
            self.url.as_deref().and_then(check_url),
        ]
        .into_iter()
        .flatten()
        .collect();
        if violations.is_empty() {
            Ok(())
        } else {
            Err(ValidationError(violations))
        }
    }
}

fn check_min_chars(field: &str, value: &str, min: usize) -> Option<FieldViolation> {
    if value.chars().count() >= min {
        return None;
    }
    Some(FieldViolation::new(
        &[field],
        Constraint::MinLength,
        format!("String should have at least {min} characters"),
        Value::String(value.to_string()),
    ))
}

fn check_title(title: &str) -> Option<FieldViolation> {
    check_min_chars("title", title, TITLE_MIN_LEN)
}

fn check_description(description: &str) -> Option<FieldViolation> {
    check_min_chars("description", description, DESCRIPTION_MIN_LEN)
}

/// Accepts absolute `http`/`https` URLs that name a host.
fn check_url(raw: &str) -> Option<FieldViolation> {
    let reject = |constraint: Constraint, message: String| {
        Some(FieldViolation::new(
            &["url"],
            constraint,
            message,
            Value::String(raw.to_string()),
        ))
    };
    if raw.chars().count() > URL_MAX_LEN {
        return reject(
            Constraint::MaxLength,
            format!("URL should have at most {URL_MAX_LEN} characters"),
        );
    }
    match Url::parse(raw) {
        Ok(url) => {
            if !matches!(url.scheme(), "http" | "https") {
                return reject(
                    Constraint::Url,
                    "URL scheme should be 'http' or 'https'".to_string(),
                );
            }
            if url.host().is_none() {
                return reject(Constraint::Url, "URL should have a host".to_string());
            }
            None
        }
        Err(e) => reject(
            Constraint::Url,
            format!("Input should be a valid URL, {e}"),
        ),
    }
}
