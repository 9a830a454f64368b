// SPDX-License-Identifier: Apache-2.0

use crate::project::{Project, ProjectId};
use crate::validation::{Constraint, FieldViolation, ValidationError};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use std::collections::BTreeSet;

pub const OWNER_NAME: &str = "Alex Doe";
pub const OWNER_TITLE: &str = "Software Developer";
pub const OWNER_BIO: &str = "Passionate developer creating web solutions with Rust!";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
#[non_exhaustive]
pub struct Portfolio {
    pub name: String,
    pub title: String,
    pub bio: String,
    #[serde(default)]
    pub projects: Vec<Project>,
}

impl Portfolio {
    /// Builds a portfolio after checking owner fields and id uniqueness.
    pub fn new(
        name: impl Into<String>,
        title: impl Into<String>,
        bio: impl Into<String>,
        projects: Vec<Project>,
    ) -> Result<Self, ValidationError> {
        let out = Self {
            name: name.into(),
            title: title.into(),
            bio: bio.into(),
            projects,
        };
        out.validate()?;
        Ok(out)
    }

    /// Owner profile plus the two projects every fresh process starts with.
    #[must_use]
    pub fn seed() -> Self {
        Self {
            name: OWNER_NAME.to_string(),
            title: OWNER_TITLE.to_string(),
            bio: OWNER_BIO.to_string(),
            projects: vec![
                Project {
                    id: ProjectId::FIRST,
                    title: "Portfolio API".to_string(),
                    description: "This very API!".to_string(),
                    technologies: vec!["Rust".into(), "axum".into(), "tokio".into()],
                    url: None,
                },
                Project {
                    id: ProjectId::FIRST.successor(),
                    title: "E-commerce Platform".to_string(),
                    description: "A conceptual online store backend.".to_string(),
                    technologies: vec![
                        "Rust".into(),
                        "axum".into(),
                        "PostgreSQL".into(),
                        "Docker".into(),
                    ],
                    url: Some("https://example-store.com".to_string()),
                },
            ],
        }
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        let mut violations = Vec::new();
        for (field, value) in [("name", &self.name), ("title", &self.title), ("bio", &self.bio)] {
            if value.trim().is_empty() {
                violations.push(FieldViolation::new(
                    &[field],
                    Constraint::MinLength,
                    "String should have at least 1 character",
                    Value::String(value.clone()),
                ));
            }
        }
        let mut seen = BTreeSet::new();
        for (idx, project) in self.projects.iter().enumerate() {
            if !seen.insert(project.id) {
                let index = idx.to_string();
                violations.push(FieldViolation::new(
                    &["projects", index.as_str(), "id"],
                    Constraint::Unique,
                    format!("duplicate project id {}", project.id),
                    json!(project.id.get()),
                ));
            }
        }
        if violations.is_empty() {
            Ok(())
        } else {
            Err(ValidationError(violations))
        }
    }

    /// First id the allocator may hand out: `max(existing) + 1`, or 1 when empty.
    #[must_use]
    pub fn next_project_id(&self) -> ProjectId {
        self.projects
            .iter()
            .map(|p| p.id)
            .max()
            .map_or(ProjectId::FIRST, ProjectId::successor)
    }
}
