// SPDX-License-Identifier: Apache-2.0

use bijux_portfolio_model::{
    Constraint, Portfolio, ProjectCreate, DESCRIPTION_MIN_LEN, TITLE_MIN_LEN,
};
use proptest::prelude::*;
use proptest::test_runner::Config;

#[test]
fn round_trip_payload_from_docs_is_valid() {
    let payload = ProjectCreate::new(
        "My Project",
        "A long enough description",
        vec!["X".to_string()],
        None,
    );
    assert!(payload.validate().is_ok());
}

#[test]
fn two_char_title_names_the_title_field() {
    let payload = ProjectCreate::new("ab", "A long enough description", Vec::new(), None);
    let err = payload.validate().expect_err("short title");
    assert_eq!(err.violations().len(), 1);
    let violation = &err.violations()[0];
    assert_eq!(violation.field(), Some("title"));
    assert_eq!(violation.constraint, Constraint::MinLength);
    assert_eq!(violation.value, serde_json::json!("ab"));
}

#[test]
fn seed_projects_pass_the_same_check_as_input() {
    for project in Portfolio::seed().projects {
        let resubmitted = ProjectCreate::new(
            project.title.clone(),
            project.description.clone(),
            project.technologies.clone(),
            project.url.clone(),
        );
        assert!(resubmitted.validate().is_ok(), "seed project rejected: {}", project.id);
    }
}

proptest! {
    #![proptest_config(Config::with_cases(128))]
    #[test]
    fn min_length_rules_follow_char_counts(
        title in "\\PC{0,8}",
        description in "\\PC{0,16}",
    ) {
        let payload = ProjectCreate::new(title.clone(), description.clone(), Vec::new(), None);
        let fields: Vec<String> = payload
            .validate()
            .err()
            .map(|e| e.violations().iter().filter_map(|v| v.field().map(str::to_string)).collect())
            .unwrap_or_default();
        prop_assert_eq!(
            fields.contains(&"title".to_string()),
            title.chars().count() < TITLE_MIN_LEN
        );
        prop_assert_eq!(
            fields.contains(&"description".to_string()),
            description.chars().count() < DESCRIPTION_MIN_LEN
        );
    }
}
