// SPDX-License-Identifier: Apache-2.0

use bijux_portfolio_model::{Portfolio, Project};
use serde_json::{json, Value};

#[test]
fn project_wire_shape_is_stable() {
    let seed = Portfolio::seed();
    let encoded = serde_json::to_value(&seed.projects[0]).expect("encode project");
    assert_eq!(
        encoded,
        json!({
            "id": 1,
            "title": "Portfolio API",
            "description": "This very API!",
            "technologies": ["Rust", "axum", "tokio"],
            "url": null
        })
    );
}

#[test]
fn portfolio_wire_shape_has_owner_fields_then_projects() {
    let encoded = serde_json::to_value(Portfolio::seed()).expect("encode portfolio");
    let obj = encoded.as_object().expect("object");
    let keys: Vec<&str> = obj.keys().map(String::as_str).collect();
    for key in ["name", "title", "bio", "projects"] {
        assert!(keys.contains(&key), "missing key {key}");
    }
    assert_eq!(obj.len(), 4);
    assert_eq!(
        encoded["projects"][1]["url"],
        Value::String("https://example-store.com".to_string())
    );
}

#[test]
fn project_rejects_unknown_fields() {
    let raw = r#"{"id":1,"title":"abc","description":"0123456789","technologies":[],"url":null,"extra":1}"#;
    assert!(serde_json::from_str::<Project>(raw).is_err());
}

#[test]
fn project_id_must_be_an_integer() {
    let raw = r#"{"id":"1","title":"abc","description":"0123456789","technologies":[]}"#;
    assert!(serde_json::from_str::<Project>(raw).is_err());
}
