use bijux_portfolio_api::{
    map_error, parse_list_projects_params, parse_project_id, ApiError, ApiErrorCode,
    DEFAULT_LIMIT, MAX_LIMIT,
};
use bijux_portfolio_model::Constraint;
use proptest::prelude::*;
use std::collections::BTreeMap;

fn query(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
    pairs
        .iter()
        .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
        .collect()
}

#[test]
fn pagination_defaults_apply_when_absent() {
    let parsed = parse_list_projects_params(&BTreeMap::new()).expect("defaults");
    assert_eq!(parsed.skip, 0);
    assert_eq!(parsed.limit, DEFAULT_LIMIT);
}

#[test]
fn limit_bounds_are_enforced() {
    let zero = parse_list_projects_params(&query(&[("limit", "0")])).expect_err("limit=0");
    assert_eq!(zero.code, ApiErrorCode::InvalidQueryParameter);
    assert_eq!(zero.field_errors()[0].constraint, Constraint::Ge);

    let over = parse_list_projects_params(&query(&[("limit", "101")])).expect_err("limit>max");
    assert_eq!(over.field_errors()[0].constraint, Constraint::Le);
    assert_eq!(over.field_errors()[0].location, vec!["query", "limit"]);

    let max = parse_list_projects_params(&query(&[("limit", "100")])).expect("limit=max");
    assert_eq!(max.limit, MAX_LIMIT);
}

#[test]
fn negative_skip_is_rejected() {
    let err = parse_list_projects_params(&query(&[("skip", "-1")])).expect_err("skip<0");
    let violation = &err.field_errors()[0];
    assert_eq!(violation.location, vec!["query", "skip"]);
    assert_eq!(violation.constraint, Constraint::Ge);
}

#[test]
fn non_integer_values_are_int_parsing_errors() {
    let err = parse_list_projects_params(&query(&[("skip", "abc"), ("limit", "1.5")]))
        .expect_err("non-integer");
    let constraints: Vec<_> = err.field_errors().iter().map(|v| v.constraint).collect();
    assert_eq!(constraints, vec![Constraint::IntParsing, Constraint::IntParsing]);
    assert_eq!(map_error(&err).status_code, 422);
}

#[test]
fn unknown_query_keys_are_ignored() {
    let parsed =
        parse_list_projects_params(&query(&[("page", "9"), ("limit", "3")])).expect("ignored");
    assert_eq!(parsed.limit, 3);
}

#[test]
fn path_id_must_be_a_positive_integer() {
    assert_eq!(parse_project_id("1").expect("id").get(), 1);

    for (raw, constraint) in [
        ("0", Constraint::Gt),
        ("-3", Constraint::Gt),
        ("abc", Constraint::IntParsing),
        ("1.0", Constraint::IntParsing),
    ] {
        let err = parse_project_id(raw).expect_err(raw);
        assert_eq!(err.code, ApiErrorCode::InvalidPathParameter);
        let violation = &err.field_errors()[0];
        assert_eq!(violation.location, vec!["path", "project_id"]);
        assert_eq!(violation.constraint, constraint, "{raw}");
    }
}

#[test]
fn oversized_integers_saturate_instead_of_failing_to_parse() {
    let huge = "99999999999999999999";
    let parsed = parse_list_projects_params(&query(&[("skip", huge)])).expect("huge skip");
    assert_eq!(parsed.skip, usize::MAX);

    let over = parse_list_projects_params(&query(&[("limit", huge)])).expect_err("huge limit");
    assert_eq!(over.field_errors()[0].constraint, Constraint::Le);

    let negative = format!("-{huge}");
    let err = parse_list_projects_params(&query(&[("skip", &negative), ("limit", &negative)]))
        .expect_err("huge negatives");
    let constraints: Vec<_> = err.field_errors().iter().map(|v| v.constraint).collect();
    assert_eq!(constraints, vec![Constraint::Ge, Constraint::Ge]);
}

#[test]
fn path_ids_cover_the_whole_u64_range() {
    let past_i64 = parse_project_id("9223372036854775808").expect("above i64::MAX");
    assert_eq!(past_i64.get(), 9_223_372_036_854_775_808);
    assert_eq!(
        parse_project_id("18446744073709551615").expect("u64::MAX").get(),
        u64::MAX
    );
    assert_eq!(parse_project_id("+7").expect("explicit sign").get(), 7);

    let beyond = parse_project_id("99999999999999999999").expect_err("past u64::MAX");
    assert_eq!(beyond.code, ApiErrorCode::ProjectNotFound);
    assert_eq!(beyond.message, "Project with ID 99999999999999999999 not found");
    assert_eq!(map_error(&beyond).status_code, 404);

    let negative = parse_project_id("-99999999999999999999").expect_err("huge negative");
    assert_eq!(negative.code, ApiErrorCode::InvalidPathParameter);
    assert_eq!(negative.field_errors()[0].constraint, Constraint::Gt);

    for raw in ["", "-", "+", "1e3", "0x10"] {
        let err = parse_project_id(raw).expect_err(raw);
        assert_eq!(err.field_errors()[0].constraint, Constraint::IntParsing, "{raw:?}");
    }
}

#[test]
fn error_schema_rejects_unknown_fields() {
    let raw = r#"{"code":"InvalidQueryParameter","message":"bad","details":{},"request_id":"r","extra":1}"#;
    let err = serde_json::from_str::<ApiError>(raw).expect_err("deny unknown fields");
    assert!(err.to_string().contains("unknown field"));
}

#[test]
fn status_mapping_covers_every_code() {
    for code in ApiErrorCode::ALL {
        let err = ApiError::new(code, "m", serde_json::json!({}), "r");
        let expected = match code {
            ApiErrorCode::ProjectNotFound
            | ApiErrorCode::StaticAssetNotFound
            | ApiErrorCode::RouteNotFound => 404,
            ApiErrorCode::PayloadTooLarge => 413,
            ApiErrorCode::Internal => 500,
            _ => 422,
        };
        assert_eq!(map_error(&err).status_code, expected, "{code}");
    }
}

proptest! {
    #[test]
    fn any_in_range_pagination_is_accepted(skip in 0usize..10_000, limit in 1usize..=MAX_LIMIT) {
        let q = query(&[("skip", &skip.to_string()), ("limit", &limit.to_string())]);
        let parsed = parse_list_projects_params(&q).expect("in range");
        prop_assert_eq!(parsed.skip, skip);
        prop_assert_eq!(parsed.limit, limit);
    }

    #[test]
    fn any_out_of_range_limit_is_rejected(limit in (MAX_LIMIT as i64 + 1)..1_000_000i64) {
        let q = query(&[("limit", &limit.to_string())]);
        prop_assert!(parse_list_projects_params(&q).is_err());
    }
}
