//! Tests for splitting a GraphQL response envelope into data and errors.

use crate::response::GraphQLResponse;
use crate::response::GraphQLResponseDecodeError;
use crate::response::GraphQLResponseExtensions;
use crate::ExtensionValue;
use crate::GraphQLErrorList;
use crate::PathSegment;
use std::error::Error;

#[derive(Debug, PartialEq, serde::Deserialize)]
struct UserData {
    user: Option<User>,
}

#[derive(Debug, PartialEq, serde::Deserialize)]
struct User {
    name: String,
}

// =============================================================================
// Decoding
// =============================================================================

/// A response with only `data` has no errors.
#[test]
fn response_data_only() {
    let response = GraphQLResponse::<UserData>::from_json_str(
        r#"{ "data": { "user": { "name": "Ada" } } }"#,
    ).unwrap();

    assert!(!response.has_errors());
    assert_eq!(
        response.into_result().unwrap(),
        Some(UserData { user: Some(User { name: "Ada".to_string() }) }),
    );
}

/// A `null` errors entry is treated as no errors.
#[test]
fn response_null_errors() {
    let response = GraphQLResponse::<UserData>::from_json_slice(
        br#"{ "data": { "user": null }, "errors": null }"#,
    ).unwrap();

    assert!(response.errors.is_empty());
    assert_eq!(response.into_result().unwrap(), Some(UserData { user: None }));
}

/// Errors win over partial data in `into_result()`.
#[test]
fn response_errors_with_partial_data() {
    let response = GraphQLResponse::<UserData>::from_json_str(r#"{
        "data": { "user": null },
        "errors": [
            { "message": "boom", "path": ["user"] },
            { "message": "second" }
        ]
    }"#).unwrap();

    assert!(response.has_errors());
    assert!(response.data.is_some());

    let errors = response.into_result().unwrap_err();
    assert_eq!(errors.to_string(), "graphql: boom; second");
    assert_eq!(
        errors.get(0).map(|e| e.path.clone()),
        Some(vec![PathSegment::from("user")]),
    );
}

/// A request that failed before execution has errors and no data.
#[test]
fn response_errors_without_data() {
    let response = GraphQLResponse::<UserData>::from_json_str(
        r#"{ "errors": [{ "message": "Name is required" }] }"#,
    ).unwrap();

    assert!(response.data.is_none());
    let err: Box<dyn Error + Send + Sync> =
        Box::new(response.into_result().unwrap_err());
    assert_eq!(err.to_string(), "graphql: Name is required");
    assert!(err.downcast_ref::<GraphQLErrorList>().is_some());
}

/// Response-level extensions decode separately from per-error extensions.
#[test]
fn response_level_extensions() {
    let response: GraphQLResponse = GraphQLResponse::from_json_str(r#"{
        "data": null,
        "extensions": { "cost": 7 }
    }"#).unwrap();

    let expected: GraphQLResponseExtensions =
        [("cost".to_string(), ExtensionValue::Int(7))].into_iter().collect();
    assert_eq!(response.extensions, expected);
    assert_eq!(response.into_result().unwrap(), None);
}

/// An error whose path holds an out-of-shape segment still comes through as
/// a server error rather than a decode failure.
#[test]
fn response_error_with_negative_path_index_is_kept() {
    let response = GraphQLResponse::<UserData>::from_json_str(
        r#"{"errors":[{"message":"Name is required","path":["user",-1]}]}"#,
    ).unwrap();

    let errors = response.into_result().unwrap_err();
    assert_eq!(errors.to_string(), "graphql: Name is required");
    assert_eq!(
        errors.get(0).map(|e| e.path.clone()),
        Some(vec![
            PathSegment::from("user"),
            PathSegment::Other(ExtensionValue::Int(-1)),
        ]),
    );
}

/// An error with an unreadable location still comes through as a server
/// error.
#[test]
fn response_error_with_malformed_location_is_kept() {
    let response = GraphQLResponse::<UserData>::from_json_str(r#"{
        "errors": [{ "message": "boom", "locations": [{ "line": "?" }] }]
    }"#).unwrap();

    let errors = response.into_result().unwrap_err();
    assert_eq!(errors.to_string(), "graphql: boom");
    assert!(errors.get(0).is_some_and(|e| e.locations.is_empty()));
}

// =============================================================================
// Decode failures
// =============================================================================

/// Malformed JSON produces a decode error, which is not a
/// `GraphQLErrorList`.
#[test]
fn response_malformed_json_is_decode_error() {
    let err = GraphQLResponse::<UserData>::from_json_str("{ not json")
        .unwrap_err();

    assert!(matches!(err, GraphQLResponseDecodeError::Json(_)));
    assert!(err.to_string().starts_with("failed to decode GraphQL response: "));

    let boxed: Box<dyn Error + Send + Sync> = Box::new(err);
    assert!(boxed.downcast_ref::<GraphQLErrorList>().is_none());
}

/// An error entry without a message fails to decode.
#[test]
fn response_entry_missing_message_is_decode_error() {
    let result = GraphQLResponse::<UserData>::from_json_str(
        r#"{ "errors": [{ "path": ["user"] }] }"#,
    );
    assert!(result.is_err());
}

// =============================================================================
// Bare error arrays
// =============================================================================

#[test]
fn error_list_from_json_slice() {
    let errors = GraphQLErrorList::from_json_slice(
        br#"[{ "message": "E1" }, { "message": "E2" }]"#,
    ).unwrap();

    assert_eq!(errors.to_string(), "graphql: E1; E2");
}

#[test]
fn error_list_from_json_slice_rejects_non_array() {
    let result = GraphQLErrorList::from_json_slice(br#"{ "message": "E1" }"#);
    assert!(result.is_err());
}
