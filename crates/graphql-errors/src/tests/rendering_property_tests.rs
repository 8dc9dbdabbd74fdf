//! Property tests for the textual forms of `GraphQLError` and
//! `GraphQLErrorList`.

use crate::GraphQLError;
use crate::GraphQLErrorList;
use crate::Location;
use crate::PathSegment;
use proptest::prelude::*;

#[test]
fn single_error_renders_prefix_plus_message() {
    proptest!(|(message in any::<String>())| {
        let error = GraphQLError::new(message.clone());
        let expected = format!("graphql: {message}");

        assert_eq!(error.to_string(), expected.clone());
        assert_eq!(error.to_string(), expected);
    })
}

#[test]
fn non_empty_list_renders_joined_messages() {
    proptest!(|(messages in prop::collection::vec(any::<String>(), 1..8))| {
        let errors: GraphQLErrorList =
            messages.iter().map(|msg| GraphQLError::new(msg.as_str())).collect();
        let expected = format!("graphql: {}", messages.join("; "));

        assert_eq!(errors.to_string(), expected.clone());
        assert_eq!(errors.format_oneline(), expected);
    })
}

#[test]
fn details_never_affect_rendering() {
    proptest!(|(
        message in any::<String>(),
        line in any::<i64>(),
        column in any::<i64>(),
        field in any::<String>(),
        idx in any::<usize>(),
        code in any::<String>()
    )| {
        let bare = GraphQLError::new(message.clone());
        let detailed = GraphQLError::new(message)
            .with_locations([Location::new(line, column)])
            .with_path([PathSegment::Name(field), PathSegment::Index(idx)])
            .with_extension("code", code);

        assert_eq!(bare.to_string(), detailed.to_string());
        assert_eq!(
            GraphQLErrorList::from(bare).to_string(),
            GraphQLErrorList::from(detailed).to_string()
        );
    })
}
