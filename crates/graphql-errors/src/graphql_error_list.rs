use crate::graphql_error::MESSAGE_PREFIX;
use crate::GraphQLError;

/// Textual form of a [`GraphQLErrorList`] that contains no errors.
const EMPTY_LIST_TEXT: &str = "no errors";

/// Separator placed between messages when rendering a [`GraphQLErrorList`].
const MESSAGE_SEPARATOR: &str = "; ";

/// The ordered batch of errors returned by a GraphQL server.
///
/// This is an [`std::error::Error`] in its own right, so it can be returned
/// through generic error channels. Callers that want the structured entries
/// recover them by downcasting:
///
/// ```
/// # use graphql_errors::GraphQLError;
/// # use graphql_errors::GraphQLErrorList;
/// let err: Box<dyn std::error::Error> =
///     Box::new(GraphQLErrorList::from(vec![GraphQLError::new("boom")]));
///
/// let gql_errors = err.downcast_ref::<GraphQLErrorList>().unwrap();
/// assert_eq!(gql_errors.len(), 1);
/// ```
///
/// Once constructed the list can only grow: entries are never removed,
/// reordered, or mutated in place.
#[derive(Clone, Debug, Default, PartialEq, thiserror::Error)]
#[derive(serde::Deserialize, serde::Serialize)]
#[serde(transparent)]
#[error("{}", self.format_oneline())]
pub struct GraphQLErrorList {
    errors: Vec<GraphQLError>,
}

impl GraphQLErrorList {
    /// Creates an empty list.
    pub fn new() -> Self {
        Self { errors: vec![] }
    }

    /// Appends an error to the end of the list.
    pub fn push(&mut self, error: GraphQLError) {
        self.errors.push(error);
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn get(&self, idx: usize) -> Option<&GraphQLError> {
        self.errors.get(idx)
    }

    pub fn as_slice(&self) -> &[GraphQLError] {
        self.errors.as_slice()
    }

    /// Iterates the errors in stored order.
    pub fn iter(&self) -> std::slice::Iter<'_, GraphQLError> {
        self.errors.iter()
    }

    /// Formats every error message in this list as a single line.
    ///
    /// Produces output like:
    /// ```text
    /// graphql: E1; E2; E3
    /// ```
    ///
    /// An empty list always formats as `no errors`.
    pub fn format_oneline(&self) -> String {
        if self.errors.is_empty() {
            return EMPTY_LIST_TEXT.to_string();
        }

        let messages_len: usize =
            self.errors.iter().map(|error| error.message.len()).sum();
        let separators_len =
            MESSAGE_SEPARATOR.len() * (self.errors.len() - 1);
        let mut output = String::with_capacity(
            MESSAGE_PREFIX.len() + messages_len + separators_len,
        );

        output.push_str(MESSAGE_PREFIX);
        for (idx, error) in self.errors.iter().enumerate() {
            if idx > 0 {
                output.push_str(MESSAGE_SEPARATOR);
            }
            output.push_str(&error.message);
        }
        output
    }
}

impl From<Vec<GraphQLError>> for GraphQLErrorList {
    fn from(errors: Vec<GraphQLError>) -> Self {
        Self { errors }
    }
}

impl From<GraphQLError> for GraphQLErrorList {
    fn from(error: GraphQLError) -> Self {
        Self { errors: vec![error] }
    }
}

impl FromIterator<GraphQLError> for GraphQLErrorList {
    fn from_iter<I: IntoIterator<Item = GraphQLError>>(iter: I) -> Self {
        Self {
            errors: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for GraphQLErrorList {
    type Item = GraphQLError;
    type IntoIter = std::vec::IntoIter<GraphQLError>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.into_iter()
    }
}

impl<'a> IntoIterator for &'a GraphQLErrorList {
    type Item = &'a GraphQLError;
    type IntoIter = std::slice::Iter<'a, GraphQLError>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.iter()
    }
}
