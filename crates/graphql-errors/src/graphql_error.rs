use crate::serde_helpers::lenient_locations;
use crate::serde_helpers::null_as_default;
use crate::ExtensionValue;
use crate::Location;
use crate::PathSegment;
use indexmap::IndexMap;

/// Prefix applied to the textual form of every non-empty error rendering.
pub(crate) const MESSAGE_PREFIX: &str = "graphql: ";

/// Type alias for the open-ended `extensions` map on a [`GraphQLError`].
///
/// Uses IndexMap so that entries keep the order the server sent them in.
pub type GraphQLErrorExtensions = IndexMap<String, ExtensionValue>;

/// A single error entry from the `errors` array of a GraphQL response.
///
/// All fields are public so that decoders can populate them directly; no
/// validation is performed on any of them. Only `message` participates in the
/// textual form (see [`GraphQLError::format_oneline`]); everything else is
/// available via field access.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
#[derive(serde::Deserialize, serde::Serialize)]
#[error("{}", self.format_oneline())]
pub struct GraphQLError {
    /// Human-readable description of the error, exactly as the server sent
    /// it.
    pub message: String,

    /// Locations in the GraphQL document that caused the error, in server
    /// order.
    #[serde(
        default,
        deserialize_with = "lenient_locations",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub locations: Vec<Location>,

    /// Path of the response field which got the error.
    ///
    /// Empty when the error is not associated with a particular field (e.g.
    /// validation errors raised before execution).
    #[serde(
        default,
        deserialize_with = "null_as_default",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub path: Vec<PathSegment>,

    /// Additional, implementation-defined fields set by the GraphQL service.
    #[serde(
        default,
        deserialize_with = "null_as_default",
        skip_serializing_if = "IndexMap::is_empty"
    )]
    pub extensions: GraphQLErrorExtensions,
}

impl GraphQLError {
    /// Creates a new error with the given message and no locations, path, or
    /// extensions.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            locations: vec![],
            path: vec![],
            extensions: GraphQLErrorExtensions::new(),
        }
    }

    pub fn with_locations(
        mut self,
        locations: impl IntoIterator<Item = Location>,
    ) -> Self {
        self.locations = locations.into_iter().collect();
        self
    }

    pub fn with_path(
        mut self,
        path: impl IntoIterator<Item = PathSegment>,
    ) -> Self {
        self.path = path.into_iter().collect();
        self
    }

    pub fn with_extensions(mut self, extensions: GraphQLErrorExtensions) -> Self {
        self.extensions = extensions;
        self
    }

    /// Adds (or replaces) a single entry in the extensions map.
    pub fn with_extension(
        mut self,
        key: impl Into<String>,
        value: impl Into<ExtensionValue>,
    ) -> Self {
        self.extensions.insert(key.into(), value.into());
        self
    }

    /// Formats this error as a single-line summary.
    ///
    /// Produces output like:
    /// ```text
    /// graphql: Name is required
    /// ```
    ///
    /// The message is inserted verbatim with no escaping, trimming, or
    /// truncation.
    pub fn format_oneline(&self) -> String {
        let mut output =
            String::with_capacity(MESSAGE_PREFIX.len() + self.message.len());
        output.push_str(MESSAGE_PREFIX);
        output.push_str(&self.message);
        output
    }
}
