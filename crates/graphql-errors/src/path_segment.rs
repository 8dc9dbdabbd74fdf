use crate::ExtensionValue;

/// One segment of the response path attached to a [`GraphQLError`].
///
/// Servers encode field names as JSON strings and list indices as JSON
/// integers; the variant is chosen from the token type when decoding, so a
/// segment is never coerced from one kind to the other.
///
/// Anything else a server puts in a path (a negative number, a float, an
/// object, ...) is kept as-is in `Other` rather than failing the decode of the
/// whole error entry.
///
/// [`GraphQLError`]: crate::GraphQLError
#[derive(Clone, Debug, PartialEq)]
#[derive(serde::Deserialize, serde::Serialize)]
#[serde(untagged)]
pub enum PathSegment {
    /// A response field name (or alias).
    Name(String),

    /// An index into a list-typed response field.
    Index(usize),

    /// A segment that is neither a field name nor a list index.
    Other(ExtensionValue),
}

impl PathSegment {
    pub fn as_name(&self) -> Option<&str> {
        if let Self::Name(name) = self {
            Some(name.as_str())
        } else {
            None
        }
    }

    pub fn as_index(&self) -> Option<usize> {
        if let Self::Index(idx) = self {
            Some(*idx)
        } else {
            None
        }
    }

    pub fn as_other(&self) -> Option<&ExtensionValue> {
        if let Self::Other(value) = self {
            Some(value)
        } else {
            None
        }
    }
}

impl From<&str> for PathSegment {
    fn from(name: &str) -> Self {
        Self::Name(name.to_string())
    }
}

impl From<String> for PathSegment {
    fn from(name: String) -> Self {
        Self::Name(name)
    }
}

impl From<usize> for PathSegment {
    fn from(idx: usize) -> Self {
        Self::Index(idx)
    }
}
