use indexmap::IndexMap;

/// An arbitrary, server-provided value stored in a [`GraphQLError`]'s
/// `extensions` map.
///
/// This mirrors the shape of a JSON value. Objects keep the key order the
/// server sent them in, and integers above `i64::MAX` are held as `UInt` so
/// that no number is ever narrowed to a float.
///
/// [`GraphQLError`]: crate::GraphQLError
#[derive(Clone, Debug, PartialEq)]
#[derive(serde::Deserialize, serde::Serialize)]
#[serde(untagged)]
pub enum ExtensionValue {
    Null,
    Bool(bool),
    Int(i64),
    UInt(u64),
    Float(f64),
    String(String),
    List(Vec<ExtensionValue>),
    Object(IndexMap<String, ExtensionValue>),
}

impl ExtensionValue {
    pub fn as_str(&self) -> Option<&str> {
        if let Self::String(str) = self {
            Some(str.as_str())
        } else {
            None
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }
}

impl From<bool> for ExtensionValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<i64> for ExtensionValue {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<u64> for ExtensionValue {
    fn from(value: u64) -> Self {
        match i64::try_from(value) {
            Ok(value) => Self::Int(value),
            Err(_) => Self::UInt(value),
        }
    }
}

impl From<f64> for ExtensionValue {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<&str> for ExtensionValue {
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}

impl From<String> for ExtensionValue {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl From<Vec<ExtensionValue>> for ExtensionValue {
    fn from(values: Vec<ExtensionValue>) -> Self {
        Self::List(values)
    }
}

impl From<IndexMap<String, ExtensionValue>> for ExtensionValue {
    fn from(entries: IndexMap<String, ExtensionValue>) -> Self {
        Self::Object(entries)
    }
}
