use crate::ExtensionValue;

/// A point in the GraphQL document that an error refers to.
///
/// # Indexing Convention
///
/// **Both values are 1-based**, as reported by GraphQL servers. A value of `0`
/// is conventionally used by some servers to mean "unknown"; it is stored
/// as-is. Out-of-range values (e.g. negative numbers) are stored as-is too.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
#[derive(serde::Deserialize, serde::Serialize)]
pub struct Location {
    /// Line number (1-based: first line is 1)
    line: i64,

    /// Column number (1-based: first column is 1)
    column: i64,
}

impl Location {
    pub fn new(line: i64, column: i64) -> Self {
        Self { line, column }
    }

    /// Returns the 1-based line number.
    pub fn line(&self) -> i64 {
        self.line
    }

    /// Returns the 1-based column number.
    pub fn column(&self) -> i64 {
        self.column
    }

    /// Reads a location out of an already-decoded `{ "line", "column" }`
    /// object.
    ///
    /// Integral floats (e.g. `3.0`) are accepted. Returns `None` if either
    /// field is missing or is not an integer that fits in an `i64`.
    pub(crate) fn from_extension_value(value: &ExtensionValue) -> Option<Self> {
        let ExtensionValue::Object(entries) = value else {
            return None;
        };
        Some(Self {
            line: integral_value(entries.get("line")?)?,
            column: integral_value(entries.get("column")?)?,
        })
    }
}

fn integral_value(value: &ExtensionValue) -> Option<i64> {
    match value {
        ExtensionValue::Int(int) => Some(*int),
        ExtensionValue::Float(float)
            if float.fract() == 0.0
                && *float >= i64::MIN as f64
                && *float < i64::MAX as f64 =>
            Some(*float as i64),
        _ => None,
    }
}
