//! Splits a decoded GraphQL response envelope into its `data` and `errors`.
//!
//! This performs no transport of any kind; it only interprets bytes that a
//! caller has already received.

use crate::serde_helpers::null_as_default;
use crate::ExtensionValue;
use crate::GraphQLErrorList;
use indexmap::IndexMap;
use serde::de::DeserializeOwned;

/// Type alias for the top-level `extensions` map of a response envelope.
pub type GraphQLResponseExtensions = IndexMap<String, ExtensionValue>;

/// Failure to decode a GraphQL response body.
///
/// This is deliberately a different type than [`GraphQLErrorList`] so that
/// callers can tell a malformed response apart from errors the server
/// reported.
#[derive(Debug, thiserror::Error)]
pub enum GraphQLResponseDecodeError {
    #[error("failed to decode GraphQL response: {0}")]
    Json(#[from] serde_json::Error),
}

/// A GraphQL response envelope.
///
/// A missing or `null` `errors` entry decodes as an empty
/// [`GraphQLErrorList`].
#[derive(Clone, Debug, PartialEq)]
#[derive(serde::Deserialize, serde::Serialize)]
pub struct GraphQLResponse<T = ExtensionValue> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,

    #[serde(
        default,
        deserialize_with = "null_as_default",
        skip_serializing_if = "GraphQLErrorList::is_empty"
    )]
    pub errors: GraphQLErrorList,

    /// Response-level extensions (not to be confused with the per-error
    /// extensions on each [`GraphQLError`](crate::GraphQLError)).
    #[serde(
        default,
        deserialize_with = "null_as_default",
        skip_serializing_if = "IndexMap::is_empty"
    )]
    pub extensions: GraphQLResponseExtensions,
}

impl<T> GraphQLResponse<T> {
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Converts this response into a `Result`.
    ///
    /// Returns `Err` with every reported error whenever the server reported
    /// at least one, even if (partial) `data` was also present. Otherwise
    /// returns whatever `data` the server sent.
    pub fn into_result(self) -> Result<Option<T>, GraphQLErrorList> {
        if self.errors.is_empty() {
            Ok(self.data)
        } else {
            Err(self.errors)
        }
    }

    fn log_decoded(&self) {
        log::trace!(
            "Decoded GraphQL response (data present: {}, errors: {}).",
            self.data.is_some(),
            self.errors.len(),
        );
    }
}

impl<T: DeserializeOwned> GraphQLResponse<T> {
    /// Decodes a response envelope from JSON bytes.
    pub fn from_json_slice(
        bytes: &[u8],
    ) -> Result<Self, GraphQLResponseDecodeError> {
        let response: Self = serde_json::from_slice(bytes)
            .inspect_err(log_decode_failure)?;
        response.log_decoded();
        Ok(response)
    }

    /// Decodes a response envelope from a JSON string.
    pub fn from_json_str(
        json: &str,
    ) -> Result<Self, GraphQLResponseDecodeError> {
        let response: Self = serde_json::from_str(json)
            .inspect_err(log_decode_failure)?;
        response.log_decoded();
        Ok(response)
    }
}

impl GraphQLErrorList {
    /// Decodes a bare JSON `errors` array (as found on a response envelope).
    pub fn from_json_slice(
        bytes: &[u8],
    ) -> Result<Self, GraphQLResponseDecodeError> {
        let errors: Self = serde_json::from_slice(bytes)
            .inspect_err(log_decode_failure)?;
        log::trace!("Decoded {} GraphQL errors.", errors.len());
        Ok(errors)
    }
}

fn log_decode_failure(err: &serde_json::Error) {
    log::debug!("Failed to decode GraphQL response JSON: {err}");
}
