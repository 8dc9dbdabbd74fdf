//! Structured representations of the errors a GraphQL server reports on a
//! response envelope.
//!
//! [`GraphQLErrorList`] implements [`std::error::Error`], so it can flow
//! through any generic error channel (`Box<dyn Error>`, `?`, etc.) and still
//! be recovered with full structure by downcasting:
//!
//! ```
//! use graphql_errors::GraphQLError;
//! use graphql_errors::GraphQLErrorList;
//!
//! fn run() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
//!     Err(GraphQLErrorList::from(GraphQLError::new("Name is required")).into())
//! }
//!
//! let err = run().unwrap_err();
//! assert_eq!(err.to_string(), "graphql: Name is required");
//! if let Some(gql_errors) = err.downcast_ref::<GraphQLErrorList>() {
//!     for error in gql_errors {
//!         assert_eq!(error.message, "Name is required");
//!     }
//! }
//! ```

mod extension_value;
mod graphql_error;
mod graphql_error_list;
mod location;
mod path_segment;
#[cfg(feature = "json")]
pub mod response;
mod serde_helpers;

pub use extension_value::ExtensionValue;
pub use graphql_error::GraphQLError;
pub use graphql_error::GraphQLErrorExtensions;
pub use graphql_error_list::GraphQLErrorList;
pub use location::Location;
pub use path_segment::PathSegment;

#[cfg(test)]
mod tests;
