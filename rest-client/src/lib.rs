// rest-client/src/lib.rs
//! Thin CRUD client over a pluggable HTTP transport.
//!
//! [`BaseService`] wraps the four HTTP verbs with uniform options handling
//! and error mapping; [`RestService`] adds resource-oriented operations over
//! one collection path.

pub mod base;
pub mod error;
pub mod http;
pub mod model;
pub mod options;
pub mod rest;

#[cfg(test)]
mod test_support;

pub use base::BaseService;
pub use error::ServiceError;
pub use http::{HttpClient, HttpError, HttpMethod, HttpRequest, HttpResponse};
pub use model::{json_body, FromResponse, GenericResponse, Serializable};
pub use options::{QueryParams, RequestOptions, APPLICATION_JSON, CONTENT_TYPE};
pub use rest::{Id, RestService};

// Re-export reqwest client when feature is enabled
#[cfg(feature = "reqwest")]
pub use http::ReqwestClient;
