// rest-client/src/model.rs
use std::collections::HashMap;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::error::ServiceError;
use crate::http::HttpResponse;

/// A request model that renders itself to a transport-ready body
pub trait Serializable {
    fn to_body(&self) -> Result<String, ServiceError>;
}

/// Render any serde model as a JSON body
///
/// Convenience for `Serializable` impls:
///
/// ```ignore
/// impl Serializable for Item {
///     fn to_body(&self) -> Result<String, ServiceError> {
///         json_body(self)
///     }
/// }
/// ```
pub fn json_body<T: Serialize + ?Sized>(model: &T) -> Result<String, ServiceError> {
    Ok(serde_json::to_string(model)?)
}

/// Decoding of a successful response into the caller's payload type
///
/// `HttpResponse` itself passes through unchanged; any other type is decoded
/// from the JSON body. An empty body decodes as `null`.
///
/// `()` only accepts an empty or `null` body, so a write that answers with
/// content fails to decode as `()`. Use `Option<_>` for writes that may or
/// may not return a payload, or `HttpResponse` to skip decoding entirely.
pub trait FromResponse: Sized {
    fn from_response(response: HttpResponse) -> Result<Self, ServiceError>;
}

impl FromResponse for HttpResponse {
    fn from_response(response: HttpResponse) -> Result<Self, ServiceError> {
        Ok(response)
    }
}

impl<T: DeserializeOwned> FromResponse for T {
    fn from_response(response: HttpResponse) -> Result<Self, ServiceError> {
        let body = response.body.trim();
        let body = if body.is_empty() { "null" } else { body };
        Ok(serde_json::from_str(body)?)
    }
}

/// Conventional write-result envelope returned by many CRUD backends
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenericResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub data: HashMap<String, String>,
}

impl Serializable for GenericResponse {
    fn to_body(&self) -> Result<String, ServiceError> {
        json_body(self)
    }
}
