// rest-client/src/base.rs
use tracing::debug;

use crate::error::ServiceError;
use crate::http::{HttpClient, HttpError, HttpResponse};
use crate::model::FromResponse;
use crate::options::{QueryParams, RequestOptions};

/// Uniform verb dispatch and error normalization over any [`HttpClient`]
pub struct BaseService<C: HttpClient> {
    http: C,
}

impl<C: HttpClient> BaseService<C> {
    pub fn new(http: C) -> Self {
        Self { http }
    }

    pub fn http(&self) -> &C {
        &self.http
    }

    pub async fn get<E: FromResponse>(
        &self,
        path: &str,
        parameters: Option<&QueryParams>,
        options: RequestOptions,
    ) -> Result<E, ServiceError> {
        debug!(path, "GET");
        let options = Self::generate_request_options(parameters, options);
        Self::map_result(self.http.get(path, options).await)
    }

    pub async fn post<E: FromResponse>(
        &self,
        path: &str,
        body: String,
        options: RequestOptions,
    ) -> Result<E, ServiceError> {
        debug!(path, "POST");
        Self::map_result(self.http.post(path, body, options).await)
    }

    pub async fn put<E: FromResponse>(
        &self,
        path: &str,
        body: String,
        options: RequestOptions,
    ) -> Result<E, ServiceError> {
        debug!(path, "PUT");
        Self::map_result(self.http.put(path, body, options).await)
    }

    pub async fn delete<E: FromResponse>(
        &self,
        path: &str,
        options: RequestOptions,
    ) -> Result<E, ServiceError> {
        debug!(path, "DELETE");
        Self::map_result(self.http.delete(path, options).await)
    }

    /// Merge query parameters into the options
    ///
    /// Without parameters the options come back untouched, with no empty
    /// `params` attached.
    pub fn generate_request_options(
        parameters: Option<&QueryParams>,
        mut options: RequestOptions,
    ) -> RequestOptions {
        let Some(parameters) = parameters else {
            return options;
        };

        let mut params = QueryParams::new();
        for (key, value) in parameters.iter() {
            params.set(key, value);
        }
        options.params = Some(params);
        options
    }

    /// The single translation point from transport errors to service errors
    pub fn handle_error(error: HttpError) -> ServiceError {
        debug!(status = ?error.status(), "request failed: {}", error);
        match error {
            HttpError::Message { message, .. } if !message.is_empty() => ServiceError::new(message),
            HttpError::Opaque(value) => ServiceError::new(value),
            // A blank message counts as absent, forward the error itself
            other => ServiceError::new(other.to_string()),
        }
    }

    fn map_result<E: FromResponse>(
        result: Result<HttpResponse, HttpError>,
    ) -> Result<E, ServiceError> {
        let response = result.map_err(Self::handle_error)?;
        E::from_response(response)
    }
}
