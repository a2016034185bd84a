// rest-client/src/http/mod.rs
use std::fmt;
use std::sync::Arc;

use async_trait::async_trait;

use crate::options::RequestOptions;

/// HTTP method for a request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
}

impl HttpMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Delete => "DELETE",
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An HTTP request described as plain data, handed to the transport.
#[derive(Debug, Clone, PartialEq)]
pub struct HttpRequest {
    pub method: HttpMethod,
    pub path: String,
    pub body: Option<String>,
    pub options: RequestOptions,
}

/// A successful HTTP response described as plain data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub headers: Vec<(String, String)>,
    pub body: String,
}

impl HttpResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            headers: Vec::new(),
            body: body.into(),
        }
    }

    /// Case-insensitive header lookup
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }
}

/// Error from HTTP request
///
/// Transports report either a failure with a human-readable message, or an
/// opaque failure value that carries no message at all.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HttpError {
    Message {
        status: Option<u16>,
        message: String,
    },
    Opaque(String),
}

impl HttpError {
    pub fn message(&self) -> Option<&str> {
        match self {
            HttpError::Message { message, .. } => Some(message),
            HttpError::Opaque(_) => None,
        }
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            HttpError::Message { status, .. } => *status,
            HttpError::Opaque(_) => None,
        }
    }
}

impl fmt::Display for HttpError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HttpError::Message {
                status: Some(status),
                message,
            } => write!(f, "HTTP error {}: {}", status, message),
            HttpError::Message {
                status: None,
                message,
            } => write!(f, "HTTP error: {}", message),
            HttpError::Opaque(value) => write!(f, "{}", value),
        }
    }
}

impl std::error::Error for HttpError {}

/// Generic HTTP client trait - users can implement their own
///
/// Only `send` is required. The verb methods build an [`HttpRequest`] and
/// delegate to it, so a stub transport needs a single method.
#[async_trait]
pub trait HttpClient: Send + Sync {
    /// Execute one request, returning the response on a 2xx status
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, HttpError>;

    async fn get(&self, path: &str, options: RequestOptions) -> Result<HttpResponse, HttpError> {
        self.send(HttpRequest {
            method: HttpMethod::Get,
            path: path.to_string(),
            body: None,
            options,
        })
        .await
    }

    async fn post(
        &self,
        path: &str,
        body: String,
        options: RequestOptions,
    ) -> Result<HttpResponse, HttpError> {
        self.send(HttpRequest {
            method: HttpMethod::Post,
            path: path.to_string(),
            body: Some(body),
            options,
        })
        .await
    }

    async fn put(
        &self,
        path: &str,
        body: String,
        options: RequestOptions,
    ) -> Result<HttpResponse, HttpError> {
        self.send(HttpRequest {
            method: HttpMethod::Put,
            path: path.to_string(),
            body: Some(body),
            options,
        })
        .await
    }

    async fn delete(&self, path: &str, options: RequestOptions) -> Result<HttpResponse, HttpError> {
        self.send(HttpRequest {
            method: HttpMethod::Delete,
            path: path.to_string(),
            body: None,
            options,
        })
        .await
    }
}

#[async_trait]
impl<T: HttpClient + ?Sized> HttpClient for &T {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, HttpError> {
        (**self).send(request).await
    }
}

#[async_trait]
impl<T: HttpClient + ?Sized> HttpClient for Arc<T> {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, HttpError> {
        (**self).send(request).await
    }
}

#[async_trait]
impl<T: HttpClient + ?Sized> HttpClient for Box<T> {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, HttpError> {
        (**self).send(request).await
    }
}

#[cfg(feature = "reqwest")]
pub mod reqwest;

#[cfg(feature = "reqwest")]
pub use self::reqwest::ReqwestClient;
