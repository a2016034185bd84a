// rest-client/src/http/reqwest.rs
use super::{HttpClient, HttpError, HttpMethod, HttpRequest, HttpResponse};
use async_trait::async_trait;

#[cfg(feature = "reqwest")]
pub struct ReqwestClient {
    inner: reqwest::Client,
    base_url: Option<String>,
    bearer_token: Option<String>,
    default_headers: Vec<(String, String)>,
}

#[cfg(feature = "reqwest")]
impl ReqwestClient {
    pub fn new() -> Self {
        Self {
            inner: reqwest::Client::new(),
            base_url: None,
            bearer_token: None,
            default_headers: Vec::new(),
        }
    }

    /// Resolve relative request paths against this URL
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    pub fn with_token(mut self, token: String) -> Self {
        self.bearer_token = Some(token);
        self
    }

    pub fn with_default_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.default_headers.push((name.into(), value.into()));
        self
    }

    pub fn base_url(&self) -> Option<&str> {
        self.base_url.as_deref()
    }

    fn resolve_url(&self, path: &str) -> String {
        if path.starts_with("http://") || path.starts_with("https://") {
            return path.to_string();
        }

        match &self.base_url {
            Some(base) => format!(
                "{}/{}",
                base.trim_end_matches('/'),
                path.trim_start_matches('/')
            ),
            None => path.to_string(),
        }
    }
}

#[cfg(feature = "reqwest")]
impl Default for ReqwestClient {
    fn default() -> Self {
        Self::new()
    }
}

/// Pull a `message` field out of a JSON error body
fn error_from_body(status: u16, body: String) -> HttpError {
    let message = serde_json::from_str::<serde_json::Value>(&body)
        .ok()
        .and_then(|v| v.get("message").and_then(|m| m.as_str()).map(String::from));

    match message {
        Some(message) => HttpError::Message {
            status: Some(status),
            message,
        },
        None if body.trim().is_empty() => HttpError::Opaque(format!("HTTP {}", status)),
        None => HttpError::Opaque(body),
    }
}

#[cfg(feature = "reqwest")]
#[async_trait]
impl HttpClient for ReqwestClient {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, HttpError> {
        let url = self.resolve_url(&request.path);
        let mut req = match request.method {
            HttpMethod::Get => self.inner.get(&url),
            HttpMethod::Post => self.inner.post(&url),
            HttpMethod::Put => self.inner.put(&url),
            HttpMethod::Delete => self.inner.delete(&url),
        };

        if let Some(token) = &self.bearer_token {
            req = req.bearer_auth(token);
        }

        for (name, value) in self.default_headers.iter().chain(&request.options.headers) {
            req = req.header(name.as_str(), value.as_str());
        }

        if let Some(params) = request.options.params.as_ref().filter(|p| !p.is_empty()) {
            req = req.query(params.as_pairs());
        }

        if let Some(timeout) = request.options.timeout {
            req = req.timeout(timeout);
        }

        if let Some(body) = request.body {
            req = req.body(body);
        }

        let resp = req.send().await.map_err(|e| HttpError::Message {
            status: None,
            message: e.to_string(),
        })?;

        let status = resp.status();
        let status_code = status.as_u16();
        let headers = resp
            .headers()
            .iter()
            .filter_map(|(k, v)| v.to_str().ok().map(|v| (k.to_string(), v.to_string())))
            .collect();

        let body = resp.text().await.map_err(|e| HttpError::Message {
            status: Some(status_code),
            message: e.to_string(),
        })?;

        if !status.is_success() {
            return Err(error_from_body(status_code, body));
        }

        Ok(HttpResponse {
            status: status_code,
            headers,
            body,
        })
    }
}
