// api-client/src/client.rs
use crate::config::Config;
use crate::document::Document;
use anyhow::{anyhow, Result};
use rest_client::{HttpResponse, ReqwestClient, RestService};
use std::sync::Arc;
use std::time::Duration;
use tracing::debug;

/// Resource client sharing the configured transport
pub type Resource<T, E = HttpResponse> = RestService<T, E, Arc<ReqwestClient>>;

/// Schemaless resource client used by the CLI
pub type DocumentResource = Resource<Document, Option<Document>>;

pub struct ApiClient {
    http: Arc<ReqwestClient>,
    base_url: String,
    timeout: Option<Duration>,
}

impl ApiClient {
    pub fn from_config(config: &Config) -> Result<Self> {
        let base_url = config.base_url.trim_end_matches('/').to_string();
        if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
            return Err(anyhow!(
                "Invalid base URL '{}': expected http:// or https://",
                config.base_url
            ));
        }

        let mut http = ReqwestClient::new().with_base_url(base_url.clone());

        if let Some(token) = &config.token {
            http = http.with_token(token.clone());
        }

        for (name, value) in &config.default_headers {
            http = http.with_default_header(name.clone(), value.clone());
        }

        debug!(base_url = %base_url, "configured api client");

        Ok(Self {
            http: Arc::new(http),
            base_url,
            timeout: config.timeout_secs.map(Duration::from_secs),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Per-request timeout from the config, to be set on request options
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout
    }

    /// Resource client for the collection at `base_path`
    pub fn resource<T, E>(&self, base_path: impl Into<String>) -> Resource<T, E> {
        RestService::new(Arc::clone(&self.http), base_path)
    }

    pub fn documents(&self, base_path: impl Into<String>) -> DocumentResource {
        self.resource(base_path)
    }
}
