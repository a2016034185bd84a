pub mod client;
pub mod config;
pub mod document;

pub use client::{ApiClient, DocumentResource, Resource};
pub use config::Config;
pub use document::Document;

// Re-export core types for convenience
pub use rest_client::{
    GenericResponse, HttpResponse, Id, QueryParams, RequestOptions, ServiceError,
};
