// api-cli/src/commands/resource.rs
use crate::output::{print_response, ErrorResponse, ExitCode, Response};
use anyhow::Result;
use api_client::{
    ApiClient, Document, HttpResponse, Id, QueryParams, RequestOptions, Resource, ServiceError,
};
use serde_json::{json, Value};

#[derive(clap::Subcommand, Clone, Debug)]
pub enum ResourceCommands {
    /// List a collection
    Query {
        /// Collection path, e.g. /api/items
        path: String,
        /// Query parameter as key=value (repeatable)
        #[arg(short = 'p', long = "param", value_parser = parse_param)]
        params: Vec<(String, String)>,
    },
    /// Fetch one item, or the collection path itself when no ID is given
    Get {
        /// Collection path
        path: String,
        /// Item ID
        id: Option<String>,
        /// Query parameter as key=value (repeatable)
        #[arg(short = 'p', long = "param", value_parser = parse_param)]
        params: Vec<(String, String)>,
    },
    /// Create an item
    Create {
        /// Collection path
        path: String,
        /// JSON body, or @file to read it from a file
        #[arg(short, long)]
        data: String,
    },
    /// Update an item
    Update {
        /// Item path
        path: String,
        /// JSON body, or @file to read it from a file
        #[arg(short, long)]
        data: String,
    },
    /// Delete an item
    Delete {
        /// Collection path
        path: String,
        /// Item ID
        id: Option<String>,
        /// Confirm destructive operation
        #[arg(long)]
        force: bool,
    },
}

/// Parse a `key=value` query parameter
fn parse_param(s: &str) -> Result<(String, String), String> {
    match s.split_once('=') {
        Some((key, value)) if !key.is_empty() => Ok((key.to_string(), value.to_string())),
        _ => Err(format!("expected key=value, got '{}'", s)),
    }
}

async fn read_document(data: &str) -> Result<Document> {
    let text = match data.strip_prefix('@') {
        Some(file) => tokio::fs::read_to_string(file).await?,
        None => data.to_string(),
    };
    Document::parse(&text)
}

fn item_path(path: &str, id: Option<&str>) -> String {
    match id {
        Some(id) => format!("{}/{}", path, id),
        None => path.to_string(),
    }
}

/// Summarize a raw response, decoding the body only when it is JSON
fn describe_raw(resp: &HttpResponse) -> Value {
    let is_json = resp
        .header("content-type")
        .is_some_and(|v| v.starts_with("application/json"));
    let body = if resp.body.trim().is_empty() {
        Value::Null
    } else if is_json {
        serde_json::from_str(&resp.body).unwrap_or_else(|_| Value::String(resp.body.clone()))
    } else {
        Value::String(resp.body.clone())
    };
    json!({ "status": resp.status, "body": body })
}

fn read_options(client: &ApiClient) -> Option<RequestOptions> {
    client
        .timeout()
        .map(|timeout| RequestOptions::new().with_timeout(timeout))
}

fn write_options(client: &ApiClient) -> Option<RequestOptions> {
    client
        .timeout()
        .map(|timeout| RequestOptions::json().with_timeout(timeout))
}

fn report<T: serde::Serialize>(result: Result<T, ServiceError>) -> Result<ExitCode> {
    match result {
        Ok(value) => {
            print_response(&Response::ok(value))?;
            Ok(ExitCode::Success)
        }
        Err(e) => {
            tracing::debug!(error = %e, "request failed");
            let resp = Response::<()>::error(ErrorResponse::request_failed(e.into_message()));
            print_response(&resp)?;
            Ok(ExitCode::PermanentError)
        }
    }
}

pub async fn handle_resource(client: &ApiClient, cmd: ResourceCommands) -> Result<ExitCode> {
    match cmd {
        ResourceCommands::Query { path, params } => {
            let parameters: QueryParams = params.into_iter().collect();
            let resource = client.documents(path);
            report(
                resource
                    .query(Some(&parameters), read_options(client), None)
                    .await,
            )
        }
        ResourceCommands::Get { path, id, params } => {
            let parameters: QueryParams = params.into_iter().collect();
            let resource = client.documents(path);
            if parameters.is_empty() {
                let id = id.as_ref().map(|id| id as Id<'_>);
                return report(resource.get_one(id, read_options(client), None).await);
            }

            // Item lookups take no query string, go through the wrapper directly
            let target = item_path(resource.base_url_path(), id.as_deref());
            let options = read_options(client).unwrap_or_default();
            report(
                resource
                    .service()
                    .get::<Document>(&target, Some(&parameters), options)
                    .await,
            )
        }
        ResourceCommands::Create { path, data } => {
            let model = match read_document(&data).await {
                Ok(model) => model,
                Err(e) => return reject_input(e),
            };
            let resource = client.documents(path);
            report(resource.create_one(&model, write_options(client), None).await)
        }
        ResourceCommands::Update { path, data } => {
            let model = match read_document(&data).await {
                Ok(model) => model,
                Err(e) => return reject_input(e),
            };
            let resource = client.documents(path);
            report(resource.update_one(&model, write_options(client), None).await)
        }
        ResourceCommands::Delete { path, id, force } => {
            if !force {
                let resp = Response::<()>::error(ErrorResponse::safety_rejected(
                    "--force flag is required for delete operations".to_string(),
                ));
                print_response(&resp)?;
                return Ok(ExitCode::SafetyRejected);
            }

            let resource: Resource<Document> = client.resource(path);
            let id = id.as_ref().map(|id| id as Id<'_>);
            let result = resource.delete_one(id, write_options(client), None).await;
            report(result.map(|resp| describe_raw(&resp)))
        }
    }
}

fn reject_input(e: anyhow::Error) -> Result<ExitCode> {
    let resp = Response::<()>::error(ErrorResponse::validation_failed(format!(
        "Invalid --data: {}",
        e
    )));
    print_response(&resp)?;
    Ok(ExitCode::PermanentError)
}
