// rest-client/src/rest.rs
use std::fmt::Display;
use std::marker::PhantomData;

use serde::de::DeserializeOwned;

use crate::base::BaseService;
use crate::error::ServiceError;
use crate::http::HttpClient;
use crate::model::{FromResponse, Serializable};
use crate::options::{QueryParams, RequestOptions};

/// Resource identifier accepted by item operations
pub type Id<'a> = &'a (dyn Display + Sync);

/// CRUD client over one resource collection
///
/// `T` is the request model, `E` the payload returned by writes. Every
/// operation takes an optional `path` that overrides the configured base
/// path for that call only.
pub struct RestService<T, E, C: HttpClient> {
    service: BaseService<C>,
    base_url_path: String,
    _marker: PhantomData<fn() -> (T, E)>,
}

impl<T, E, C: HttpClient> RestService<T, E, C> {
    pub fn new(http: C, base_url_path: impl Into<String>) -> Self {
        Self {
            service: BaseService::new(http),
            base_url_path: base_url_path.into(),
            _marker: PhantomData,
        }
    }

    pub fn base_url_path(&self) -> &str {
        &self.base_url_path
    }

    /// The underlying transport wrapper, for calls outside the CRUD verbs
    pub fn service(&self) -> &BaseService<C> {
        &self.service
    }

    fn final_path<'a>(&'a self, path: Option<&'a str>) -> &'a str {
        path.unwrap_or(&self.base_url_path)
    }

    fn item_path(&self, id: Option<Id<'_>>, path: Option<&str>) -> String {
        let base = self.final_path(path);
        match id {
            Some(id) => format!("{}/{}", base, id),
            None => base.to_string(),
        }
    }

    /// List the collection, with `parameters` sent as query string
    pub async fn query(
        &self,
        parameters: Option<&QueryParams>,
        options: Option<RequestOptions>,
        path: Option<&str>,
    ) -> Result<Vec<T>, ServiceError>
    where
        T: DeserializeOwned,
    {
        let final_path = self.final_path(path);
        let options = BaseService::<C>::generate_request_options(
            parameters,
            options.unwrap_or_default(),
        );
        self.service.get(final_path, None, options).await
    }

    /// Fetch one item, or the bare collection path when `id` is `None`
    pub async fn get_one(
        &self,
        id: Option<Id<'_>>,
        options: Option<RequestOptions>,
        path: Option<&str>,
    ) -> Result<T, ServiceError>
    where
        T: DeserializeOwned,
    {
        let url = self.item_path(id, path);
        self.service
            .get(&url, None, options.unwrap_or_default())
            .await
    }

    pub async fn create_one(
        &self,
        model: &T,
        options: Option<RequestOptions>,
        path: Option<&str>,
    ) -> Result<E, ServiceError>
    where
        T: Serializable,
        E: FromResponse,
    {
        let final_path = self.final_path(path);
        let body = model.to_body()?;
        self.service
            .post(final_path, body, options.unwrap_or_else(RequestOptions::json))
            .await
    }

    pub async fn update_one(
        &self,
        model: &T,
        options: Option<RequestOptions>,
        path: Option<&str>,
    ) -> Result<E, ServiceError>
    where
        T: Serializable,
        E: FromResponse,
    {
        let final_path = self.final_path(path);
        let body = model.to_body()?;
        self.service
            .put(final_path, body, options.unwrap_or_else(RequestOptions::json))
            .await
    }

    pub async fn delete_one(
        &self,
        id: Option<Id<'_>>,
        options: Option<RequestOptions>,
        path: Option<&str>,
    ) -> Result<E, ServiceError>
    where
        E: FromResponse,
    {
        let url = self.item_path(id, path);
        self.service
            .delete(&url, options.unwrap_or_else(RequestOptions::json))
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http::{HttpError, HttpMethod, HttpResponse};
    use crate::model::{json_body, GenericResponse};
    use crate::test_support::StubClient;
    use serde::Deserialize;
    use serde_json::json;

    #[derive(Debug, Clone, PartialEq, serde::Serialize, Deserialize)]
    struct Item {
        id: Option<u64>,
        name: String,
    }

    impl Serializable for Item {
        fn to_body(&self) -> Result<String, ServiceError> {
            json_body(self)
        }
    }

    fn items(stub: &StubClient) -> RestService<Item, HttpResponse, &StubClient> {
        RestService::new(stub, "/api/items")
    }

    fn widget() -> Item {
        Item {
            id: None,
            name: "widget".to_string(),
        }
    }

    #[tokio::test]
    async fn test_query_uses_base_path_and_merges_parameters() {
        let body = json!([{"id": 1, "name": "a"}, {"id": 2, "name": "b"}]).to_string();
        let stub = StubClient::ok(HttpResponse::new(200, body));
        let parameters = QueryParams::new().with("name", "a");

        let list = items(&stub).query(Some(&parameters), None, None).await.unwrap();

        assert_eq!(list.len(), 2);
        assert_eq!(list[1].name, "b");
        let request = stub.last_request();
        assert_eq!(request.method, HttpMethod::Get);
        assert_eq!(request.path, "/api/items");
        assert_eq!(request.options.params, Some(parameters));
    }

    #[tokio::test]
    async fn test_query_prefers_explicit_path() {
        let stub = StubClient::ok(HttpResponse::new(200, "[]"));

        items(&stub)
            .query(Some(&QueryParams::new()), Some(RequestOptions::new()), Some("/custom"))
            .await
            .unwrap();

        assert_eq!(stub.last_request().path, "/custom");
    }

    #[tokio::test]
    async fn test_query_without_parameters_sends_no_params() {
        let stub = StubClient::ok(HttpResponse::new(200, "[]"));
        items(&stub).query(None, None, None).await.unwrap();
        assert!(stub.last_request().options.params.is_none());
    }

    #[tokio::test]
    async fn test_get_one_appends_id() {
        let stub = StubClient::ok(HttpResponse::new(200, r#"{"id":42,"name":"answer"}"#));

        let item = items(&stub).get_one(Some(&42), None, None).await.unwrap();

        assert_eq!(item.id, Some(42));
        let request = stub.last_request();
        assert_eq!(request.path, "/api/items/42");
        assert_eq!(request.options, RequestOptions::default());
    }

    #[tokio::test]
    async fn test_get_one_without_id_uses_plain_base_path() {
        let stub = StubClient::ok(HttpResponse::new(200, r#"{"id":null,"name":"singleton"}"#));

        items(&stub).get_one(None, None, None).await.unwrap();

        assert_eq!(stub.last_request().path, "/api/items");
    }

    #[tokio::test]
    async fn test_get_one_with_explicit_path_and_string_id() {
        let stub = StubClient::ok(HttpResponse::new(200, r#"{"id":1,"name":"x"}"#));

        items(&stub)
            .get_one(Some(&"abc"), None, Some("/archive"))
            .await
            .unwrap();

        assert_eq!(stub.last_request().path, "/archive/abc");
    }

    #[tokio::test]
    async fn test_create_one_sends_serialized_model_as_json() {
        let stub = StubClient::ok(HttpResponse::new(201, ""));
        let model = widget();

        items(&stub).create_one(&model, None, None).await.unwrap();

        let request = stub.last_request();
        assert_eq!(request.method, HttpMethod::Post);
        assert_eq!(request.path, "/api/items");
        assert_eq!(request.body, Some(model.to_body().unwrap()));
        assert_eq!(request.options.header("Content-Type"), Some("application/json"));
    }

    #[tokio::test]
    async fn test_create_one_with_explicit_options_replaces_default_header() {
        let stub = StubClient::ok(HttpResponse::new(201, ""));
        let options = RequestOptions::new().with_header("Content-Type", "application/vnd.api+json");

        items(&stub)
            .create_one(&widget(), Some(options.clone()), None)
            .await
            .unwrap();

        assert_eq!(stub.last_request().options, options);
    }

    #[tokio::test]
    async fn test_update_one_issues_put() {
        let stub = StubClient::ok(HttpResponse::new(200, ""));
        let model = Item {
            id: Some(3),
            name: "renamed".to_string(),
        };

        items(&stub)
            .update_one(&model, None, Some("/api/items/3"))
            .await
            .unwrap();

        let request = stub.last_request();
        assert_eq!(request.method, HttpMethod::Put);
        assert_eq!(request.path, "/api/items/3");
        let body: serde_json::Value = serde_json::from_str(request.body.as_deref().unwrap()).unwrap();
        assert_eq!(body, json!({"id": 3, "name": "renamed"}));
        assert_eq!(request.options.header("content-type"), Some("application/json"));
    }

    #[tokio::test]
    async fn test_delete_one_resolves_with_response() {
        let response = HttpResponse::new(204, "");
        let stub = StubClient::ok(response.clone());

        let result = items(&stub).delete_one(Some(&7), None, None).await.unwrap();

        assert_eq!(result, response);
        let request = stub.last_request();
        assert_eq!(request.method, HttpMethod::Delete);
        assert_eq!(request.path, "/api/items/7");
        assert_eq!(request.options.header("Content-Type"), Some("application/json"));
    }

    #[tokio::test]
    async fn test_write_decodes_generic_response() {
        let body = json!({"success": true, "description": "ok", "data": {"id": "9"}}).to_string();
        let stub = StubClient::ok(HttpResponse::new(201, body));
        let service: RestService<Item, GenericResponse, _> = RestService::new(&stub, "/api/items");

        let resp = service.create_one(&widget(), None, None).await.unwrap();

        assert!(resp.success);
        assert_eq!(resp.data.get("id"), Some(&"9".to_string()));
    }

    #[tokio::test]
    async fn test_failures_surface_extracted_message() {
        let stub = StubClient::err(HttpError::Message {
            status: Some(404),
            message: "no such item".to_string(),
        });
        let service = items(&stub);

        assert_eq!(service.query(None, None, None).await.unwrap_err(), "no such item");
        assert_eq!(service.get_one(Some(&1), None, None).await.unwrap_err(), "no such item");
        assert_eq!(service.create_one(&widget(), None, None).await.unwrap_err(), "no such item");
        assert_eq!(service.update_one(&widget(), None, None).await.unwrap_err(), "no such item");
        assert_eq!(service.delete_one(Some(&1), None, None).await.unwrap_err(), "no such item");
    }

    struct Unserializable;

    impl Serializable for Unserializable {
        fn to_body(&self) -> Result<String, ServiceError> {
            Err(ServiceError::new("cannot encode"))
        }
    }

    #[tokio::test]
    async fn test_serialization_failure_skips_transport() {
        let stub = StubClient::ok(HttpResponse::new(201, ""));
        let service: RestService<Unserializable, HttpResponse, _> = RestService::new(&stub, "/x");

        let err = service.create_one(&Unserializable, None, None).await.unwrap_err();

        assert_eq!(err, "cannot encode");
        assert!(stub.requests().is_empty());
    }
}
