//! REST client wrapper.
//!
//! Every call goes to `{module base URL}/{path}`, carries the bearer token and
//! comes back as an [`OperationResult`]. Transport, HTTP and decoding failures
//! are folded into a failed envelope here, so callers only ever look at
//! `success`.

use super::api_config::ApiConfig;
use super::api_error::ApiError;
use async_trait::async_trait;
use contracts::enums::api_module::ApiModule;
use contracts::shared::OperationResult;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::sync::Arc;

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

impl std::fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Fully resolved request handed to the transport
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    pub method: HttpMethod,
    pub url: String,
    pub bearer_token: Option<String>,
    /// JSON body
    pub body: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ApiResponse {
    pub status: u16,
    pub body: String,
}

impl ApiResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// HTTP seam. The browser implementation is [`GlooTransport`].
#[async_trait(?Send)]
pub trait ApiTransport: Send + Sync {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, ApiError>;
}

/// `fetch`-based transport via gloo-net
#[derive(Debug, Clone, Copy, Default)]
pub struct GlooTransport;

#[async_trait(?Send)]
impl ApiTransport for GlooTransport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, ApiError> {
        use gloo_net::http::{Method, RequestBuilder};

        let method = match request.method {
            HttpMethod::Get => Method::GET,
            HttpMethod::Post => Method::POST,
            HttpMethod::Put => Method::PUT,
            HttpMethod::Delete => Method::DELETE,
        };

        let mut builder = RequestBuilder::new(&request.url)
            .method(method)
            .header("Accept", "application/json");
        if let Some(token) = &request.bearer_token {
            builder = builder.header("Authorization", &format!("Bearer {}", token));
        }

        let http_request = match request.body {
            Some(body) => builder
                .header("Content-Type", "application/json")
                .body(body)
                .map_err(|e| ApiError::Serialize(e.to_string()))?,
            None => builder
                .build()
                .map_err(|e| ApiError::Serialize(e.to_string()))?,
        };

        let response = http_request
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))?;

        Ok(ApiResponse { status, body })
    }
}

/// Client bound to one backend module
#[derive(Clone)]
pub struct RestClient {
    module: ApiModule,
    base_url: Result<String, ApiError>,
    transport: Arc<dyn ApiTransport>,
}

impl RestClient {
    pub fn new(config: &ApiConfig, module: ApiModule, transport: Arc<dyn ApiTransport>) -> Self {
        let base_url = config
            .base_url(module)
            .map_err(|e| ApiError::Config(e.to_string()));
        Self::with_base_url(module, base_url, transport)
    }

    pub fn with_base_url(
        module: ApiModule,
        base_url: Result<String, ApiError>,
        transport: Arc<dyn ApiTransport>,
    ) -> Self {
        Self {
            module,
            base_url,
            transport,
        }
    }

    pub async fn get<T: DeserializeOwned>(&self, path: &str, token: Option<&str>) -> OperationResult<T> {
        self.execute(HttpMethod::Get, path, None, token, None).await
    }

    /// GET with `params` encoded as the query string
    pub async fn get_with_params<T, P>(&self, path: &str, token: Option<&str>, params: &P) -> OperationResult<T>
    where
        T: DeserializeOwned,
        P: Serialize,
    {
        let query = match serde_qs::to_string(params) {
            Ok(q) => q,
            Err(e) => return self.fail(HttpMethod::Get, path, ApiError::Serialize(e.to_string())),
        };
        self.execute(HttpMethod::Get, path, Some(query), token, None).await
    }

    pub async fn post<B, T>(&self, path: &str, token: Option<&str>, body: &B) -> OperationResult<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        self.execute_with_body(HttpMethod::Post, path, token, body).await
    }

    pub async fn put<B, T>(&self, path: &str, token: Option<&str>, body: &B) -> OperationResult<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        self.execute_with_body(HttpMethod::Put, path, token, body).await
    }

    pub async fn delete<T: DeserializeOwned>(&self, path: &str, token: Option<&str>) -> OperationResult<T> {
        self.execute(HttpMethod::Delete, path, None, token, None).await
    }

    async fn execute_with_body<B, T>(
        &self,
        method: HttpMethod,
        path: &str,
        token: Option<&str>,
        body: &B,
    ) -> OperationResult<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        match serde_json::to_string(body) {
            Ok(json) => self.execute(method, path, None, token, Some(json)).await,
            Err(e) => self.fail(method, path, ApiError::Serialize(e.to_string())),
        }
    }

    async fn execute<T: DeserializeOwned>(
        &self,
        method: HttpMethod,
        path: &str,
        query: Option<String>,
        token: Option<&str>,
        body: Option<String>,
    ) -> OperationResult<T> {
        match self.try_execute(method, path, query, token, body).await {
            Ok(result) => {
                if !result.success {
                    log::warn!("{} {} rejected: {}", method, path, result.error_text());
                }
                result
            }
            Err(e) => self.fail(method, path, e),
        }
    }

    async fn try_execute<T: DeserializeOwned>(
        &self,
        method: HttpMethod,
        path: &str,
        query: Option<String>,
        token: Option<&str>,
        body: Option<String>,
    ) -> Result<OperationResult<T>, ApiError> {
        let token = token
            .filter(|t| !t.trim().is_empty())
            .ok_or(ApiError::NotAuthenticated)?;
        let base_url = self.base_url.clone()?;
        let url = build_url(&base_url, path, query.as_deref());

        log::debug!("{} {}", method, url);
        let response = self
            .transport
            .send(ApiRequest {
                method,
                url,
                bearer_token: Some(token.to_string()),
                body,
            })
            .await?;

        if !response.is_success() {
            return Err(http_error(&response));
        }
        if response.body.trim().is_empty() {
            return Ok(OperationResult::ok_empty());
        }

        serde_json::from_str::<OperationResult<T>>(&response.body)
            .map_err(|e| ApiError::Decode(e.to_string()))
    }

    fn fail<T>(&self, method: HttpMethod, path: &str, err: ApiError) -> OperationResult<T> {
        log::warn!("{} {} ({}) failed: {}", method, path, self.module, err);
        err.into()
    }
}

fn build_url(base_url: &str, path: &str, query: Option<&str>) -> String {
    let mut url = format!(
        "{}/{}",
        base_url.trim_end_matches('/'),
        path.trim_start_matches('/')
    );
    if let Some(query) = query.filter(|q| !q.is_empty()) {
        url.push('?');
        url.push_str(query);
    }
    url
}

/// Prefer the server's own envelope message for non-2xx responses
fn http_error(response: &ApiResponse) -> ApiError {
    let envelope_message = serde_json::from_str::<OperationResult<serde_json::Value>>(&response.body)
        .ok()
        .and_then(|r| r.error_message)
        .filter(|m| !m.trim().is_empty());

    let message = envelope_message.unwrap_or_else(|| {
        let text = response.body.trim();
        if text.is_empty() || text.len() > 200 {
            "Request failed".to_string()
        } else {
            text.to_string()
        }
    });

    ApiError::Http {
        status: response.status,
        message,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::testing::StaticTransport;
    use serde::Deserialize;

    fn client(transport: Arc<StaticTransport>) -> RestClient {
        RestClient::with_base_url(
            ApiModule::HospitalAdministration,
            Ok("http://hms.test/api/HospitalAdministration/".to_string()),
            transport,
        )
    }

    #[derive(Debug, PartialEq, Deserialize)]
    struct Item {
        id: i32,
    }

    #[derive(Serialize)]
    #[serde(rename_all = "camelCase")]
    struct Query {
        prefix: &'static str,
        pad_length: usize,
    }

    #[tokio::test]
    async fn test_get_attaches_token_and_decodes_envelope() {
        let transport = StaticTransport::ok(r#"{"success":true,"data":{"id":4}}"#);
        let result: OperationResult<Item> = client(transport.clone()).get("Department/GetById/4", Some("tkn")).await;

        assert_eq!(result.data, Some(Item { id: 4 }));
        let sent = transport.last_request().unwrap();
        assert_eq!(sent.method, HttpMethod::Get);
        assert_eq!(sent.url, "http://hms.test/api/HospitalAdministration/Department/GetById/4");
        assert_eq!(sent.bearer_token.as_deref(), Some("tkn"));
        assert_eq!(sent.body, None);
    }

    #[tokio::test]
    async fn test_query_params_are_encoded() {
        let transport = StaticTransport::ok(r#"{"success":true,"data":"DEP004"}"#);
        let params = Query { prefix: "DEP", pad_length: 3 };
        let result: OperationResult<String> = client(transport.clone())
            .get_with_params("Department/GetNextCode", Some("tkn"), &params)
            .await;

        assert_eq!(result.data.as_deref(), Some("DEP004"));
        assert!(transport
            .last_request()
            .unwrap()
            .url
            .ends_with("Department/GetNextCode?prefix=DEP&padLength=3"));
    }

    #[tokio::test]
    async fn test_post_sends_json_body() {
        let transport = StaticTransport::ok(r#"{"success":true,"data":{"id":1}}"#);
        let _: OperationResult<Item> = client(transport.clone())
            .post("Department/Save", Some("tkn"), &serde_json::json!({"deptID": 0}))
            .await;

        let sent = transport.last_request().unwrap();
        assert_eq!(sent.method, HttpMethod::Post);
        assert_eq!(sent.body.as_deref(), Some(r#"{"deptID":0}"#));
    }

    #[tokio::test]
    async fn test_business_failure_is_passed_through() {
        let transport = StaticTransport::ok(r#"{"success":false,"errorMessage":"Duplicate code"}"#);
        let result: OperationResult<Item> = client(transport).get("Department/GetAll", Some("tkn")).await;
        assert!(!result.success);
        assert_eq!(result.error_text(), "Duplicate code");
    }

    #[tokio::test]
    async fn test_http_error_uses_envelope_message_when_present() {
        let transport = StaticTransport::status(400, r#"{"success":false,"errorMessage":"Name is required"}"#);
        let result: OperationResult<Item> = client(transport).get("Department/GetAll", Some("tkn")).await;
        assert_eq!(result.error_text(), "HTTP 400: Name is required");

        let transport = StaticTransport::status(502, "");
        let result: OperationResult<Item> = client(transport).get("Department/GetAll", Some("tkn")).await;
        assert_eq!(result.error_text(), "HTTP 502: Request failed");
    }

    #[tokio::test]
    async fn test_transport_and_decode_failures_become_envelopes() {
        let transport = StaticTransport::network_error("connection refused");
        let result: OperationResult<Item> = client(transport).get("Department/GetAll", Some("tkn")).await;
        assert_eq!(result.error_text(), "Network error: connection refused");

        let transport = StaticTransport::ok("<html>");
        let result: OperationResult<Item> = client(transport).get("Department/GetAll", Some("tkn")).await;
        assert!(result.error_text().starts_with("Failed to parse response"));
    }

    #[tokio::test]
    async fn test_missing_token_never_reaches_the_transport() {
        let transport = StaticTransport::ok(r#"{"success":true}"#);
        let result: OperationResult<Item> = client(transport.clone()).get("Department/GetAll", None).await;
        assert_eq!(result.error_text(), "Not authenticated");
        assert!(transport.last_request().is_none());
    }

    #[tokio::test]
    async fn test_missing_module_config_fails_every_call() {
        let transport = StaticTransport::ok(r#"{"success":true}"#);
        let client = RestClient::new(&ApiConfig::default(), ApiModule::Laboratory, transport.clone());
        let result: OperationResult<Item> = client.get("LabTest/GetAll", Some("tkn")).await;
        assert_eq!(
            result.error_text(),
            "Configuration error: no base URL configured for module 'laboratory'"
        );
        assert!(transport.last_request().is_none());
    }

    #[tokio::test]
    async fn test_empty_success_body_is_success_without_data() {
        let transport = StaticTransport::status(204, "");
        let result: OperationResult<Item> = client(transport).delete("Department/Delete/3", Some("tkn")).await;
        assert!(result.success);
        assert_eq!(result.data, None);
    }
}
