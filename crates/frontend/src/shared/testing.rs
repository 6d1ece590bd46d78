//! In-memory transports for tests

use super::api_client::{ApiRequest, ApiResponse, ApiTransport, HttpMethod, RestClient};
use super::api_config::ApiConfig;
use super::api_error::ApiError;
use super::entity_service::EntityService;
use async_trait::async_trait;
use contracts::domain::common::EntityDto;
use serde_json::{json, Value};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

pub const TEST_ORIGIN: &str = "http://hms.test";

/// Returns the same canned response to every request and remembers them
pub struct StaticTransport {
    response: Result<ApiResponse, ApiError>,
    captured: Mutex<Vec<ApiRequest>>,
}

impl StaticTransport {
    pub fn ok(body: &str) -> Arc<Self> {
        Self::status(200, body)
    }

    pub fn status(status: u16, body: &str) -> Arc<Self> {
        Arc::new(Self {
            response: Ok(ApiResponse {
                status,
                body: body.to_string(),
            }),
            captured: Mutex::new(Vec::new()),
        })
    }

    pub fn network_error(message: &str) -> Arc<Self> {
        Arc::new(Self {
            response: Err(ApiError::Network(message.to_string())),
            captured: Mutex::new(Vec::new()),
        })
    }

    pub fn last_request(&self) -> Option<ApiRequest> {
        self.captured.lock().unwrap().last().cloned()
    }
}

#[async_trait(?Send)]
impl ApiTransport for StaticTransport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, ApiError> {
        self.captured.lock().unwrap().push(request);
        self.response.clone()
    }
}

#[derive(Default)]
struct BackendState {
    records: Vec<Value>,
    requests: Vec<ApiRequest>,
    code_counter: u32,
    next_code: Option<String>,
    failures: HashMap<String, String>,
    offline: bool,
}

/// Fake backend for one resource: upsert by key, soft delete, status flip
/// and sequential codes, all answered with the standard envelope.
pub struct MockBackend {
    resource: &'static str,
    id_field: &'static str,
    state: Mutex<BackendState>,
}

impl MockBackend {
    pub fn for_entity<T: EntityDto>() -> Arc<Self> {
        Arc::new(Self {
            resource: T::resource(),
            id_field: T::id_field(),
            state: Mutex::new(BackendState::default()),
        })
    }

    pub fn seed<T: EntityDto>(&self, records: &[T]) {
        let mut state = self.state.lock().unwrap();
        state.records = records
            .iter()
            .map(|r| serde_json::to_value(r).unwrap())
            .collect();
    }

    pub fn records(&self) -> Vec<Value> {
        self.state.lock().unwrap().records.clone()
    }

    pub fn requests(&self) -> Vec<ApiRequest> {
        self.state.lock().unwrap().requests.clone()
    }

    /// Number of requests whose path verb is `verb` (e.g. "GetAll")
    pub fn count(&self, verb: &str) -> usize {
        self.requests()
            .iter()
            .filter(|r| self.split(&r.url).0 == verb)
            .count()
    }

    /// Answer `GetNextCode` with `code` instead of the counter
    pub fn set_next_code(&self, code: &str) {
        self.state.lock().unwrap().next_code = Some(code.to_string());
    }

    /// Make the next call to `verb` fail with a business error
    pub fn fail_next(&self, verb: &str, message: &str) {
        self.state
            .lock()
            .unwrap()
            .failures
            .insert(verb.to_string(), message.to_string());
    }

    pub fn set_offline(&self, offline: bool) {
        self.state.lock().unwrap().offline = offline;
    }

    /// (verb, id segment, query)
    fn split(&self, url: &str) -> (String, Option<String>, HashMap<String, String>) {
        let (path, query) = url.split_once('?').unwrap_or((url, ""));
        let marker = format!("/{}/", self.resource);
        let rest = path
            .find(&marker)
            .map(|pos| &path[pos + marker.len()..])
            .unwrap_or("");
        let (verb, id) = match rest.split_once('/') {
            Some((verb, id)) => (verb.to_string(), Some(id.to_string())),
            None => (rest.to_string(), None),
        };
        let params = query
            .split('&')
            .filter_map(|pair| pair.split_once('='))
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        (verb, id, params)
    }

    fn handle(&self, request: &ApiRequest) -> Value {
        let (verb, id, params) = self.split(&request.url);
        let mut state = self.state.lock().unwrap();
        if let Some(message) = state.failures.remove(&verb) {
            return json!({"success": false, "errorMessage": message});
        }
        let id: Option<i64> = id.and_then(|s| s.parse().ok());
        let id_field = self.id_field;
        let position = |records: &[Value], id: i64| records.iter().position(|r| r[id_field] == id);

        match (request.method, verb.as_str()) {
            (HttpMethod::Get, "GetAll") => json!({"success": true, "data": state.records}),
            (HttpMethod::Get, "GetById") => match id.and_then(|id| position(&state.records, id)) {
                Some(pos) => json!({"success": true, "data": state.records[pos]}),
                None => json!({"success": false, "errorMessage": "Record not found"}),
            },
            (HttpMethod::Post, "Save") => {
                let mut record: Value =
                    serde_json::from_str(request.body.as_deref().unwrap_or("null")).unwrap();
                let key = record[id_field].as_i64().unwrap_or(0);
                if key == 0 {
                    let next = state
                        .records
                        .iter()
                        .filter_map(|r| r[id_field].as_i64())
                        .max()
                        .unwrap_or(0)
                        + 1;
                    record[id_field] = json!(next);
                    state.records.push(record.clone());
                } else {
                    match position(&state.records, key) {
                        Some(pos) => state.records[pos] = record.clone(),
                        None => return json!({"success": false, "errorMessage": "Record not found"}),
                    }
                }
                json!({"success": true, "data": record})
            }
            (HttpMethod::Delete, "Delete") => match id.and_then(|id| position(&state.records, id)) {
                Some(pos) => {
                    state.records[pos]["rActiveYN"] = json!("N");
                    json!({"success": true, "data": true})
                }
                None => json!({"success": false, "errorMessage": "Record not found"}),
            },
            (HttpMethod::Put, "UpdateActiveStatus") => {
                let active: bool =
                    serde_json::from_str(request.body.as_deref().unwrap_or("true")).unwrap();
                match id.and_then(|id| position(&state.records, id)) {
                    Some(pos) => {
                        state.records[pos]["rActiveYN"] = json!(if active { "Y" } else { "N" });
                        json!({"success": true, "data": true})
                    }
                    None => json!({"success": false, "errorMessage": "Record not found"}),
                }
            }
            (HttpMethod::Get, "GetNextCode") => {
                if let Some(code) = state.next_code.clone() {
                    return json!({"success": true, "data": code});
                }
                state.code_counter += 1;
                let prefix = params.get("prefix").cloned().unwrap_or_default();
                let width: usize = params
                    .get("padLength")
                    .and_then(|p| p.parse().ok())
                    .unwrap_or(3);
                let code = format!("{}{:0width$}", prefix, state.code_counter, width = width);
                json!({"success": true, "data": code})
            }
            _ => json!({"success": false, "errorMessage": format!("Unsupported {} {}", request.method, verb)}),
        }
    }
}

#[async_trait(?Send)]
impl ApiTransport for MockBackend {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, ApiError> {
        let offline = {
            let mut state = self.state.lock().unwrap();
            state.requests.push(request.clone());
            state.offline
        };
        if offline {
            return Err(ApiError::Network("backend unreachable".to_string()));
        }
        let body = self.handle(&request).to_string();
        Ok(ApiResponse { status: 200, body })
    }
}

/// Service for `T` wired to `backend` with a fixed token
pub fn service_for<T: EntityDto>(backend: &Arc<MockBackend>) -> EntityService<T> {
    service_over(backend.clone())
}

/// Service for `T` over any transport, with a fixed token
pub fn service_over<T: EntityDto>(transport: Arc<dyn ApiTransport>) -> EntityService<T> {
    let config = ApiConfig::load(None).unwrap();
    let base_url = config
        .resolve_base_url(T::api_module(), TEST_ORIGIN)
        .map_err(|e| ApiError::Config(e.to_string()));
    let client = RestClient::with_base_url(T::api_module(), base_url, transport);
    EntityService::new(client, Arc::new(|| Some("test-token".to_string())))
}
