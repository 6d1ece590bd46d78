//! Generic entity service: typed CRUD over one REST resource.
//!
//! Endpoints follow `{Resource}/{Verb}`. Every method is a single request
//! with no caching or retry; callers re-fetch lists after writes.

use super::api_client::{ApiTransport, RestClient};
use super::api_config::ApiConfig;
use contracts::domain::common::EntityDto;
use contracts::enums::api_module::ApiModule;
use contracts::shared::OperationResult;
use leptos::prelude::*;
use serde::Serialize;
use std::marker::PhantomData;
use std::sync::Arc;

/// Source of the bearer token, read on every call
pub type TokenProvider = Arc<dyn Fn() -> Option<String> + Send + Sync>;

/// Everything needed to build services; provided once at the app root
#[derive(Clone)]
pub struct ApiContext {
    pub config: ApiConfig,
    pub transport: Arc<dyn ApiTransport>,
    pub token: TokenProvider,
}

impl ApiContext {
    pub fn client(&self, module: ApiModule) -> RestClient {
        RestClient::new(&self.config, module, self.transport.clone())
    }
}

pub fn use_api_context() -> ApiContext {
    use_context::<ApiContext>().expect("ApiContext not provided in context (provide it in app root)")
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct NextCodeParams<'a> {
    prefix: &'a str,
    pad_length: usize,
}

pub struct EntityService<T> {
    client: RestClient,
    token: TokenProvider,
    _entity: PhantomData<fn() -> T>,
}

impl<T: EntityDto> EntityService<T> {
    pub fn new(client: RestClient, token: TokenProvider) -> Self {
        Self {
            client,
            token,
            _entity: PhantomData,
        }
    }

    /// Service for `T` on the module it belongs to
    pub fn from_api_context(ctx: &ApiContext) -> Self {
        Self::new(ctx.client(T::api_module()), ctx.token.clone())
    }

    pub fn from_context() -> Self {
        Self::from_api_context(&use_api_context())
    }

    fn endpoint(verb: &str) -> String {
        format!("{}/{}", T::resource(), verb)
    }

    /// All records, active and inactive
    pub async fn get_all(&self) -> OperationResult<Vec<T>> {
        let token = (self.token)();
        self.client
            .get(&Self::endpoint("GetAll"), token.as_deref())
            .await
    }

    pub async fn get_by_id(&self, id: i32) -> OperationResult<T> {
        let token = (self.token)();
        let result: OperationResult<T> = self
            .client
            .get(&Self::endpoint(&format!("GetById/{}", id)), token.as_deref())
            .await;
        if result.success && result.data.is_none() {
            return OperationResult::fail(format!("{} {} not found", T::element_name(), id));
        }
        result
    }

    /// Upsert: the server inserts when the key is `0` and updates otherwise.
    /// There is a single endpoint for both.
    pub async fn save(&self, dto: &T) -> OperationResult<T> {
        let token = (self.token)();
        self.client
            .post(&Self::endpoint("Save"), token.as_deref(), dto)
            .await
    }

    /// Server-side delete. Observed backends mark the record inactive rather
    /// than removing it.
    pub async fn delete(&self, id: i32) -> OperationResult<()> {
        let token = (self.token)();
        self.client
            .delete::<serde_json::Value>(&Self::endpoint(&format!("Delete/{}", id)), token.as_deref())
            .await
            .map(|_| ())
    }

    /// Flip `rActiveYN` only
    pub async fn update_active_status(&self, id: i32, active: bool) -> OperationResult<()> {
        let token = (self.token)();
        self.client
            .put::<bool, serde_json::Value>(
                &Self::endpoint(&format!("UpdateActiveStatus/{}", id)),
                token.as_deref(),
                &active,
            )
            .await
            .map(|_| ())
    }

    /// Next sequential code as generated by the server (prefix + padded
    /// counter). Returned verbatim.
    pub async fn get_next_code(&self, prefix: &str, pad_length: usize) -> OperationResult<String> {
        let token = (self.token)();
        self.client
            .get_with_params(
                &Self::endpoint("GetNextCode"),
                token.as_deref(),
                &NextCodeParams { prefix, pad_length },
            )
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::api_client::HttpMethod;
    use crate::shared::testing::{service_for, MockBackend};
    use contracts::domain::a001_department::aggregate::DepartmentDto;
    use contracts::domain::a005_product_tax::aggregate::ProductTaxDto;

    fn department(id: i32, code: &str, name: &str) -> DepartmentDto {
        DepartmentDto {
            dept_id: id,
            dept_code: code.into(),
            dept_name: name.into(),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_endpoints_follow_resource_verb_layout() {
        let backend = MockBackend::for_entity::<DepartmentDto>();
        backend.seed(&[department(1, "DEP001", "Cardiology")]);
        let service = service_for::<DepartmentDto>(&backend);

        assert!(service.get_all().await.success);
        assert!(service.get_by_id(1).await.success);
        assert!(service.delete(1).await.success);
        assert!(service.update_active_status(1, true).await.success);
        assert!(service.get_next_code("DEP", 3).await.success);

        let paths: Vec<(HttpMethod, String)> = backend
            .requests()
            .into_iter()
            .map(|r| (r.method, r.url.replace("http://hms.test/api/HospitalAdministration/", "")))
            .collect();
        assert_eq!(
            paths,
            vec![
                (HttpMethod::Get, "Department/GetAll".to_string()),
                (HttpMethod::Get, "Department/GetById/1".to_string()),
                (HttpMethod::Delete, "Department/Delete/1".to_string()),
                (HttpMethod::Put, "Department/UpdateActiveStatus/1".to_string()),
                (HttpMethod::Get, "Department/GetNextCode?prefix=DEP&padLength=3".to_string()),
            ]
        );
    }

    #[tokio::test]
    async fn test_insert_and_update_use_the_same_endpoint() {
        let backend = MockBackend::for_entity::<DepartmentDto>();
        let service = service_for::<DepartmentDto>(&backend);

        let created = service
            .save(&department(0, "DEP001", "Cardiology"))
            .await
            .into_result()
            .unwrap();
        assert!(created.dept_id > 0);

        let mut renamed = created.clone();
        renamed.dept_name = "Cardiology & Vascular".into();
        let updated = service.save(&renamed).await.into_result().unwrap();
        assert_eq!(updated.dept_id, created.dept_id);

        let saves: Vec<_> = backend
            .requests()
            .into_iter()
            .filter(|r| r.method == HttpMethod::Post)
            .map(|r| r.url)
            .collect();
        assert_eq!(saves.len(), 2);
        assert_eq!(saves[0], saves[1]);
        assert_eq!(backend.records().len(), 1);
    }

    #[tokio::test]
    async fn test_get_by_id_reports_missing_record() {
        let backend = MockBackend::for_entity::<DepartmentDto>();
        let service = service_for::<DepartmentDto>(&backend);
        let result = service.get_by_id(42).await;
        assert!(!result.success);
    }

    #[tokio::test]
    async fn test_next_code_is_returned_verbatim() {
        let backend = MockBackend::for_entity::<DepartmentDto>();
        backend.set_next_code("004");
        let service = service_for::<DepartmentDto>(&backend);
        assert_eq!(service.get_next_code("DEP", 3).await.data.as_deref(), Some("004"));
    }

    #[tokio::test]
    async fn test_service_targets_the_entity_module() {
        let backend = MockBackend::for_entity::<ProductTaxDto>();
        let service = service_for::<ProductTaxDto>(&backend);
        service.get_all().await;
        assert_eq!(
            backend.requests()[0].url,
            "http://hms.test/api/InventoryManagement/ProductTaxList/GetAll"
        );
    }

    #[tokio::test]
    async fn test_token_is_read_per_call() {
        let backend = MockBackend::for_entity::<DepartmentDto>();
        let client = RestClient::with_base_url(
            ApiModule::HospitalAdministration,
            Ok("http://hms.test/api/HospitalAdministration".into()),
            backend.clone(),
        );
        let service = EntityService::<DepartmentDto>::new(client, Arc::new(|| None));
        let result = service.get_all().await;
        assert_eq!(result.error_text(), "Not authenticated");
        assert!(backend.requests().is_empty());
    }
}
