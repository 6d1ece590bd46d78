use crate::shared::entity_service::EntityService;
use crate::shared::entity_store::{use_entity_store, EntityStore};
use contracts::domain::a004_insurance_provider::aggregate::InsuranceProviderDto;
use contracts::shared::OperationResult;
use leptos::prelude::*;

#[derive(Clone, Copy)]
pub struct InsuranceProviderList {
    store: EntityStore<InsuranceProviderDto>,
}

impl InsuranceProviderList {
    pub fn new(store: EntityStore<InsuranceProviderDto>) -> Self {
        Self { store }
    }

    pub fn store(&self) -> EntityStore<InsuranceProviderDto> {
        self.store
    }

    pub fn insurance_provider_list(&self) -> RwSignal<Vec<InsuranceProviderDto>> {
        self.store.entity_list
    }

    pub fn is_loading(&self) -> RwSignal<bool> {
        self.store.is_loading
    }

    pub fn error(&self) -> RwSignal<Option<String>> {
        self.store.error
    }

    pub async fn fetch_insurance_provider_list(&self) -> OperationResult<Vec<InsuranceProviderDto>> {
        self.store.fetch_entity_list().await
    }

    pub async fn get_insurance_provider_by_id(&self, id: i32) -> OperationResult<InsuranceProviderDto> {
        self.store.get_entity_by_id(id).await
    }

    pub async fn save_insurance_provider(&self, dto: InsuranceProviderDto) -> OperationResult<InsuranceProviderDto> {
        self.store.save_entity(dto).await
    }

    /// Server-side delete; the provider stays listed as inactive
    pub async fn delete_insurance_provider(&self, id: i32) -> OperationResult<()> {
        self.store.delete_entity(id).await
    }

    pub async fn update_insurance_provider_status(&self, id: i32, active: bool) -> OperationResult<()> {
        self.store.update_entity_status(id, active).await
    }

    pub async fn get_next_insurance_provider_code(&self, prefix: &str, pad_length: usize) -> OperationResult<String> {
        self.store.get_next_code(prefix, pad_length).await
    }
}

pub fn use_insurance_provider_list() -> InsuranceProviderList {
    InsuranceProviderList::new(use_entity_store(EntityService::from_context()))
}
