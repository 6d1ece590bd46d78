use crate::shared::entity_service::EntityService;
use crate::shared::entity_store::{use_entity_store, EntityStore};
use contracts::domain::a003_resource::aggregate::ResourceDto;
use contracts::shared::OperationResult;
use leptos::prelude::*;

#[derive(Clone, Copy)]
pub struct ResourceList {
    store: EntityStore<ResourceDto>,
}

impl ResourceList {
    pub fn new(store: EntityStore<ResourceDto>) -> Self {
        Self { store }
    }

    pub fn store(&self) -> EntityStore<ResourceDto> {
        self.store
    }

    pub fn resource_list(&self) -> RwSignal<Vec<ResourceDto>> {
        self.store.entity_list
    }

    pub fn is_loading(&self) -> RwSignal<bool> {
        self.store.is_loading
    }

    pub fn error(&self) -> RwSignal<Option<String>> {
        self.store.error
    }

    pub async fn fetch_resource_list(&self) -> OperationResult<Vec<ResourceDto>> {
        self.store.fetch_entity_list().await
    }

    pub async fn get_resource_by_id(&self, id: i32) -> OperationResult<ResourceDto> {
        self.store.get_entity_by_id(id).await
    }

    pub async fn save_resource(&self, dto: ResourceDto) -> OperationResult<ResourceDto> {
        self.store.save_entity(dto).await
    }

    pub async fn delete_resource(&self, id: i32) -> OperationResult<()> {
        self.store.delete_entity(id).await
    }

    pub async fn update_resource_status(&self, id: i32, active: bool) -> OperationResult<()> {
        self.store.update_entity_status(id, active).await
    }

    pub async fn get_next_resource_code(&self, prefix: &str, pad_length: usize) -> OperationResult<String> {
        self.store.get_next_code(prefix, pad_length).await
    }
}

pub fn use_resource_list() -> ResourceList {
    ResourceList::new(use_entity_store(EntityService::from_context()))
}
