use crate::shared::entity_service::EntityService;
use crate::shared::entity_store::{use_entity_store, EntityStore};
use contracts::domain::a001_department::aggregate::DepartmentDto;
use contracts::shared::OperationResult;
use leptos::prelude::*;

/// Department operations under domain names. Every member delegates to the
/// generic store unchanged.
#[derive(Clone, Copy)]
pub struct DepartmentList {
    store: EntityStore<DepartmentDto>,
}

impl DepartmentList {
    pub fn new(store: EntityStore<DepartmentDto>) -> Self {
        Self { store }
    }

    pub fn store(&self) -> EntityStore<DepartmentDto> {
        self.store
    }

    pub fn department_list(&self) -> RwSignal<Vec<DepartmentDto>> {
        self.store.entity_list
    }

    pub fn is_loading(&self) -> RwSignal<bool> {
        self.store.is_loading
    }

    pub fn error(&self) -> RwSignal<Option<String>> {
        self.store.error
    }

    pub async fn fetch_department_list(&self) -> OperationResult<Vec<DepartmentDto>> {
        self.store.fetch_entity_list().await
    }

    pub async fn get_department_by_id(&self, id: i32) -> OperationResult<DepartmentDto> {
        self.store.get_entity_by_id(id).await
    }

    pub async fn save_department(&self, dto: DepartmentDto) -> OperationResult<DepartmentDto> {
        self.store.save_entity(dto).await
    }

    pub async fn delete_department(&self, id: i32) -> OperationResult<()> {
        self.store.delete_entity(id).await
    }

    pub async fn update_department_status(&self, id: i32, active: bool) -> OperationResult<()> {
        self.store.update_entity_status(id, active).await
    }

    pub async fn get_next_department_code(&self, prefix: &str, pad_length: usize) -> OperationResult<String> {
        self.store.get_next_code(prefix, pad_length).await
    }
}

/// Loads the department list once when the calling component mounts
pub fn use_department_list() -> DepartmentList {
    DepartmentList::new(use_entity_store(EntityService::from_context()))
}
