use crate::shared::entity_service::EntityService;
use crate::shared::entity_store::{use_entity_store, EntityStore};
use contracts::domain::a006_dosage::aggregate::DosageDto;
use contracts::shared::OperationResult;
use leptos::prelude::*;

#[derive(Clone, Copy)]
pub struct DosageList {
    store: EntityStore<DosageDto>,
}

impl DosageList {
    pub fn new(store: EntityStore<DosageDto>) -> Self {
        Self { store }
    }

    pub fn store(&self) -> EntityStore<DosageDto> {
        self.store
    }

    pub fn dosage_list(&self) -> RwSignal<Vec<DosageDto>> {
        self.store.entity_list
    }

    pub fn is_loading(&self) -> RwSignal<bool> {
        self.store.is_loading
    }

    pub fn error(&self) -> RwSignal<Option<String>> {
        self.store.error
    }

    pub async fn fetch_dosage_list(&self) -> OperationResult<Vec<DosageDto>> {
        self.store.fetch_entity_list().await
    }

    pub async fn get_dosage_by_id(&self, id: i32) -> OperationResult<DosageDto> {
        self.store.get_entity_by_id(id).await
    }

    pub async fn save_dosage(&self, dto: DosageDto) -> OperationResult<DosageDto> {
        self.store.save_entity(dto).await
    }

    pub async fn delete_dosage(&self, id: i32) -> OperationResult<()> {
        self.store.delete_entity(id).await
    }

    pub async fn update_dosage_status(&self, id: i32, active: bool) -> OperationResult<()> {
        self.store.update_entity_status(id, active).await
    }

    pub async fn get_next_dosage_code(&self, prefix: &str, pad_length: usize) -> OperationResult<String> {
        self.store.get_next_code(prefix, pad_length).await
    }
}

pub fn use_dosage_list() -> DosageList {
    DosageList::new(use_entity_store(EntityService::from_context()))
}
