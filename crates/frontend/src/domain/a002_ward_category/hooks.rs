use crate::shared::entity_service::EntityService;
use crate::shared::entity_store::{use_entity_store, EntityStore};
use contracts::domain::a002_ward_category::aggregate::WardCategoryDto;
use contracts::shared::OperationResult;
use leptos::prelude::*;

#[derive(Clone, Copy)]
pub struct WardCategoryList {
    store: EntityStore<WardCategoryDto>,
}

impl WardCategoryList {
    pub fn new(store: EntityStore<WardCategoryDto>) -> Self {
        Self { store }
    }

    pub fn store(&self) -> EntityStore<WardCategoryDto> {
        self.store
    }

    pub fn ward_category_list(&self) -> RwSignal<Vec<WardCategoryDto>> {
        self.store.entity_list
    }

    pub fn is_loading(&self) -> RwSignal<bool> {
        self.store.is_loading
    }

    pub fn error(&self) -> RwSignal<Option<String>> {
        self.store.error
    }

    pub async fn fetch_ward_category_list(&self) -> OperationResult<Vec<WardCategoryDto>> {
        self.store.fetch_entity_list().await
    }

    pub async fn get_ward_category_by_id(&self, id: i32) -> OperationResult<WardCategoryDto> {
        self.store.get_entity_by_id(id).await
    }

    pub async fn save_ward_category(&self, dto: WardCategoryDto) -> OperationResult<WardCategoryDto> {
        self.store.save_entity(dto).await
    }

    pub async fn delete_ward_category(&self, id: i32) -> OperationResult<()> {
        self.store.delete_entity(id).await
    }

    pub async fn update_ward_category_status(&self, id: i32, active: bool) -> OperationResult<()> {
        self.store.update_entity_status(id, active).await
    }

    pub async fn get_next_ward_category_code(&self, prefix: &str, pad_length: usize) -> OperationResult<String> {
        self.store.get_next_code(prefix, pad_length).await
    }
}

pub fn use_ward_category_list() -> WardCategoryList {
    WardCategoryList::new(use_entity_store(EntityService::from_context()))
}
