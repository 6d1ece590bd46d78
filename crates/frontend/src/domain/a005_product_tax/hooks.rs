use crate::shared::entity_service::EntityService;
use crate::shared::entity_store::{use_entity_store, EntityStore};
use contracts::domain::a005_product_tax::aggregate::ProductTaxDto;
use contracts::shared::OperationResult;
use leptos::prelude::*;

#[derive(Clone, Copy)]
pub struct ProductTaxList {
    store: EntityStore<ProductTaxDto>,
}

impl ProductTaxList {
    pub fn new(store: EntityStore<ProductTaxDto>) -> Self {
        Self { store }
    }

    pub fn store(&self) -> EntityStore<ProductTaxDto> {
        self.store
    }

    pub fn product_tax_list(&self) -> RwSignal<Vec<ProductTaxDto>> {
        self.store.entity_list
    }

    pub fn is_loading(&self) -> RwSignal<bool> {
        self.store.is_loading
    }

    pub fn error(&self) -> RwSignal<Option<String>> {
        self.store.error
    }

    pub async fn fetch_product_tax_list(&self) -> OperationResult<Vec<ProductTaxDto>> {
        self.store.fetch_entity_list().await
    }

    pub async fn get_product_tax_by_id(&self, id: i32) -> OperationResult<ProductTaxDto> {
        self.store.get_entity_by_id(id).await
    }

    pub async fn save_product_tax(&self, dto: ProductTaxDto) -> OperationResult<ProductTaxDto> {
        self.store.save_entity(dto).await
    }

    pub async fn delete_product_tax(&self, id: i32) -> OperationResult<()> {
        self.store.delete_entity(id).await
    }

    pub async fn update_product_tax_status(&self, id: i32, active: bool) -> OperationResult<()> {
        self.store.update_entity_status(id, active).await
    }

    pub async fn get_next_product_tax_code(&self, prefix: &str, pad_length: usize) -> OperationResult<String> {
        self.store.get_next_code(prefix, pad_length).await
    }
}

pub fn use_product_tax_list() -> ProductTaxList {
    ProductTaxList::new(use_entity_store(EntityService::from_context()))
}
