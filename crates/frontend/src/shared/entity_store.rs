//! Generic entity store: reactive list/loading/error state over an
//! [`EntityService`].
//!
//! Feature hooks wrap this under domain names. Writes always re-read the
//! whole list instead of patching it locally, and concurrent calls are not
//! de-duplicated: two saves fire two requests and two re-fetches.

use super::entity_service::EntityService;
use contracts::domain::common::EntityDto;
use contracts::shared::OperationResult;
use leptos::prelude::*;
use leptos::task::spawn_local;
use std::sync::Arc;

pub struct EntityStore<T: EntityDto> {
    service: StoredValue<Arc<EntityService<T>>>,
    pub entity_list: RwSignal<Vec<T>>,
    /// True while any call is in flight
    pub is_loading: RwSignal<bool>,
    /// Latest failure only; cleared when the next call starts
    pub error: RwSignal<Option<String>>,
    in_flight: StoredValue<usize>,
    initial_fetch_started: StoredValue<bool>,
}

impl<T: EntityDto> Clone for EntityStore<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: EntityDto> Copy for EntityStore<T> {}

impl<T: EntityDto> EntityStore<T> {
    pub fn new(service: EntityService<T>) -> Self {
        Self {
            service: StoredValue::new(Arc::new(service)),
            entity_list: RwSignal::new(Vec::new()),
            is_loading: RwSignal::new(false),
            error: RwSignal::new(None),
            in_flight: StoredValue::new(0),
            initial_fetch_started: StoredValue::new(false),
        }
    }

    /// `None` once the owning component is gone
    fn service(&self) -> Option<Arc<EntityService<T>>> {
        self.service.try_get_value()
    }

    fn begin(&self) {
        self.in_flight.try_update_value(|n| *n += 1);
        self.is_loading.try_set(true);
        self.error.try_set(None);
    }

    fn finish<R>(&self, result: &OperationResult<R>) {
        if !result.success {
            self.error.try_set(Some(result.error_text()));
        }
        let remaining = self
            .in_flight
            .try_update_value(|n| {
                *n = n.saturating_sub(1);
                *n
            })
            .unwrap_or(0);
        self.is_loading.try_set(remaining > 0);
    }

    /// Runs the first fetch exactly once per store. Returns whether this call
    /// started it.
    pub async fn ensure_initial_fetch(&self) -> bool {
        if self.initial_fetch_started.try_get_value().unwrap_or(true) {
            return false;
        }
        self.initial_fetch_started.try_set_value(true);
        self.fetch_entity_list().await;
        true
    }

    pub async fn fetch_entity_list(&self) -> OperationResult<Vec<T>> {
        let Some(service) = self.service() else {
            return disposed();
        };
        self.begin();
        let result = service.get_all().await;
        if result.success {
            // a successful read without a payload means an empty list
            let list = result.data.clone().unwrap_or_default();
            log::debug!("{}: loaded {} records", T::list_name(), list.len());
            self.entity_list.try_set(list);
        }
        self.finish(&result);
        result
    }

    pub async fn get_entity_by_id(&self, id: i32) -> OperationResult<T> {
        let Some(service) = self.service() else {
            return disposed();
        };
        self.begin();
        let result = service.get_by_id(id).await;
        self.finish(&result);
        result
    }

    /// Upsert `dto`, then re-fetch the list once on success
    pub async fn save_entity(&self, dto: T) -> OperationResult<T> {
        let Some(service) = self.service() else {
            return disposed();
        };
        self.begin();
        let result = service.save(&dto).await;
        if result.success {
            self.fetch_entity_list().await;
        }
        self.finish(&result);
        result
    }

    pub async fn delete_entity(&self, id: i32) -> OperationResult<()> {
        let Some(service) = self.service() else {
            return disposed();
        };
        self.begin();
        let result = service.delete(id).await;
        if result.success {
            self.fetch_entity_list().await;
        }
        self.finish(&result);
        result
    }

    pub async fn update_entity_status(&self, id: i32, active: bool) -> OperationResult<()> {
        let Some(service) = self.service() else {
            return disposed();
        };
        self.begin();
        let result = service.update_active_status(id, active).await;
        if result.success {
            self.fetch_entity_list().await;
        }
        self.finish(&result);
        result
    }

    pub async fn get_next_code(&self, prefix: &str, pad_length: usize) -> OperationResult<String> {
        let Some(service) = self.service() else {
            return disposed();
        };
        self.error.try_set(None);
        let result = service.get_next_code(prefix, pad_length).await;
        if !result.success {
            self.error.try_set(Some(result.error_text()));
        }
        result
    }
}

fn disposed<R>() -> OperationResult<R> {
    OperationResult::fail("View was closed before the request started")
}

/// Store for `service` that loads the list once when the calling component
/// mounts
pub fn use_entity_store<T: EntityDto>(service: EntityService<T>) -> EntityStore<T> {
    let store = EntityStore::new(service);
    spawn_local(async move {
        store.ensure_initial_fetch().await;
    });
    store
}
