//! Generic add/edit/view form for master-data entities.
//!
//! [`FormController`] holds the state; the async helpers here connect it to
//! an [`EntityStore`] and the toast queue; `view` renders it.

pub mod controller;
pub mod view;

pub use controller::{FormController, FormMode, PendingAction, SubmitCheck};
pub use view::{ConfirmDialog, EntityDetailsDialog};

use crate::shared::entity_store::EntityStore;
use crate::shared::notifications::NotificationService;
use contracts::domain::common::EditableEntity;
use leptos::prelude::*;

/// Returned when the dialog should close after a successful save
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormClose {
    pub refresh: bool,
}

/// Prefill the code of an add form from the server's next code
pub async fn prepare_new_form<T: EditableEntity>(
    form: RwSignal<FormController<T>>,
    store: EntityStore<T>,
) {
    if form.try_with_untracked(|f| f.mode()) != Some(FormMode::Adding) {
        return;
    }
    let result = store
        .get_next_code(T::code_prefix(), T::code_pad_length())
        .await;
    match result.into_result() {
        Ok(code) => {
            form.try_update(|f| f.apply_generated_code(code));
        }
        Err(e) => log::warn!("{}: next code unavailable: {}", T::element_name(), e),
    }
}

/// Validate, save through the store and report the outcome as a toast
pub async fn submit_form<T: EditableEntity>(
    form: RwSignal<FormController<T>>,
    store: EntityStore<T>,
    notifications: NotificationService,
) -> Option<FormClose> {
    let dto = match form.try_update(|f| f.prepare_submit())? {
        SubmitCheck::Blocked => return None,
        SubmitCheck::Invalid => {
            notifications.error("Please correct the highlighted fields");
            return None;
        }
        SubmitCheck::Ready(dto) => dto,
    };

    let is_new = dto.is_new();
    let result = store.save_entity(dto).await;
    if !result.success {
        notifications.error(result.error_text());
        return None;
    }

    let verb = if is_new { "created" } else { "updated" };
    notifications.success(format!("{} {} successfully", T::element_name(), verb));
    Some(FormClose { refresh: true })
}
