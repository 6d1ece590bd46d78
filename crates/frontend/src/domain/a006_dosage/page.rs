use super::hooks::use_dosage_list;
use crate::shared::entity_page::EntityListPage;
use leptos::prelude::*;

#[component]
pub fn DosagePage() -> impl IntoView {
    let dosage_list = use_dosage_list();

    view! { <EntityListPage store=dosage_list.store() icon_name="pill" /> }
}
