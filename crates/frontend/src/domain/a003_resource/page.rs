use super::hooks::use_resource_list;
use crate::shared::entity_page::EntityListPage;
use leptos::prelude::*;

#[component]
pub fn ResourcePage() -> impl IntoView {
    let resource_list = use_resource_list();

    view! { <EntityListPage store=resource_list.store() icon_name="calendar" /> }
}
