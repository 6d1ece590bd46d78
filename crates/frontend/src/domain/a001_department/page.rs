use super::hooks::use_department_list;
use crate::shared::entity_page::EntityListPage;
use leptos::prelude::*;

#[component]
pub fn DepartmentPage() -> impl IntoView {
    let department_list = use_department_list();

    view! { <EntityListPage store=department_list.store() icon_name="building" /> }
}
