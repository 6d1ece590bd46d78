use super::hooks::use_ward_category_list;
use crate::shared::entity_page::EntityListPage;
use leptos::prelude::*;

#[component]
pub fn WardCategoryPage() -> impl IntoView {
    let ward_category_list = use_ward_category_list();

    view! { <EntityListPage store=ward_category_list.store() icon_name="bed" /> }
}
