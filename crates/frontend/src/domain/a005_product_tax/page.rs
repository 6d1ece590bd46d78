use super::hooks::use_product_tax_list;
use crate::shared::entity_page::EntityListPage;
use leptos::prelude::*;

#[component]
pub fn ProductTaxPage() -> impl IntoView {
    let product_tax_list = use_product_tax_list();

    view! { <EntityListPage store=product_tax_list.store() icon_name="percent" /> }
}
