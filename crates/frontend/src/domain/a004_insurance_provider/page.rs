use super::hooks::use_insurance_provider_list;
use crate::shared::entity_page::EntityListPage;
use leptos::prelude::*;

#[component]
pub fn InsuranceProviderPage() -> impl IntoView {
    let insurance_provider_list = use_insurance_provider_list();

    view! { <EntityListPage store=insurance_provider_list.store() icon_name="shield" /> }
}
