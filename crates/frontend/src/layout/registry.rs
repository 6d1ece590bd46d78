//! Page registry: the one place that maps a page key to its view

use crate::domain::a001_department::DepartmentPage;
use crate::domain::a002_ward_category::WardCategoryPage;
use crate::domain::a003_resource::ResourcePage;
use crate::domain::a004_insurance_provider::InsuranceProviderPage;
use crate::domain::a005_product_tax::ProductTaxPage;
use crate::domain::a006_dosage::DosagePage;
use leptos::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Page {
    #[default]
    Departments,
    WardCategories,
    Resources,
    InsuranceProviders,
    ProductTaxes,
    Dosages,
}

impl Page {
    pub fn all() -> [Page; 6] {
        [
            Page::Departments,
            Page::WardCategories,
            Page::Resources,
            Page::InsuranceProviders,
            Page::ProductTaxes,
            Page::Dosages,
        ]
    }

    /// Value of the `?active=` query parameter
    pub fn key(&self) -> &'static str {
        match self {
            Page::Departments => "a001_department",
            Page::WardCategories => "a002_ward_category",
            Page::Resources => "a003_resource",
            Page::InsuranceProviders => "a004_insurance_provider",
            Page::ProductTaxes => "a005_product_tax",
            Page::Dosages => "a006_dosage",
        }
    }

    pub fn from_key(key: &str) -> Option<Page> {
        Self::all().into_iter().find(|p| p.key() == key)
    }

    pub fn title(&self) -> &'static str {
        match self {
            Page::Departments => "Departments",
            Page::WardCategories => "Ward Categories",
            Page::Resources => "Resources",
            Page::InsuranceProviders => "Insurance Providers",
            Page::ProductTaxes => "Product Taxes",
            Page::Dosages => "Dosages",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Page::Departments => "building",
            Page::WardCategories => "bed",
            Page::Resources => "calendar",
            Page::InsuranceProviders => "shield",
            Page::ProductTaxes => "percent",
            Page::Dosages => "pill",
        }
    }

    pub fn render(&self) -> AnyView {
        match self {
            Page::Departments => view! { <DepartmentPage /> }.into_any(),
            Page::WardCategories => view! { <WardCategoryPage /> }.into_any(),
            Page::Resources => view! { <ResourcePage /> }.into_any(),
            Page::InsuranceProviders => view! { <InsuranceProviderPage /> }.into_any(),
            Page::ProductTaxes => view! { <ProductTaxPage /> }.into_any(),
            Page::Dosages => view! { <DosagePage /> }.into_any(),
        }
    }
}
