pub mod hooks;
pub mod page;

pub use hooks::{use_insurance_provider_list, InsuranceProviderList};
pub use page::InsuranceProviderPage;
