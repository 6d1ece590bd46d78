pub mod hooks;
pub mod page;

pub use hooks::{use_resource_list, ResourceList};
pub use page::ResourcePage;
