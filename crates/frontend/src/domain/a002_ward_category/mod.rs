pub mod hooks;
pub mod page;

pub use hooks::{use_ward_category_list, WardCategoryList};
pub use page::WardCategoryPage;
