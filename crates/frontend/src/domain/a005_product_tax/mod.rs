pub mod hooks;
pub mod page;

pub use hooks::{use_product_tax_list, ProductTaxList};
pub use page::ProductTaxPage;
