pub mod hooks;
pub mod page;

pub use hooks::{use_dosage_list, DosageList};
pub use page::DosagePage;
