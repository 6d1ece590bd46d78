pub mod hooks;
pub mod page;

pub use hooks::{use_department_list, DepartmentList};
pub use page::DepartmentPage;
