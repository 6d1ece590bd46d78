pub mod operation_result;
pub mod validation;
pub mod yes_no;

pub use operation_result::OperationResult;
pub use validation::{FieldErrors, FieldRule, ValidationSchema};
pub use yes_no::YesNo;
