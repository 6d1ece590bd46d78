//! Structural conventions shared by every master-data DTO

pub mod audit_fields;
pub mod editable_entity;
pub mod entity_dto;
pub mod record_status;

// Re-exports
pub use audit_fields::AuditFields;
pub use editable_entity::{EditableEntity, FieldDescriptor, FieldKind};
pub use entity_dto::EntityDto;
pub use record_status::RecordStatus;
