use super::{EntityDto, RecordStatus};

/// How a field is edited in the generic details form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    TextArea,
    Number,
    /// `Y`/`N` flag rendered as a checkbox
    Flag,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldDescriptor {
    /// JSON field name, also the key for validation errors
    pub key: &'static str,
    pub label: &'static str,
    pub kind: FieldKind,
}

impl FieldDescriptor {
    pub const fn text(key: &'static str, label: &'static str) -> Self {
        Self { key, label, kind: FieldKind::Text }
    }

    pub const fn text_area(key: &'static str, label: &'static str) -> Self {
        Self { key, label, kind: FieldKind::TextArea }
    }

    pub const fn number(key: &'static str, label: &'static str) -> Self {
        Self { key, label, kind: FieldKind::Number }
    }

    pub const fn flag(key: &'static str, label: &'static str) -> Self {
        Self { key, label, kind: FieldKind::Flag }
    }
}

/// Status fields appended to every form
pub const STATUS_FIELDS: [FieldDescriptor; 3] = [
    FieldDescriptor::flag(RecordStatus::ACTIVE_KEY, "Active"),
    FieldDescriptor::flag(RecordStatus::TRANSFER_KEY, "Transfer"),
    FieldDescriptor::text_area(RecordStatus::NOTES_KEY, "Notes"),
];

/// DTOs the generic form can edit field by field
pub trait EditableEntity: EntityDto {
    /// Entity-specific fields in display order (status fields excluded)
    fn fields() -> &'static [FieldDescriptor];

    /// String value of an entity-specific field
    fn entity_field_value(&self, key: &str) -> Option<String>;

    /// Set an entity-specific field from form input. Returns `false` for
    /// unknown keys.
    fn set_entity_field_value(&mut self, key: &str, value: &str) -> bool;

    /// Entity fields followed by the status fields
    fn all_fields() -> Vec<FieldDescriptor> {
        Self::fields().iter().copied().chain(STATUS_FIELDS).collect()
    }

    fn field_value(&self, key: &str) -> String {
        self.entity_field_value(key)
            .or_else(|| self.record().field_value(key))
            .unwrap_or_default()
    }

    fn set_field_value(&mut self, key: &str, value: &str) -> bool {
        self.set_entity_field_value(key, value) || self.record_mut().set_field_value(key, value)
    }
}
