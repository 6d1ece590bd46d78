use super::RecordStatus;
use crate::enums::api_module::ApiModule;
use crate::shared::ValidationSchema;
use serde::{de::DeserializeOwned, Serialize};

/// Trait for master-data DTOs.
///
/// Captures the convention every entity follows: a numeric key (`0` for a
/// record that has not been saved yet), a code/name pair and the lifecycle
/// flags, plus the static metadata the generic service and UI need.
pub trait EntityDto:
    Clone + PartialEq + Default + Serialize + DeserializeOwned + std::fmt::Debug + Send + Sync + 'static
{
    // ============================================================================
    // Instance data
    // ============================================================================

    /// Identifying key; `0` for a new record
    fn id(&self) -> i32;

    /// Human-readable code (for example "DEP001")
    fn code(&self) -> &str;

    fn set_code(&mut self, code: String);

    fn name(&self) -> &str;

    fn record(&self) -> &RecordStatus;

    fn record_mut(&mut self) -> &mut RecordStatus;

    // ============================================================================
    // Class metadata
    // ============================================================================

    /// REST resource segment, e.g. "Department" in `Department/GetAll`
    fn resource() -> &'static str;

    /// Backend module serving the resource
    fn api_module() -> ApiModule;

    /// JSON name of the identifying field (e.g. "deptID")
    fn id_field() -> &'static str;

    /// Singular display name (e.g. "Department")
    fn element_name() -> &'static str;

    /// Plural display name (e.g. "Departments")
    fn list_name() -> &'static str;

    /// Prefix passed to `GetNextCode`
    fn code_prefix() -> &'static str;

    /// Counter width passed to `GetNextCode`
    fn code_pad_length() -> usize {
        3
    }

    fn validation_schema() -> ValidationSchema;

    // ============================================================================
    // Provided
    // ============================================================================

    /// Upsert discriminator: only the key decides insert vs update
    fn is_new(&self) -> bool {
        self.id() == 0
    }

    fn is_active(&self) -> bool {
        self.record().is_active()
    }
}
