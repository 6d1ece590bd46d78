use crate::domain::common::record_status::non_empty;
use crate::domain::common::{EditableEntity, EntityDto, FieldDescriptor, RecordStatus};
use crate::enums::api_module::ApiModule;
use crate::shared::{FieldRule, ValidationSchema};
use serde::{Deserialize, Serialize};

/// Medication dosage form ("5 ml", "1 tablet", ...)
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct DosageDto {
    #[serde(rename = "mDID")]
    pub md_id: i32,

    #[serde(rename = "mDCode")]
    pub md_code: String,

    #[serde(rename = "mDName")]
    pub md_name: String,

    #[serde(rename = "mDSnomedCode", default)]
    pub md_snomed_code: Option<String>,

    #[serde(flatten)]
    pub record: RecordStatus,
}

static FIELDS: [FieldDescriptor; 3] = [
    FieldDescriptor::text("mDCode", "Code"),
    FieldDescriptor::text("mDName", "Name"),
    FieldDescriptor::text("mDSnomedCode", "SNOMED code"),
];

impl EntityDto for DosageDto {
    fn id(&self) -> i32 {
        self.md_id
    }

    fn code(&self) -> &str {
        &self.md_code
    }

    fn set_code(&mut self, code: String) {
        self.md_code = code;
    }

    fn name(&self) -> &str {
        &self.md_name
    }

    fn record(&self) -> &RecordStatus {
        &self.record
    }

    fn record_mut(&mut self) -> &mut RecordStatus {
        &mut self.record
    }

    fn resource() -> &'static str {
        "MedicationDosage"
    }

    fn api_module() -> ApiModule {
        ApiModule::Inventory
    }

    fn id_field() -> &'static str {
        "mDID"
    }

    fn element_name() -> &'static str {
        "Dosage"
    }

    fn list_name() -> &'static str {
        "Dosages"
    }

    fn code_prefix() -> &'static str {
        "DOS"
    }

    fn validation_schema() -> ValidationSchema {
        ValidationSchema::new()
            .field(FieldRule::new("mDCode", "Code").required().max_length(10))
            .field(FieldRule::new("mDName", "Name").required().max_length(100))
            .field(FieldRule::new("mDSnomedCode", "SNOMED code").max_length(20))
            .field(FieldRule::new("rNotes", "Notes").max_length(4000))
    }
}

impl EditableEntity for DosageDto {
    fn fields() -> &'static [FieldDescriptor] {
        &FIELDS
    }

    fn entity_field_value(&self, key: &str) -> Option<String> {
        match key {
            "mDCode" => Some(self.md_code.clone()),
            "mDName" => Some(self.md_name.clone()),
            "mDSnomedCode" => Some(self.md_snomed_code.clone().unwrap_or_default()),
            _ => None,
        }
    }

    fn set_entity_field_value(&mut self, key: &str, value: &str) -> bool {
        match key {
            "mDCode" => self.md_code = value.to_string(),
            "mDName" => self.md_name = value.to_string(),
            "mDSnomedCode" => self.md_snomed_code = non_empty(value),
            _ => return false,
        }
        true
    }
}
