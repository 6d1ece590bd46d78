use crate::domain::common::{EditableEntity, EntityDto, FieldDescriptor, RecordStatus};
use crate::enums::api_module::ApiModule;
use crate::shared::{FieldRule, ValidationSchema};
use serde::{Deserialize, Serialize};

/// Ward category (General, Semi-private, ICU, ...)
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct WardCategoryDto {
    #[serde(rename = "wCatID")]
    pub w_cat_id: i32,

    #[serde(rename = "wCatCode")]
    pub w_cat_code: String,

    #[serde(rename = "wCatName")]
    pub w_cat_name: String,

    #[serde(flatten)]
    pub record: RecordStatus,
}

static FIELDS: [FieldDescriptor; 2] = [
    FieldDescriptor::text("wCatCode", "Code"),
    FieldDescriptor::text("wCatName", "Name"),
];

impl EntityDto for WardCategoryDto {
    fn id(&self) -> i32 {
        self.w_cat_id
    }

    fn code(&self) -> &str {
        &self.w_cat_code
    }

    fn set_code(&mut self, code: String) {
        self.w_cat_code = code;
    }

    fn name(&self) -> &str {
        &self.w_cat_name
    }

    fn record(&self) -> &RecordStatus {
        &self.record
    }

    fn record_mut(&mut self) -> &mut RecordStatus {
        &mut self.record
    }

    fn resource() -> &'static str {
        "WardCategory"
    }

    fn api_module() -> ApiModule {
        ApiModule::HospitalAdministration
    }

    fn id_field() -> &'static str {
        "wCatID"
    }

    fn element_name() -> &'static str {
        "Ward Category"
    }

    fn list_name() -> &'static str {
        "Ward Categories"
    }

    fn code_prefix() -> &'static str {
        "WCT"
    }

    fn validation_schema() -> ValidationSchema {
        ValidationSchema::new()
            .field(FieldRule::new("wCatCode", "Code").required().max_length(10))
            .field(FieldRule::new("wCatName", "Name").required().max_length(50))
            .field(FieldRule::new("rNotes", "Notes").max_length(4000))
    }
}

impl EditableEntity for WardCategoryDto {
    fn fields() -> &'static [FieldDescriptor] {
        &FIELDS
    }

    fn entity_field_value(&self, key: &str) -> Option<String> {
        match key {
            "wCatCode" => Some(self.w_cat_code.clone()),
            "wCatName" => Some(self.w_cat_name.clone()),
            _ => None,
        }
    }

    fn set_entity_field_value(&mut self, key: &str, value: &str) -> bool {
        match key {
            "wCatCode" => self.w_cat_code = value.to_string(),
            "wCatName" => self.w_cat_name = value.to_string(),
            _ => return false,
        }
        true
    }
}
