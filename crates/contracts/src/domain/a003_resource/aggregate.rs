use crate::domain::common::{EditableEntity, EntityDto, FieldDescriptor, RecordStatus};
use crate::enums::api_module::ApiModule;
use crate::shared::{FieldRule, ValidationSchema, YesNo};
use serde::{Deserialize, Serialize};

/// Schedulable resource used by front-office appointments (rooms, theatres,
/// equipment)
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ResourceDto {
    #[serde(rename = "rLID")]
    pub rl_id: i32,

    #[serde(rename = "rLCode")]
    pub rl_code: String,

    #[serde(rename = "rLName")]
    pub rl_name: String,

    /// Operation theatre resource
    #[serde(rename = "rLOtYN", default)]
    pub rl_ot_yn: YesNo,

    /// Bookings against this resource need validation
    #[serde(rename = "rLValidateYN", default)]
    pub rl_validate_yn: YesNo,

    #[serde(flatten)]
    pub record: RecordStatus,
}

static FIELDS: [FieldDescriptor; 4] = [
    FieldDescriptor::text("rLCode", "Code"),
    FieldDescriptor::text("rLName", "Name"),
    FieldDescriptor::flag("rLOtYN", "Operation theatre"),
    FieldDescriptor::flag("rLValidateYN", "Requires validation"),
];

impl EntityDto for ResourceDto {
    fn id(&self) -> i32 {
        self.rl_id
    }

    fn code(&self) -> &str {
        &self.rl_code
    }

    fn set_code(&mut self, code: String) {
        self.rl_code = code;
    }

    fn name(&self) -> &str {
        &self.rl_name
    }

    fn record(&self) -> &RecordStatus {
        &self.record
    }

    fn record_mut(&mut self) -> &mut RecordStatus {
        &mut self.record
    }

    fn resource() -> &'static str {
        "ResourceList"
    }

    fn api_module() -> ApiModule {
        ApiModule::FrontOffice
    }

    fn id_field() -> &'static str {
        "rLID"
    }

    fn element_name() -> &'static str {
        "Resource"
    }

    fn list_name() -> &'static str {
        "Resources"
    }

    fn code_prefix() -> &'static str {
        "RES"
    }

    fn validation_schema() -> ValidationSchema {
        ValidationSchema::new()
            .field(FieldRule::new("rLCode", "Code").required().max_length(10))
            .field(FieldRule::new("rLName", "Name").required().max_length(100))
            .field(FieldRule::new("rNotes", "Notes").max_length(4000))
    }
}

impl EditableEntity for ResourceDto {
    fn fields() -> &'static [FieldDescriptor] {
        &FIELDS
    }

    fn entity_field_value(&self, key: &str) -> Option<String> {
        match key {
            "rLCode" => Some(self.rl_code.clone()),
            "rLName" => Some(self.rl_name.clone()),
            "rLOtYN" => Some(self.rl_ot_yn.to_string()),
            "rLValidateYN" => Some(self.rl_validate_yn.to_string()),
            _ => None,
        }
    }

    fn set_entity_field_value(&mut self, key: &str, value: &str) -> bool {
        match key {
            "rLCode" => self.rl_code = value.to_string(),
            "rLName" => self.rl_name = value.to_string(),
            "rLOtYN" | "rLValidateYN" => {
                let Some(flag) = YesNo::parse(value) else {
                    return true;
                };
                if key == "rLOtYN" {
                    self.rl_ot_yn = flag;
                } else {
                    self.rl_validate_yn = flag;
                }
            }
            _ => return false,
        }
        true
    }
}
