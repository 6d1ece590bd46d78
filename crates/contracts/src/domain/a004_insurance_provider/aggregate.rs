use crate::domain::common::record_status::non_empty;
use crate::domain::common::{AuditFields, EditableEntity, EntityDto, FieldDescriptor, RecordStatus};
use crate::enums::api_module::ApiModule;
use crate::shared::{FieldRule, ValidationSchema};
use serde::{Deserialize, Serialize};

/// Insurance company accepted for patient billing
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct InsuranceProviderDto {
    #[serde(rename = "insurID")]
    pub insur_id: i32,

    #[serde(rename = "insurCode")]
    pub insur_code: String,

    #[serde(rename = "insurName")]
    pub insur_name: String,

    #[serde(rename = "insurStreet", default)]
    pub insur_street: Option<String>,

    #[serde(rename = "insurCity", default)]
    pub insur_city: Option<String>,

    #[serde(rename = "insurPhone1", default)]
    pub insur_phone1: Option<String>,

    #[serde(rename = "insurEmail", default)]
    pub insur_email: Option<String>,

    /// Contact person
    #[serde(rename = "insurContact", default)]
    pub insur_contact: Option<String>,

    #[serde(flatten)]
    pub record: RecordStatus,

    #[serde(flatten)]
    pub audit: AuditFields,
}

static FIELDS: [FieldDescriptor; 7] = [
    FieldDescriptor::text("insurCode", "Code"),
    FieldDescriptor::text("insurName", "Name"),
    FieldDescriptor::text("insurStreet", "Street"),
    FieldDescriptor::text("insurCity", "City"),
    FieldDescriptor::text("insurPhone1", "Phone"),
    FieldDescriptor::text("insurEmail", "Email"),
    FieldDescriptor::text("insurContact", "Contact person"),
];

impl EntityDto for InsuranceProviderDto {
    fn id(&self) -> i32 {
        self.insur_id
    }

    fn code(&self) -> &str {
        &self.insur_code
    }

    fn set_code(&mut self, code: String) {
        self.insur_code = code;
    }

    fn name(&self) -> &str {
        &self.insur_name
    }

    fn record(&self) -> &RecordStatus {
        &self.record
    }

    fn record_mut(&mut self) -> &mut RecordStatus {
        &mut self.record
    }

    fn resource() -> &'static str {
        "InsuranceList"
    }

    fn api_module() -> ApiModule {
        ApiModule::HospitalAdministration
    }

    fn id_field() -> &'static str {
        "insurID"
    }

    fn element_name() -> &'static str {
        "Insurance Provider"
    }

    fn list_name() -> &'static str {
        "Insurance Providers"
    }

    fn code_prefix() -> &'static str {
        "INS"
    }

    fn validation_schema() -> ValidationSchema {
        ValidationSchema::new()
            .field(FieldRule::new("insurCode", "Code").required().max_length(10))
            .field(FieldRule::new("insurName", "Name").required().max_length(100))
            .field(FieldRule::new("insurStreet", "Street").max_length(100))
            .field(FieldRule::new("insurCity", "City").max_length(50))
            .field(FieldRule::new("insurPhone1", "Phone").max_length(20))
            .field(FieldRule::new("insurEmail", "Email").email().max_length(100))
            .field(FieldRule::new("insurContact", "Contact person").max_length(50))
            .field(FieldRule::new("rNotes", "Notes").max_length(4000))
    }
}

impl EditableEntity for InsuranceProviderDto {
    fn fields() -> &'static [FieldDescriptor] {
        &FIELDS
    }

    fn entity_field_value(&self, key: &str) -> Option<String> {
        let optional = |v: &Option<String>| Some(v.clone().unwrap_or_default());
        match key {
            "insurCode" => Some(self.insur_code.clone()),
            "insurName" => Some(self.insur_name.clone()),
            "insurStreet" => optional(&self.insur_street),
            "insurCity" => optional(&self.insur_city),
            "insurPhone1" => optional(&self.insur_phone1),
            "insurEmail" => optional(&self.insur_email),
            "insurContact" => optional(&self.insur_contact),
            _ => None,
        }
    }

    fn set_entity_field_value(&mut self, key: &str, value: &str) -> bool {
        match key {
            "insurCode" => self.insur_code = value.to_string(),
            "insurName" => self.insur_name = value.to_string(),
            "insurStreet" => self.insur_street = non_empty(value),
            "insurCity" => self.insur_city = non_empty(value),
            "insurPhone1" => self.insur_phone1 = non_empty(value),
            "insurEmail" => self.insur_email = non_empty(value),
            "insurContact" => self.insur_contact = non_empty(value),
            _ => return false,
        }
        true
    }
}
