use crate::domain::common::record_status::non_empty;
use crate::domain::common::{AuditFields, EditableEntity, EntityDto, FieldDescriptor, RecordStatus};
use crate::enums::api_module::ApiModule;
use crate::shared::{FieldRule, ValidationSchema};
use serde::{Deserialize, Serialize};

/// Tax rate applied to inventory products
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ProductTaxDto {
    #[serde(rename = "pTaxID")]
    pub p_tax_id: i32,

    #[serde(rename = "pTaxCode")]
    pub p_tax_code: String,

    #[serde(rename = "pTaxName")]
    pub p_tax_name: String,

    /// Rate in percent
    #[serde(rename = "pTaxAmt", default)]
    pub p_tax_amt: Option<f64>,

    #[serde(rename = "pTaxDescription", default)]
    pub p_tax_description: Option<String>,

    #[serde(flatten)]
    pub record: RecordStatus,

    #[serde(flatten)]
    pub audit: AuditFields,
}

static FIELDS: [FieldDescriptor; 4] = [
    FieldDescriptor::text("pTaxCode", "Code"),
    FieldDescriptor::text("pTaxName", "Name"),
    FieldDescriptor::number("pTaxAmt", "Rate (%)"),
    FieldDescriptor::text_area("pTaxDescription", "Description"),
];

impl EntityDto for ProductTaxDto {
    fn id(&self) -> i32 {
        self.p_tax_id
    }

    fn code(&self) -> &str {
        &self.p_tax_code
    }

    fn set_code(&mut self, code: String) {
        self.p_tax_code = code;
    }

    fn name(&self) -> &str {
        &self.p_tax_name
    }

    fn record(&self) -> &RecordStatus {
        &self.record
    }

    fn record_mut(&mut self) -> &mut RecordStatus {
        &mut self.record
    }

    fn resource() -> &'static str {
        "ProductTaxList"
    }

    fn api_module() -> ApiModule {
        ApiModule::Inventory
    }

    fn id_field() -> &'static str {
        "pTaxID"
    }

    fn element_name() -> &'static str {
        "Product Tax"
    }

    fn list_name() -> &'static str {
        "Product Taxes"
    }

    fn code_prefix() -> &'static str {
        "TAX"
    }

    fn validation_schema() -> ValidationSchema {
        ValidationSchema::new()
            .field(FieldRule::new("pTaxCode", "Code").required().max_length(10))
            .field(FieldRule::new("pTaxName", "Name").required().max_length(50))
            .field(FieldRule::new("pTaxAmt", "Rate").required().min(0.0).max(100.0))
            .field(FieldRule::new("pTaxDescription", "Description").max_length(250))
            .field(FieldRule::new("rNotes", "Notes").max_length(4000))
    }
}

impl EditableEntity for ProductTaxDto {
    fn fields() -> &'static [FieldDescriptor] {
        &FIELDS
    }

    fn entity_field_value(&self, key: &str) -> Option<String> {
        match key {
            "pTaxCode" => Some(self.p_tax_code.clone()),
            "pTaxName" => Some(self.p_tax_name.clone()),
            "pTaxAmt" => Some(self.p_tax_amt.map(|v| v.to_string()).unwrap_or_default()),
            "pTaxDescription" => Some(self.p_tax_description.clone().unwrap_or_default()),
            _ => None,
        }
    }

    fn set_entity_field_value(&mut self, key: &str, value: &str) -> bool {
        match key {
            "pTaxCode" => self.p_tax_code = value.to_string(),
            "pTaxName" => self.p_tax_name = value.to_string(),
            // Unparseable input clears the rate so the required rule reports it
            "pTaxAmt" => self.p_tax_amt = value.trim().parse::<f64>().ok(),
            "pTaxDescription" => self.p_tax_description = non_empty(value),
            _ => return false,
        }
        true
    }
}
