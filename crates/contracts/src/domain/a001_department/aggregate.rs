use crate::domain::common::record_status::non_empty;
use crate::domain::common::{AuditFields, EditableEntity, EntityDto, FieldDescriptor, RecordStatus};
use crate::enums::api_module::ApiModule;
use crate::shared::{FieldRule, ValidationSchema, YesNo};
use serde::{Deserialize, Serialize};

/// Hospital department (Cardiology, Radiology, ...)
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct DepartmentDto {
    #[serde(rename = "deptID")]
    pub dept_id: i32,

    #[serde(rename = "deptCode")]
    pub dept_code: String,

    #[serde(rename = "deptName")]
    pub dept_name: String,

    /// Free-form classification, e.g. "Clinical" or "Administrative"
    #[serde(rename = "deptType", default)]
    pub dept_type: Option<String>,

    #[serde(rename = "superSpecialityYN", default)]
    pub super_speciality_yn: YesNo,

    #[serde(flatten)]
    pub record: RecordStatus,

    #[serde(flatten)]
    pub audit: AuditFields,
}

static FIELDS: [FieldDescriptor; 4] = [
    FieldDescriptor::text("deptCode", "Code"),
    FieldDescriptor::text("deptName", "Name"),
    FieldDescriptor::text("deptType", "Type"),
    FieldDescriptor::flag("superSpecialityYN", "Super speciality"),
];

impl EntityDto for DepartmentDto {
    fn id(&self) -> i32 {
        self.dept_id
    }

    fn code(&self) -> &str {
        &self.dept_code
    }

    fn set_code(&mut self, code: String) {
        self.dept_code = code;
    }

    fn name(&self) -> &str {
        &self.dept_name
    }

    fn record(&self) -> &RecordStatus {
        &self.record
    }

    fn record_mut(&mut self) -> &mut RecordStatus {
        &mut self.record
    }

    fn resource() -> &'static str {
        "Department"
    }

    fn api_module() -> ApiModule {
        ApiModule::HospitalAdministration
    }

    fn id_field() -> &'static str {
        "deptID"
    }

    fn element_name() -> &'static str {
        "Department"
    }

    fn list_name() -> &'static str {
        "Departments"
    }

    fn code_prefix() -> &'static str {
        "DEP"
    }

    fn validation_schema() -> ValidationSchema {
        ValidationSchema::new()
            .field(FieldRule::new("deptCode", "Code").required().max_length(10))
            .field(FieldRule::new("deptName", "Name").required().max_length(100))
            .field(FieldRule::new("deptType", "Type").max_length(50))
            .field(FieldRule::new("rNotes", "Notes").max_length(4000))
    }
}

impl EditableEntity for DepartmentDto {
    fn fields() -> &'static [FieldDescriptor] {
        &FIELDS
    }

    fn entity_field_value(&self, key: &str) -> Option<String> {
        match key {
            "deptCode" => Some(self.dept_code.clone()),
            "deptName" => Some(self.dept_name.clone()),
            "deptType" => Some(self.dept_type.clone().unwrap_or_default()),
            "superSpecialityYN" => Some(self.super_speciality_yn.to_string()),
            _ => None,
        }
    }

    fn set_entity_field_value(&mut self, key: &str, value: &str) -> bool {
        match key {
            "deptCode" => self.dept_code = value.to_string(),
            "deptName" => self.dept_name = value.to_string(),
            "deptType" => self.dept_type = non_empty(value),
            "superSpecialityYN" => {
                if let Some(flag) = YesNo::parse(value) {
                    self.super_speciality_yn = flag;
                }
            }
            _ => return false,
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_shape() {
        let dto = DepartmentDto {
            dept_code: "DEP001".into(),
            dept_name: "Cardiology".into(),
            ..Default::default()
        };
        let value = serde_json::to_value(&dto).unwrap();
        assert_eq!(value["deptID"], 0);
        assert_eq!(value["deptCode"], "DEP001");
        assert_eq!(value["rActiveYN"], "Y");
        assert_eq!(value["transferYN"], "N");
        assert_eq!(value["superSpecialityYN"], "N");
        assert!(value.get("compID").is_none());
    }

    #[test]
    fn test_reads_server_record_with_audit_fields() {
        let json = r#"{
            "deptID": 7, "deptCode": "DEP007", "deptName": "Radiology",
            "rActiveYN": "N", "transferYN": "Y", "rNotes": null,
            "compID": 1, "compCode": "MAIN", "compName": "Main Hospital",
            "rCreatedOn": "2024-03-15T14:02:26"
        }"#;
        let dto: DepartmentDto = serde_json::from_str(json).unwrap();
        assert_eq!(dto.id(), 7);
        assert!(!dto.is_new());
        assert!(!dto.is_active());
        assert_eq!(dto.audit.comp_code.as_deref(), Some("MAIN"));
        assert_eq!(dto.audit.r_created_on.as_deref(), Some("2024-03-15T14:02:26"));
    }

    #[test]
    fn test_list_with_offset_timestamps_decodes() {
        let json = r#"[
            {"deptID": 1, "deptCode": "DEP001", "deptName": "Cardiology",
             "rCreatedOn": "2024-03-15T14:02:26Z"},
            {"deptID": 2, "deptCode": "DEP002", "deptName": "Radiology",
             "rModifiedOn": "2024-03-15T14:02:26.1234567+05:30"}
        ]"#;
        let list: Vec<DepartmentDto> = serde_json::from_str(json).unwrap();
        assert_eq!(list.len(), 2);
        assert_eq!(
            list[1].audit.r_modified_on.as_deref(),
            Some("2024-03-15T14:02:26.1234567+05:30")
        );
    }

    #[test]
    fn test_new_record_requires_name() {
        let dto = DepartmentDto {
            dept_code: "DEP001".into(),
            ..Default::default()
        };
        assert!(dto.is_new());
        let errors = DepartmentDto::validation_schema().validate(&dto).unwrap_err();
        assert_eq!(errors.get("deptName").map(String::as_str), Some("Name is required"));
    }

    #[test]
    fn test_form_field_access_covers_status_keys() {
        let mut dto = DepartmentDto::default();
        assert!(dto.set_field_value("deptName", "Cardiology"));
        assert!(dto.set_field_value("rActiveYN", "N"));
        assert!(!dto.set_field_value("unknown", "x"));
        assert_eq!(dto.field_value("deptName"), "Cardiology");
        assert_eq!(dto.field_value("rActiveYN"), "N");
        assert_eq!(DepartmentDto::all_fields().len(), 7);
    }
}
