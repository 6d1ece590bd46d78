use serde::{Deserialize, Serialize};

/// Audit trail and company scope, present on some DTOs.
///
/// Filled by the server; the client only echoes the values back on save.
/// Timestamps stay in the server's own text form so that offsets and
/// fraction digits survive the round trip.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AuditFields {
    #[serde(rename = "rCreatedBy", default, skip_serializing_if = "Option::is_none")]
    pub r_created_by: Option<String>,
    #[serde(rename = "rCreatedOn", default, skip_serializing_if = "Option::is_none")]
    pub r_created_on: Option<String>,
    #[serde(rename = "rModifiedBy", default, skip_serializing_if = "Option::is_none")]
    pub r_modified_by: Option<String>,
    #[serde(rename = "rModifiedOn", default, skip_serializing_if = "Option::is_none")]
    pub r_modified_on: Option<String>,
    #[serde(rename = "compID", default, skip_serializing_if = "Option::is_none")]
    pub comp_id: Option<i32>,
    #[serde(rename = "compCode", default, skip_serializing_if = "Option::is_none")]
    pub comp_code: Option<String>,
    #[serde(rename = "compName", default, skip_serializing_if = "Option::is_none")]
    pub comp_name: Option<String>,
}
