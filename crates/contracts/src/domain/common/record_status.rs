use crate::shared::YesNo;
use serde::{Deserialize, Serialize};

/// Lifecycle flags carried by every DTO.
///
/// Records are never removed by the client: "deleting" flips `rActiveYN`
/// to `N`, and `transferYN` marks the record for cross-facility sync.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecordStatus {
    #[serde(rename = "rActiveYN", default = "YesNo::yes")]
    pub r_active_yn: YesNo,
    #[serde(rename = "transferYN", default)]
    pub transfer_yn: YesNo,
    #[serde(rename = "rNotes", default)]
    pub r_notes: Option<String>,
}

impl Default for RecordStatus {
    fn default() -> Self {
        Self {
            r_active_yn: YesNo::Yes,
            transfer_yn: YesNo::No,
            r_notes: None,
        }
    }
}

impl RecordStatus {
    pub const ACTIVE_KEY: &'static str = "rActiveYN";
    pub const TRANSFER_KEY: &'static str = "transferYN";
    pub const NOTES_KEY: &'static str = "rNotes";

    pub fn is_active(&self) -> bool {
        self.r_active_yn.is_yes()
    }

    pub fn set_active(&mut self, active: bool) {
        self.r_active_yn = YesNo::from_bool(active);
    }

    /// Form value for one of the status keys
    pub fn field_value(&self, key: &str) -> Option<String> {
        match key {
            Self::ACTIVE_KEY => Some(self.r_active_yn.to_string()),
            Self::TRANSFER_KEY => Some(self.transfer_yn.to_string()),
            Self::NOTES_KEY => Some(self.r_notes.clone().unwrap_or_default()),
            _ => None,
        }
    }

    /// Returns `false` when `key` is not a status key
    pub fn set_field_value(&mut self, key: &str, value: &str) -> bool {
        match key {
            Self::ACTIVE_KEY => {
                if let Some(flag) = YesNo::parse(value) {
                    self.r_active_yn = flag;
                }
                true
            }
            Self::TRANSFER_KEY => {
                if let Some(flag) = YesNo::parse(value) {
                    self.transfer_yn = flag;
                }
                true
            }
            Self::NOTES_KEY => {
                self.r_notes = non_empty(value);
                true
            }
            _ => false,
        }
    }
}

/// `None` for blank input
pub fn non_empty(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}
