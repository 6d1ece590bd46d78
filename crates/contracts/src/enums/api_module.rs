use serde::{Deserialize, Serialize};

/// REST backend modules. Each one is served from its own base URL.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ApiModule {
    Billing,
    Inventory,
    PatientAdministration,
    HospitalAdministration,
    Laboratory,
    FrontOffice,
}

impl ApiModule {
    /// Key of the module in the `[modules]` table of the API config
    pub fn config_key(&self) -> &'static str {
        match self {
            ApiModule::Billing => "billing",
            ApiModule::Inventory => "inventory",
            ApiModule::PatientAdministration => "patient_administration",
            ApiModule::HospitalAdministration => "hospital_administration",
            ApiModule::Laboratory => "laboratory",
            ApiModule::FrontOffice => "front_office",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            ApiModule::Billing => "Billing",
            ApiModule::Inventory => "Inventory",
            ApiModule::PatientAdministration => "Patient Administration",
            ApiModule::HospitalAdministration => "Hospital Administration",
            ApiModule::Laboratory => "Laboratory",
            ApiModule::FrontOffice => "Front Office",
        }
    }

    pub fn all() -> Vec<ApiModule> {
        vec![
            ApiModule::Billing,
            ApiModule::Inventory,
            ApiModule::PatientAdministration,
            ApiModule::HospitalAdministration,
            ApiModule::Laboratory,
            ApiModule::FrontOffice,
        ]
    }

    pub fn from_config_key(key: &str) -> Option<Self> {
        ApiModule::all().into_iter().find(|m| m.config_key() == key)
    }
}

impl std::fmt::Display for ApiModule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_keys_round_trip() {
        for module in ApiModule::all() {
            assert_eq!(ApiModule::from_config_key(module.config_key()), Some(module));
        }
        assert_eq!(ApiModule::from_config_key("pharmacy"), None);
    }
}
