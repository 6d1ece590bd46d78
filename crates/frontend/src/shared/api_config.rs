//! Base URLs of the backend modules.
//!
//! The defaults are embedded in the bundle as TOML. A deployment can replace
//! them at build time through the `HMS_API_CONFIG` environment variable
//! (TOML text with the same shape).

use contracts::enums::api_module::ApiModule;
use serde::Deserialize;
use std::collections::HashMap;
use thiserror::Error;

/// Default configuration embedded in the bundle
const DEFAULT_API_CONFIG: &str = r#"
[modules]
billing = "/api/Billing"
inventory = "/api/InventoryManagement"
patient_administration = "/api/PatientAdministration"
hospital_administration = "/api/HospitalAdministration"
laboratory = "/api/Laboratory"
front_office = "/api/FrontOffice"
"#;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("invalid API config: {0}")]
    Parse(String),

    #[error("no base URL configured for module '{0}'")]
    MissingModule(String),
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ServerConfig {
    /// Backend port on the page's host. When absent the page origin is used.
    pub port: Option<u16>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ApiConfig {
    #[serde(default)]
    pub server: ServerConfig,
    /// Module config key -> base URL (absolute, or a path on the backend origin)
    #[serde(default)]
    pub modules: HashMap<String, String>,
}

impl ApiConfig {
    pub fn parse(text: &str) -> Result<Self, ConfigError> {
        toml::from_str(text).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Load the override if one is given and valid, otherwise the embedded
    /// default
    pub fn load(override_toml: Option<&str>) -> Result<Self, ConfigError> {
        if let Some(text) = override_toml {
            match Self::parse(text) {
                Ok(config) => {
                    log::info!("Using API config override");
                    return Ok(config);
                }
                Err(e) => log::warn!("Ignoring API config override: {}", e),
            }
        }
        Self::parse(DEFAULT_API_CONFIG)
    }

    /// Base URL of a module, resolved against `origin` when it is relative
    pub fn resolve_base_url(&self, module: ApiModule, origin: &str) -> Result<String, ConfigError> {
        let configured = self.module_url(module)?;
        if is_absolute(configured) {
            return Ok(configured.trim_end_matches('/').to_string());
        }

        Ok(format!(
            "{}/{}",
            origin.trim_end_matches('/'),
            configured.trim_matches('/')
        ))
    }

    /// Base URL of a module for the current page
    pub fn base_url(&self, module: ApiModule) -> Result<String, ConfigError> {
        let configured = self.module_url(module)?;
        if is_absolute(configured) {
            return Ok(configured.trim_end_matches('/').to_string());
        }
        self.resolve_base_url(module, &api_base(self.server.port))
    }

    fn module_url(&self, module: ApiModule) -> Result<&str, ConfigError> {
        self.modules
            .get(module.config_key())
            .map(String::as_str)
            .ok_or_else(|| ConfigError::MissingModule(module.config_key().to_string()))
    }
}

fn is_absolute(url: &str) -> bool {
    url.starts_with("http://") || url.starts_with("https://")
}

/// Backend origin derived from the current window location.
///
/// Uses the page's own origin, or the page host with `port` when one is
/// configured. Returns an empty string when there is no window.
pub fn api_base(port: Option<u16>) -> String {
    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    match port {
        Some(port) => {
            let hostname = location
                .hostname()
                .unwrap_or_else(|_| "127.0.0.1".to_string());
            format!("{}//{}:{}", protocol, hostname, port)
        }
        None => {
            let host = location.host().unwrap_or_else(|_| "127.0.0.1".to_string());
            format!("{}//{}", protocol, host)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_loads() {
        let config = ApiConfig::load(None).unwrap();
        for module in ApiModule::all() {
            assert!(config.modules.contains_key(module.config_key()));
        }
        assert_eq!(config.server.port, None);
    }

    #[test]
    fn test_relative_base_is_joined_to_origin() {
        let config = ApiConfig::load(None).unwrap();
        assert_eq!(
            config
                .resolve_base_url(ApiModule::HospitalAdministration, "https://hms.local:5001/")
                .unwrap(),
            "https://hms.local:5001/api/HospitalAdministration"
        );
    }

    #[test]
    fn test_override_with_absolute_urls() {
        let text = r#"
            [server]
            port = 5000

            [modules]
            inventory = "https://inventory.hms.local/api/"
        "#;
        let config = ApiConfig::load(Some(text)).unwrap();
        assert_eq!(config.server.port, Some(5000));
        assert_eq!(
            config.resolve_base_url(ApiModule::Inventory, "http://ignored").unwrap(),
            "https://inventory.hms.local/api"
        );
        assert_eq!(
            config.resolve_base_url(ApiModule::Billing, "http://x"),
            Err(ConfigError::MissingModule("billing".into()))
        );
    }

    #[test]
    fn test_broken_override_falls_back_to_default() {
        let config = ApiConfig::load(Some("modules = [")).unwrap();
        assert_eq!(config, ApiConfig::parse(DEFAULT_API_CONFIG).unwrap());
    }
}
