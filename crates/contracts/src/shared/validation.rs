//! Client-side validation schemas.
//!
//! A schema is a list of [`FieldRule`]s keyed by the JSON field name of the
//! DTO. The DTO is serialized with `serde_json` and each rule is checked
//! against the field's value, so one schema type serves every entity.

use serde::Serialize;
use serde_json::Value;
use std::collections::BTreeMap;

/// Field name (JSON key) -> first failing message for that field
pub type FieldErrors = BTreeMap<String, String>;

#[derive(Debug, Clone, PartialEq)]
enum Rule {
    Required,
    MaxLength(usize),
    Min(f64),
    Max(f64),
    Email,
}

/// Rules for one field. Built with the chained constructors.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldRule {
    field: &'static str,
    label: &'static str,
    rules: Vec<Rule>,
}

impl FieldRule {
    pub fn new(field: &'static str, label: &'static str) -> Self {
        Self {
            field,
            label,
            rules: vec![],
        }
    }

    pub fn required(mut self) -> Self {
        self.rules.push(Rule::Required);
        self
    }

    pub fn max_length(mut self, len: usize) -> Self {
        self.rules.push(Rule::MaxLength(len));
        self
    }

    pub fn min(mut self, value: f64) -> Self {
        self.rules.push(Rule::Min(value));
        self
    }

    pub fn max(mut self, value: f64) -> Self {
        self.rules.push(Rule::Max(value));
        self
    }

    pub fn email(mut self) -> Self {
        self.rules.push(Rule::Email);
        self
    }

    pub fn field(&self) -> &'static str {
        self.field
    }

    /// Max length declared for the field, used to size inputs
    pub fn max_len(&self) -> Option<usize> {
        self.rules.iter().find_map(|r| match r {
            Rule::MaxLength(len) => Some(*len),
            _ => None,
        })
    }

    pub fn is_required(&self) -> bool {
        self.rules.contains(&Rule::Required)
    }

    /// First failing rule's message, if any
    pub fn check(&self, value: &Value) -> Option<String> {
        self.rules.iter().find_map(|rule| self.check_rule(rule, value))
    }

    fn check_rule(&self, rule: &Rule, value: &Value) -> Option<String> {
        let text = value.as_str().map(str::trim);
        match rule {
            Rule::Required => {
                let missing = match value {
                    Value::Null => true,
                    Value::String(s) => s.trim().is_empty(),
                    _ => false,
                };
                missing.then(|| format!("{} is required", self.label))
            }
            Rule::MaxLength(len) => text
                .filter(|s| s.chars().count() > *len)
                .map(|_| format!("{} must not exceed {} characters", self.label, len)),
            Rule::Min(min) => numeric(value)
                .filter(|n| n < min)
                .map(|_| format!("{} must be at least {}", self.label, min)),
            Rule::Max(max) => numeric(value)
                .filter(|n| n > max)
                .map(|_| format!("{} must not exceed {}", self.label, max)),
            Rule::Email => text
                .filter(|s| !s.is_empty() && !looks_like_email(s))
                .map(|_| format!("{} must be a valid email address", self.label)),
        }
    }
}

fn numeric(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    }
}

fn looks_like_email(s: &str) -> bool {
    let Some((local, domain)) = s.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && !s.contains(char::is_whitespace)
        && domain
            .split_once('.')
            .is_some_and(|(host, tld)| !host.is_empty() && !tld.is_empty())
}

/// Set of field rules for one DTO type
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ValidationSchema {
    fields: Vec<FieldRule>,
}

impl ValidationSchema {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn field(mut self, rule: FieldRule) -> Self {
        self.fields.push(rule);
        self
    }

    pub fn rule_for(&self, field: &str) -> Option<&FieldRule> {
        self.fields.iter().find(|r| r.field == field)
    }

    /// Validate a DTO. Returns `Ok(())` or the per-field errors.
    pub fn validate<T: Serialize>(&self, dto: &T) -> Result<(), FieldErrors> {
        let value = match serde_json::to_value(dto) {
            Ok(v) => v,
            Err(e) => {
                let mut errors = FieldErrors::new();
                errors.insert(String::new(), format!("Form data cannot be encoded: {}", e));
                return Err(errors);
            }
        };

        let errors: FieldErrors = self
            .fields
            .iter()
            .filter_map(|rule| {
                let field_value = value.get(rule.field).unwrap_or(&Value::Null);
                rule.check(field_value)
                    .map(|msg| (rule.field.to_string(), msg))
            })
            .collect();

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    /// Validate a single field, for inline feedback while typing
    pub fn validate_field<T: Serialize>(&self, dto: &T, field: &str) -> Option<String> {
        let rule = self.rule_for(field)?;
        let value = serde_json::to_value(dto).ok()?;
        rule.check(value.get(field).unwrap_or(&Value::Null))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn schema() -> ValidationSchema {
        ValidationSchema::new()
            .field(FieldRule::new("code", "Code").required().max_length(6))
            .field(FieldRule::new("name", "Name").required().max_length(10))
            .field(FieldRule::new("rate", "Rate").min(0.0).max(100.0))
            .field(FieldRule::new("email", "Email").email())
    }

    #[test]
    fn test_valid_dto_passes() {
        let dto = json!({"code": "DEP001", "name": "Cardiology", "rate": 12.5, "email": null});
        assert!(schema().validate(&dto).is_ok());
    }

    #[test]
    fn test_required_and_length_errors_are_reported_per_field() {
        let dto = json!({"code": "", "name": "Cardiology Dept", "rate": 5});
        let errors = schema().validate(&dto).unwrap_err();
        assert_eq!(errors.get("code").map(String::as_str), Some("Code is required"));
        assert_eq!(
            errors.get("name").map(String::as_str),
            Some("Name must not exceed 10 characters")
        );
        assert!(!errors.contains_key("rate"));
    }

    #[test]
    fn test_numeric_range() {
        let dto = json!({"code": "T1", "name": "GST", "rate": 120});
        let errors = schema().validate(&dto).unwrap_err();
        assert_eq!(errors.get("rate").map(String::as_str), Some("Rate must not exceed 100"));
    }

    #[test]
    fn test_email_rule_ignores_empty_values() {
        let ok = json!({"code": "A", "name": "Ab", "email": ""});
        assert!(schema().validate(&ok).is_ok());
        let bad = json!({"code": "A", "name": "Ab", "email": "not-an-email"});
        assert!(schema().validate(&bad).unwrap_err().contains_key("email"));
    }

    #[test]
    fn test_validate_field() {
        let dto = json!({"code": "TOO-LONG-CODE", "name": "Ab"});
        assert_eq!(
            schema().validate_field(&dto, "code"),
            Some("Code must not exceed 6 characters".to_string())
        );
        assert_eq!(schema().validate_field(&dto, "name"), None);
        assert_eq!(schema().rule_for("code").and_then(FieldRule::max_len), Some(6));
    }
}
