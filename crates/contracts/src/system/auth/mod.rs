use serde::{Deserialize, Serialize};

/// Session data written to browser storage by the login screen.
///
/// The master-data screens only read it: the token goes into the
/// `Authorization` header and the company name is shown in the header bar.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionInfo {
    pub access_token: String,
    #[serde(rename = "compID", default)]
    pub comp_id: Option<i32>,
    #[serde(default)]
    pub comp_code: Option<String>,
    #[serde(default)]
    pub comp_name: Option<String>,
    #[serde(default)]
    pub user_name: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_stored_session() {
        let json = r#"{"accessToken":"abc","compID":2,"compCode":"BR2"}"#;
        let session: SessionInfo = serde_json::from_str(json).unwrap();
        assert_eq!(session.access_token, "abc");
        assert_eq!(session.comp_id, Some(2));
        assert_eq!(session.comp_code.as_deref(), Some("BR2"));
        assert_eq!(session.comp_name, None);
    }
}
