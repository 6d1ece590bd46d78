use contracts::system::auth::SessionInfo;
use web_sys::window;

/// Written by the login screen, read here only
const SESSION_KEY: &str = "hms_session";

fn get_session_storage() -> Option<web_sys::Storage> {
    window()?.session_storage().ok()?
}

/// Session from browser storage, if present and readable
pub fn load_session() -> Option<SessionInfo> {
    let raw = get_session_storage()?.get_item(SESSION_KEY).ok()??;
    parse_session(&raw)
}

pub fn parse_session(raw: &str) -> Option<SessionInfo> {
    match serde_json::from_str::<SessionInfo>(raw) {
        Ok(session) if !session.access_token.trim().is_empty() => Some(session),
        Ok(_) => None,
        Err(e) => {
            log::warn!("Ignoring unreadable session: {}", e);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_session() {
        let session = parse_session(r#"{"accessToken":"abc","compName":"City Hospital"}"#).unwrap();
        assert_eq!(session.access_token, "abc");
        assert_eq!(session.comp_name.as_deref(), Some("City Hospital"));

        assert_eq!(parse_session(r#"{"accessToken":"  "}"#), None);
        assert_eq!(parse_session("not json"), None);
    }
}
