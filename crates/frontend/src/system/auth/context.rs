use crate::shared::entity_service::TokenProvider;
use contracts::system::auth::SessionInfo;
use leptos::prelude::*;
use std::sync::Arc;

use super::storage;

/// Read-only view of the session the login screen established
#[derive(Clone, Copy)]
pub struct AuthState {
    session: RwSignal<Option<SessionInfo>>,
}

impl AuthState {
    pub fn new(session: Option<SessionInfo>) -> Self {
        Self {
            session: RwSignal::new(session),
        }
    }

    pub fn session(&self) -> Option<SessionInfo> {
        self.session.get()
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.with(Option::is_some)
    }

    pub fn access_token(&self) -> Option<String> {
        self.session
            .try_with_untracked(|s| s.as_ref().map(|s| s.access_token.clone()))
            .flatten()
    }

    /// Token source for services; reads the current session on every call
    pub fn token_provider(&self) -> TokenProvider {
        let state = *self;
        Arc::new(move || state.access_token())
    }
}

/// Reads the stored session once and provides it to the tree
#[component]
pub fn AuthProvider(children: Children) -> impl IntoView {
    let session = storage::load_session();
    if session.is_none() {
        log::warn!("No session found in browser storage");
    }
    provide_context(AuthState::new(session));

    children()
}

pub fn use_auth() -> AuthState {
    use_context::<AuthState>().expect("AuthProvider not found in component tree")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_provider_reads_current_session() {
        let auth = AuthState::new(None);
        let token = auth.token_provider();
        assert_eq!(token(), None);

        auth.session.set(Some(SessionInfo {
            access_token: "abc".into(),
            ..Default::default()
        }));
        assert_eq!(token(), Some("abc".to_string()));
        assert!(auth.is_authenticated());
    }
}
