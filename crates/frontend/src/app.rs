use crate::layout::global_context::AppGlobalContext;
use crate::routes::routes::AppRoutes;
use crate::shared::api_client::GlooTransport;
use crate::shared::api_config::ApiConfig;
use crate::shared::entity_service::ApiContext;
use crate::shared::modal_stack::{ModalHost, ModalStackService};
use crate::shared::notifications::{NotificationHost, NotificationService};
use crate::system::auth::context::{use_auth, AuthProvider};
use leptos::prelude::*;
use std::sync::Arc;

/// Builds the API context once the session is known
#[component]
fn ApiProvider(children: Children) -> impl IntoView {
    let config = ApiConfig::load(option_env!("HMS_API_CONFIG")).unwrap_or_else(|e| {
        log::error!("API configuration unusable: {}", e);
        ApiConfig::default()
    });
    provide_context(ApiContext {
        config,
        transport: Arc::new(GlooTransport),
        token: use_auth().token_provider(),
    });

    children()
}

#[component]
pub fn App() -> impl IntoView {
    provide_context(AppGlobalContext::new());
    provide_context(ModalStackService::new());
    provide_context(NotificationService::new());

    view! {
        <AuthProvider>
            <ApiProvider>
                <AppRoutes />
                <ModalHost />
                <NotificationHost />
            </ApiProvider>
        </AuthProvider>
    }
}
