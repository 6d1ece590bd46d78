use leptos::prelude::*;

use super::context::use_auth;

/// Renders `children` only when a session is present
#[component]
pub fn RequireSession(children: ChildrenFn) -> impl IntoView {
    let auth = use_auth();

    view! {
        <Show
            when=move || auth.is_authenticated()
            fallback=|| view! {
                <div class="no-session">"No active session. Sign in through the hospital portal and reopen this page."</div>
            }
        >
            {children()}
        </Show>
    }
}
