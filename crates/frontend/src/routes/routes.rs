use crate::layout::Shell;
use crate::system::auth::guard::RequireSession;
use leptos::prelude::*;

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <RequireSession>
            <Shell />
        </RequireSession>
    }
}
