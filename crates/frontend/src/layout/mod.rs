pub mod global_context;
pub mod registry;
pub mod sidebar;

use crate::system::auth::context::use_auth;
use global_context::AppGlobalContext;
use leptos::prelude::*;
use sidebar::Sidebar;
use thaw::*;

/// Top bar with the sidebar toggle and the session's company
#[component]
fn TopHeader() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext context not found");
    let auth = use_auth();

    let company = move || {
        auth.session()
            .and_then(|s| s.comp_name.or(s.comp_code))
            .unwrap_or_default()
    };
    let user = move || auth.session().and_then(|s| s.user_name).unwrap_or_default();

    view! {
        <header class="top-header">
            <Flex justify=FlexJustify::SpaceBetween align=FlexAlign::Center>
                <Space gap=SpaceGap::Small>
                    <Button appearance=ButtonAppearance::Subtle on_click=move |_| ctx.toggle_left()>
                        "☰"
                    </Button>
                    <span class="top-header__title">"Hospital Administration"</span>
                </Space>
                <Space gap=SpaceGap::Small>
                    <span class="top-header__company">{company}</span>
                    <span class="top-header__user">{user}</span>
                </Space>
            </Flex>
        </header>
    }
}

/// Application shell: top bar, sidebar and the active page
#[component]
pub fn Shell() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext context not found");
    ctx.init_router_integration();

    view! {
        <div class="app-layout">
            <TopHeader />
            <div class="app-body">
                <Sidebar />
                <main class="app-main">{move || ctx.active.get().render()}</main>
            </div>
        </div>
    }
}
