use super::global_context::AppGlobalContext;
use super::registry::Page;
use crate::shared::icons::icon;
use leptos::prelude::*;

#[component]
pub fn Sidebar() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext context not found");

    let items = Page::all()
        .into_iter()
        .map(|page| {
            view! {
                <button
                    class="sidebar__item"
                    class:sidebar__item--active=move || ctx.active.get() == page
                    on:click=move |_| ctx.open(page)
                >
                    {icon(page.icon())}
                    <span>{page.title()}</span>
                </button>
            }
        })
        .collect_view();

    view! {
        <nav class="sidebar" class:sidebar--collapsed=move || !ctx.left_open.get()>
            <div class="sidebar__group">"Master data"</div>
            {items}
        </nav>
    }
}
