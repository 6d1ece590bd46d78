use gloo_timers::future::TimeoutFuture;
use leptos::ev;
use leptos::prelude::*;
use leptos::task::spawn_local;

/// Overlay plus positioned surface. Headers and buttons belong to the content.
#[component]
pub fn ModalFrame(
    /// Overlay click; the stack decides whether the modal may close
    on_close: Callback<()>,
    z_index: i32,
    /// Extra class for the surface
    #[prop(optional)]
    modal_class: String,
    children: Children,
) -> impl IntoView {
    // Only a press and release that both land on the overlay count, so a
    // text selection dragged out of the form does not close it.
    let pressed_on_overlay = RwSignal::new(false);
    let on_overlay = |ev: &ev::MouseEvent| match (ev.target(), ev.current_target()) {
        (Some(target), Some(current)) => target == current,
        _ => false,
    };

    let handle_mouse_down = move |ev: ev::MouseEvent| {
        pressed_on_overlay.set(on_overlay(&ev));
    };

    let handle_click = move |ev: ev::MouseEvent| {
        let close = pressed_on_overlay.get_untracked() && on_overlay(&ev);
        pressed_on_overlay.set(false);
        if close {
            spawn_local(async move {
                TimeoutFuture::new(0).await;
                on_close.run(());
            });
        }
    };

    let surface_class = if modal_class.is_empty() {
        "modal".to_string()
    } else {
        format!("modal {}", modal_class)
    };

    view! {
        <div
            class="modal-overlay"
            style=format!("z-index: {};", z_index)
            on:mousedown=handle_mouse_down
            on:click=handle_click
        >
            <div class=surface_class on:click=|ev: ev::MouseEvent| ev.stop_propagation()>
                {children()}
            </div>
        </div>
    }
}
