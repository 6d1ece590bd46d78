use crate::shared::modal_frame::ModalFrame;
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use std::sync::Arc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::KeyboardEvent;

type ModalBuilder = Arc<dyn Fn(ModalHandle) -> AnyView + Send + Sync>;

/// Asked before overlay click or Escape closes a modal; `false` keeps it open
pub type CloseGuard = Arc<dyn Fn() -> bool + Send + Sync>;

#[derive(Clone)]
struct ModalEntry {
    id: u64,
    builder: ModalBuilder,
    modal_class: Option<String>,
    can_close: Option<CloseGuard>,
}

impl ModalEntry {
    fn may_close(&self) -> bool {
        self.can_close.as_ref().map(|f| f()).unwrap_or(true)
    }
}

/// Lets a modal close itself from its own event handlers
#[derive(Clone, Copy)]
pub struct ModalHandle {
    id: u64,
    svc: ModalStackService,
}

impl ModalHandle {
    pub fn close(&self) {
        self.svc.close_deferred(self.id);
    }
}

/// Stack of open modals. Escape and overlay clicks only affect the top one.
#[derive(Clone, Copy)]
pub struct ModalStackService {
    stack: RwSignal<Vec<ModalEntry>>,
    next_id: StoredValue<u64>,
}

impl Default for ModalStackService {
    fn default() -> Self {
        Self::new()
    }
}

impl ModalStackService {
    pub fn new() -> Self {
        Self {
            stack: RwSignal::new(Vec::new()),
            next_id: StoredValue::new(1),
        }
    }

    pub fn is_open(&self) -> bool {
        !self.stack.with(Vec::is_empty)
    }

    /// Push a modal whose overlay/Escape close is routed through `can_close`
    pub fn push_guarded<F>(
        &self,
        modal_class: Option<String>,
        can_close: Option<CloseGuard>,
        builder: F,
    ) -> ModalHandle
    where
        F: Fn(ModalHandle) -> AnyView + Send + Sync + 'static,
    {
        let id = self.next_id.get_value();
        self.next_id.set_value(id + 1);

        self.stack.update(|s| {
            s.push(ModalEntry {
                id,
                builder: Arc::new(builder),
                modal_class,
                can_close,
            })
        });

        ModalHandle { id, svc: *self }
    }

    pub fn close(&self, id: u64) {
        self.stack.try_update(|s| s.retain(|e| e.id != id));
    }

    /// Removal waits one tick so the DOM event that triggered it finishes
    /// before its handler is dropped
    pub fn close_deferred(&self, id: u64) {
        let svc = *self;
        spawn_local(async move {
            TimeoutFuture::new(0).await;
            svc.close(id);
        });
    }

    fn close_top_if_allowed(&self) {
        let top = self.stack.with_untracked(|s| s.last().cloned());
        if let Some(entry) = top {
            if entry.may_close() {
                self.close_deferred(entry.id);
            }
        }
    }
}

/// Renders the modal stack. Mount once at the application root.
#[component]
pub fn ModalHost() -> impl IntoView {
    let svc = use_context::<ModalStackService>()
        .expect("ModalStackService not provided in context (provide it in app root)");

    Effect::new(move |_| {
        let on_keydown = Closure::wrap(Box::new(move |event: web_sys::Event| {
            let is_escape = event
                .dyn_ref::<KeyboardEvent>()
                .is_some_and(|e| e.key() == "Escape");
            if is_escape {
                svc.close_top_if_allowed();
            }
        }) as Box<dyn FnMut(_)>);

        if let Some(window) = web_sys::window() {
            let _ = window
                .add_event_listener_with_callback("keydown", on_keydown.as_ref().unchecked_ref());
            // Host lives as long as the app
            on_keydown.forget();
        }
    });

    let entries = move || {
        svc.stack
            .get()
            .into_iter()
            .enumerate()
            .collect::<Vec<(usize, ModalEntry)>>()
    };

    view! {
        <Show when=move || svc.is_open()>
            <For
                each=entries
                key=|(_, entry)| entry.id
                children=move |(depth, entry)| {
                    let guard = entry.clone();
                    let on_close = Callback::new(move |_| {
                        if guard.may_close() {
                            svc.close_deferred(guard.id);
                        }
                    });
                    let body = (entry.builder)(ModalHandle { id: entry.id, svc });

                    view! {
                        <ModalFrame
                            z_index=1000 + depth as i32
                            on_close=on_close
                            modal_class=entry.modal_class.clone().unwrap_or_default()
                        >
                            {body}
                        </ModalFrame>
                    }
                }
            />
        </Show>
    }
}
