use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

/// How long a toast stays on screen
const AUTO_DISMISS_MS: u32 = 4000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Notification {
    pub id: u64,
    pub kind: NotificationKind,
    pub message: String,
}

/// Toast queue shared by every screen. Success, business and network
/// failures all end up here as one short message.
#[derive(Clone, Copy)]
pub struct NotificationService {
    items: RwSignal<Vec<Notification>>,
    next_id: StoredValue<u64>,
}

impl Default for NotificationService {
    fn default() -> Self {
        Self::new()
    }
}

impl NotificationService {
    pub fn new() -> Self {
        Self {
            items: RwSignal::new(Vec::new()),
            next_id: StoredValue::new(1),
        }
    }

    fn push(&self, kind: NotificationKind, message: String) -> u64 {
        let id = self.next_id.get_value();
        self.next_id.set_value(id + 1);
        match kind {
            NotificationKind::Success => log::info!("{}", message),
            NotificationKind::Error => log::warn!("{}", message),
        }
        self.items.try_update(|items| items.push(Notification { id, kind, message }));
        id
    }

    pub fn success(&self, message: impl Into<String>) -> u64 {
        self.push(NotificationKind::Success, message.into())
    }

    pub fn error(&self, message: impl Into<String>) -> u64 {
        self.push(NotificationKind::Error, message.into())
    }

    pub fn dismiss(&self, id: u64) {
        self.items.try_update(|items| items.retain(|n| n.id != id));
    }

    pub fn items(&self) -> Vec<Notification> {
        self.items.get()
    }

    pub fn items_untracked(&self) -> Vec<Notification> {
        self.items.get_untracked()
    }
}

pub fn use_notifications() -> NotificationService {
    use_context::<NotificationService>()
        .expect("NotificationService not provided in context (provide it in app root)")
}

/// Renders the toast queue. Mount once at the application root.
#[component]
pub fn NotificationHost() -> impl IntoView {
    let svc = use_notifications();

    view! {
        <div class="toast-host">
            <For
                each=move || svc.items()
                key=|n| n.id
                children=move |n| {
                    let id = n.id;
                    spawn_local(async move {
                        TimeoutFuture::new(AUTO_DISMISS_MS).await;
                        svc.dismiss(id);
                    });
                    let class = match n.kind {
                        NotificationKind::Success => "toast toast--success",
                        NotificationKind::Error => "toast toast--error",
                    };
                    view! {
                        <div class=class role="status" on:click=move |_| svc.dismiss(id)>
                            {n.message}
                        </div>
                    }
                }
            />
        </div>
    }
}
