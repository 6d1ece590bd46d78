use super::{prepare_new_form, submit_form, FormClose, FormController, PendingAction};
use crate::shared::entity_store::EntityStore;
use crate::shared::notifications::use_notifications;
use contracts::domain::common::{EditableEntity, FieldDescriptor, FieldKind};
use contracts::shared::YesNo;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

/// Yes/no question shown over the details form
#[component]
pub fn ConfirmDialog(
    #[prop(into)] open: Signal<bool>,
    #[prop(into)] message: Signal<String>,
    on_confirm: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    view! {
        <Show when=move || open.get()>
            <div class="modal-overlay" style="z-index: 2000;">
                <div class="modal confirm-dialog" role="alertdialog">
                    <div class="confirm-dialog__message">{move || message.get()}</div>
                    <Flex justify=FlexJustify::End gap=FlexGap::Small>
                        <Button appearance=ButtonAppearance::Secondary on_click=move |_| on_cancel.run(())>
                            "Cancel"
                        </Button>
                        <Button appearance=ButtonAppearance::Primary on_click=move |_| on_confirm.run(())>
                            "Confirm"
                        </Button>
                    </Flex>
                </div>
            </div>
        </Show>
    }
}

/// Add / edit / view dialog body for any editable entity.
///
/// Opened through the modal stack; `on_close` fires with `refresh = true`
/// after a successful save and `refresh = false` on cancel.
#[component]
pub fn EntityDetailsDialog<T>(
    form: RwSignal<FormController<T>>,
    store: EntityStore<T>,
    on_close: Callback<FormClose>,
) -> impl IntoView
where
    T: EditableEntity,
{
    let notifications = use_notifications();
    let read_only = move || form.with(|f| f.is_read_only());
    let is_saving = store.is_loading;

    spawn_local(async move {
        prepare_new_form(form, store).await;
    });

    let handle_save = move |_| {
        spawn_local(async move {
            if let Some(close) = submit_form(form, store, notifications).await {
                on_close.run(close);
            }
        });
    };

    let handle_cancel = move |_| {
        if form.try_update(|f| f.request_cancel()).unwrap_or(true) {
            on_close.run(FormClose { refresh: false });
        }
    };

    let handle_reset = move |_| {
        form.update(|f| {
            f.request_reset();
        });
    };

    let confirm_message = Signal::derive(move || {
        match form.with(|f| f.pending()) {
            Some(PendingAction::Reset) => "Discard your changes and restore the original values?",
            Some(PendingAction::Cancel) => "You have unsaved changes. Close without saving?",
            None => "",
        }
        .to_string()
    });

    let on_confirm = Callback::new(move |_| {
        if form.try_update(|f| f.confirm_pending()).flatten() == Some(PendingAction::Cancel) {
            on_close.run(FormClose { refresh: false });
        }
    });

    let on_dismiss = Callback::new(move |_| form.update(|f| f.dismiss_pending()));

    let fields = T::all_fields()
        .into_iter()
        .map(|descriptor| view! { <FormField form=form descriptor=descriptor /> })
        .collect_view();

    view! {
        <div class="details-container">
            <div class="details-header">
                <h3>{move || form.with(|f| f.title())}</h3>
            </div>

            <div class="details-form">{fields}</div>

            <Flex justify=FlexJustify::SpaceBetween align=FlexAlign::Center>
                <Show when=move || !read_only() fallback=|| view! { <span></span> }>
                    <Button appearance=ButtonAppearance::Secondary on_click=handle_reset>
                        "Reset"
                    </Button>
                </Show>
                <Space>
                    <Button appearance=ButtonAppearance::Secondary on_click=handle_cancel>
                        {move || if read_only() { "Close" } else { "Cancel" }}
                    </Button>
                    <Show when=move || !read_only()>
                        <Button
                            appearance=ButtonAppearance::Primary
                            on_click=handle_save
                            disabled=is_saving
                        >
                            {move || if is_saving.get() { "Saving..." } else { "Save" }}
                        </Button>
                    </Show>
                </Space>
            </Flex>

            <ConfirmDialog
                open=Signal::derive(move || form.with(|f| f.pending().is_some()))
                message=confirm_message
                on_confirm=on_confirm
                on_cancel=on_dismiss
            />
        </div>
    }
}

#[component]
fn FormField<T>(form: RwSignal<FormController<T>>, descriptor: FieldDescriptor) -> impl IntoView
where
    T: EditableEntity,
{
    let key = descriptor.key;
    let rule = T::validation_schema().rule_for(key).cloned();
    let required = rule.as_ref().is_some_and(|r| r.is_required());
    let max_len = rule.as_ref().and_then(|r| r.max_len()).map(|n| n.to_string());

    let value = move || form.with(|f| f.current().field_value(key));
    let disabled = move || form.with(|f| f.is_read_only());
    let error = move || form.with(|f| f.field_error(key).map(str::to_string));
    let set = move |text: String| {
        form.update(|f| {
            f.set_field(key, &text);
        });
    };

    let input = match descriptor.kind {
        FieldKind::Flag => view! {
            <input
                type="checkbox"
                id=key
                prop:checked=move || YesNo::parse(&value()).is_some_and(|v| v.is_yes())
                prop:disabled=disabled
                on:change=move |ev| set(YesNo::from_bool(event_target_checked(&ev)).to_string())
            />
        }
        .into_any(),
        FieldKind::TextArea => view! {
            <textarea
                id=key
                class="form__textarea"
                maxlength=max_len.clone()
                prop:value=value
                prop:disabled=disabled
                on:input=move |ev| set(event_target_value(&ev))
            ></textarea>
        }
        .into_any(),
        FieldKind::Number => view! {
            <input
                type="number"
                id=key
                class="form__input"
                prop:value=value
                prop:disabled=disabled
                on:input=move |ev| set(event_target_value(&ev))
            />
        }
        .into_any(),
        FieldKind::Text => view! {
            <input
                type="text"
                id=key
                class="form__input"
                maxlength=max_len
                prop:value=value
                prop:disabled=disabled
                on:input=move |ev| set(event_target_value(&ev))
            />
        }
        .into_any(),
    };

    view! {
        <div class="form__group">
            <label for=key>
                {descriptor.label}
                {required.then_some(" *")}
            </label>
            {input}
            {move || error().map(|e| view! { <div class="form__error">{e}</div> })}
        </div>
    }
}
