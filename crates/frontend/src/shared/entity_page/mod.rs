//! Master-data list page shared by every feature: search, inactive toggle,
//! sortable table, row actions and the details dialog.

use crate::shared::entity_form::{ConfirmDialog, EntityDetailsDialog, FormClose, FormController};
use crate::shared::entity_store::EntityStore;
use crate::shared::icons::icon;
use crate::shared::list_utils::{visible_rows, SortField, SortState};
use crate::shared::modal_stack::{CloseGuard, ModalStackService};
use crate::shared::notifications::use_notifications;
use contracts::domain::common::EditableEntity;
use leptos::ev;
use leptos::prelude::*;
use leptos::task::spawn_local;
use std::sync::Arc;
use thaw::*;

#[component]
pub fn EntityListPage<T>(
    store: EntityStore<T>,
    /// Icon name shown next to the title
    #[prop(optional)]
    icon_name: &'static str,
) -> impl IntoView
where
    T: EditableEntity,
{
    let modal_stack =
        use_context::<ModalStackService>().expect("ModalStackService not found in context");
    let notifications = use_notifications();

    let search = RwSignal::new(String::new());
    let show_inactive = RwSignal::new(true);
    let sort = RwSignal::new(SortState::default());
    let pending_delete = RwSignal::new(None::<T>);

    let rows = move || {
        let query = search.get();
        let show_inactive = show_inactive.get();
        let sort = sort.get();
        store
            .entity_list
            .with(|list| visible_rows(list, &query, show_inactive, sort))
    };

    let open_form = move |initial: Option<T>, view_only: bool| {
        let form = RwSignal::new(FormController::open(initial, view_only));
        let guard: CloseGuard =
            Arc::new(move || form.try_update(|f| f.request_cancel()).unwrap_or(true));
        modal_stack.push_guarded(
            Some("entity-details-modal".to_string()),
            Some(guard),
            move |handle| {
                // a save has already re-read the list through the store
                let on_close = Callback::new(move |close: FormClose| {
                    handle.close();
                    if close.refresh {
                        log::debug!("{} dialog closed after save", T::element_name());
                    }
                });
                view! { <EntityDetailsDialog form=form store=store on_close=on_close /> }
                    .into_any()
            },
        );
    };

    let toggle_status = move |row: T| {
        spawn_local(async move {
            let activate = !row.is_active();
            let result = store.update_entity_status(row.id(), activate).await;
            if result.success {
                let verb = if activate { "activated" } else { "deactivated" };
                notifications.success(format!("{} {} {}", T::element_name(), row.code(), verb));
            } else {
                notifications.error(result.error_text());
            }
        });
    };

    let confirm_delete = Callback::new(move |_| {
        let Some(row) = pending_delete.get_untracked() else {
            return;
        };
        pending_delete.set(None);
        spawn_local(async move {
            let result = store.delete_entity(row.id()).await;
            if result.success {
                notifications.success(format!("{} deleted successfully", T::element_name()));
            } else {
                notifications.error(result.error_text());
            }
        });
    });

    let sort_header = move |field: SortField| {
        view! {
            <TableHeaderCell
                on:click=move |_| sort.update(|s| s.toggle(field))
                attr:style="cursor: pointer; width: 160px;"
            >
                {field.label()}
                <span class="sort-indicator">{move || sort.get().indicator(field)}</span>
            </TableHeaderCell>
        }
    };

    let row_view = move |row: T| {
        let for_view = row.clone();
        let for_edit = row.clone();
        let for_toggle = row.clone();
        let for_delete = row.clone();
        let code = row.code().to_string();
        let name = row.name().to_string();
        let active = row.is_active();
        let status = if active {
            view! { <Badge appearance=BadgeAppearance::Tint color=BadgeColor::Success>"Active"</Badge> }.into_any()
        } else {
            view! { <Badge appearance=BadgeAppearance::Tint color=BadgeColor::Danger>"Inactive"</Badge> }.into_any()
        };

        view! {
            <TableRow
                on:dblclick=move |_| open_form(Some(for_view.clone()), true)
                attr:style="cursor: pointer;"
            >
                <TableCell>{code}</TableCell>
                <TableCell>{name}</TableCell>
                <TableCell>{status}</TableCell>
                <TableCell>
                    <TableCellLayout>
                        <Space>
                            <Button
                                appearance=ButtonAppearance::Transparent
                                on_click=move |e: ev::MouseEvent| {
                                    e.stop_propagation();
                                    open_form(Some(for_edit.clone()), false);
                                }
                            >
                                {icon("edit")}
                            </Button>
                            <Button
                                appearance=ButtonAppearance::Transparent
                                on_click=move |e: ev::MouseEvent| {
                                    e.stop_propagation();
                                    toggle_status(for_toggle.clone());
                                }
                            >
                                {icon("power")}
                            </Button>
                            <Button
                                appearance=ButtonAppearance::Transparent
                                on_click=move |e: ev::MouseEvent| {
                                    e.stop_propagation();
                                    pending_delete.set(Some(for_delete.clone()));
                                }
                            >
                                {icon("delete")}
                            </Button>
                        </Space>
                    </TableCellLayout>
                </TableCell>
            </TableRow>
        }
    };

    let body = move || {
        let rows = rows();
        if rows.is_empty() && store.is_loading.get() {
            view! {
                <TableRow>
                    <TableCell attr:colspan="4" attr:style="padding: 40px; text-align: center;">
                        <Flex justify=FlexJustify::Center align=FlexAlign::Center gap=FlexGap::Small>
                            <Spinner />
                            "Loading..."
                        </Flex>
                    </TableCell>
                </TableRow>
            }
            .into_any()
        } else if rows.is_empty() {
            view! {
                <TableRow>
                    <TableCell attr:colspan="4" attr:style="padding: 40px; text-align: center;">
                        {format!("No {} found", T::list_name().to_lowercase())}
                    </TableCell>
                </TableRow>
            }
            .into_any()
        } else {
            rows.into_iter().map(row_view).collect_view().into_any()
        }
    };

    view! {
        <div class="entity-list" style="padding: 20px;">
            <Flex justify=FlexJustify::SpaceBetween align=FlexAlign::Center style="margin-bottom: 16px;">
                <h2 style="margin: 0;">{icon(icon_name)} " " {T::list_name()}</h2>
                <Space>
                    <Button appearance=ButtonAppearance::Primary on_click=move |_| open_form(None, false)>
                        {icon("plus")}
                        {format!(" Add {}", T::element_name())}
                    </Button>
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=move |_| {
                            spawn_local(async move {
                                store.fetch_entity_list().await;
                            });
                        }
                        disabled=store.is_loading
                    >
                        {icon("refresh")}
                        " Refresh"
                    </Button>
                </Space>
            </Flex>

            <Flex align=FlexAlign::Center gap=FlexGap::Large style="margin-bottom: 12px;">
                <Input value=search placeholder="Search by code or name" />
                <Checkbox checked=show_inactive label="Show inactive" />
            </Flex>

            {move || store.error.get().map(|err| view! {
                <div class="alert alert--error">{err}</div>
            })}

            <Table>
                <TableHeader>
                    <TableRow>
                        {sort_header(SortField::Code)}
                        <TableHeaderCell
                            on:click=move |_| sort.update(|s| s.toggle(SortField::Name))
                            attr:style="cursor: pointer;"
                        >
                            {SortField::Name.label()}
                            <span class="sort-indicator">{move || sort.get().indicator(SortField::Name)}</span>
                        </TableHeaderCell>
                        {sort_header(SortField::Status)}
                        <TableHeaderCell attr:style="width: 160px;">"Actions"</TableHeaderCell>
                    </TableRow>
                </TableHeader>
                <TableBody>{body}</TableBody>
            </Table>

            <ConfirmDialog
                open=Signal::derive(move || pending_delete.with(Option::is_some))
                message=Signal::derive(move || {
                    pending_delete
                        .with(|row| row.as_ref().map(|r| format!("Delete {} {}?", T::element_name(), r.code())))
                        .unwrap_or_default()
                })
                on_confirm=confirm_delete
                on_cancel=Callback::new(move |_| pending_delete.set(None))
            />
        </div>
    }
}
