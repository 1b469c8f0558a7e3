use api::UsersApi;
use dioxus::prelude::*;
use store::{FormField, SortColumn, UserId};

use crate::controller;
use crate::platform::confirm;
use crate::user_form::UserForm;
use crate::user_table::{BulkDeleteButton, UserTable};
use crate::{use_client_config, use_directory, NoticeBanner};

const USERS_CSS: Asset = asset!("/assets/styling/users.css");

/// The whole user management page: form, banner, bulk control and table.
#[component]
pub fn UsersView<A: UsersApi + Clone + PartialEq + 'static>(api: A) -> Element {
    let mut directory = use_directory();
    let config = use_client_config();

    // Load users on mount
    let _loader = use_resource({
        let api = api.clone();
        move || {
            let api = api.clone();
            async move {
                let mut dir = directory;
                let _ = controller::load_users(&api, &mut dir).await;
            }
        }
    });

    let handle_sort = move |column: SortColumn| {
        controller::change_sort(&mut directory, column);
    };

    let handle_toggle = move |(id, checked): (UserId, bool)| {
        directory.write().toggle_row(id, checked);
    };

    let handle_toggle_all = move |checked: bool| {
        directory.write().set_all_selected(checked);
    };

    let handle_input = move |(field, value): (FormField, String)| {
        directory.write().form_mut().set(field, value);
    };

    let handle_submit = {
        let api = api.clone();
        move |_: ()| {
            let api = api.clone();
            spawn(async move {
                let mut dir = directory;
                controller::submit_form(&api, &mut dir).await;
            });
        }
    };

    let handle_edit = {
        let api = api.clone();
        move |id: UserId| {
            let api = api.clone();
            spawn(async move {
                let mut dir = directory;
                let _ = controller::begin_edit(&api, &mut dir, id).await;
            });
        }
    };

    let handle_delete = {
        let api = api.clone();
        move |id: UserId| {
            let api = api.clone();
            spawn(async move {
                let mut dir = directory;
                controller::delete_user(&api, &mut dir, id, confirm).await;
            });
        }
    };

    let handle_bulk_delete = {
        let api = api.clone();
        move |_: ()| {
            let api = api.clone();
            spawn(async move {
                let mut dir = directory;
                if let Some(report) = controller::bulk_delete(&api, &mut dir, confirm).await {
                    tracing::info!(
                        "bulk delete finished: {} deleted, {} failed",
                        report.succeeded,
                        report.failed
                    );
                }
            });
        }
    };

    let state = directory.read();
    let rows = state.rows();
    let generation = state.render_count();
    let form = state.form().clone();
    let sort = state.sort_state();
    let all_selected = state.all_selected();
    let bulk_label = state.bulk_label();
    let bulk_enabled = state.bulk_enabled();
    drop(state);

    rsx! {
        document::Stylesheet { href: USERS_CSS }

        div {
            class: "users-page",
            h1 { "User Management" }

            UserForm {
                form,
                on_input: handle_input,
                on_submit: handle_submit,
            }

            NoticeBanner { hide_after: config.auto_hide() }

            div {
                class: "table-actions",
                BulkDeleteButton {
                    label: bulk_label,
                    enabled: bulk_enabled,
                    on_click: handle_bulk_delete,
                }
            }

            UserTable {
                rows,
                generation,
                sort,
                all_selected,
                on_sort: handle_sort,
                on_toggle: handle_toggle,
                on_toggle_all: handle_toggle_all,
                on_edit: handle_edit,
                on_delete: handle_delete,
            }
        }
    }
}
