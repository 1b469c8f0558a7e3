//! User table: sortable headers, row checkboxes and per-row actions.
//!
//! The table is rebuilt in full from the rows it is given. Row keys carry the
//! directory's render generation, so every rebuild mounts fresh rows. Row
//! actions are reported through callbacks keyed by record id; the table never
//! calls the API.

use dioxus::prelude::*;
use store::{SortColumn, SortIndicator, SortState, TableRow, UserId};

use crate::icons::{FaSort, FaSortDown, FaSortUp};
use crate::Icon;

#[component]
pub fn UserTable(
    rows: Vec<TableRow>,
    generation: u64,
    sort: SortState,
    all_selected: bool,
    on_sort: EventHandler<SortColumn>,
    on_toggle: EventHandler<(UserId, bool)>,
    on_toggle_all: EventHandler<bool>,
    on_edit: EventHandler<UserId>,
    on_delete: EventHandler<UserId>,
) -> Element {
    rsx! {
        table {
            id: "userTable",
            class: "user-table",
            thead {
                tr {
                    th {
                        input {
                            id: "selectAll",
                            r#type: "checkbox",
                            checked: all_selected,
                            onchange: move |evt: FormEvent| on_toggle_all.call(evt.checked()),
                        }
                    }
                    for column in SortColumn::ALL {
                        SortHeader {
                            key: "{column}",
                            column,
                            indicator: sort.indicator(column),
                            on_sort,
                        }
                    }
                    th { "Actions" }
                }
            }
            tbody {
                for row in rows {
                    UserRow {
                        key: "{generation}-{row.id}",
                        row: row.clone(),
                        on_toggle,
                        on_edit,
                        on_delete,
                    }
                }
            }
        }
    }
}

#[component]
fn SortHeader(
    column: SortColumn,
    indicator: SortIndicator,
    on_sort: EventHandler<SortColumn>,
) -> Element {
    rsx! {
        th {
            class: "sortable",
            "data-sort": column.attr(),
            onclick: move |_| on_sort.call(column),
            span { "{column.label()} " }
            match indicator {
                SortIndicator::Unsorted => rsx! { Icon { icon: FaSort, width: 12, height: 12 } },
                SortIndicator::Ascending => rsx! { Icon { icon: FaSortUp, width: 12, height: 12 } },
                SortIndicator::Descending => rsx! { Icon { icon: FaSortDown, width: 12, height: 12 } },
            }
        }
    }
}

#[component]
fn UserRow(
    row: TableRow,
    on_toggle: EventHandler<(UserId, bool)>,
    on_edit: EventHandler<UserId>,
    on_delete: EventHandler<UserId>,
) -> Element {
    let id = row.id;

    rsx! {
        tr {
            "data-user-id": "{id}",
            td {
                input {
                    class: "user-checkbox",
                    r#type: "checkbox",
                    "data-user-id": "{id}",
                    checked: row.selected,
                    onchange: move |evt: FormEvent| on_toggle.call((id, evt.checked())),
                }
            }
            for cell in row.cells.iter() {
                td { "{cell}" }
            }
            td {
                button {
                    class: "edit-btn",
                    onclick: move |_| on_edit.call(id),
                    "Edit"
                }
                button {
                    class: "delete-btn",
                    onclick: move |_| on_delete.call(id),
                    "Delete"
                }
            }
        }
    }
}

/// "Delete Selected" control; disabled while nothing is checked.
#[component]
pub fn BulkDeleteButton(label: String, enabled: bool, on_click: EventHandler<()>) -> Element {
    rsx! {
        button {
            id: "bulkDeleteBtn",
            class: "bulk-delete-btn",
            disabled: !enabled,
            onclick: move |_| on_click.call(()),
            "{label}"
        }
    }
}
