//! # User directory: the client's single state object
//!
//! [`UserDirectory`] owns everything the page shows: the cached records (kept in
//! current sort order), the [`SortState`], the row selection, the form with its
//! editing context, and the notification banner. It is constructed once at
//! startup and mutated only through the methods below; nothing here performs
//! I/O, so every transition is testable without a browser.
//!
//! ## Render model
//!
//! The table is rebuilt from [`rows`](UserDirectory::rows) after every change to
//! the record list or sort order. [`rerender`](UserDirectory::rerender) marks that
//! rebuild: it drops the row selection and unchecks "select all", since the old
//! checkboxes no longer exist.
//!
//! | Method | Re-sorts | Re-renders |
//! |--------|----------|------------|
//! | [`replace_all`](UserDirectory::replace_all) | yes | yes |
//! | [`insert`](UserDirectory::insert) | yes | yes |
//! | [`replace`](UserDirectory::replace) | yes | yes |
//! | [`remove`](UserDirectory::remove) | no | yes |
//! | [`select_column`](UserDirectory::select_column) | yes | yes |

use std::collections::BTreeSet;

use crate::models::{User, UserFields, UserId};
use crate::notice::{NoticeBoard, NoticeKind};
use crate::sort::{sort_records, SortColumn, SortState};

/// Whether a submit creates a record or updates an existing one.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum FormMode {
    #[default]
    Create,
    Editing(UserId),
}

/// One input of the user form.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum FormField {
    FirstName,
    LastName,
    Email,
    Phone,
}

/// The form's current mode and input values.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FormState {
    pub mode: FormMode,
    pub fields: UserFields,
}

impl FormState {
    pub fn editing_id(&self) -> Option<UserId> {
        match self.mode {
            FormMode::Create => None,
            FormMode::Editing(id) => Some(id),
        }
    }

    pub fn set(&mut self, field: FormField, value: String) {
        match field {
            FormField::FirstName => self.fields.first_name = value,
            FormField::LastName => self.fields.last_name = value,
            FormField::Email => self.fields.email = value,
            FormField::Phone => self.fields.phone = value,
        }
    }

    pub fn get(&self, field: FormField) -> &str {
        match field {
            FormField::FirstName => &self.fields.first_name,
            FormField::LastName => &self.fields.last_name,
            FormField::Email => &self.fields.email,
            FormField::Phone => &self.fields.phone,
        }
    }

    /// Back to create mode with empty inputs.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// A table row as rendered.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TableRow {
    pub id: UserId,
    pub cells: [String; 5],
    pub selected: bool,
}

#[derive(Clone, Debug, Default)]
pub struct UserDirectory {
    records: Vec<User>,
    sort: SortState,
    selected: BTreeSet<UserId>,
    all_selected: bool,
    form: FormState,
    notice: NoticeBoard,
    renders: u64,
}

impl UserDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn records(&self) -> &[User] {
        &self.records
    }

    pub fn get(&self, id: UserId) -> Option<&User> {
        self.records.iter().find(|u| u.id == id)
    }

    pub fn sort_state(&self) -> SortState {
        self.sort
    }

    pub fn form(&self) -> &FormState {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut FormState {
        &mut self.form
    }

    pub fn notice(&self) -> &NoticeBoard {
        &self.notice
    }

    pub fn notice_mut(&mut self) -> &mut NoticeBoard {
        &mut self.notice
    }

    /// How many times the table has been rebuilt.
    pub fn render_count(&self) -> u64 {
        self.renders
    }

    /// Swap in a freshly fetched list.
    pub fn replace_all(&mut self, records: Vec<User>) {
        self.records = records;
        self.sort();
        self.rerender();
    }

    /// Append a newly created record.
    pub fn insert(&mut self, record: User) {
        self.records.push(record);
        self.sort();
        self.rerender();
    }

    /// Overwrite the record with the same id. Returns `false` when no record
    /// matched; the table is re-sorted and rebuilt either way.
    pub fn replace(&mut self, record: User) -> bool {
        let found = match self.records.iter_mut().find(|u| u.id == record.id) {
            Some(slot) => {
                *slot = record;
                true
            }
            None => false,
        };
        self.sort();
        self.rerender();
        found
    }

    /// Drop the record with `id`, leaving the others in place.
    pub fn remove(&mut self, id: UserId) -> bool {
        let before = self.records.len();
        self.records.retain(|u| u.id != id);
        self.rerender();
        self.records.len() != before
    }

    /// Apply a header click and reorder.
    pub fn select_column(&mut self, column: SortColumn) {
        self.sort.select(column);
        self.sort();
        self.rerender();
    }

    pub fn sort(&mut self) {
        sort_records(&mut self.records, self.sort);
    }

    pub fn rerender(&mut self) {
        self.selected.clear();
        self.all_selected = false;
        self.renders += 1;
    }

    pub fn rows(&self) -> Vec<TableRow> {
        self.records
            .iter()
            .map(|u| TableRow {
                id: u.id,
                cells: u.cells(),
                selected: self.selected.contains(&u.id),
            })
            .collect()
    }

    /// Reflect a row checkbox change. Ids not in the table are ignored.
    pub fn toggle_row(&mut self, id: UserId, checked: bool) {
        if checked {
            if self.get(id).is_some() {
                self.selected.insert(id);
            }
        } else {
            self.selected.remove(&id);
        }
    }

    /// Reflect the "select all" checkbox: every row follows it.
    pub fn set_all_selected(&mut self, checked: bool) {
        self.all_selected = checked;
        if checked {
            self.selected = self.records.iter().map(|u| u.id).collect();
        } else {
            self.selected.clear();
        }
    }

    pub fn all_selected(&self) -> bool {
        self.all_selected
    }

    pub fn is_selected(&self, id: UserId) -> bool {
        self.selected.contains(&id)
    }

    /// Checked ids in table order.
    pub fn selected_ids(&self) -> Vec<UserId> {
        self.records
            .iter()
            .map(|u| u.id)
            .filter(|id| self.selected.contains(id))
            .collect()
    }

    pub fn selected_count(&self) -> usize {
        self.selected.len()
    }

    pub fn bulk_enabled(&self) -> bool {
        !self.selected.is_empty()
    }

    pub fn bulk_label(&self) -> String {
        match self.selected.len() {
            0 => "Delete Selected".to_string(),
            n => format!("Delete Selected ({n})"),
        }
    }

    /// Enter update mode for `record` and load its values into the form.
    pub fn begin_edit(&mut self, record: &User) {
        self.form.mode = FormMode::Editing(record.id);
        self.form.fields = record.fields();
    }

    /// Leave update mode and clear the inputs.
    pub fn reset_form(&mut self) {
        self.form.reset();
    }

    pub fn notify(&mut self, message: impl Into<String>, kind: NoticeKind) -> u64 {
        self.notice.show(message, kind)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sort::SortDirection;

    fn user(id: UserId, first: &str) -> User {
        UserFields::new(first, "Doe", format!("{}@x.com", first.to_lowercase()), "5551234567")
            .into_user(id)
    }

    fn ids(dir: &UserDirectory) -> Vec<UserId> {
        dir.records().iter().map(|u| u.id).collect()
    }

    #[test]
    fn test_replace_all_sorts_by_default_state() {
        let mut dir = UserDirectory::new();
        dir.replace_all(vec![user(3, "C"), user(1, "A"), user(2, "B")]);
        assert_eq!(ids(&dir), vec![1, 2, 3]);
        assert_eq!(dir.render_count(), 1);
    }

    #[test]
    fn test_insert_lands_in_sort_position_once() {
        let mut dir = UserDirectory::new();
        dir.replace_all(vec![user(1, "amy"), user(2, "Cat")]);
        dir.select_column(SortColumn::FirstName);
        dir.insert(user(3, "bea"));
        let names: Vec<&str> = dir.records().iter().map(|u| u.first_name.as_str()).collect();
        assert_eq!(names, vec!["amy", "bea", "Cat"]);
        assert_eq!(dir.records().iter().filter(|u| u.id == 3).count(), 1);
    }

    #[test]
    fn test_replace_by_id() {
        let mut dir = UserDirectory::new();
        dir.replace_all(vec![user(1, "A"), user(2, "B")]);
        let mut changed = user(2, "Zed");
        changed.phone = "1112223333".to_string();
        assert!(dir.replace(changed.clone()));
        assert_eq!(dir.records().len(), 2);
        assert_eq!(dir.get(2), Some(&changed));
        assert_eq!(dir.get(1), Some(&user(1, "A")));
    }

    #[test]
    fn test_replace_missing_is_noop() {
        let mut dir = UserDirectory::new();
        dir.replace_all(vec![user(1, "A")]);
        assert!(!dir.replace(user(9, "Ghost")));
        assert_eq!(ids(&dir), vec![1]);
    }

    #[test]
    fn test_remove_keeps_order_of_others() {
        let mut dir = UserDirectory::new();
        dir.replace_all(vec![user(1, "A"), user(2, "B"), user(3, "C")]);
        dir.select_column(SortColumn::Id);
        assert_eq!(dir.sort_state().direction, SortDirection::Descending);
        assert!(dir.remove(2));
        assert_eq!(ids(&dir), vec![3, 1]);
        assert!(!dir.remove(2));
    }

    #[test]
    fn test_rerender_clears_selection() {
        let mut dir = UserDirectory::new();
        dir.replace_all(vec![user(1, "A"), user(2, "B")]);
        dir.set_all_selected(true);
        assert_eq!(dir.selected_ids(), vec![1, 2]);
        assert_eq!(dir.bulk_label(), "Delete Selected (2)");

        dir.select_column(SortColumn::Email);
        assert!(!dir.all_selected());
        assert_eq!(dir.selected_count(), 0);
        assert!(!dir.bulk_enabled());
        assert_eq!(dir.bulk_label(), "Delete Selected");
    }

    #[test]
    fn test_toggle_rows() {
        let mut dir = UserDirectory::new();
        dir.replace_all(vec![user(1, "A"), user(2, "B"), user(3, "C")]);
        dir.toggle_row(3, true);
        dir.toggle_row(1, true);
        dir.toggle_row(42, true);
        assert_eq!(dir.selected_ids(), vec![1, 3]);
        dir.toggle_row(1, false);
        assert_eq!(dir.selected_ids(), vec![3]);
        let rows = dir.rows();
        assert!(!rows[0].selected);
        assert!(rows[2].selected);
        assert_eq!(rows[1].cells[1], "B");
    }

    #[test]
    fn test_edit_context() {
        let mut dir = UserDirectory::new();
        let record = user(5, "Eve");
        dir.begin_edit(&record);
        assert_eq!(dir.form().mode, FormMode::Editing(5));
        assert_eq!(dir.form().get(FormField::FirstName), "Eve");
        dir.form_mut().set(FormField::Phone, "0000000000".to_string());
        assert_eq!(dir.form().fields.phone, "0000000000");
        dir.reset_form();
        assert_eq!(dir.form(), &FormState::default());
        assert_eq!(dir.form().editing_id(), None);
    }
}
