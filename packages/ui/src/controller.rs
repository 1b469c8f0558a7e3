//! # Controller: user actions as async workflows
//!
//! Each public function here is one user action: load the list, click a sort
//! header, start editing, submit the form, delete one row, delete the selected
//! rows. They all follow the same shape:
//!
//! 1. read what they need from the [`UserDirectory`] (form values, selection),
//! 2. make the request(s) through [`UsersApi`],
//! 3. apply the result to the directory and post a notice.
//!
//! State is only touched through [`DirectoryHandle`], one short closure at a
//! time, and never across an `.await`. In the app the handle is a
//! `Signal<UserDirectory>`; in tests it is a plain `UserDirectory`.
//!
//! A failed request leaves the directory exactly as it was, apart from the
//! notice. Confirmation dialogs are passed in as closures so the workflows stay
//! free of DOM calls.

use api::{FetchError, UsersApi};
use dioxus::prelude::*;
use store::{
    validate, FormMode, NoticeKind, SortColumn, User, UserDirectory, UserId, ValidationError,
};

pub const LOAD_FAILED: &str = "Unable to load users. Please try again later.";
pub const EDIT_FAILED: &str = "Unable to edit user. Please try again.";
pub const CREATED: &str = "User successfully created!";
pub const UPDATED: &str = "User successfully updated!";
pub const CREATE_FAILED: &str = "Failed to add user. Please check your input.";
pub const UPDATE_FAILED: &str = "Failed to update user. Please check your input.";
pub const DELETED: &str = "User successfully deleted.";
pub const DELETE_FAILED: &str = "Failed to delete user. Please try again.";
pub const CONFIRM_DELETE: &str = "Are you sure you want to delete this user?";

/// Access to the directory state for the workflows.
pub trait DirectoryHandle {
    fn with_dir<R>(&self, f: impl FnOnce(&UserDirectory) -> R) -> R;
    fn with_dir_mut<R>(&mut self, f: impl FnOnce(&mut UserDirectory) -> R) -> R;
}

impl DirectoryHandle for UserDirectory {
    fn with_dir<R>(&self, f: impl FnOnce(&UserDirectory) -> R) -> R {
        f(self)
    }

    fn with_dir_mut<R>(&mut self, f: impl FnOnce(&mut UserDirectory) -> R) -> R {
        f(self)
    }
}

impl DirectoryHandle for Signal<UserDirectory> {
    fn with_dir<R>(&self, f: impl FnOnce(&UserDirectory) -> R) -> R {
        f(&self.read())
    }

    fn with_dir_mut<R>(&mut self, f: impl FnOnce(&mut UserDirectory) -> R) -> R {
        f(&mut self.write())
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum SubmitOutcome {
    Invalid(ValidationError),
    Created(User),
    Updated(User),
    Failed(FetchError),
}

#[derive(Clone, Debug, PartialEq)]
pub enum DeleteOutcome {
    Cancelled,
    Deleted,
    Failed(FetchError),
}

/// Tally of a bulk delete.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct BulkDeleteReport {
    pub succeeded: usize,
    pub failed: usize,
}

impl BulkDeleteReport {
    pub fn message(&self) -> String {
        if self.failed == 0 {
            format!("Successfully deleted {} user(s).", self.succeeded)
        } else {
            format!(
                "Deleted {} user(s), but failed to delete {} user(s).",
                self.succeeded, self.failed
            )
        }
    }

    pub fn kind(&self) -> NoticeKind {
        if self.failed == 0 {
            NoticeKind::Success
        } else {
            NoticeKind::Warning
        }
    }
}

pub fn bulk_confirm_message(count: usize) -> String {
    format!("Are you sure you want to delete {count} user(s)?")
}

/// Fetch the full list and rebuild the table.
pub async fn load_users<A, D>(api: &A, dir: &mut D) -> Result<(), FetchError>
where
    A: UsersApi,
    D: DirectoryHandle,
{
    match api.list().await {
        Ok(users) => {
            tracing::debug!("loaded {} users", users.len());
            dir.with_dir_mut(|d| d.replace_all(users));
            Ok(())
        }
        Err(e) => {
            tracing::error!("Error fetching users: {e}");
            dir.with_dir_mut(|d| d.notify(LOAD_FAILED, NoticeKind::Error));
            Err(e)
        }
    }
}

/// Sort header click.
pub fn change_sort<D: DirectoryHandle>(dir: &mut D, column: SortColumn) {
    dir.with_dir_mut(|d| d.select_column(column));
}

/// Fetch a record and switch the form into update mode for it. On failure the
/// form keeps its current mode.
pub async fn begin_edit<A, D>(api: &A, dir: &mut D, id: UserId) -> Result<User, FetchError>
where
    A: UsersApi,
    D: DirectoryHandle,
{
    match api.get(id).await {
        Ok(user) => {
            dir.with_dir_mut(|d| d.begin_edit(&user));
            Ok(user)
        }
        Err(e) => {
            tracing::error!("Error editing user {id}: {e}");
            dir.with_dir_mut(|d| d.notify(EDIT_FAILED, NoticeKind::Error));
            Err(e)
        }
    }
}

/// Validate the form and create or update depending on its mode.
pub async fn submit_form<A, D>(api: &A, dir: &mut D) -> SubmitOutcome
where
    A: UsersApi,
    D: DirectoryHandle,
{
    let (mode, fields) = dir.with_dir(|d| (d.form().mode, d.form().fields.trimmed()));

    if let Err(invalid) = validate(&fields) {
        dir.with_dir_mut(|d| d.notify(invalid.to_string(), NoticeKind::Error));
        return SubmitOutcome::Invalid(invalid);
    }

    match mode {
        FormMode::Create => match api.create(&fields).await {
            Ok(user) => {
                dir.with_dir_mut(|d| {
                    d.insert(user.clone());
                    d.reset_form();
                    d.notify(CREATED, NoticeKind::Success);
                });
                SubmitOutcome::Created(user)
            }
            Err(e) => {
                tracing::error!("Error creating user: {e}");
                dir.with_dir_mut(|d| d.notify(CREATE_FAILED, NoticeKind::Error));
                SubmitOutcome::Failed(e)
            }
        },
        FormMode::Editing(id) => match api.update(id, &fields).await {
            Ok(user) => {
                dir.with_dir_mut(|d| {
                    if !d.replace(user.clone()) {
                        tracing::warn!("updated user {id} is not in the table");
                    }
                    d.reset_form();
                    d.notify(UPDATED, NoticeKind::Success);
                });
                SubmitOutcome::Updated(user)
            }
            Err(e) => {
                tracing::error!("Error updating user {id}: {e}");
                dir.with_dir_mut(|d| d.notify(UPDATE_FAILED, NoticeKind::Error));
                SubmitOutcome::Failed(e)
            }
        },
    }
}

/// Delete one record after confirmation and drop it from the table without a refetch.
pub async fn delete_user<A, D, C>(api: &A, dir: &mut D, id: UserId, confirm: C) -> DeleteOutcome
where
    A: UsersApi,
    D: DirectoryHandle,
    C: FnOnce(&str) -> bool,
{
    if !confirm(CONFIRM_DELETE) {
        return DeleteOutcome::Cancelled;
    }
    match api.delete(id).await {
        Ok(()) => {
            dir.with_dir_mut(|d| {
                d.remove(id);
                d.notify(DELETED, NoticeKind::Success);
            });
            DeleteOutcome::Deleted
        }
        Err(e) => {
            tracing::error!("Error deleting user {id}: {e}");
            dir.with_dir_mut(|d| d.notify(DELETE_FAILED, NoticeKind::Error));
            DeleteOutcome::Failed(e)
        }
    }
}

/// Delete every checked row, one request at a time, then refetch the list.
///
/// Returns `None` when nothing is selected or the user declines. A failed
/// delete is counted and the loop moves on.
pub async fn bulk_delete<A, D, C>(api: &A, dir: &mut D, confirm: C) -> Option<BulkDeleteReport>
where
    A: UsersApi,
    D: DirectoryHandle,
    C: FnOnce(&str) -> bool,
{
    let ids = dir.with_dir(|d| d.selected_ids());
    if ids.is_empty() {
        return None;
    }
    if !confirm(&bulk_confirm_message(ids.len())) {
        return None;
    }

    let mut report = BulkDeleteReport::default();
    for id in ids {
        match api.delete(id).await {
            Ok(()) => report.succeeded += 1,
            Err(e) => {
                tracing::error!("Error deleting user {id}: {e}");
                report.failed += 1;
            }
        }
    }

    // the load failure notice, if any, is replaced by the summary below
    let _ = load_users(api, dir).await;
    dir.with_dir_mut(|d| d.notify(report.message(), report.kind()));
    Some(report)
}
