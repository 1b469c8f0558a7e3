//! This crate contains all UI for the user management client.

pub mod controller;
pub mod platform;
pub mod views;

#[cfg(test)]
mod test_support;

// Re-export icon library
pub use dioxus_free_icons::Icon;
pub mod icons {
    pub use dioxus_free_icons::icons::fa_solid_icons::*;
}

mod directory;
pub use directory::{use_client_config, use_directory, UsersApp};

mod notice_banner;
pub use notice_banner::NoticeBanner;

mod user_form;
pub use user_form::UserForm;

mod user_table;
pub use user_table::{BulkDeleteButton, UserTable};
