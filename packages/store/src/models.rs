//! # Domain models for user records
//!
//! Defines the data structures exchanged with the `/api/users` resource. These
//! types are `Serialize + Deserialize` and mirror the backend's JSON shape field
//! for field, so they can be sent and received without any mapping layer.
//!
//! ## Types
//!
//! | Struct | Represents |
//! |--------|-----------|
//! | [`User`] | A full record as returned by the backend, including the server-assigned `id`. |
//! | [`UserFields`] | The four mutable fields, used as the request body for create and update and as the form's backing values. |

use serde::{Deserialize, Serialize};

/// Server-assigned record identifier.
pub type UserId = i64;

/// A user record as held by the backend.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    /// Ten decimal digits, no separators.
    pub phone: String,
}

impl User {
    /// Project the mutable fields out of a record, e.g. to populate the edit form.
    pub fn fields(&self) -> UserFields {
        UserFields {
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
            email: self.email.clone(),
            phone: self.phone.clone(),
        }
    }

    /// Visible cell values in table column order.
    pub fn cells(&self) -> [String; 5] {
        [
            self.id.to_string(),
            self.first_name.clone(),
            self.last_name.clone(),
            self.email.clone(),
            self.phone.clone(),
        ]
    }
}

/// Body of a create or update request.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserFields {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
}

impl UserFields {
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        email: impl Into<String>,
        phone: impl Into<String>,
    ) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
            email: email.into(),
            phone: phone.into(),
        }
    }

    /// Copy with surrounding whitespace stripped from every field.
    pub fn trimmed(&self) -> Self {
        Self::new(
            self.first_name.trim(),
            self.last_name.trim(),
            self.email.trim(),
            self.phone.trim(),
        )
    }

    /// Attach a server-assigned id.
    pub fn into_user(self, id: UserId) -> User {
        User {
            id,
            first_name: self.first_name,
            last_name: self.last_name,
            email: self.email,
            phone: self.phone,
        }
    }
}
