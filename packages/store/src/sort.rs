//! # Sort engine
//!
//! [`SortState`] holds the active `(column, direction)` pair and [`sort_records`]
//! reorders a slice of [`User`]s in place according to it. Sorting is purely a
//! display concern: it never touches request bodies or ids sent to the backend.
//!
//! String columns compare case-insensitively, the id column compares numerically.
//! The sort is stable, so rows that compare equal keep their input order in both
//! directions.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use crate::models::User;

/// A sortable table column, named after the record's JSON field.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum SortColumn {
    #[default]
    Id,
    FirstName,
    LastName,
    Email,
    Phone,
}

impl SortColumn {
    /// All columns in table order.
    pub const ALL: [SortColumn; 5] = [
        SortColumn::Id,
        SortColumn::FirstName,
        SortColumn::LastName,
        SortColumn::Email,
        SortColumn::Phone,
    ];

    /// The column-name attribute carried by the header cell.
    pub fn attr(self) -> &'static str {
        match self {
            SortColumn::Id => "id",
            SortColumn::FirstName => "first_name",
            SortColumn::LastName => "last_name",
            SortColumn::Email => "email",
            SortColumn::Phone => "phone",
        }
    }

    /// Header caption.
    pub fn label(self) -> &'static str {
        match self {
            SortColumn::Id => "ID",
            SortColumn::FirstName => "First Name",
            SortColumn::LastName => "Last Name",
            SortColumn::Email => "Email",
            SortColumn::Phone => "Phone",
        }
    }

    fn compare(self, a: &User, b: &User) -> Ordering {
        match self {
            SortColumn::Id => a.id.cmp(&b.id),
            SortColumn::FirstName => cmp_ignore_case(&a.first_name, &b.first_name),
            SortColumn::LastName => cmp_ignore_case(&a.last_name, &b.last_name),
            SortColumn::Email => cmp_ignore_case(&a.email, &b.email),
            SortColumn::Phone => cmp_ignore_case(&a.phone, &b.phone),
        }
    }
}

impl fmt::Display for SortColumn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.attr())
    }
}

/// Returned when a header carries a column name the table does not know.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown sort column: {0}")]
pub struct UnknownColumn(pub String);

impl FromStr for SortColumn {
    type Err = UnknownColumn;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SortColumn::ALL
            .into_iter()
            .find(|c| c.attr() == s)
            .ok_or_else(|| UnknownColumn(s.to_string()))
    }
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn toggled(self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }
}

/// What a header should display for its column.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum SortIndicator {
    Unsorted,
    Ascending,
    Descending,
}

/// Current sort key and direction. Defaults to `(id, ascending)`.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct SortState {
    pub column: SortColumn,
    pub direction: SortDirection,
}

impl SortState {
    pub fn new(column: SortColumn, direction: SortDirection) -> Self {
        Self { column, direction }
    }

    /// Apply a header click: reselecting the active column toggles direction,
    /// any other column becomes active in ascending order.
    pub fn select(&mut self, column: SortColumn) {
        if self.column == column {
            self.direction = self.direction.toggled();
        } else {
            self.column = column;
            self.direction = SortDirection::Ascending;
        }
    }

    pub fn indicator(&self, column: SortColumn) -> SortIndicator {
        if self.column != column {
            return SortIndicator::Unsorted;
        }
        match self.direction {
            SortDirection::Ascending => SortIndicator::Ascending,
            SortDirection::Descending => SortIndicator::Descending,
        }
    }

    /// Compare two records under this state.
    pub fn compare(&self, a: &User, b: &User) -> Ordering {
        let ord = self.column.compare(a, b);
        match self.direction {
            SortDirection::Ascending => ord,
            SortDirection::Descending => ord.reverse(),
        }
    }
}

/// Stable in-place sort of `records` under `state`.
pub fn sort_records(records: &mut [User], state: SortState) {
    records.sort_by(|a, b| state.compare(a, b));
}

fn cmp_ignore_case(a: &str, b: &str) -> Ordering {
    a.to_lowercase().cmp(&b.to_lowercase())
}
