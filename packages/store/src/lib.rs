pub mod config;
pub mod directory;
pub mod models;
pub mod notice;
pub mod sort;
pub mod validate;

pub use config::{ClientConfig, ConfigError};
pub use directory::{FormField, FormMode, FormState, TableRow, UserDirectory};
pub use models::{User, UserFields, UserId};
pub use notice::{Notice, NoticeBoard, NoticeKind};
pub use sort::{sort_records, SortColumn, SortDirection, SortIndicator, SortState, UnknownColumn};
pub use validate::{validate, ValidationError};
