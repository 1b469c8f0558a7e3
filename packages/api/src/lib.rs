//! # API crate: gateway to the `/api/users` resource
//!
//! Every network call the client makes goes through the [`UsersApi`] trait
//! defined here. The UI layer is generic over it, so the same workflows run
//! against the real backend in the browser and against an in-memory fake in tests.
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`error`] | [`FetchError`], the single failure type for every call, and [`ApiErrorBody`], the backend's rejection payload |
//! | [`gateway`] | The [`UsersApi`] trait: `list`, `get`, `create`, `update`, `delete` |
//! | [`http`] | [`HttpUsersApi`], the `reqwest` implementation used by the web client |
//! | [`memory`] | [`MemoryUsersApi`], an in-memory backend with failure injection and a call log |
//!
//! Record types are re-exported from the `store` crate so callers only need one import.

pub mod error;
pub mod gateway;
pub mod http;
pub mod memory;

pub use error::{ApiErrorBody, FetchError};
pub use gateway::UsersApi;
pub use http::HttpUsersApi;
pub use memory::{Call, MemoryUsersApi};

pub use store::{User, UserFields, UserId};
