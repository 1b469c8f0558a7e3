use store::{User, UserFields, UserId};

use crate::error::FetchError;

/// Async interface to the user resource, one method per HTTP verb.
///
/// Each call is a single round trip: no retries, no batching, no timeout
/// beyond the transport's own.
pub trait UsersApi {
    /// `GET {users}`
    fn list(&self) -> impl std::future::Future<Output = Result<Vec<User>, FetchError>>;
    /// `GET {users}/{id}`
    fn get(&self, id: UserId) -> impl std::future::Future<Output = Result<User, FetchError>>;
    /// `POST {users}`; the returned record carries the server-assigned id.
    fn create(
        &self,
        fields: &UserFields,
    ) -> impl std::future::Future<Output = Result<User, FetchError>>;
    /// `PUT {users}/{id}`
    fn update(
        &self,
        id: UserId,
        fields: &UserFields,
    ) -> impl std::future::Future<Output = Result<User, FetchError>>;
    /// `DELETE {users}/{id}`; only the status matters.
    fn delete(&self, id: UserId) -> impl std::future::Future<Output = Result<(), FetchError>>;
}
