use std::collections::{BTreeMap, BTreeSet};
use std::sync::{Arc, Mutex};

use store::{User, UserFields, UserId};

use crate::error::FetchError;
use crate::gateway::UsersApi;

/// A call received by [`MemoryUsersApi`], recorded in arrival order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Call {
    List,
    Get(UserId),
    Create,
    Update(UserId),
    Delete(UserId),
}

#[derive(Debug, Default)]
struct Backend {
    users: BTreeMap<UserId, User>,
    next_id: UserId,
    failing_deletes: BTreeSet<UserId>,
    offline: bool,
    calls: Vec<Call>,
}

impl Backend {
    fn conflict(&self, fields: &UserFields, except: Option<UserId>) -> Option<&'static str> {
        let others = self.users.values().filter(|u| Some(u.id) != except);
        for other in others {
            if other.email == fields.email {
                return Some("Email already exists");
            }
            if other.phone == fields.phone {
                return Some("Phone number already exists");
            }
        }
        None
    }
}

/// In-memory user resource for testing.
///
/// Behaves like the REST backend: ids are assigned on create, unknown ids give
/// 404, duplicate email or phone gives 400. Failures can be injected per id or
/// globally with [`set_offline`](MemoryUsersApi::set_offline).
#[derive(Clone, Debug, Default)]
pub struct MemoryUsersApi {
    inner: Arc<Mutex<Backend>>,
}

impl MemoryUsersApi {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed with existing records; new ids continue after the largest one.
    pub fn with_users(users: impl IntoIterator<Item = User>) -> Self {
        let api = Self::new();
        {
            let mut backend = api.inner.lock().unwrap();
            for user in users {
                backend.next_id = backend.next_id.max(user.id);
                backend.users.insert(user.id, user);
            }
        }
        api
    }

    /// Make every later `DELETE` of `id` fail with a 500.
    pub fn fail_delete(&self, id: UserId) {
        self.inner.lock().unwrap().failing_deletes.insert(id);
    }

    /// While offline every call fails at the transport level.
    pub fn set_offline(&self, offline: bool) {
        self.inner.lock().unwrap().offline = offline;
    }

    /// Change the backend behind the client's back, as another session would.
    pub fn remove_directly(&self, id: UserId) {
        self.inner.lock().unwrap().users.remove(&id);
    }

    pub fn users(&self) -> Vec<User> {
        self.inner.lock().unwrap().users.values().cloned().collect()
    }

    pub fn calls(&self) -> Vec<Call> {
        self.inner.lock().unwrap().calls.clone()
    }

    fn begin(&self, call: Call) -> Result<std::sync::MutexGuard<'_, Backend>, FetchError> {
        let mut backend = self.inner.lock().unwrap();
        backend.calls.push(call);
        if backend.offline {
            return Err(FetchError::transport("network unreachable"));
        }
        Ok(backend)
    }
}

/// Two handles are equal when they share a backend.
impl PartialEq for MemoryUsersApi {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }
}

impl UsersApi for MemoryUsersApi {
    async fn list(&self) -> Result<Vec<User>, FetchError> {
        let backend = self.begin(Call::List)?;
        Ok(backend.users.values().cloned().collect())
    }

    async fn get(&self, id: UserId) -> Result<User, FetchError> {
        let backend = self.begin(Call::Get(id))?;
        backend
            .users
            .get(&id)
            .cloned()
            .ok_or_else(|| FetchError::status(404, "Failed to fetch user details"))
    }

    async fn create(&self, fields: &UserFields) -> Result<User, FetchError> {
        let mut backend = self.begin(Call::Create)?;
        if let Some(reason) = backend.conflict(fields, None) {
            return Err(FetchError::status(400, format!("Failed to create user: {reason}")));
        }
        backend.next_id += 1;
        let user = fields.clone().into_user(backend.next_id);
        backend.users.insert(user.id, user.clone());
        Ok(user)
    }

    async fn update(&self, id: UserId, fields: &UserFields) -> Result<User, FetchError> {
        let mut backend = self.begin(Call::Update(id))?;
        if !backend.users.contains_key(&id) {
            return Err(FetchError::status(404, "Failed to update user"));
        }
        if let Some(reason) = backend.conflict(fields, Some(id)) {
            return Err(FetchError::status(400, format!("Failed to update user: {reason}")));
        }
        let user = fields.clone().into_user(id);
        backend.users.insert(id, user.clone());
        Ok(user)
    }

    async fn delete(&self, id: UserId) -> Result<(), FetchError> {
        let mut backend = self.begin(Call::Delete(id))?;
        if backend.failing_deletes.contains(&id) {
            return Err(FetchError::status(500, "Failed to delete user"));
        }
        match backend.users.remove(&id) {
            Some(_) => Ok(()),
            None => Err(FetchError::status(404, "Failed to delete user")),
        }
    }
}
