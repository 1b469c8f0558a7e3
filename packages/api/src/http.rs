//! # `reqwest`-backed gateway
//!
//! [`HttpUsersApi`] talks JSON to the user resource. In the browser `reqwest`
//! runs on top of `fetch`, so it needs an absolute URL: the configured path is
//! joined onto the page origin once, in [`HttpUsersApi::from_origin`].
//!
//! | Method | Verb | URL |
//! |--------|------|-----|
//! | `list` | GET | `{base}` |
//! | `get` | GET | `{base}/{id}` |
//! | `create` | POST | `{base}` |
//! | `update` | PUT | `{base}/{id}` |
//! | `delete` | DELETE | `{base}/{id}` |
//!
//! A non-success create or update response has its body decoded as an
//! [`ApiErrorBody`] on a best-effort basis and the result folded into the
//! [`FetchError`] message.

use reqwest::{Client, Response, Url};
use store::{User, UserFields, UserId};

use crate::error::{ApiErrorBody, FetchError};
use crate::gateway::UsersApi;

#[derive(Clone, Debug)]
pub struct HttpUsersApi {
    client: Client,
    base: Url,
}

impl HttpUsersApi {
    pub fn new(base: Url) -> Self {
        Self {
            client: Client::new(),
            base,
        }
    }

    /// Resolve `users_path` (e.g. `/api/users`) against `origin`
    /// (e.g. `http://localhost:3000`).
    pub fn from_origin(origin: &str, users_path: &str) -> Result<Self, FetchError> {
        let base = Url::parse(origin)
            .and_then(|o| o.join(users_path))
            .map_err(|e| FetchError::transport(format!("invalid API base {origin}{users_path}: {e}")))?;
        Ok(Self::new(base))
    }

    pub fn base(&self) -> &Url {
        &self.base
    }

    fn item_url(&self, id: UserId) -> Result<Url, FetchError> {
        let raw = format!("{}/{id}", self.base.as_str().trim_end_matches('/'));
        Url::parse(&raw).map_err(|e| FetchError::transport(format!("invalid URL {raw}: {e}")))
    }
}

impl PartialEq for HttpUsersApi {
    fn eq(&self, other: &Self) -> bool {
        self.base == other.base
    }
}

/// Pass a successful response through, otherwise turn it into a [`FetchError`].
fn check(response: Response, action: &str) -> Result<Response, FetchError> {
    let status = response.status();
    if status.is_success() {
        Ok(response)
    } else {
        Err(FetchError::status(status.as_u16(), format!("Failed to {action}")))
    }
}

/// Like [`check`], but reads the backend's error body for diagnostics first.
async fn check_with_body(response: Response, action: &str) -> Result<Response, FetchError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let message = match response.json::<ApiErrorBody>().await {
        Ok(body) => match body.summary() {
            Some(summary) => {
                tracing::warn!("server rejected {action}: {summary}");
                format!("Failed to {action}: {summary}")
            }
            None => format!("Failed to {action}"),
        },
        Err(e) => {
            tracing::debug!("unreadable error body for {action}: {e}");
            format!("Failed to {action}")
        }
    };
    Err(FetchError::status(status.as_u16(), message))
}

impl UsersApi for HttpUsersApi {
    async fn list(&self) -> Result<Vec<User>, FetchError> {
        tracing::debug!("GET {}", self.base);
        let response = self.client.get(self.base.clone()).send().await?;
        let users = check(response, "fetch users")?.json::<Vec<User>>().await?;
        Ok(users)
    }

    async fn get(&self, id: UserId) -> Result<User, FetchError> {
        let url = self.item_url(id)?;
        tracing::debug!("GET {url}");
        let response = self.client.get(url).send().await?;
        let user = check(response, "fetch user details")?.json::<User>().await?;
        Ok(user)
    }

    async fn create(&self, fields: &UserFields) -> Result<User, FetchError> {
        tracing::debug!("POST {}", self.base);
        let response = self
            .client
            .post(self.base.clone())
            .json(fields)
            .send()
            .await?;
        let user = check_with_body(response, "create user")
            .await?
            .json::<User>()
            .await?;
        Ok(user)
    }

    async fn update(&self, id: UserId, fields: &UserFields) -> Result<User, FetchError> {
        let url = self.item_url(id)?;
        tracing::debug!("PUT {url}");
        let response = self.client.put(url).json(fields).send().await?;
        let user = check_with_body(response, "update user")
            .await?
            .json::<User>()
            .await?;
        Ok(user)
    }

    async fn delete(&self, id: UserId) -> Result<(), FetchError> {
        let url = self.item_url(id)?;
        tracing::debug!("DELETE {url}");
        let response = self.client.delete(url).send().await?;
        check(response, "delete user")?;
        Ok(())
    }
}
