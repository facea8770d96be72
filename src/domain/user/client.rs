//! Users sub-client — list, create, cached directory.

use crate::client::ViteaClient;
use crate::domain::user::wire::CreateUserRequest;
use crate::domain::user::{User, UserDirectory};
use crate::error::SdkError;
use crate::http::RetryPolicy;
use std::time::Instant;

pub struct Users<'a> {
    pub(crate) client: &'a ViteaClient,
}

impl Users<'_> {
    /// Fetch the full user list. Refreshes the directory cache as a side
    /// effect.
    pub async fn list(&self) -> Result<Vec<User>, SdkError> {
        let url = format!("{}/users/", self.client.http.base_url());
        let users: Vec<User> = self.client.http.get(&url, RetryPolicy::Reads).await?;
        self.cache_users(users.clone()).await;
        Ok(users)
    }

    /// Create a user and fold it into the cached list.
    pub async fn create(&self, name: &str) -> Result<User, SdkError> {
        let url = format!("{}/users/", self.client.http.base_url());
        let body = CreateUserRequest {
            name: name.to_string(),
        };
        let user: User = self
            .client
            .http
            .post(&url, &body, RetryPolicy::None)
            .await?;

        let mut cache = self.client.user_cache.write().await;
        if let Some((users, _)) = cache.as_mut() {
            users.push(user.clone());
        }
        Ok(user)
    }

    /// Name directory for resolving trade buyers/sellers. Served from the
    /// TTL cache when fresh.
    pub async fn directory(&self) -> Result<UserDirectory, SdkError> {
        {
            let cache = self.client.user_cache.read().await;
            if let Some((users, fetched_at)) = cache.as_ref() {
                if fetched_at.elapsed() < self.client.user_cache_ttl {
                    return Ok(users.iter().cloned().collect());
                }
            }
        }

        let users = self.list().await?;
        Ok(users.into_iter().collect())
    }

    /// Drop the cached user list; the next `directory()` call refetches.
    pub async fn invalidate_cache(&self) {
        *self.client.user_cache.write().await = None;
    }

    async fn cache_users(&self, users: Vec<User>) {
        *self.client.user_cache.write().await = Some((users, Instant::now()));
    }
}
