//! High-level client — `ViteaClient` with nested sub-client accessors.
//!
//! Each domain has its own sub-client in `domain/<name>/client.rs`.
//! This module keeps the builder, shared cache state, and accessor methods.

use crate::domain::dashboard::client::Dashboard;
use crate::domain::item::client::Items;
use crate::domain::order::client::Orders;
use crate::domain::trade::client::Trades;
use crate::domain::user::client::Users;
use crate::domain::user::User;
use crate::error::SdkError;
use crate::http::ViteaHttp;

use async_lock::RwLock;
use std::sync::Arc;
use std::time::{Duration, Instant};

// Re-export sub-client types for convenience.
pub use crate::domain::dashboard::client::Dashboard as DashboardClient;
pub use crate::domain::item::client::Items as ItemsClient;
pub use crate::domain::order::client::Orders as OrdersClient;
pub use crate::domain::trade::client::Trades as TradesClient;
pub use crate::domain::user::client::Users as UsersClient;

/// The primary entry point for the Vitea SDK.
///
/// Provides nested sub-client accessors for each domain:
/// `client.orders()`, `client.dashboard()`, etc.
pub struct ViteaClient {
    pub(crate) http: ViteaHttp,
    /// User list cache: (users, fetched_at). The venue only exposes
    /// list-all, and every trade view needs the directory to resolve names.
    pub(crate) user_cache: Arc<RwLock<Option<(Vec<User>, Instant)>>>,
    /// Cache TTL for the user list.
    pub(crate) user_cache_ttl: Duration,
}

impl ViteaClient {
    pub fn builder() -> ViteaClientBuilder {
        ViteaClientBuilder::default()
    }

    // ── Sub-client accessors ─────────────────────────────────────────────

    pub fn users(&self) -> Users<'_> {
        Users { client: self }
    }

    pub fn items(&self) -> Items<'_> {
        Items { client: self }
    }

    pub fn orders(&self) -> Orders<'_> {
        Orders { client: self }
    }

    pub fn trades(&self) -> Trades<'_> {
        Trades { client: self }
    }

    pub fn dashboard(&self) -> Dashboard<'_> {
        Dashboard { client: self }
    }

    /// Base URL the client talks to (trailing slash trimmed).
    pub fn base_url(&self) -> &str {
        self.http.base_url()
    }

    /// Clear all HTTP caches.
    pub async fn clear_all_caches(&self) {
        *self.user_cache.write().await = None;
    }
}

impl Clone for ViteaClient {
    fn clone(&self) -> Self {
        Self {
            http: self.http.clone(),
            user_cache: self.user_cache.clone(),
            user_cache_ttl: self.user_cache_ttl,
        }
    }
}

// ═════════════════════════════════════════════════════════════════════════════
// Builder
// ═════════════════════════════════════════════════════════════════════════════

pub struct ViteaClientBuilder {
    base_url: String,
    user_cache_ttl: Duration,
}

impl Default for ViteaClientBuilder {
    fn default() -> Self {
        Self {
            base_url: crate::network::DEFAULT_API_URL.to_string(),
            user_cache_ttl: Duration::from_secs(60),
        }
    }
}

impl ViteaClientBuilder {
    pub fn base_url(mut self, url: &str) -> Self {
        self.base_url = url.to_string();
        self
    }

    pub fn user_cache_ttl(mut self, ttl: Duration) -> Self {
        self.user_cache_ttl = ttl;
        self
    }

    /// Take the base URL from the environment when set
    /// (`VITEA_API_URL`), keeping the current value otherwise.
    pub fn from_env(mut self) -> Self {
        if let Ok(url) = std::env::var(crate::network::API_URL_ENV) {
            self.base_url = url;
        }
        self
    }

    pub fn build(self) -> Result<ViteaClient, SdkError> {
        Ok(ViteaClient {
            http: ViteaHttp::new(&self.base_url),
            user_cache: Arc::new(RwLock::new(None)),
            user_cache_ttl: self.user_cache_ttl,
        })
    }
}
