//! # Vitea SDK
//!
//! A typed Rust client for the Vitea order-book venue: REST API access plus
//! the pure aggregation and view-state layer a dashboard frontend sits on.
//!
//! ## Architecture
//!
//! The SDK is organized in layers:
//!
//! 1. **Core** — Shared newtypes, domain models, the aggregation engine and
//!    per-item view state (always available, WASM-safe)
//! 2. **HTTP API** — `ViteaHttp` with per-request retry policies
//! 3. **High-Level Client** — `ViteaClient` with nested sub-clients and a
//!    cached user directory
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use vitea_sdk::prelude::*;
//!
//! let client = ViteaClient::builder()
//!     .base_url("http://localhost:8000")
//!     .build()?;
//!
//! let (view, outcome) = client.dashboard().open(ItemId(1)).await;
//! if let Some(book) = view.aggregates().book {
//!     println!("market price: {}", book.market_price());
//! }
//! ```

// ── Layer 1: Core ────────────────────────────────────────────────────────────

/// Shared newtypes and enums used across all domains.
pub mod shared;

/// Domain modules (vertical slices): types, wire types, conversions, state.
pub mod domain;

/// Unified SDK error types.
pub mod error;

/// Network URL constants.
pub mod network;

// ── Layer 2: HTTP API ────────────────────────────────────────────────────────

/// HTTP client with retry policies.
#[cfg(feature = "http")]
pub mod http;

// ── Layer 3: High-Level Client ───────────────────────────────────────────────

/// `ViteaClient` — the primary entry point.
#[cfg(feature = "http")]
pub mod client;

// ── Prelude ──────────────────────────────────────────────────────────────────

pub mod prelude {
    // Shared newtypes
    pub use crate::shared::{ItemId, OrderId, OrderKind, Side, TradeId, UserId};

    // Domain types
    pub use crate::domain::item::Item;
    pub use crate::domain::order::wire::CreateOrderRequest;
    pub use crate::domain::order::Order;
    pub use crate::domain::trade::{ResolvedTrade, Trade};
    pub use crate::domain::user::{User, UserDirectory};

    // Aggregation engine
    pub use crate::domain::stats::{
        DepthLevel, MarketPrice, OrderTotals, TopOfBook, TradeSummary,
    };

    // View state
    pub use crate::domain::dashboard::{BookAggregates, ItemView, ViewAggregates};

    // Errors
    pub use crate::error::{HttpError, SdkError};

    // Network
    pub use crate::network::DEFAULT_API_URL;

    // HTTP client + sub-clients
    #[cfg(feature = "http")]
    pub use crate::client::{
        DashboardClient, ItemsClient, OrdersClient, TradesClient, UsersClient, ViteaClient,
        ViteaClientBuilder,
    };
    #[cfg(feature = "http")]
    pub use crate::domain::dashboard::client::RefreshOutcome;
    #[cfg(feature = "http")]
    pub use crate::http::retry::{RetryConfig, RetryPolicy};
}
