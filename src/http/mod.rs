//! HTTP transport layer — `ViteaHttp` with per-request retry policies.

pub mod client;
pub mod retry;

pub use client::ViteaHttp;
pub use retry::{RetryConfig, RetryPolicy};
