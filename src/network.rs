//! Network constants — default endpoints and environment overrides.

/// Default REST endpoint: a locally running venue backend.
pub const DEFAULT_API_URL: &str = "http://localhost:8000";

/// Environment variable honored by
/// [`ViteaClientBuilder::from_env`](crate::client::ViteaClientBuilder::from_env).
pub const API_URL_ENV: &str = "VITEA_API_URL";
