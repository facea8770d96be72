//! Domain modules organized as vertical slices.
//!
//! Each sub-module contains some of:
//! - `mod.rs` — rich domain types (validated, display-ready)
//! - `wire.rs` — raw serde structs matching venue requests/responses
//! - `convert.rs` — wire→domain conversions with normalization
//! - `state.rs` — app-owned state containers with SDK-provided update methods
//! - `client.rs` — sub-client with HTTP methods (feature `http`)

pub mod dashboard;
pub mod item;
pub mod order;
pub mod stats;
pub mod trade;
pub mod user;
