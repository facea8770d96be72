//! User domain — venue participants.

#[cfg(feature = "http")]
pub mod client;
pub mod state;
pub mod wire;

use crate::shared::UserId;
use serde::{Deserialize, Serialize};

pub use state::UserDirectory;

/// A venue user. Identity is the id; the record is immutable once created.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct User {
    pub id: UserId,
    pub name: String,
}
