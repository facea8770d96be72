//! Wire types for user requests.
//!
//! List/create responses already match the domain [`super::User`] shape, so
//! no separate response structs are needed.

use serde::{Deserialize, Serialize};

/// POST `/users/` body.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CreateUserRequest {
    pub name: String,
}
