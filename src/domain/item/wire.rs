//! Wire types for item requests.

use serde::{Deserialize, Serialize};

/// POST `/items/` body.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CreateItemRequest {
    pub name: String,
    pub description: Option<String>,
}
