//! Item domain — the tradable goods listed on the venue.

#[cfg(feature = "http")]
pub mod client;
pub mod wire;

use crate::shared::ItemId;
use serde::{Deserialize, Serialize};

/// A tradable item. Orders and trades are scoped to exactly one item.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Item {
    pub id: ItemId,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
}
