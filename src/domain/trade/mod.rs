//! Trade domain — executed matches between two orders.

#[cfg(feature = "http")]
pub mod client;

use crate::domain::user::UserDirectory;
use crate::shared::{ItemId, TradeId, UserId};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A completed match between a buyer and a seller. Immutable once observed;
/// trades only ever change by refetching the list.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Trade {
    pub id: TradeId,
    pub buyer_id: UserId,
    pub seller_id: UserId,
    pub item_id: ItemId,
    pub price: Decimal,
}

/// A trade joined against the user directory for display.
///
/// Participants whose user record has disappeared resolve to the
/// deleted-user placeholder rather than failing the view.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedTrade {
    pub id: TradeId,
    pub buyer: String,
    pub seller: String,
    pub price: Decimal,
}

impl Trade {
    pub fn resolve(&self, directory: &UserDirectory) -> ResolvedTrade {
        ResolvedTrade {
            id: self.id,
            buyer: directory.resolve(self.buyer_id).to_string(),
            seller: directory.resolve(self.seller_id).to_string(),
            price: self.price,
        }
    }
}
