//! Order domain — resting orders on an item's book.

#[cfg(feature = "http")]
pub mod client;
mod convert;
pub mod wire;

use crate::shared::{ItemId, OrderId, OrderKind, Side, UserId};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A resting order in normalized domain form.
///
/// Market orders never carry a `price`: the venue's wire encoding of
/// priceless orders has drifted between `0` and `null` across schema
/// generations, and [`wire::OrderResponse`] conversion collapses both to
/// `None`. Limit orders normally quote one; a payload that omits it still
/// counts toward book totals but sits out price discovery.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Order {
    pub id: OrderId,
    pub side: Side,
    pub kind: OrderKind,
    pub price: Option<Decimal>,
    pub item_id: ItemId,
    pub user_id: UserId,
}

impl Order {
    pub fn is_limit(&self) -> bool {
        self.kind.is_limit()
    }

    /// The firm price participating in price discovery: a Limit order's
    /// price. Market orders never quote one.
    pub fn effective_price(&self) -> Option<Decimal> {
        if self.kind.is_limit() {
            self.price
        } else {
            None
        }
    }
}
