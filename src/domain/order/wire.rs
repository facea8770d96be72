//! Wire types for order requests and responses.

use crate::shared::{ItemId, OrderId, OrderKind, Side, UserId};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize, Serializer};

/// Raw order as the venue sends it.
///
/// Tolerant of both schema generations: the current one names the side
/// field `side` and splits `kind` out (with a nullable price); the legacy
/// flat one named it `type`, had no `kind`, and always carried a numeric
/// price. A missing `kind` therefore defaults to `Limit`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OrderResponse {
    pub id: OrderId,
    #[serde(alias = "type")]
    pub side: Side,
    #[serde(default)]
    pub kind: OrderKind,
    #[serde(default)]
    pub price: Option<Decimal>,
    pub item_id: ItemId,
    pub user_id: UserId,
}

/// POST `/orders/` body.
///
/// `price` is the Limit order's firm price. The venue's create endpoint
/// requires a numeric price field, so Market orders serialize it as `0`;
/// the response side normalizes that back to "no price".
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct CreateOrderRequest {
    pub side: Side,
    pub kind: OrderKind,
    pub item_id: ItemId,
    pub user_id: UserId,
    #[serde(serialize_with = "price_or_zero")]
    pub price: Option<Decimal>,
}

fn price_or_zero<S: Serializer>(price: &Option<Decimal>, ser: S) -> Result<S::Ok, S::Error> {
    // UFCS: Decimal has an inherent `serialize` returning raw bytes that
    // would otherwise shadow the serde impl.
    Serialize::serialize(&price.unwrap_or(Decimal::ZERO), ser)
}

impl CreateOrderRequest {
    /// A Limit order at a firm price.
    pub fn limit(side: Side, item_id: ItemId, user_id: UserId, price: Decimal) -> Self {
        Self {
            side,
            kind: OrderKind::Limit,
            item_id,
            user_id,
            price: Some(price),
        }
    }

    /// A Market order; no firm price.
    pub fn market(side: Side, item_id: ItemId, user_id: UserId) -> Self {
        Self {
            side,
            kind: OrderKind::Market,
            item_id,
            user_id,
            price: None,
        }
    }

    /// Check the kind/price pairing before submission.
    pub fn validate(&self) -> Result<(), crate::error::SdkError> {
        match (self.kind, self.price) {
            (OrderKind::Limit, None) => Err(crate::error::SdkError::Validation(
                "Limit orders require a price".to_string(),
            )),
            (OrderKind::Market, Some(_)) => Err(crate::error::SdkError::Validation(
                "Market orders do not take a price".to_string(),
            )),
            _ => Ok(()),
        }
    }
}
