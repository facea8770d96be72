//! Conversions from wire orders to the normalized domain form.

use super::wire::OrderResponse;
use super::Order;
use crate::shared::OrderKind;

impl From<OrderResponse> for Order {
    fn from(o: OrderResponse) -> Self {
        // Market orders arrive with price 0 or null depending on schema
        // generation; neither is a firm price.
        let price = match o.kind {
            OrderKind::Limit => o.price,
            OrderKind::Market => None,
        };
        Self {
            id: o.id,
            side: o.side,
            kind: o.kind,
            price,
            item_id: o.item_id,
            user_id: o.user_id,
        }
    }
}
