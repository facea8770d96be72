//! Per-item view state: two independently merged snapshots.

use crate::domain::dashboard::{BookAggregates, ViewAggregates};
use crate::domain::order::Order;
use crate::domain::stats;
use crate::domain::trade::Trade;
use crate::shared::{ItemId, OrderId};

/// App-owned state for one item's dashboard view.
///
/// The order snapshot and the trade snapshot are independent merge units:
/// a refresh replaces exactly the unit it fetched, and a failed fetch
/// leaves that unit's previous snapshot in place. Optimistic order
/// mutations touch the order unit only; trades change only on refetch.
#[derive(Debug, Clone, PartialEq)]
pub struct ItemView {
    item_id: ItemId,
    orders: Option<Vec<Order>>,
    trades: Option<Vec<Trade>>,
}

impl ItemView {
    /// Empty view for an item. Nothing is loaded yet.
    pub fn new(item_id: ItemId) -> Self {
        Self {
            item_id,
            orders: None,
            trades: None,
        }
    }

    pub fn item_id(&self) -> ItemId {
        self.item_id
    }

    /// Latest order snapshot, once one has arrived.
    pub fn orders(&self) -> Option<&[Order]> {
        self.orders.as_deref()
    }

    /// Latest trade snapshot, once one has arrived.
    pub fn trades(&self) -> Option<&[Trade]> {
        self.trades.as_deref()
    }

    /// Both snapshots present. Until this holds, `unmatched_orders` in the
    /// tape summary is provisional (computed against zero orders).
    pub fn is_ready(&self) -> bool {
        self.orders.is_some() && self.trades.is_some()
    }

    /// Replace the order snapshot. Last writer wins for this unit; the
    /// trade unit is untouched.
    pub fn apply_orders(&mut self, orders: Vec<Order>) {
        self.orders = Some(orders);
    }

    /// Replace the trade snapshot. Last writer wins for this unit; the
    /// order unit is untouched.
    pub fn apply_trades(&mut self, trades: Vec<Trade>) {
        self.trades = Some(trades);
    }

    /// Fold a venue-confirmed new order into the order unit without waiting
    /// for a refetch. Before the first snapshot the appended order becomes
    /// the snapshot.
    pub fn apply_created(&mut self, order: Order) {
        self.orders.get_or_insert_with(Vec::new).push(order);
    }

    /// Drop a confirmed-cancelled order by id. Unknown ids (or an absent
    /// order snapshot) leave the view untouched and report `false`.
    pub fn apply_deleted(&mut self, order_id: OrderId) -> bool {
        let Some(orders) = self.orders.as_mut() else {
            return false;
        };
        match orders.iter().position(|o| o.id == order_id) {
            Some(index) => {
                orders.remove(index);
                true
            }
            None => false,
        }
    }

    /// Recompute display aggregates from whatever snapshots are present.
    pub fn aggregates(&self) -> ViewAggregates {
        let book = self.orders.as_deref().map(|orders| BookAggregates {
            top: stats::top_of_book(orders),
            totals: stats::order_totals(orders),
            depth: stats::depth_levels(orders),
        });
        let order_count = self.orders.as_ref().map_or(0, Vec::len);
        let tape = self
            .trades
            .as_deref()
            .map(|trades| stats::trade_summary(trades, order_count));
        ViewAggregates { book, tape }
    }

    /// Discard both snapshots. Closing and reopening a view starts clean.
    pub fn reset(&mut self) {
        self.orders = None;
        self.trades = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::{OrderKind, Side, TradeId, UserId};
    use rust_decimal::prelude::*;

    fn limit(id: i64, side: Side, price: f64) -> Order {
        Order {
            id: OrderId(id),
            side,
            kind: OrderKind::Limit,
            price: Some(Decimal::try_from(price).unwrap()),
            item_id: ItemId(7),
            user_id: UserId(1),
        }
    }

    fn trade(id: i64, price: f64) -> Trade {
        Trade {
            id: TradeId(id),
            buyer_id: UserId(1),
            seller_id: UserId(2),
            item_id: ItemId(7),
            price: Decimal::try_from(price).unwrap(),
        }
    }

    fn market_price_display(view: &ItemView) -> String {
        view.aggregates()
            .book
            .expect("order snapshot present")
            .market_price()
            .to_string()
    }

    #[test]
    fn test_new_view_is_empty() {
        let view = ItemView::new(ItemId(7));
        assert_eq!(view.item_id(), ItemId(7));
        assert!(!view.is_ready());
        assert_eq!(view.aggregates(), ViewAggregates::default());
    }

    #[test]
    fn test_snapshots_arrive_independently() {
        let mut view = ItemView::new(ItemId(7));
        view.apply_orders(vec![limit(1, Side::Bid, 100.0)]);

        let aggregates = view.aggregates();
        assert!(aggregates.book.is_some());
        assert!(aggregates.tape.is_none());
        assert!(!view.is_ready());

        view.apply_trades(vec![]);
        assert!(view.is_ready());
        assert!(view.aggregates().tape.is_some());
    }

    #[test]
    fn test_refresh_replaces_only_its_own_unit() {
        let mut view = ItemView::new(ItemId(7));
        view.apply_orders(vec![limit(1, Side::Bid, 100.0), limit(2, Side::Ask, 110.0)]);
        view.apply_trades(vec![trade(1, 105.0)]);

        view.apply_orders(vec![limit(3, Side::Bid, 95.0)]);
        assert_eq!(view.orders().unwrap().len(), 1);
        assert_eq!(view.trades().unwrap().len(), 1);
    }

    #[test]
    fn test_optimistic_append_moves_market_price() {
        let mut view = ItemView::new(ItemId(7));
        view.apply_orders(vec![limit(1, Side::Bid, 100.0), limit(2, Side::Ask, 110.0)]);
        assert_eq!(market_price_display(&view), "105.00");

        view.apply_created(limit(3, Side::Bid, 105.0));
        assert_eq!(market_price_display(&view), "107.50");
    }

    #[test]
    fn test_optimistic_append_seeds_missing_snapshot() {
        let mut view = ItemView::new(ItemId(7));
        view.apply_created(limit(1, Side::Ask, 110.0));

        assert_eq!(view.orders().unwrap().len(), 1);
        assert_eq!(market_price_display(&view), "110.00");
    }

    #[test]
    fn test_delete_unknown_id_leaves_view_unchanged() {
        let mut view = ItemView::new(ItemId(7));
        assert!(!view.apply_deleted(OrderId(99)));

        view.apply_orders(vec![limit(1, Side::Bid, 100.0)]);
        let before = view.aggregates();
        assert!(!view.apply_deleted(OrderId(99)));
        assert_eq!(view.aggregates(), before);
        assert_eq!(view.orders().unwrap().len(), 1);
    }

    #[test]
    fn test_delete_confirmed_order_updates_totals() {
        let mut view = ItemView::new(ItemId(7));
        view.apply_orders(vec![limit(1, Side::Bid, 100.0), limit(2, Side::Ask, 110.0)]);

        assert!(view.apply_deleted(OrderId(2)));
        let book = view.aggregates().book.unwrap();
        assert_eq!(book.totals.bids, 1);
        assert_eq!(book.totals.asks, 0);
        assert_eq!(market_price_display(&view), "100.00");
    }

    #[test]
    fn test_unmatched_is_provisional_until_orders_arrive() {
        let mut view = ItemView::new(ItemId(7));
        view.apply_trades(vec![trade(1, 105.0), trade(2, 106.0)]);

        let tape = view.aggregates().tape.unwrap();
        assert_eq!(tape.trade_count, 2);
        assert_eq!(tape.unmatched_orders, 0);

        view.apply_orders(vec![
            limit(1, Side::Bid, 100.0),
            limit(2, Side::Bid, 99.0),
            limit(3, Side::Ask, 110.0),
        ]);
        assert!(view.is_ready());
        assert_eq!(view.aggregates().tape.unwrap().unmatched_orders, 1);
    }

    #[test]
    fn test_reset_discards_both_units() {
        let mut view = ItemView::new(ItemId(7));
        view.apply_orders(vec![limit(1, Side::Bid, 100.0)]);
        view.apply_trades(vec![trade(1, 105.0)]);

        view.reset();
        assert!(!view.is_ready());
        assert!(view.orders().is_none());
        assert!(view.trades().is_none());
    }
}
