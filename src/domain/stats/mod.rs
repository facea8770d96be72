//! Aggregation engine — pure statistics over one item's order/trade
//! snapshots.
//!
//! Every function here is total, synchronous, and side-effect-free:
//! permuting the input sequence never changes the result, and inputs are
//! never mutated. Only Limit orders with a firm price participate in price
//! discovery; Market orders are invisible to the top of book.

use crate::domain::order::Order;
use crate::domain::trade::Trade;
use crate::shared::fmt::format_price;
use crate::shared::Side;
use rust_decimal::{Decimal, RoundingStrategy};
use std::collections::BTreeMap;

// ─── Top of book ─────────────────────────────────────────────────────────────

/// Best resting prices on each side of an item's book.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TopOfBook {
    /// Highest firm bid price.
    pub best_bid: Option<Decimal>,
    /// Lowest firm ask price.
    pub best_ask: Option<Decimal>,
}

impl TopOfBook {
    /// Displayed market price: midpoint when both sides quote, the single
    /// quoting side otherwise, the sentinel when neither does.
    pub fn market_price(&self) -> MarketPrice {
        let raw = match (self.best_bid, self.best_ask) {
            (Some(bid), Some(ask)) => (bid + ask) / Decimal::from(2),
            (Some(bid), None) => bid,
            (None, Some(ask)) => ask,
            (None, None) => return MarketPrice::NoOrders,
        };
        MarketPrice::Quote(raw.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero))
    }

    /// Distance between best ask and best bid, when both sides quote.
    pub fn spread(&self) -> Option<Decimal> {
        match (self.best_bid, self.best_ask) {
            (Some(bid), Some(ask)) => Some(ask - bid),
            _ => None,
        }
    }
}

/// Scan a snapshot for the best firm price on each side.
pub fn top_of_book(orders: &[Order]) -> TopOfBook {
    let mut top = TopOfBook::default();
    for order in orders {
        let Some(price) = order.effective_price() else {
            continue;
        };
        match order.side {
            Side::Bid => top.best_bid = Some(top.best_bid.map_or(price, |b| b.max(price))),
            Side::Ask => top.best_ask = Some(top.best_ask.map_or(price, |a| a.min(price))),
        }
    }
    top
}

// ─── Market price ────────────────────────────────────────────────────────────

/// Result of market-price discovery, already rounded to the 2-dp display
/// convention.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarketPrice {
    Quote(Decimal),
    /// No Limit order with a firm price rests on either side.
    NoOrders,
}

impl MarketPrice {
    pub fn quote(&self) -> Option<Decimal> {
        match self {
            MarketPrice::Quote(price) => Some(*price),
            MarketPrice::NoOrders => None,
        }
    }
}

impl std::fmt::Display for MarketPrice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MarketPrice::Quote(price) => write!(f, "{}", format_price(*price)),
            MarketPrice::NoOrders => write!(f, "no orders"),
        }
    }
}

/// Market price of a snapshot. Equivalent to
/// `top_of_book(orders).market_price()`.
pub fn market_price(orders: &[Order]) -> MarketPrice {
    top_of_book(orders).market_price()
}

// ─── Order totals ────────────────────────────────────────────────────────────

/// Resting Limit-order counts by side. Market orders are excluded, matching
/// the price-discovery convention.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OrderTotals {
    pub bids: usize,
    pub asks: usize,
}

pub fn order_totals(orders: &[Order]) -> OrderTotals {
    let mut totals = OrderTotals::default();
    for order in orders.iter().filter(|o| o.is_limit()) {
        match order.side {
            Side::Bid => totals.bids += 1,
            Side::Ask => totals.asks += 1,
        }
    }
    totals
}

// ─── Trade summary ───────────────────────────────────────────────────────────

/// Executed-trade statistics for one item.
///
/// `unmatched_orders` is a coarse approximation by contract: the trade count
/// stands in for the matched-order count (`order_count − trade_count`,
/// floored at zero). No order-to-trade reconciliation is attempted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TradeSummary {
    pub trade_count: usize,
    /// Mean trade price at full precision; `None` when no trades exist.
    pub avg_price: Option<Decimal>,
    pub unmatched_orders: usize,
}

impl TradeSummary {
    /// Display form of the average trade price: 2-dp, or `"N/A"` without
    /// trades.
    pub fn avg_price_display(&self) -> String {
        match self.avg_price {
            Some(avg) => format_price(avg),
            None => "N/A".to_string(),
        }
    }
}

pub fn trade_summary(trades: &[Trade], order_count: usize) -> TradeSummary {
    let trade_count = trades.len();
    let avg_price = if trade_count == 0 {
        None
    } else {
        let sum: Decimal = trades.iter().map(|t| t.price).sum();
        Some(sum / Decimal::from(trade_count))
    };
    TradeSummary {
        trade_count,
        avg_price,
        unmatched_orders: order_count.saturating_sub(trade_count),
    }
}

// ─── Depth histogram ─────────────────────────────────────────────────────────

/// One merged row of the order-depth histogram: how many resting bids/asks
/// quote exactly this price.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DepthLevel {
    pub price: Decimal,
    pub bid_qty: u32,
    pub ask_qty: u32,
}

/// Per-price order counts, ascending by price, one row per distinct price.
/// Only firm-priced Limit orders contribute.
pub fn depth_levels(orders: &[Order]) -> Vec<DepthLevel> {
    let mut levels: BTreeMap<Decimal, (u32, u32)> = BTreeMap::new();
    for order in orders {
        let Some(price) = order.effective_price() else {
            continue;
        };
        let level = levels.entry(price).or_default();
        match order.side {
            Side::Bid => level.0 += 1,
            Side::Ask => level.1 += 1,
        }
    }
    levels
        .into_iter()
        .map(|(price, (bid_qty, ask_qty))| DepthLevel {
            price,
            bid_qty,
            ask_qty,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::{ItemId, OrderId, OrderKind, TradeId, UserId};
    use rust_decimal::prelude::*;

    fn limit(id: i64, side: Side, price: f64) -> Order {
        Order {
            id: OrderId(id),
            side,
            kind: OrderKind::Limit,
            price: Some(Decimal::try_from(price).unwrap()),
            item_id: ItemId(1),
            user_id: UserId(1),
        }
    }

    fn market_order(id: i64, side: Side) -> Order {
        Order {
            id: OrderId(id),
            side,
            kind: OrderKind::Market,
            price: None,
            item_id: ItemId(1),
            user_id: UserId(1),
        }
    }

    fn trade(id: i64, price: f64) -> Trade {
        Trade {
            id: TradeId(id),
            buyer_id: UserId(1),
            seller_id: UserId(2),
            item_id: ItemId(1),
            price: Decimal::try_from(price).unwrap(),
        }
    }

    #[test]
    fn test_market_price_midpoint_of_best_bid_and_ask() {
        let orders = vec![limit(1, Side::Bid, 100.0), limit(2, Side::Ask, 110.0)];
        assert_eq!(market_price(&orders).to_string(), "105.00");
    }

    #[test]
    fn test_market_price_single_sided_book() {
        let bids_only = vec![limit(1, Side::Bid, 95.0), limit(2, Side::Bid, 100.0)];
        assert_eq!(market_price(&bids_only).to_string(), "100.00");

        let asks_only = vec![limit(1, Side::Ask, 120.0), limit(2, Side::Ask, 110.0)];
        assert_eq!(market_price(&asks_only).to_string(), "110.00");
    }

    #[test]
    fn test_market_price_empty_and_market_only_books() {
        assert_eq!(market_price(&[]), MarketPrice::NoOrders);
        assert_eq!(market_price(&[]).to_string(), "no orders");

        let priceless = vec![market_order(1, Side::Bid), market_order(2, Side::Ask)];
        assert_eq!(market_price(&priceless), MarketPrice::NoOrders);
    }

    #[test]
    fn test_market_price_ignores_market_orders_beside_limits() {
        let orders = vec![
            market_order(1, Side::Bid),
            limit(2, Side::Bid, 100.0),
            limit(3, Side::Ask, 110.0),
            market_order(4, Side::Ask),
        ];
        assert_eq!(market_price(&orders).quote(), Some(Decimal::from(105)));
    }

    #[test]
    fn test_market_price_invariant_under_permutation() {
        let orders = vec![
            limit(1, Side::Bid, 100.0),
            limit(2, Side::Bid, 95.0),
            limit(3, Side::Ask, 110.0),
            limit(4, Side::Ask, 115.0),
        ];
        let mut reversed = orders.clone();
        reversed.reverse();
        assert_eq!(market_price(&orders), market_price(&reversed));
        assert_eq!(top_of_book(&orders), top_of_book(&reversed));
    }

    #[test]
    fn test_top_of_book_takes_max_bid_and_min_ask() {
        let orders = vec![
            limit(1, Side::Bid, 95.0),
            limit(2, Side::Bid, 100.0),
            limit(3, Side::Ask, 115.0),
            limit(4, Side::Ask, 110.0),
        ];
        let top = top_of_book(&orders);
        assert_eq!(top.best_bid, Some(Decimal::from(100)));
        assert_eq!(top.best_ask, Some(Decimal::from(110)));
        assert_eq!(top.spread(), Some(Decimal::from(10)));
    }

    #[test]
    fn test_order_totals_count_limit_orders_only() {
        let orders = vec![
            limit(1, Side::Bid, 100.0),
            limit(2, Side::Bid, 99.0),
            limit(3, Side::Ask, 110.0),
            market_order(4, Side::Bid),
            market_order(5, Side::Ask),
        ];
        let totals = order_totals(&orders);
        assert_eq!(totals.bids, 2);
        assert_eq!(totals.asks, 1);
    }

    #[test]
    fn test_trade_summary_without_trades() {
        let summary = trade_summary(&[], 4);
        assert_eq!(summary.trade_count, 0);
        assert_eq!(summary.avg_price, None);
        assert_eq!(summary.avg_price_display(), "N/A");
        assert_eq!(summary.unmatched_orders, 4);
    }

    #[test]
    fn test_trade_summary_average_and_unmatched() {
        let trades = vec![trade(1, 100.0), trade(2, 111.0)];
        let summary = trade_summary(&trades, 5);
        assert_eq!(summary.trade_count, 2);
        assert_eq!(summary.avg_price_display(), "105.50");
        assert_eq!(summary.unmatched_orders, 3);
    }

    #[test]
    fn test_trade_summary_unmatched_floors_at_zero() {
        let trades = vec![trade(1, 100.0), trade(2, 101.0), trade(3, 102.0)];
        assert_eq!(trade_summary(&trades, 1).unmatched_orders, 0);
        assert_eq!(trade_summary(&trades, 0).unmatched_orders, 0);
    }

    #[test]
    fn test_two_sided_book_with_one_trade() {
        let orders = vec![limit(1, Side::Bid, 100.0), limit(2, Side::Ask, 110.0)];
        let trades = vec![trade(1, 105.0)];

        assert_eq!(market_price(&orders).to_string(), "105.00");
        let summary = trade_summary(&trades, orders.len());
        assert_eq!(summary.trade_count, 1);
        assert_eq!(summary.avg_price_display(), "105.00");
        assert_eq!(summary.unmatched_orders, 1);
    }

    #[test]
    fn test_depth_levels_merge_per_price_ascending() {
        let orders = vec![
            limit(1, Side::Bid, 100.0),
            limit(2, Side::Bid, 100.0),
            limit(3, Side::Ask, 100.0),
            limit(4, Side::Ask, 110.0),
            market_order(5, Side::Bid),
        ];
        let depth = depth_levels(&orders);
        assert_eq!(depth.len(), 2);
        assert_eq!(depth[0].price, Decimal::from(100));
        assert_eq!(depth[0].bid_qty, 2);
        assert_eq!(depth[0].ask_qty, 1);
        assert_eq!(depth[1].price, Decimal::from(110));
        assert_eq!(depth[1].bid_qty, 0);
        assert_eq!(depth[1].ask_qty, 1);
    }

    #[test]
    fn test_depth_levels_empty_book() {
        assert!(depth_levels(&[]).is_empty());
        assert!(depth_levels(&[market_order(1, Side::Bid)]).is_empty());
    }
}
