//! Dashboard domain — per-item view state and its display aggregates.

#[cfg(feature = "http")]
pub mod client;
pub mod state;

use crate::domain::stats::{DepthLevel, MarketPrice, OrderTotals, TopOfBook, TradeSummary};

pub use state::ItemView;

/// Aggregates recomputed on demand from whichever snapshots a view holds.
///
/// A group stays `None` until its snapshot has arrived, so callers can
/// render a loading placeholder instead of a misleading zero.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViewAggregates {
    pub book: Option<BookAggregates>,
    pub tape: Option<TradeSummary>,
}

/// Order-book side of the aggregates: top of book, per-side totals, and the
/// merged depth histogram.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookAggregates {
    pub top: TopOfBook,
    pub totals: OrderTotals,
    pub depth: Vec<DepthLevel>,
}

impl BookAggregates {
    pub fn market_price(&self) -> MarketPrice {
        self.top.market_price()
    }
}
