//! Dashboard sub-client — refresh orchestration and optimistic mutations.

use crate::client::ViteaClient;
use crate::domain::dashboard::state::ItemView;
use crate::domain::order::wire::CreateOrderRequest;
use crate::domain::order::Order;
use crate::error::SdkError;
use crate::shared::{ItemId, OrderId};

pub struct Dashboard<'a> {
    pub(crate) client: &'a ViteaClient,
}

/// Per-unit outcome of a refresh.
///
/// A failed fetch never fails the view: the affected unit keeps its
/// previous snapshot and the error lands here for the caller to surface.
#[derive(Debug, Default)]
pub struct RefreshOutcome {
    pub orders: Option<SdkError>,
    pub trades: Option<SdkError>,
}

impl RefreshOutcome {
    /// Both fetches landed.
    pub fn is_clean(&self) -> bool {
        self.orders.is_none() && self.trades.is_none()
    }

    /// Exactly one unit refreshed; the other is stale until the next
    /// refresh.
    pub fn is_partial(&self) -> bool {
        self.orders.is_some() != self.trades.is_some()
    }
}

impl Dashboard<'_> {
    /// Fresh view for an item plus its initial refresh.
    pub async fn open(&self, item_id: ItemId) -> (ItemView, RefreshOutcome) {
        let mut view = ItemView::new(item_id);
        let outcome = self.refresh(&mut view).await;
        (view, outcome)
    }

    /// Fetch the order and trade snapshots concurrently and merge whichever
    /// succeeded into the view.
    pub async fn refresh(&self, view: &mut ItemView) -> RefreshOutcome {
        let item_id = view.item_id();
        let (orders, trades) = futures_util::future::join(
            self.client.orders().list(item_id, None),
            self.client.trades().list(item_id),
        )
        .await;

        let mut outcome = RefreshOutcome::default();
        match orders {
            Ok(orders) => view.apply_orders(orders),
            Err(err) => {
                tracing::warn!(%item_id, error = %err, "order refresh failed, keeping stale snapshot");
                outcome.orders = Some(err);
            }
        }
        match trades {
            Ok(trades) => view.apply_trades(trades),
            Err(err) => {
                tracing::warn!(%item_id, error = %err, "trade refresh failed, keeping stale snapshot");
                outcome.trades = Some(err);
            }
        }
        outcome
    }

    /// Place an order and fold the confirmed result into the view without
    /// waiting for a refetch. On rejection the view is not advanced and the
    /// venue's error propagates to the caller.
    pub async fn place_order(
        &self,
        view: &mut ItemView,
        request: &CreateOrderRequest,
    ) -> Result<Order, SdkError> {
        if request.item_id != view.item_id() {
            return Err(SdkError::Validation(format!(
                "order targets item {} but the view tracks item {}",
                request.item_id,
                view.item_id()
            )));
        }
        let order = self.client.orders().create(request).await?;
        view.apply_created(order.clone());
        Ok(order)
    }

    /// Cancel an order. The view drops it only after the venue confirms the
    /// deletion.
    pub async fn cancel_order(
        &self,
        view: &mut ItemView,
        order_id: OrderId,
    ) -> Result<(), SdkError> {
        self.client.orders().delete(order_id).await?;
        view.apply_deleted(order_id);
        Ok(())
    }
}
