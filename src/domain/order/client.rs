//! Orders sub-client — list, create, delete.

use crate::client::ViteaClient;
use crate::domain::order::wire::{CreateOrderRequest, OrderResponse};
use crate::domain::order::Order;
use crate::error::SdkError;
use crate::http::RetryPolicy;
use crate::shared::{ItemId, OrderId, UserId};

pub struct Orders<'a> {
    pub(crate) client: &'a ViteaClient,
}

impl Orders<'_> {
    /// Resting orders for one item, optionally narrowed to one user.
    pub async fn list(
        &self,
        item_id: ItemId,
        user_id: Option<UserId>,
    ) -> Result<Vec<Order>, SdkError> {
        let mut url = format!(
            "{}/orders/?item_id={}",
            self.client.http.base_url(),
            item_id
        );
        if let Some(user_id) = user_id {
            url = format!("{}&user_id={}", url, user_id);
        }
        let orders: Vec<OrderResponse> = self.client.http.get(&url, RetryPolicy::Reads).await?;
        Ok(orders.into_iter().map(Order::from).collect())
    }

    /// Place an order. Never retried automatically; a venue rejection
    /// surfaces as `HttpError::Api` carrying the `detail` message.
    pub async fn create(&self, request: &CreateOrderRequest) -> Result<Order, SdkError> {
        request.validate()?;
        let url = format!("{}/orders/", self.client.http.base_url());
        let order: OrderResponse = self
            .client
            .http
            .post(&url, request, RetryPolicy::None)
            .await?;
        Ok(order.into())
    }

    /// Remove a resting order. Never retried automatically; deleting an
    /// unknown id yields a 404 `HttpError::Api`.
    pub async fn delete(&self, order_id: OrderId) -> Result<(), SdkError> {
        let url = format!("{}/orders/{}", self.client.http.base_url(), order_id);
        Ok(self.client.http.delete(&url, RetryPolicy::None).await?)
    }
}
