//! Trades sub-client — executed-trade queries.

use crate::client::ViteaClient;
use crate::domain::trade::{ResolvedTrade, Trade};
use crate::error::SdkError;
use crate::http::RetryPolicy;
use crate::shared::ItemId;

pub struct Trades<'a> {
    pub(crate) client: &'a ViteaClient,
}

impl Trades<'_> {
    /// Executed trades for one item.
    pub async fn list(&self, item_id: ItemId) -> Result<Vec<Trade>, SdkError> {
        let url = format!(
            "{}/trades/?item_id={}",
            self.client.http.base_url(),
            item_id
        );
        Ok(self.client.http.get(&url, RetryPolicy::Reads).await?)
    }

    /// Executed trades with buyer/seller names resolved through the cached
    /// user directory (the "past trades" table).
    pub async fn list_resolved(&self, item_id: ItemId) -> Result<Vec<ResolvedTrade>, SdkError> {
        let trades = self.list(item_id).await?;
        let directory = self.client.users().directory().await?;
        Ok(trades.iter().map(|t| t.resolve(&directory)).collect())
    }
}
