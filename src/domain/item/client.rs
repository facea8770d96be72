//! Items sub-client — list and create tradable items.

use crate::client::ViteaClient;
use crate::domain::item::wire::CreateItemRequest;
use crate::domain::item::Item;
use crate::error::SdkError;
use crate::http::RetryPolicy;

pub struct Items<'a> {
    pub(crate) client: &'a ViteaClient,
}

impl Items<'_> {
    /// Fetch every listed item (the dashboard grid source).
    pub async fn list(&self) -> Result<Vec<Item>, SdkError> {
        let url = format!("{}/items/", self.client.http.base_url());
        Ok(self.client.http.get(&url, RetryPolicy::Reads).await?)
    }

    /// List a new item on the venue.
    pub async fn create(
        &self,
        name: &str,
        description: Option<&str>,
    ) -> Result<Item, SdkError> {
        let url = format!("{}/items/", self.client.http.base_url());
        let body = CreateItemRequest {
            name: name.to_string(),
            description: description.map(str::to_string),
        };
        Ok(self.client.http.post(&url, &body, RetryPolicy::None).await?)
    }
}
