use tracing::instrument;

use assetdesk_core::model::Status;

use crate::error::ClientError;
use crate::http::ApiClient;

#[derive(Debug, Clone, Copy)]
pub struct StatusApi<'a> {
    pub(crate) client: &'a ApiClient,
}

impl StatusApi<'_> {
    #[instrument(skip(self), err)]
    pub async fn all(&self) -> Result<Vec<Status>, ClientError> {
        self.client.get("/status/all").await
    }
}
