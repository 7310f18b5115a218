use tracing::instrument;

use assetdesk_core::SourceCodeId;
use assetdesk_core::model::SourceCode;

use crate::error::ClientError;
use crate::http::ApiClient;

#[derive(Debug, Clone, Copy)]
pub struct SourceCodeApi<'a> {
    pub(crate) client: &'a ApiClient,
}

impl SourceCodeApi<'_> {
    #[instrument(skip(self), err)]
    pub async fn all(&self) -> Result<Vec<SourceCode>, ClientError> {
        self.client.get("/source-code/all").await
    }

    #[instrument(skip(self), err)]
    pub async fn get(&self, id: SourceCodeId) -> Result<SourceCode, ClientError> {
        self.client
            .get(&format!("/source-code/get-source-code-by-id/{id}"))
            .await
    }
}
