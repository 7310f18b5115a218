use reqwest::Method;
use tracing::instrument;

use assetdesk_core::{InventoryId, RowId};
use assetdesk_core::model::{Inventory, NewInventory};
use assetdesk_inventory::ReconciliationRow;

use crate::error::ClientError;
use crate::http::{ApiClient, WithId};

#[derive(Debug, Clone, Copy)]
pub struct InventoryApi<'a> {
    pub(crate) client: &'a ApiClient,
}

impl InventoryApi<'_> {
    #[instrument(skip(self), err)]
    pub async fn all(&self) -> Result<Vec<Inventory>, ClientError> {
        self.client.get("/inventory/all").await
    }

    #[instrument(skip(self), fields(inventory = %id), err)]
    pub async fn get(&self, id: InventoryId) -> Result<Inventory, ClientError> {
        self.client
            .get_query("/inventory/get-inventory-by-id", &[("id", id.get())])
            .await
    }

    #[instrument(skip(self, inventory), err)]
    pub async fn create(&self, inventory: &NewInventory) -> Result<(), ClientError> {
        self.client
            .send_validated::<serde_json::Value, _>(Method::POST, "/inventory/create-inventory", inventory)
            .await
            .map(|_| ())
    }

    #[instrument(skip(self, inventory), fields(inventory = %id), err)]
    pub async fn update(&self, id: InventoryId, inventory: &NewInventory) -> Result<(), ClientError> {
        self.client
            .send_with_id::<serde_json::Value, _>(
                Method::PUT,
                "/inventory/update-inventory",
                id.get(),
                inventory,
            )
            .await
            .map(|_| ())
    }

    /// Reconciliation rows of one class (`get-{asset,license,service}-to-inventory`).
    #[instrument(skip(self), fields(inventory = %id, class = %R::CLASS), err)]
    pub async fn rows<R: ReconciliationRow>(&self, id: InventoryId) -> Result<Vec<R>, ClientError> {
        let path = format!("/inventory/get-{}-to-inventory", R::CLASS.segment());
        self.client.get_query(&path, &[("id", id.get())]).await
    }

    /// Persist one reconciliation row as `{ id, ...update }`.
    #[instrument(skip(self, update), fields(row = %row_id, class = %R::CLASS), err)]
    pub async fn update_row<R: ReconciliationRow>(
        &self,
        row_id: RowId,
        update: &R::Update,
    ) -> Result<(), ClientError> {
        let path = format!("/inventory/update-{}-to-inventory", R::CLASS.segment());
        self.client
            .send::<serde_json::Value, _>(
                Method::PUT,
                &path,
                &WithId {
                    id: row_id.get(),
                    body: update,
                },
            )
            .await
            .map(|_| ())
    }
}
