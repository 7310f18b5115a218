//! Backend gateways for the reconciliation workflow, served over HTTP.

use async_trait::async_trait;

use assetdesk_core::model::{Inventory, NewInventory, Status};
use assetdesk_core::{InventoryId, RowId};
use assetdesk_inventory::{GatewayError, InventoryGateway, ReconciliationGateway, ReconciliationRow};

use crate::http::ApiClient;

#[async_trait]
impl ReconciliationGateway for ApiClient {
    async fn persist_row<R: ReconciliationRow>(
        &self,
        row_id: RowId,
        update: &R::Update,
    ) -> Result<(), GatewayError> {
        Ok(self.inventories().update_row::<R>(row_id, update).await?)
    }
}

#[async_trait]
impl InventoryGateway for ApiClient {
    async fn load_inventory(&self, id: InventoryId) -> Result<Inventory, GatewayError> {
        Ok(self.inventories().get(id).await?)
    }

    async fn load_statuses(&self) -> Result<Vec<Status>, GatewayError> {
        Ok(self.statuses().all().await?)
    }

    async fn load_rows<R: ReconciliationRow>(&self, id: InventoryId) -> Result<Vec<R>, GatewayError> {
        Ok(self.inventories().rows::<R>(id).await?)
    }

    async fn update_inventory(
        &self,
        id: InventoryId,
        inventory: &NewInventory,
    ) -> Result<(), GatewayError> {
        Ok(self.inventories().update(id, inventory).await?)
    }
}
