//! Backend seams used by the reconciliation workflow.

use async_trait::async_trait;

use assetdesk_core::model::{Inventory, NewInventory, Status};
use assetdesk_core::{InventoryId, RowId};

use crate::error::GatewayError;
use crate::row::ReconciliationRow;

/// Persists a single reconciliation row.
#[async_trait]
pub trait ReconciliationGateway: Send + Sync {
    /// One network call; no retry.
    async fn persist_row<R: ReconciliationRow>(
        &self,
        row_id: RowId,
        update: &R::Update,
    ) -> Result<(), GatewayError>;
}

/// Reads and header updates for a whole inventory pass.
#[async_trait]
pub trait InventoryGateway: ReconciliationGateway {
    async fn load_inventory(&self, id: InventoryId) -> Result<Inventory, GatewayError>;

    async fn load_statuses(&self) -> Result<Vec<Status>, GatewayError>;

    async fn load_rows<R: ReconciliationRow>(&self, id: InventoryId) -> Result<Vec<R>, GatewayError>;

    async fn update_inventory(
        &self,
        id: InventoryId,
        inventory: &NewInventory,
    ) -> Result<(), GatewayError>;
}
