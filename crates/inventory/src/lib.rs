//! Inventory reconciliation workflow.
//!
//! An inventory pass walks every asset, license and service of a department
//! and checks each row off against its proposed cost and status. This crate
//! holds the client-side state for that pass (owned row collections patched by
//! [`EditAction`]s) and the optimistic checklist control that persists a row
//! and rolls it back when the backend refuses.
//!
//! No HTTP here: the backend is reached through [`ReconciliationGateway`] and
//! [`InventoryGateway`].

pub mod checklist;
pub mod error;
pub mod gateway;
pub mod reducer;
pub mod row;
pub mod walkthrough;

#[cfg(test)]
mod fake;

pub use checklist::ChecklistControl;
pub use error::{GatewayError, ReconcileError};
pub use gateway::{InventoryGateway, ReconciliationGateway};
pub use reducer::{EditAction, RowCollection};
pub use row::{
    AssetClass, AssetToInventory, LicenseToInventory, ReconciliationRow, ServiceToInventory,
    UpdateAssetToInventory, UpdateLicenseToInventory, UpdateServiceToInventory,
};
pub use walkthrough::{ClassProgress, ClassSection, InventoryWalkthrough, Progress};
