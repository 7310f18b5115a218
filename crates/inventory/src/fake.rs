//! In-memory gateway and fixtures for tests.

use std::collections::{HashSet, VecDeque};
use std::sync::Mutex;

use async_trait::async_trait;
use serde_json::Value;

use assetdesk_core::model::{DepartmentRef, Inventory, NewInventory, Status};
use assetdesk_core::{AssetId, DepartmentId, InventoryId, LicenseId, RowId, ServiceId, StatusId};

use crate::error::GatewayError;
use crate::gateway::{InventoryGateway, ReconciliationGateway};
use crate::row::{
    AssetClass, AssetToInventory, LicenseToInventory, ReconciliationRow, ServiceToInventory,
};

pub fn status(id: i64, name: &str) -> Status {
    Status {
        id: StatusId::new(id),
        name: name.to_string(),
        color: String::new(),
        num_of_assets: 0,
        num_of_licenses: 0,
        num_of_services: 0,
    }
}

pub fn asset_row(id: i64, check: bool) -> AssetToInventory {
    AssetToInventory {
        id: RowId::new(id),
        asset_name: format!("asset-{id}"),
        asset_id: AssetId::new(id + 100),
        purchase_date: Some("2023-01-01".into()),
        purchase_cost: 1000.0,
        old_cost: 800.0,
        old_status: "Active".into(),
        estimated_cost: 750.0,
        new_cost: 750.0,
        new_status: "Active".into(),
        check,
    }
}

pub fn license_row(id: i64, check: bool) -> LicenseToInventory {
    LicenseToInventory {
        id: RowId::new(id),
        license_name: format!("license-{id}"),
        license_id: LicenseId::new(id + 100),
        purchase_date: None,
        purchase_cost: 200.0,
        expiration_date: None,
        old_cost: 200.0,
        old_status: "Active".into(),
        estimated_cost: 150.0,
        new_cost: 150.0,
        new_status: "Active".into(),
        check,
    }
}

pub fn service_row(id: i64, check: bool) -> ServiceToInventory {
    ServiceToInventory {
        id: RowId::new(id),
        service_name: format!("service-{id}"),
        service_id: ServiceId::new(id + 100),
        total_unit: 10,
        unit: "seat".into(),
        old_cost: 50.0,
        old_status: "Active".into(),
        estimated_cost: 50.0,
        new_cost: 50.0,
        new_status: "Active".into(),
        check,
    }
}

pub fn inventory(id: i64, done: bool) -> Inventory {
    Inventory {
        id: InventoryId::new(id),
        name: format!("audit-{id}"),
        start_date: "2024-01-01".into(),
        end_date: Some("2024-01-31".into()),
        department: DepartmentRef::Record {
            id: DepartmentId::new(3),
            name: "IT".into(),
        },
        assets: 0,
        remaining: 0,
        licenses: 0,
        remaining_licenses: 0,
        services: 0,
        remaining_services: 0,
        note: None,
        done,
    }
}

/// Scripted gateway. Persist calls consume scripted outcomes in order and
/// succeed once the script is empty.
#[derive(Default)]
pub struct FakeGateway {
    outcomes: Mutex<VecDeque<Result<(), GatewayError>>>,
    persisted: Mutex<Vec<(AssetClass, RowId, Value)>>,
    inventory: Option<Inventory>,
    statuses: Vec<Status>,
    rows: Vec<(AssetClass, Value)>,
    failing_classes: HashSet<AssetClass>,
    update_error: Mutex<Option<GatewayError>>,
    updates: Mutex<Vec<NewInventory>>,
}

impl FakeGateway {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_inventory(mut self, inventory: Inventory) -> Self {
        self.inventory = Some(inventory);
        self
    }

    pub fn with_statuses(mut self, statuses: Vec<Status>) -> Self {
        self.statuses = statuses;
        self
    }

    pub fn with_rows<R: ReconciliationRow + serde::Serialize>(mut self, rows: Vec<R>) -> Self {
        let value = serde_json::to_value(rows).expect("fixture rows serialize");
        self.rows.push((R::CLASS, value));
        self
    }

    pub fn failing_rows(mut self, class: AssetClass) -> Self {
        self.failing_classes.insert(class);
        self
    }

    pub fn failing_update(self, err: GatewayError) -> Self {
        *self.update_error.lock().unwrap() = Some(err);
        self
    }

    pub fn script(&self, outcomes: impl IntoIterator<Item = Result<(), GatewayError>>) {
        self.outcomes.lock().unwrap().extend(outcomes);
    }

    pub fn persisted(&self) -> Vec<(AssetClass, RowId, Value)> {
        self.persisted.lock().unwrap().clone()
    }

    pub fn updates(&self) -> Vec<NewInventory> {
        self.updates.lock().unwrap().clone()
    }
}

#[async_trait]
impl ReconciliationGateway for FakeGateway {
    async fn persist_row<R: ReconciliationRow>(
        &self,
        row_id: RowId,
        update: &R::Update,
    ) -> Result<(), GatewayError> {
        let payload = serde_json::to_value(update).expect("update serializes");
        self.persisted.lock().unwrap().push((R::CLASS, row_id, payload));
        self.outcomes.lock().unwrap().pop_front().unwrap_or(Ok(()))
    }
}

#[async_trait]
impl InventoryGateway for FakeGateway {
    async fn load_inventory(&self, id: InventoryId) -> Result<Inventory, GatewayError> {
        self.inventory
            .clone()
            .filter(|inv| inv.id == id)
            .ok_or_else(|| GatewayError::rejected(404, "Inventory not found"))
    }

    async fn load_statuses(&self) -> Result<Vec<Status>, GatewayError> {
        Ok(self.statuses.clone())
    }

    async fn load_rows<R: ReconciliationRow>(&self, _id: InventoryId) -> Result<Vec<R>, GatewayError> {
        if self.failing_classes.contains(&R::CLASS) {
            return Err(GatewayError::Transport("connection reset".into()));
        }
        match self.rows.iter().find(|(class, _)| *class == R::CLASS) {
            Some((_, value)) => serde_json::from_value(value.clone())
                .map_err(|e| GatewayError::Decode(e.to_string())),
            None => Ok(Vec::new()),
        }
    }

    async fn update_inventory(
        &self,
        _id: InventoryId,
        inventory: &NewInventory,
    ) -> Result<(), GatewayError> {
        if let Some(err) = self.update_error.lock().unwrap().clone() {
            return Err(err);
        }
        self.updates.lock().unwrap().push(inventory.clone());
        Ok(())
    }
}
