//! One audit pass over an inventory: header, statuses and the three row
//! sections, each row paired with its checklist control.

use std::collections::BTreeMap;

use assetdesk_core::model::{Inventory, Status};
use assetdesk_core::{InventoryId, Notice, Notifier, RowId};

use crate::checklist::ChecklistControl;
use crate::error::ReconcileError;
use crate::gateway::InventoryGateway;
use crate::reducer::{EditAction, RowCollection};
use crate::row::{
    AssetClass, AssetToInventory, LicenseToInventory, ReconciliationRow, ServiceToInventory,
};

/// Rows of one class plus the per-row controls.
#[derive(Debug, Clone)]
pub struct ClassSection<R> {
    rows: RowCollection<R>,
    controls: BTreeMap<RowId, ChecklistControl>,
}

impl<R: ReconciliationRow> ClassSection<R> {
    pub fn new(rows: Vec<R>) -> Self {
        let controls = rows
            .iter()
            .map(|row| (row.id(), ChecklistControl::for_row(row)))
            .collect();
        Self {
            rows: RowCollection::new(rows),
            controls,
        }
    }

    pub fn rows(&self) -> &RowCollection<R> {
        &self.rows
    }

    pub fn control(&self, id: RowId) -> Option<&ChecklistControl> {
        self.controls.get(&id)
    }

    pub fn progress(&self) -> ClassProgress {
        ClassProgress {
            checked: self.rows.checked_count(),
            total: self.rows.len(),
        }
    }

    async fn toggle<G: InventoryGateway>(
        &mut self,
        row_id: RowId,
        value: bool,
        statuses: &[Status],
        gateway: &G,
        notifier: &dyn Notifier,
    ) -> Result<(), ReconcileError> {
        let control = self
            .controls
            .get_mut(&row_id)
            .ok_or(ReconcileError::RowNotFound {
                class: R::CLASS,
                row: row_id,
            })?;
        control
            .toggle(value, &mut self.rows, statuses, gateway, notifier)
            .await
    }

    fn edit(&mut self, action: EditAction) -> Result<(), ReconcileError> {
        let row = action.row_id();
        if self.rows.dispatch(action) {
            Ok(())
        } else {
            Err(ReconcileError::RowNotFound {
                class: R::CLASS,
                row,
            })
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ClassProgress {
    pub checked: usize,
    pub total: usize,
}

impl ClassProgress {
    pub fn remaining(&self) -> usize {
        self.total - self.checked
    }

    pub fn is_complete(&self) -> bool {
        self.checked == self.total
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Progress {
    pub assets: ClassProgress,
    pub licenses: ClassProgress,
    pub services: ClassProgress,
}

impl Progress {
    pub fn for_class(&self, class: AssetClass) -> ClassProgress {
        match class {
            AssetClass::Asset => self.assets,
            AssetClass::License => self.licenses,
            AssetClass::Service => self.services,
        }
    }

    pub fn is_complete(&self) -> bool {
        AssetClass::ALL.iter().all(|c| self.for_class(*c).is_complete())
    }
}

/// Working state of one inventory pass.
///
/// Once the header is `done`, every mutation is refused locally with
/// [`ReconcileError::InventoryClosed`] and nothing reaches the gateway.
pub struct InventoryWalkthrough<'a, G> {
    gateway: &'a G,
    notifier: &'a dyn Notifier,
    inventory: Inventory,
    statuses: Vec<Status>,
    assets: ClassSection<AssetToInventory>,
    licenses: ClassSection<LicenseToInventory>,
    services: ClassSection<ServiceToInventory>,
}

impl<'a, G: InventoryGateway> InventoryWalkthrough<'a, G> {
    /// Fetch the header, statuses and row sections.
    ///
    /// Only a failed header load is fatal. A section that fails to load is
    /// reported and left empty; the statuses list falls back to empty, which
    /// resolves every status to `0` on persist.
    pub async fn load(
        gateway: &'a G,
        id: InventoryId,
        notifier: &'a dyn Notifier,
    ) -> Result<Self, ReconcileError> {
        let inventory = match gateway.load_inventory(id).await {
            Ok(inventory) => inventory,
            Err(err) => {
                tracing::error!(inventory = %id, error = %err, "inventory load failed");
                notifier.notify(Notice::error("Failed to load inventory details."));
                return Err(err.into());
            }
        };

        let statuses = gateway.load_statuses().await.unwrap_or_else(|err| {
            tracing::error!(error = %err, "status list load failed");
            notifier.notify(Notice::error("Failed to load statuses."));
            Vec::new()
        });

        let assets = load_section::<AssetToInventory, G>(gateway, id, notifier).await;
        let licenses = load_section::<LicenseToInventory, G>(gateway, id, notifier).await;
        let services = load_section::<ServiceToInventory, G>(gateway, id, notifier).await;

        tracing::info!(
            inventory = %id,
            assets = assets.rows.len(),
            licenses = licenses.rows.len(),
            services = services.rows.len(),
            done = inventory.done,
            "inventory walkthrough loaded"
        );

        Ok(Self {
            gateway,
            notifier,
            inventory,
            statuses,
            assets,
            licenses,
            services,
        })
    }

    pub fn inventory(&self) -> &Inventory {
        &self.inventory
    }

    pub fn statuses(&self) -> &[Status] {
        &self.statuses
    }

    pub fn assets(&self) -> &ClassSection<AssetToInventory> {
        &self.assets
    }

    pub fn licenses(&self) -> &ClassSection<LicenseToInventory> {
        &self.licenses
    }

    pub fn services(&self) -> &ClassSection<ServiceToInventory> {
        &self.services
    }

    pub fn is_closed(&self) -> bool {
        self.inventory.done
    }

    pub fn progress(&self) -> Progress {
        Progress {
            assets: self.assets.progress(),
            licenses: self.licenses.progress(),
            services: self.services.progress(),
        }
    }

    pub async fn toggle_asset(&mut self, row_id: RowId, value: bool) -> Result<(), ReconcileError> {
        self.ensure_open()?;
        self.assets
            .toggle(row_id, value, &self.statuses, self.gateway, self.notifier)
            .await
    }

    pub async fn toggle_license(
        &mut self,
        row_id: RowId,
        value: bool,
    ) -> Result<(), ReconcileError> {
        self.ensure_open()?;
        self.licenses
            .toggle(row_id, value, &self.statuses, self.gateway, self.notifier)
            .await
    }

    pub async fn toggle_service(
        &mut self,
        row_id: RowId,
        value: bool,
    ) -> Result<(), ReconcileError> {
        self.ensure_open()?;
        self.services
            .toggle(row_id, value, &self.statuses, self.gateway, self.notifier)
            .await
    }

    pub async fn toggle(
        &mut self,
        class: AssetClass,
        row_id: RowId,
        value: bool,
    ) -> Result<(), ReconcileError> {
        match class {
            AssetClass::Asset => self.toggle_asset(row_id, value).await,
            AssetClass::License => self.toggle_license(row_id, value).await,
            AssetClass::Service => self.toggle_service(row_id, value).await,
        }
    }

    /// Change a row's proposed cost. Persisted on the row's next toggle.
    pub fn edit_cost(
        &mut self,
        class: AssetClass,
        row_id: RowId,
        value: f64,
    ) -> Result<(), ReconcileError> {
        self.edit(class, EditAction::EditCost { id: row_id, value })
    }

    /// Change a row's proposed status by name. Persisted on the row's next
    /// toggle.
    pub fn edit_status(
        &mut self,
        class: AssetClass,
        row_id: RowId,
        value: impl Into<String>,
    ) -> Result<(), ReconcileError> {
        self.edit(
            class,
            EditAction::EditStatus {
                id: row_id,
                value: value.into(),
            },
        )
    }

    /// Close the pass. On success the walkthrough is locked.
    pub async fn mark_done(&mut self) -> Result<(), ReconcileError> {
        self.ensure_open()?;
        let update = self.inventory.to_update(true);
        match self.gateway.update_inventory(self.inventory.id, &update).await {
            Ok(()) => {
                self.inventory.done = true;
                tracing::info!(inventory = %self.inventory.id, "inventory marked as done");
                self.notifier.notify(Notice::success("Inventory marked as Done."));
                Ok(())
            }
            Err(err) => {
                tracing::error!(inventory = %self.inventory.id, error = %err, "mark as done failed");
                self.notifier.notify(Notice::error("Failed to mark as Done."));
                Err(err.into())
            }
        }
    }

    fn edit(&mut self, class: AssetClass, action: EditAction) -> Result<(), ReconcileError> {
        self.ensure_open()?;
        match class {
            AssetClass::Asset => self.assets.edit(action),
            AssetClass::License => self.licenses.edit(action),
            AssetClass::Service => self.services.edit(action),
        }
    }

    fn ensure_open(&self) -> Result<(), ReconcileError> {
        if self.inventory.done {
            return Err(ReconcileError::InventoryClosed(self.inventory.id));
        }
        Ok(())
    }
}

async fn load_section<R, G>(gateway: &G, id: InventoryId, notifier: &dyn Notifier) -> ClassSection<R>
where
    R: ReconciliationRow,
    G: InventoryGateway,
{
    match gateway.load_rows::<R>(id).await {
        Ok(rows) => ClassSection::new(rows),
        Err(err) => {
            tracing::error!(inventory = %id, class = %R::CLASS, error = %err, "row load failed");
            notifier.notify(Notice::error(format!("Failed to load {}.", R::CLASS.plural())));
            ClassSection::new(Vec::new())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::GatewayError;
    use crate::fake::{FakeGateway, asset_row, inventory, license_row, service_row, status};
    use assetdesk_core::{MemoryNotifier, NoticeLevel};

    fn gateway(done: bool) -> FakeGateway {
        FakeGateway::new()
            .with_inventory(inventory(1, done))
            .with_statuses(vec![status(1, "Active"), status(2, "Retired")])
            .with_rows(vec![asset_row(10, false), asset_row(11, true)])
            .with_rows(vec![license_row(20, false)])
            .with_rows(vec![service_row(30, false), service_row(31, false)])
    }

    #[tokio::test]
    async fn loads_all_sections_and_reports_progress() {
        let gateway = gateway(false);
        let notifier = MemoryNotifier::new();
        let walk = InventoryWalkthrough::load(&gateway, InventoryId::new(1), &notifier)
            .await
            .unwrap();

        let progress = walk.progress();
        assert_eq!(progress.assets, ClassProgress { checked: 1, total: 2 });
        assert_eq!(progress.licenses.remaining(), 1);
        assert_eq!(progress.services.total, 2);
        assert!(!progress.is_complete());
        assert!(notifier.notices().is_empty());
        assert!(walk.assets().control(RowId::new(11)).unwrap().checked());
    }

    #[tokio::test]
    async fn failed_section_is_empty_and_reported() {
        let gateway = gateway(false).failing_rows(AssetClass::License);
        let notifier = MemoryNotifier::new();
        let walk = InventoryWalkthrough::load(&gateway, InventoryId::new(1), &notifier)
            .await
            .unwrap();

        assert!(walk.licenses().rows().is_empty());
        assert_eq!(walk.assets().rows().len(), 2);
        assert_eq!(notifier.notices(), vec![Notice::error("Failed to load licenses.")]);
    }

    #[tokio::test]
    async fn missing_inventory_fails_the_load() {
        let gateway = FakeGateway::new();
        let notifier = MemoryNotifier::new();
        let result = InventoryWalkthrough::load(&gateway, InventoryId::new(4), &notifier).await;

        assert!(matches!(result, Err(ReconcileError::Gateway(GatewayError::Rejected { status: 404, .. }))));
        assert_eq!(notifier.notices()[0].message, "Failed to load inventory details.");
    }

    #[tokio::test]
    async fn edits_travel_with_the_next_toggle() {
        let gateway = gateway(false);
        let notifier = MemoryNotifier::new();
        let mut walk = InventoryWalkthrough::load(&gateway, InventoryId::new(1), &notifier)
            .await
            .unwrap();

        walk.edit_cost(AssetClass::Service, RowId::new(31), 12.0).unwrap();
        walk.edit_status(AssetClass::Service, RowId::new(31), "Retired").unwrap();
        walk.toggle_service(RowId::new(31), true).await.unwrap();

        let (class, row, payload) = gateway.persisted().remove(0);
        assert_eq!(class, AssetClass::Service);
        assert_eq!(row, RowId::new(31));
        assert_eq!(
            payload,
            serde_json::json!({"serviceId": 131, "new_cost": 12.0, "newStatusId": 2, "check": true})
        );
        assert_eq!(walk.progress().services.checked, 1);
    }

    #[tokio::test]
    async fn toggle_routes_by_class() {
        let gateway = gateway(false);
        let notifier = MemoryNotifier::new();
        let mut walk = InventoryWalkthrough::load(&gateway, InventoryId::new(1), &notifier)
            .await
            .unwrap();

        walk.toggle(AssetClass::License, RowId::new(20), true).await.unwrap();
        walk.toggle(AssetClass::Asset, RowId::new(11), false).await.unwrap();

        let classes: Vec<_> = gateway.persisted().into_iter().map(|(c, _, _)| c).collect();
        assert_eq!(classes, vec![AssetClass::License, AssetClass::Asset]);
        assert!(walk.progress().licenses.is_complete());
        assert_eq!(walk.progress().assets.checked, 0);
    }

    #[tokio::test]
    async fn unknown_row_in_edit_is_reported() {
        let gateway = gateway(false);
        let notifier = MemoryNotifier::new();
        let mut walk = InventoryWalkthrough::load(&gateway, InventoryId::new(1), &notifier)
            .await
            .unwrap();

        let err = walk.edit_cost(AssetClass::Asset, RowId::new(99), 1.0).unwrap_err();
        assert_eq!(
            err,
            ReconcileError::RowNotFound { class: AssetClass::Asset, row: RowId::new(99) }
        );
    }

    #[tokio::test]
    async fn closed_inventory_refuses_changes_without_calls() {
        let gateway = gateway(true);
        let notifier = MemoryNotifier::new();
        let mut walk = InventoryWalkthrough::load(&gateway, InventoryId::new(1), &notifier)
            .await
            .unwrap();

        let closed = ReconcileError::InventoryClosed(InventoryId::new(1));
        assert_eq!(walk.toggle_asset(RowId::new(10), true).await.unwrap_err(), closed);
        assert_eq!(walk.edit_cost(AssetClass::Asset, RowId::new(10), 5.0).unwrap_err(), closed);
        assert_eq!(walk.mark_done().await.unwrap_err(), closed);
        assert!(gateway.persisted().is_empty());
        assert!(gateway.updates().is_empty());
        assert_eq!(walk.assets().rows().get(RowId::new(10)).unwrap().new_cost, 750.0);
    }

    #[tokio::test]
    async fn mark_done_locks_the_walkthrough() {
        let gateway = gateway(false);
        let notifier = MemoryNotifier::new();
        let mut walk = InventoryWalkthrough::load(&gateway, InventoryId::new(1), &notifier)
            .await
            .unwrap();

        walk.mark_done().await.unwrap();

        assert!(walk.is_closed());
        let updates = gateway.updates();
        assert_eq!(updates.len(), 1);
        assert_eq!(updates[0].done, Some(true));
        assert_eq!(updates[0].department_id.get(), 3);
        assert_eq!(notifier.notices(), vec![Notice::success("Inventory marked as Done.")]);
        assert!(matches!(
            walk.toggle_license(RowId::new(20), true).await,
            Err(ReconcileError::InventoryClosed(_))
        ));
    }

    #[tokio::test]
    async fn failed_mark_done_stays_open() {
        let gateway = gateway(false).failing_update(GatewayError::rejected(409, "Rows still pending"));
        let notifier = MemoryNotifier::new();
        let mut walk = InventoryWalkthrough::load(&gateway, InventoryId::new(1), &notifier)
            .await
            .unwrap();

        assert!(walk.mark_done().await.is_err());
        assert!(!walk.is_closed());
        assert_eq!(notifier.count(NoticeLevel::Error), 1);
        assert_eq!(notifier.notices()[0].message, "Failed to mark as Done.");
    }
}
