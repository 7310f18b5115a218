//! Checklist reconciliation control.
//!
//! One control per row. Toggling writes the new value to the control and to
//! the shared row collection immediately, then persists the row with a single
//! call. A rejected call restores both to their pre-toggle values and raises
//! one error notice.

use async_trait::async_trait;

use assetdesk_core::model::{Status, resolve_status_id};
use assetdesk_core::{Notifier, OptimisticCommand, RowId, execute_optimistic};

use crate::error::{GatewayError, ReconcileError};
use crate::gateway::ReconciliationGateway;
use crate::reducer::{EditAction, RowCollection};
use crate::row::ReconciliationRow;

/// Local state of one checkbox.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChecklistControl {
    row_id: RowId,
    checked: bool,
}

impl ChecklistControl {
    pub fn new(row_id: RowId, checked: bool) -> Self {
        Self { row_id, checked }
    }

    pub fn for_row<R: ReconciliationRow>(row: &R) -> Self {
        Self::new(row.id(), row.is_checked())
    }

    pub fn row_id(&self) -> RowId {
        self.row_id
    }

    pub fn checked(&self) -> bool {
        self.checked
    }

    /// Set the box to `value` and persist the row.
    ///
    /// The payload carries the row's foreign key, its proposed cost, the
    /// status id resolved by name from `statuses` and the new flag.
    pub async fn toggle<R, G>(
        &mut self,
        value: bool,
        rows: &mut RowCollection<R>,
        statuses: &[Status],
        gateway: &G,
        notifier: &dyn Notifier,
    ) -> Result<(), ReconcileError>
    where
        R: ReconciliationRow,
        G: ReconciliationGateway,
    {
        let row = rows.get(self.row_id).ok_or(ReconcileError::RowNotFound {
            class: R::CLASS,
            row: self.row_id,
        })?;

        let status_id = resolve_status_id(statuses, row.new_status());
        let command = CheckToggle::<G, R> {
            row_id: self.row_id,
            next: value,
            prior_local: self.checked,
            prior_row: row.is_checked(),
            update: row.update_payload(status_id, value),
            gateway,
        };

        let mut state = ToggleState {
            local: &mut self.checked,
            rows,
        };
        execute_optimistic(&command, &mut state, notifier).await?;

        tracing::info!(class = %R::CLASS, row_id = %self.row_id, checked = value, "row reconciled");
        Ok(())
    }
}

/// Everything a toggle writes: the control's own flag and the shared rows.
pub(crate) struct ToggleState<'a, R> {
    local: &'a mut bool,
    rows: &'a mut RowCollection<R>,
}

struct CheckToggle<'g, G, R: ReconciliationRow> {
    row_id: RowId,
    next: bool,
    prior_local: bool,
    prior_row: bool,
    update: R::Update,
    gateway: &'g G,
}

#[async_trait]
impl<'a, G, R> OptimisticCommand<ToggleState<'a, R>> for CheckToggle<'_, G, R>
where
    G: ReconciliationGateway,
    R: ReconciliationRow,
{
    type Error = GatewayError;

    fn name(&self) -> &'static str {
        "inventory.check_row"
    }

    fn apply(&self, state: &mut ToggleState<'a, R>) {
        state.rows.dispatch(EditAction::EditCheck {
            id: self.row_id,
            value: self.next,
        });
        *state.local = self.next;
    }

    async fn commit(&self) -> Result<(), GatewayError> {
        self.gateway.persist_row::<R>(self.row_id, &self.update).await
    }

    fn rollback(&self, state: &mut ToggleState<'a, R>) {
        state.rows.dispatch(EditAction::EditCheck {
            id: self.row_id,
            value: self.prior_row,
        });
        *state.local = self.prior_local;
    }
}
