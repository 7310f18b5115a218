//! Owned row collection mutated through patch actions.

use serde::{Deserialize, Serialize};

use assetdesk_core::RowId;

use crate::row::ReconciliationRow;

/// A single-field patch addressed to one row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum EditAction {
    EditCost { id: RowId, value: f64 },
    EditStatus { id: RowId, value: String },
    EditCheck { id: RowId, value: bool },
}

impl EditAction {
    pub fn row_id(&self) -> RowId {
        match self {
            EditAction::EditCost { id, .. }
            | EditAction::EditStatus { id, .. }
            | EditAction::EditCheck { id, .. } => *id,
        }
    }
}

/// The in-memory copy of one class's rows during a walkthrough.
///
/// The backend stays the source of truth; this is the locally-editable view
/// that optimistic controls patch and roll back.
#[derive(Debug, Clone, PartialEq)]
pub struct RowCollection<R> {
    rows: Vec<R>,
}

impl<R> Default for RowCollection<R> {
    fn default() -> Self {
        Self { rows: Vec::new() }
    }
}

impl<R: ReconciliationRow> RowCollection<R> {
    pub fn new(rows: Vec<R>) -> Self {
        Self { rows }
    }

    /// Apply a patch. Returns `false` when no row has the addressed id.
    pub fn dispatch(&mut self, action: EditAction) -> bool {
        let id = action.row_id();
        let Some(row) = self.rows.iter_mut().find(|r| r.id() == id) else {
            tracing::debug!(row_id = %id, class = %R::CLASS, "edit for unknown row ignored");
            return false;
        };
        match action {
            EditAction::EditCost { value, .. } => row.set_new_cost(value),
            EditAction::EditStatus { value, .. } => row.set_new_status(value),
            EditAction::EditCheck { value, .. } => row.set_checked(value),
        }
        true
    }

    pub fn get(&self, id: RowId) -> Option<&R> {
        self.rows.iter().find(|r| r.id() == id)
    }

    pub fn rows(&self) -> &[R] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn checked_count(&self) -> usize {
        self.rows.iter().filter(|r| r.is_checked()).count()
    }

    /// Rows not yet checked off.
    pub fn remaining(&self) -> impl Iterator<Item = &R> {
        self.rows.iter().filter(|r| !r.is_checked())
    }

    /// Replace the whole collection (re-sync from the backend).
    pub fn reset(&mut self, rows: Vec<R>) {
        self.rows = rows;
    }
}
