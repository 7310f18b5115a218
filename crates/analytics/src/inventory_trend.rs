//! Per-department inventory totals over time.

use serde::{Deserialize, Serialize};

use assetdesk_core::model::Inventory;
use assetdesk_core::time::parse_timestamp;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InventoryTrendPoint {
    /// `YYYY-MM-DD` of the pass start.
    pub date_label: String,
    pub total_assets: i64,
    pub total_licenses: i64,
    pub total_services: i64,
}

/// One point per inventory of `department`, oldest first.
///
/// Inventories whose start date does not parse are left out.
pub fn inventory_trend(inventories: &[Inventory], department: &str) -> Vec<InventoryTrendPoint> {
    let mut dated: Vec<_> = inventories
        .iter()
        .filter(|inv| inv.department.name() == department)
        .filter_map(|inv| match parse_timestamp(&inv.start_date) {
            Some(start) => Some((start, inv)),
            None => {
                tracing::warn!(inventory = %inv.id, start_date = %inv.start_date, "inventory skipped: bad start date");
                None
            }
        })
        .collect();

    dated.sort_by_key(|(start, _)| *start);

    dated
        .into_iter()
        .map(|(start, inv)| InventoryTrendPoint {
            date_label: start.format("%Y-%m-%d").to_string(),
            total_assets: inv.assets,
            total_licenses: inv.licenses,
            total_services: inv.services,
        })
        .collect()
}
