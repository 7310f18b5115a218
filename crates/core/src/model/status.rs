use serde::{Deserialize, Serialize};

use crate::entity::Entity;
use crate::id::StatusId;

/// Lifecycle status shared by assets, licenses and services.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Status {
    pub id: StatusId,
    pub name: String,
    #[serde(default)]
    pub color: String,
    #[serde(rename = "numOfAssets", default)]
    pub num_of_assets: i64,
    #[serde(rename = "numOfLicenses", default)]
    pub num_of_licenses: i64,
    #[serde(rename = "numOfServices", default)]
    pub num_of_services: i64,
}

impl Entity for Status {
    type Id = StatusId;

    fn id(&self) -> StatusId {
        self.id
    }
}

/// Resolve a status name to its id.
///
/// Rows carry the status by display name; the update endpoints want the id.
/// An unknown name resolves to `StatusId(0)`, which the backend rejects.
pub fn resolve_status_id(statuses: &[Status], name: &str) -> StatusId {
    statuses
        .iter()
        .find(|s| s.name == name)
        .map(|s| s.id)
        .unwrap_or(StatusId::new(0))
}
