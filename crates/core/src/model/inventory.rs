//! Inventory audit passes.

use serde::{Deserialize, Serialize};

use crate::entity::Entity;
use crate::error::DomainResult;
use crate::id::{DepartmentId, InventoryId};
use crate::validate::{Validate, optional_date, ordered_dates, require_date, require_id, require_text};
use crate::wire::bool_or_string;

/// Department as returned by the backend.
///
/// The list endpoint flattens it to a name; the detail endpoint embeds the
/// record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DepartmentRef {
    Record { id: DepartmentId, name: String },
    Named(String),
}

impl DepartmentRef {
    pub fn name(&self) -> &str {
        match self {
            DepartmentRef::Record { name, .. } => name,
            DepartmentRef::Named(name) => name,
        }
    }

    /// Id when known; flattened references resolve to `0`.
    pub fn id(&self) -> DepartmentId {
        match self {
            DepartmentRef::Record { id, .. } => *id,
            DepartmentRef::Named(_) => DepartmentId::new(0),
        }
    }
}

/// One audit pass over a department's assets, licenses and services.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Inventory {
    pub id: InventoryId,
    pub name: String,
    pub start_date: String,
    #[serde(default)]
    pub end_date: Option<String>,
    pub department: DepartmentRef,
    #[serde(default)]
    pub assets: i64,
    /// Assets not yet checked.
    #[serde(default)]
    pub remaining: i64,
    #[serde(default)]
    pub licenses: i64,
    /// Licenses not yet checked.
    #[serde(rename = "remainingl", default)]
    pub remaining_licenses: i64,
    #[serde(default)]
    pub services: i64,
    /// Services not yet checked.
    #[serde(rename = "remainings", default)]
    pub remaining_services: i64,
    #[serde(default)]
    pub note: Option<String>,
    #[serde(default, deserialize_with = "bool_or_string")]
    pub done: bool,
}

impl Entity for Inventory {
    type Id = InventoryId;

    fn id(&self) -> InventoryId {
        self.id
    }
}

impl Inventory {
    /// Payload that rewrites the header with the given `done` flag.
    pub fn to_update(&self, done: bool) -> NewInventory {
        NewInventory {
            name: self.name.clone(),
            start_date: self.start_date.clone(),
            end_date: self.end_date.clone(),
            department_id: self.department.id(),
            note: self.note.clone().unwrap_or_default(),
            done: Some(done),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewInventory {
    pub name: String,
    pub start_date: String,
    #[serde(default)]
    pub end_date: Option<String>,
    #[serde(rename = "departmentId")]
    pub department_id: DepartmentId,
    #[serde(default)]
    pub note: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub done: Option<bool>,
}

impl Validate for NewInventory {
    fn validate(&self) -> DomainResult<()> {
        require_text("name", &self.name)?;
        require_date("start_date", &self.start_date)?;
        optional_date("end_date", self.end_date.as_deref())?;
        if let Some(end) = self.end_date.as_deref().filter(|e| !e.trim().is_empty()) {
            ordered_dates("start_date", &self.start_date, "end_date", end)?;
        }
        require_id("departmentId", self.department_id.get())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_list_and_detail_shapes() {
        let listed: Inventory = serde_json::from_str(
            r#"{"id":1,"name":"Q1","start_date":"2024-01-01","end_date":null,
                "department":"IT","assets":4,"remaining":1,"licenses":2,"remainingl":0,
                "services":3,"remainings":3,"note":"","done":"false"}"#,
        )
        .unwrap();
        assert_eq!(listed.department.name(), "IT");
        assert_eq!(listed.department.id(), DepartmentId::new(0));
        assert!(!listed.done);

        let detail: Inventory = serde_json::from_str(
            r#"{"id":1,"name":"Q1","start_date":"2024-01-01","department":{"id":9,"name":"IT"},"done":true}"#,
        )
        .unwrap();
        assert_eq!(detail.department.id(), DepartmentId::new(9));
        assert!(detail.done);
    }

    #[test]
    fn mark_done_payload_carries_header() {
        let inv: Inventory = serde_json::from_str(
            r#"{"id":5,"name":"Audit","start_date":"2024-02-01","end_date":"2024-02-10",
                "department":{"id":2,"name":"Ops"},"note":"n","done":false}"#,
        )
        .unwrap();
        let json = serde_json::to_value(inv.to_update(true)).unwrap();
        assert_eq!(json["departmentId"], 2);
        assert_eq!(json["done"], true);
        assert_eq!(json["end_date"], "2024-02-10");
    }

    #[test]
    fn validation_requires_department_and_ordered_dates() {
        let mut new = NewInventory {
            name: "Audit".into(),
            start_date: "2024-02-10".into(),
            end_date: Some("2024-02-01".into()),
            department_id: DepartmentId::new(1),
            note: String::new(),
            done: None,
        };
        assert!(new.validate().is_err());
        new.end_date = None;
        assert!(new.validate().is_ok());
        new.department_id = DepartmentId::new(0);
        assert!(new.validate().is_err());
    }
}
