//! Reconciliation rows: one per tracked entity in an inventory pass.

use serde::{Deserialize, Serialize, de::DeserializeOwned};

use assetdesk_core::wire::{bool_or_string, number_or_string};
use assetdesk_core::{AssetId, Entity, LicenseId, RowId, ServiceId, StatusId};

/// The three asset classes audited by an inventory pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AssetClass {
    Asset,
    License,
    Service,
}

impl AssetClass {
    pub const ALL: [AssetClass; 3] = [AssetClass::Asset, AssetClass::License, AssetClass::Service];

    /// Endpoint segment used by the inventory API (`asset-to-inventory`, ...).
    pub fn segment(self) -> &'static str {
        match self {
            AssetClass::Asset => "asset",
            AssetClass::License => "license",
            AssetClass::Service => "service",
        }
    }

    /// Plural label used in notices.
    pub fn plural(self) -> &'static str {
        match self {
            AssetClass::Asset => "assets",
            AssetClass::License => "licenses",
            AssetClass::Service => "services",
        }
    }
}

impl core::fmt::Display for AssetClass {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.segment())
    }
}

/// A row the auditor can edit and check off.
///
/// The row carries the *proposed* cost/status; checking it persists those
/// values together with the `check` flag.
pub trait ReconciliationRow:
    Entity<Id = RowId> + Clone + core::fmt::Debug + DeserializeOwned + Send + Sync + 'static
{
    /// Persistence payload for this row type.
    type Update: Serialize + Clone + core::fmt::Debug + Send + Sync + 'static;

    const CLASS: AssetClass;

    /// Display name of the underlying entity.
    fn label(&self) -> &str;
    fn new_cost(&self) -> f64;
    fn new_status(&self) -> &str;
    fn is_checked(&self) -> bool;

    fn set_new_cost(&mut self, value: f64);
    fn set_new_status(&mut self, value: String);
    fn set_checked(&mut self, value: bool);

    /// Payload carrying the foreign key, proposed cost, resolved status id and
    /// the `check` flag.
    fn update_payload(&self, status_id: StatusId, check: bool) -> Self::Update;
}

macro_rules! row_accessors {
    ($label:ident) => {
        fn label(&self) -> &str {
            &self.$label
        }

        fn new_cost(&self) -> f64 {
            self.new_cost
        }

        fn new_status(&self) -> &str {
            &self.new_status
        }

        fn is_checked(&self) -> bool {
            self.check
        }

        fn set_new_cost(&mut self, value: f64) {
            self.new_cost = value;
        }

        fn set_new_status(&mut self, value: String) {
            self.new_status = value;
        }

        fn set_checked(&mut self, value: bool) {
            self.check = value;
        }
    };
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssetToInventory {
    pub id: RowId,
    pub asset_name: String,
    pub asset_id: AssetId,
    #[serde(default)]
    pub purchase_date: Option<String>,
    #[serde(default, deserialize_with = "number_or_string")]
    pub purchase_cost: f64,
    #[serde(default, deserialize_with = "number_or_string")]
    pub old_cost: f64,
    #[serde(default)]
    pub old_status: String,
    #[serde(default, deserialize_with = "number_or_string")]
    pub estimated_cost: f64,
    #[serde(default, deserialize_with = "number_or_string")]
    pub new_cost: f64,
    #[serde(default)]
    pub new_status: String,
    #[serde(default, deserialize_with = "bool_or_string")]
    pub check: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpdateAssetToInventory {
    #[serde(rename = "assetId")]
    pub asset_id: AssetId,
    pub new_cost: f64,
    #[serde(rename = "newStatusId")]
    pub new_status_id: StatusId,
    pub check: bool,
}

impl Entity for AssetToInventory {
    type Id = RowId;

    fn id(&self) -> RowId {
        self.id
    }
}

impl ReconciliationRow for AssetToInventory {
    type Update = UpdateAssetToInventory;

    const CLASS: AssetClass = AssetClass::Asset;

    row_accessors!(asset_name);

    fn update_payload(&self, status_id: StatusId, check: bool) -> Self::Update {
        UpdateAssetToInventory {
            asset_id: self.asset_id,
            new_cost: self.new_cost,
            new_status_id: status_id,
            check,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LicenseToInventory {
    pub id: RowId,
    pub license_name: String,
    pub license_id: LicenseId,
    #[serde(default)]
    pub purchase_date: Option<String>,
    #[serde(default, deserialize_with = "number_or_string")]
    pub purchase_cost: f64,
    #[serde(default)]
    pub expiration_date: Option<String>,
    #[serde(default, deserialize_with = "number_or_string")]
    pub old_cost: f64,
    #[serde(default)]
    pub old_status: String,
    #[serde(default, deserialize_with = "number_or_string")]
    pub estimated_cost: f64,
    #[serde(default, deserialize_with = "number_or_string")]
    pub new_cost: f64,
    #[serde(default)]
    pub new_status: String,
    #[serde(default, deserialize_with = "bool_or_string")]
    pub check: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpdateLicenseToInventory {
    #[serde(rename = "licenseId")]
    pub license_id: LicenseId,
    pub new_cost: f64,
    #[serde(rename = "newStatusId")]
    pub new_status_id: StatusId,
    pub check: bool,
}

impl Entity for LicenseToInventory {
    type Id = RowId;

    fn id(&self) -> RowId {
        self.id
    }
}

impl ReconciliationRow for LicenseToInventory {
    type Update = UpdateLicenseToInventory;

    const CLASS: AssetClass = AssetClass::License;

    row_accessors!(license_name);

    fn update_payload(&self, status_id: StatusId, check: bool) -> Self::Update {
        UpdateLicenseToInventory {
            license_id: self.license_id,
            new_cost: self.new_cost,
            new_status_id: status_id,
            check,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceToInventory {
    pub id: RowId,
    pub service_name: String,
    pub service_id: ServiceId,
    #[serde(default)]
    pub total_unit: i64,
    #[serde(default)]
    pub unit: String,
    #[serde(default, deserialize_with = "number_or_string")]
    pub old_cost: f64,
    #[serde(default)]
    pub old_status: String,
    #[serde(default, deserialize_with = "number_or_string")]
    pub estimated_cost: f64,
    #[serde(default, deserialize_with = "number_or_string")]
    pub new_cost: f64,
    #[serde(default)]
    pub new_status: String,
    #[serde(default, deserialize_with = "bool_or_string")]
    pub check: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpdateServiceToInventory {
    #[serde(rename = "serviceId")]
    pub service_id: ServiceId,
    pub new_cost: f64,
    #[serde(rename = "newStatusId")]
    pub new_status_id: StatusId,
    pub check: bool,
}

impl Entity for ServiceToInventory {
    type Id = RowId;

    fn id(&self) -> RowId {
        self.id
    }
}

impl ReconciliationRow for ServiceToInventory {
    type Update = UpdateServiceToInventory;

    const CLASS: AssetClass = AssetClass::Service;

    row_accessors!(service_name);

    fn update_payload(&self, status_id: StatusId, check: bool) -> Self::Update {
        UpdateServiceToInventory {
            service_id: self.service_id,
            new_cost: self.new_cost,
            new_status_id: status_id,
            check,
        }
    }
}
