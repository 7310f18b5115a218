//! Metered usage records for services (per user) and licenses (per asset).

use serde::{Deserialize, Serialize};

use crate::entity::Entity;
use crate::error::DomainResult;
use crate::id::{AssetId, LicenseId, ServiceId, UserId};
use crate::validate::{Validate, non_negative, require_date, require_id, require_text};
use crate::wire::number_or_string;

/// Embedded user reference on a usage record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserSummary {
    pub id: UserId,
    #[serde(default)]
    pub name: String,
    pub username: String,
}

/// Embedded asset reference on a usage record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssetSummary {
    pub id: AssetId,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceUsage {
    pub id: i64,
    #[serde(rename = "serviceId")]
    pub service_id: ServiceId,
    pub user: UserSummary,
    pub usage_metric: String,
    /// Free-form on the wire; charts only plot numeric values.
    pub usage_value: String,
    #[serde(default, deserialize_with = "number_or_string")]
    pub cost: f64,
    pub record_at: String,
}

impl Entity for ServiceUsage {
    type Id = i64;

    fn id(&self) -> i64 {
        self.id
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewServiceUsage {
    #[serde(rename = "serviceId")]
    pub service_id: ServiceId,
    #[serde(rename = "userId")]
    pub user_id: UserId,
    pub usage_metric: String,
    pub usage_value: String,
    #[serde(default, deserialize_with = "number_or_string")]
    pub cost: f64,
    pub record_at: String,
}

impl Validate for NewServiceUsage {
    fn validate(&self) -> DomainResult<()> {
        require_id("serviceId", self.service_id.get())?;
        require_id("userId", self.user_id.get())?;
        require_text("usage_metric", &self.usage_metric)?;
        require_text("usage_value", &self.usage_value)?;
        non_negative("cost", self.cost)?;
        require_date("record_at", &self.record_at)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LicenseUsage {
    pub id: i64,
    #[serde(rename = "licenseId")]
    pub license_id: LicenseId,
    pub asset: AssetSummary,
    pub usage_metric: String,
    pub usage_value: String,
    #[serde(default, deserialize_with = "number_or_string")]
    pub cost: f64,
    pub record_at: String,
}

impl Entity for LicenseUsage {
    type Id = i64;

    fn id(&self) -> i64 {
        self.id
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewLicenseUsage {
    #[serde(rename = "licenseId")]
    pub license_id: LicenseId,
    #[serde(rename = "assetId")]
    pub asset_id: AssetId,
    pub usage_metric: String,
    pub usage_value: String,
    #[serde(default, deserialize_with = "number_or_string")]
    pub cost: f64,
    pub record_at: String,
}

impl Validate for NewLicenseUsage {
    fn validate(&self) -> DomainResult<()> {
        require_id("licenseId", self.license_id.get())?;
        require_id("assetId", self.asset_id.get())?;
        require_text("usage_metric", &self.usage_metric)?;
        require_text("usage_value", &self.usage_value)?;
        non_negative("cost", self.cost)?;
        require_date("record_at", &self.record_at)
    }
}
