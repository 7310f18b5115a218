//! Release history of services and licenses.

use serde::{Deserialize, Serialize};

use crate::entity::Entity;
use crate::error::DomainResult;
use crate::id::{LicenseId, ServiceId};
use crate::validate::{Validate, require_date, require_id, require_text};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceUpdate {
    pub id: i64,
    #[serde(rename = "serviceId")]
    pub service_id: ServiceId,
    pub version: String,
    pub release_date: String,
    #[serde(default)]
    pub note: Option<String>,
    #[serde(rename = "deletedAt", default)]
    pub deleted_at: Option<String>,
}

impl Entity for ServiceUpdate {
    type Id = i64;

    fn id(&self) -> i64 {
        self.id
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewServiceUpdate {
    #[serde(rename = "serviceId")]
    pub service_id: ServiceId,
    pub version: String,
    pub release_date: String,
    pub note: Option<String>,
}

impl Validate for NewServiceUpdate {
    fn validate(&self) -> DomainResult<()> {
        require_id("serviceId", self.service_id.get())?;
        require_text("version", &self.version)?;
        require_date("release_date", &self.release_date)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LicenseUpdate {
    pub id: i64,
    #[serde(rename = "licenseId")]
    pub license_id: LicenseId,
    pub version: String,
    pub release_date: String,
    #[serde(default)]
    pub note: Option<String>,
    #[serde(rename = "deletedAt", default)]
    pub deleted_at: Option<String>,
}

impl Entity for LicenseUpdate {
    type Id = i64;

    fn id(&self) -> i64 {
        self.id
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewLicenseUpdate {
    #[serde(rename = "licenseId")]
    pub license_id: LicenseId,
    pub version: String,
    pub release_date: String,
    pub note: Option<String>,
}

impl Validate for NewLicenseUpdate {
    fn validate(&self) -> DomainResult<()> {
        require_id("licenseId", self.license_id.get())?;
        require_text("version", &self.version)?;
        require_date("release_date", &self.release_date)
    }
}
