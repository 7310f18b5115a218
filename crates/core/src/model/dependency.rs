//! Directed "depends on" relations between services and between licenses.

use serde::{Deserialize, Serialize};

use crate::entity::Entity;
use crate::error::{DomainError, DomainResult};
use crate::id::{LicenseId, RelationshipId, ServiceId};
use crate::validate::{Validate, require_id};

/// `service` depends on `dependency` through `relationship`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceDependency {
    pub id: i64,
    #[serde(rename = "serviceId")]
    pub service_id: ServiceId,
    #[serde(rename = "serviceName", default)]
    pub service_name: String,
    #[serde(rename = "dependencyId")]
    pub dependency_id: ServiceId,
    #[serde(rename = "dependencyName", default)]
    pub dependency_name: String,
    #[serde(rename = "relationshipId")]
    pub relationship_id: RelationshipId,
    #[serde(rename = "relationshipName", default)]
    pub relationship_name: String,
    #[serde(default)]
    pub note: Option<String>,
    #[serde(rename = "deletedAt", default)]
    pub deleted_at: Option<String>,
}

impl Entity for ServiceDependency {
    type Id = i64;

    fn id(&self) -> i64 {
        self.id
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewServiceDependency {
    #[serde(rename = "serviceId")]
    pub service_id: ServiceId,
    #[serde(rename = "dependencyId")]
    pub dependency_id: ServiceId,
    #[serde(rename = "relationshipId")]
    pub relationship_id: RelationshipId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

impl Validate for NewServiceDependency {
    fn validate(&self) -> DomainResult<()> {
        require_id("serviceId", self.service_id.get())?;
        require_id("dependencyId", self.dependency_id.get())?;
        require_id("relationshipId", self.relationship_id.get())?;
        if self.service_id == self.dependency_id {
            return Err(DomainError::validation("a service cannot depend on itself"));
        }
        Ok(())
    }
}

/// `license` depends on `dependency` through `relationship`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LicenseDependency {
    pub id: i64,
    #[serde(rename = "licenseId")]
    pub license_id: LicenseId,
    #[serde(rename = "licenseName", default)]
    pub license_name: String,
    #[serde(rename = "dependencyId")]
    pub dependency_id: LicenseId,
    #[serde(rename = "dependencyName", default)]
    pub dependency_name: String,
    #[serde(rename = "relationshipId")]
    pub relationship_id: RelationshipId,
    #[serde(rename = "relationshipName", default)]
    pub relationship_name: String,
    #[serde(default)]
    pub note: Option<String>,
    #[serde(rename = "deletedAt", default)]
    pub deleted_at: Option<String>,
}

impl Entity for LicenseDependency {
    type Id = i64;

    fn id(&self) -> i64 {
        self.id
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewLicenseDependency {
    #[serde(rename = "licenseId")]
    pub license_id: LicenseId,
    #[serde(rename = "dependencyId")]
    pub dependency_id: LicenseId,
    #[serde(rename = "relationshipId")]
    pub relationship_id: RelationshipId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

impl Validate for NewLicenseDependency {
    fn validate(&self) -> DomainResult<()> {
        require_id("licenseId", self.license_id.get())?;
        require_id("dependencyId", self.dependency_id.get())?;
        require_id("relationshipId", self.relationship_id.get())?;
        if self.license_id == self.dependency_id {
            return Err(DomainError::validation("a license cannot depend on itself"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn self_dependency_is_rejected() {
        let dep = NewServiceDependency {
            service_id: ServiceId::new(3),
            dependency_id: ServiceId::new(3),
            relationship_id: RelationshipId::new(1),
            note: None,
        };
        assert!(matches!(dep.validate(), Err(DomainError::Validation(_))));
    }

    #[test]
    fn note_is_omitted_when_absent() {
        let dep = NewLicenseDependency {
            license_id: LicenseId::new(1),
            dependency_id: LicenseId::new(2),
            relationship_id: RelationshipId::new(4),
            note: None,
        };
        let json = serde_json::to_value(&dep).unwrap();
        assert!(json.get("note").is_none());
        assert_eq!(json["relationshipId"], 4);
    }
}
