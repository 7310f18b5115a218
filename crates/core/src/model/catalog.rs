//! Lookup tables: service types and dependency relationships.

use serde::{Deserialize, Serialize};

use crate::entity::Entity;
use crate::error::DomainResult;
use crate::id::{RelationshipId, ServiceTypeId};
use crate::validate::{Validate, require_text};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceType {
    pub id: ServiceTypeId,
    pub name: String,
    #[serde(default)]
    pub services: i64,
}

impl Entity for ServiceType {
    type Id = ServiceTypeId;

    fn id(&self) -> ServiceTypeId {
        self.id
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewServiceType {
    pub name: String,
}

impl Validate for NewServiceType {
    fn validate(&self) -> DomainResult<()> {
        require_text("name", &self.name)
    }
}

/// Named relationship kind used to label dependency edges ("requires", "uses", ...).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Relationship {
    pub id: RelationshipId,
    pub name: String,
    #[serde(rename = "relationshipLicenseEntries", default)]
    pub license_entries: i64,
    #[serde(rename = "relationshipServiceEntries", default)]
    pub service_entries: i64,
}

impl Entity for Relationship {
    type Id = RelationshipId;

    fn id(&self) -> RelationshipId {
        self.id
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewRelationship {
    pub name: String,
}

impl Validate for NewRelationship {
    fn validate(&self) -> DomainResult<()> {
        require_text("name", &self.name)
    }
}
