//! Strongly-typed identifiers used across the domain.
//!
//! The backend keys every record with an integer primary key. Each newtype
//! serializes transparently so it matches the wire format.

use core::str::FromStr;
use serde::{Deserialize, Serialize};

use crate::error::DomainError;

macro_rules! int_id {
    ($(#[$meta:meta])* $t:ident, $name:literal) => {
        $(#[$meta])*
        #[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $t(pub i64);

        impl $t {
            pub const fn new(value: i64) -> Self {
                Self(value)
            }

            pub const fn get(self) -> i64 {
                self.0
            }
        }

        impl core::fmt::Display for $t {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                core::fmt::Display::fmt(&self.0, f)
            }
        }

        impl From<i64> for $t {
            fn from(value: i64) -> Self {
                Self(value)
            }
        }

        impl From<$t> for i64 {
            fn from(value: $t) -> Self {
                value.0
            }
        }

        impl FromStr for $t {
            type Err = DomainError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let value = s
                    .trim()
                    .parse::<i64>()
                    .map_err(|e| DomainError::invalid_id(format!("{}: {}", $name, e)))?;
                Ok(Self(value))
            }
        }
    };
}

int_id!(
    /// Hardware asset.
    AssetId, "AssetId"
);
int_id!(
    /// Software license.
    LicenseId, "LicenseId"
);
int_id!(
    /// Software service (SaaS subscription, hosted platform, ...).
    ServiceId, "ServiceId"
);
int_id!(StatusId, "StatusId");
int_id!(DepartmentId, "DepartmentId");
int_id!(UserId, "UserId");
int_id!(ServiceTypeId, "ServiceTypeId");
int_id!(RelationshipId, "RelationshipId");
int_id!(SourceCodeId, "SourceCodeId");
int_id!(
    /// Inventory audit pass.
    InventoryId, "InventoryId"
);
int_id!(
    /// One reconciliation row inside an inventory pass.
    RowId, "RowId"
);
