//! One handle per backend resource.
//!
//! Handles borrow the [`ApiClient`] and are thin pass-throughs: they map a
//! call onto a path, validate request bodies, and decode typed models.

pub mod inventory;
pub mod license_dependency;
pub mod license_update;
pub mod license_usage;
pub mod relationship;
pub mod service;
pub mod service_dependency;
pub mod service_type;
pub mod service_update;
pub mod service_usage;
pub mod source_code;
pub mod status;

pub use inventory::InventoryApi;
pub use license_dependency::LicenseDependencyApi;
pub use license_update::LicenseUpdateApi;
pub use license_usage::LicenseUsageApi;
pub use relationship::RelationshipApi;
pub use service::ServiceApi;
pub use service_dependency::ServiceDependencyApi;
pub use service_type::ServiceTypeApi;
pub use service_update::ServiceUpdateApi;
pub use service_usage::ServiceUsageApi;
pub use source_code::SourceCodeApi;
pub use status::StatusApi;

use crate::http::ApiClient;

macro_rules! resource_handles {
    ($($(#[$doc:meta])* $method:ident => $handle:ident),* $(,)?) => {
        impl ApiClient {
            $(
                $(#[$doc])*
                pub fn $method(&self) -> $handle<'_> {
                    $handle { client: self }
                }
            )*
        }
    };
}

resource_handles! {
    /// `/inventory`: audit passes and their reconciliation rows.
    inventories => InventoryApi,
    /// `/service`: services, checkouts, prices and requests.
    services => ServiceApi,
    service_types => ServiceTypeApi,
    relationships => RelationshipApi,
    statuses => StatusApi,
    service_dependencies => ServiceDependencyApi,
    license_dependencies => LicenseDependencyApi,
    service_updates => ServiceUpdateApi,
    license_updates => LicenseUpdateApi,
    service_usages => ServiceUsageApi,
    license_usages => LicenseUsageApi,
    source_codes => SourceCodeApi,
}
