//! Wire models returned by and posted to the REST backend.

pub mod catalog;
pub mod dependency;
pub mod inventory;
pub mod service;
pub mod source_code;
pub mod status;
pub mod update;
pub mod usage;

pub use catalog::{NewRelationship, NewServiceType, Relationship, ServiceType};
pub use dependency::{
    LicenseDependency, NewLicenseDependency, NewServiceDependency, ServiceDependency,
};
pub use inventory::{DepartmentRef, Inventory, NewInventory};
pub use service::{
    AcceptRequestService, CheckinService, CheckoutService, NewService, RequestService,
    RequestStatus, Service, ServicePrice, ServicePriceDto, ServiceQuery, ServiceToUser,
    ServiceToUserQuery,
};
pub use source_code::{GitCommit, SourceCode};
pub use status::{Status, resolve_status_id};
pub use update::{LicenseUpdate, NewLicenseUpdate, NewServiceUpdate, ServiceUpdate};
pub use usage::{AssetSummary, LicenseUsage, NewLicenseUsage, NewServiceUsage, ServiceUsage, UserSummary};
