//! `assetdesk-core`: shared building blocks for the AssetDesk client.
//!
//! This crate contains **pure** client-side domain code (no HTTP, no UI):
//! wire models, identifiers, validation, the optimistic command abstraction,
//! the notice surface and table helpers.

pub mod command;
pub mod entity;
pub mod error;
pub mod id;
pub mod model;
pub mod notify;
pub mod table;
pub mod time;
pub mod validate;
pub mod wire;

pub use command::{OptimisticCommand, execute_optimistic};
pub use entity::Entity;
pub use error::{DomainError, DomainResult};
pub use id::{
    AssetId, DepartmentId, InventoryId, LicenseId, RelationshipId, RowId, ServiceId,
    ServiceTypeId, SourceCodeId, StatusId, UserId,
};
pub use notify::{MemoryNotifier, Notice, NoticeLevel, Notifier};
pub use validate::Validate;
