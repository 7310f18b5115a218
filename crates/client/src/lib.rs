//! `assetdesk-client`
//!
//! HTTP client for the AssetDesk REST backend: one typed handle per resource
//! ([`ApiClient::inventories`], [`ApiClient::services`], ...), the GitHub
//! commit feed for source-code records, and the [`InventoryGateway`]
//! implementation that drives an inventory walkthrough.
//!
//! [`InventoryGateway`]: assetdesk_inventory::InventoryGateway

pub mod api;
pub mod config;
pub mod error;
pub mod github;
mod gateway;
mod http;

pub use config::ClientConfig;
pub use error::ClientError;
pub use github::{RepoRef, parse_repo_url};
pub use http::ApiClient;
