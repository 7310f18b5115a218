use thiserror::Error;

use assetdesk_core::{DomainError, InventoryId, RowId};

use crate::row::AssetClass;

/// Failure reported by a backend gateway.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum GatewayError {
    /// The backend answered with a non-success status. `message` is what the
    /// user sees.
    #[error("{message}")]
    Rejected { status: u16, message: String },

    #[error("network error: {0}")]
    Transport(String),

    #[error("invalid response: {0}")]
    Decode(String),

    #[error(transparent)]
    Domain(#[from] DomainError),
}

impl GatewayError {
    pub fn rejected(status: u16, message: impl Into<String>) -> Self {
        Self::Rejected {
            status,
            message: message.into(),
        }
    }
}

#[derive(Debug, Error, Clone, PartialEq)]
pub enum ReconcileError {
    #[error("inventory {0} is marked as done; no further changes are accepted")]
    InventoryClosed(InventoryId),

    #[error("{class} row {row} not found")]
    RowNotFound { class: AssetClass, row: RowId },

    #[error(transparent)]
    Gateway(#[from] GatewayError),
}
