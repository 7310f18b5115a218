//! Source-code repositories tracked as assets, and their commit history.

use serde::{Deserialize, Serialize};

use crate::entity::Entity;
use crate::id::SourceCodeId;
use crate::wire::bool_or_string;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceCode {
    pub id: SourceCodeId,
    pub name: String,
    #[serde(default)]
    pub owner: String,
    #[serde(default)]
    pub description: String,
    #[serde(rename = "isPrivate", default, deserialize_with = "bool_or_string")]
    pub is_private: bool,
    #[serde(default)]
    pub url: Option<String>,
}

impl Entity for SourceCode {
    type Id = SourceCodeId;

    fn id(&self) -> SourceCodeId {
        self.id
    }
}

/// One commit, reduced to what the update table shows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GitCommit {
    pub sha: String,
    pub author: String,
    /// First line of the commit message.
    pub message: String,
    pub date: String,
    pub url: String,
}

impl GitCommit {
    /// Abbreviated sha shown as the link text.
    pub fn short_sha(&self) -> &str {
        self.sha.get(..7).unwrap_or(&self.sha)
    }
}
