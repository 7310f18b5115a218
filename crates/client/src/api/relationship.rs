use reqwest::Method;
use serde_json::Value;
use tracing::instrument;

use assetdesk_core::RelationshipId;
use assetdesk_core::model::{NewRelationship, Relationship};

use crate::error::ClientError;
use crate::http::ApiClient;

/// Relationship kinds that label dependency edges.
#[derive(Debug, Clone, Copy)]
pub struct RelationshipApi<'a> {
    pub(crate) client: &'a ApiClient,
}

impl RelationshipApi<'_> {
    #[instrument(skip(self), err)]
    pub async fn all(&self) -> Result<Vec<Relationship>, ClientError> {
        self.client.get("/relationship/all").await
    }

    #[instrument(skip(self), err)]
    pub async fn get(&self, id: RelationshipId) -> Result<Relationship, ClientError> {
        self.client
            .get(&format!("/relationship/get-relationship-by-id/{id}"))
            .await
    }

    #[instrument(skip(self), err)]
    pub async fn create(&self, relationship: &NewRelationship) -> Result<(), ClientError> {
        self.client
            .send_validated::<Value, _>(Method::POST, "/relationship/create-relationship", relationship)
            .await
            .map(|_| ())
    }

    #[instrument(skip(self), err)]
    pub async fn update(&self, id: RelationshipId, relationship: &NewRelationship) -> Result<(), ClientError> {
        self.client
            .send_with_id::<Value, _>(
                Method::PUT,
                "/relationship/update-relationship",
                id.get(),
                relationship,
            )
            .await
            .map(|_| ())
    }

    #[instrument(skip(self), err)]
    pub async fn delete(&self, id: RelationshipId) -> Result<(), ClientError> {
        self.client
            .delete(&format!("/relationship/delete-relationship/{id}"))
            .await
    }
}
