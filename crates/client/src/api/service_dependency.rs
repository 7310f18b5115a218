use reqwest::Method;
use tracing::instrument;

use assetdesk_core::ServiceId;
use assetdesk_core::model::{ServiceDependency, NewServiceDependency};

use crate::error::ClientError;
use crate::http::ApiClient;

/// `/service-dependency`: directed "depends on" edges between services.
#[derive(Debug, Clone, Copy)]
pub struct ServiceDependencyApi<'a> {
    pub(crate) client: &'a ApiClient,
}

impl ServiceDependencyApi<'_> {
    #[instrument(skip(self), err)]
    pub async fn all(&self) -> Result<Vec<ServiceDependency>, ClientError> {
        self.client.get("/service-dependency/all").await
    }

    #[instrument(skip(self), err)]
    pub async fn get(&self, id: i64) -> Result<ServiceDependency, ClientError> {
        self.client
            .get(&format!("/service-dependency/get-service-dependency-by-id/{id}"))
            .await
    }

    /// Edges where `service_id` is the dependent side.
    #[instrument(skip(self), err)]
    pub async fn outgoing(&self, service_id: ServiceId) -> Result<Vec<ServiceDependency>, ClientError> {
        self.client
            .get(&format!("/service-dependency/get-outgoing-by-service-id/{service_id}"))
            .await
    }

    /// Edges where `service_id` is the dependency.
    #[instrument(skip(self), err)]
    pub async fn incoming(&self, service_id: ServiceId) -> Result<Vec<ServiceDependency>, ClientError> {
        self.client
            .get(&format!("/service-dependency/get-incoming-by-service-id/{service_id}"))
            .await
    }

    #[instrument(skip(self), err)]
    pub async fn create(&self, dependency: &NewServiceDependency) -> Result<ServiceDependency, ClientError> {
        self.client
            .send_validated(Method::POST, "/service-dependency/create-service-dependency", dependency)
            .await
    }

    #[instrument(skip(self), err)]
    pub async fn update(&self, id: i64, dependency: &NewServiceDependency) -> Result<ServiceDependency, ClientError> {
        self.client
            .send_with_id(Method::PUT, "/service-dependency/update-service-dependency", id, dependency)
            .await
    }

    #[instrument(skip(self), err)]
    pub async fn delete(&self, id: i64) -> Result<(), ClientError> {
        self.client
            .delete(&format!("/service-dependency/delete-service-dependency/{id}"))
            .await
    }
}
