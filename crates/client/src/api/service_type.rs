use reqwest::Method;
use serde_json::Value;
use tracing::instrument;

use assetdesk_core::ServiceTypeId;
use assetdesk_core::model::{NewServiceType, ServiceType};

use crate::error::ClientError;
use crate::http::ApiClient;

#[derive(Debug, Clone, Copy)]
pub struct ServiceTypeApi<'a> {
    pub(crate) client: &'a ApiClient,
}

impl ServiceTypeApi<'_> {
    #[instrument(skip(self), err)]
    pub async fn all(&self) -> Result<Vec<ServiceType>, ClientError> {
        self.client.get("/service-type/all").await
    }

    #[instrument(skip(self), err)]
    pub async fn get(&self, id: ServiceTypeId) -> Result<ServiceType, ClientError> {
        self.client
            .get(&format!("/service-type/get-service-type-by-id/{id}"))
            .await
    }

    #[instrument(skip(self), err)]
    pub async fn create(&self, service_type: &NewServiceType) -> Result<(), ClientError> {
        self.client
            .send_validated::<Value, _>(Method::POST, "/service-type/create-service-type", service_type)
            .await
            .map(|_| ())
    }

    #[instrument(skip(self), err)]
    pub async fn update(&self, id: ServiceTypeId, service_type: &NewServiceType) -> Result<(), ClientError> {
        self.client
            .send_with_id::<Value, _>(
                Method::PUT,
                "/service-type/update-service-type",
                id.get(),
                service_type,
            )
            .await
            .map(|_| ())
    }

    #[instrument(skip(self), err)]
    pub async fn delete(&self, id: ServiceTypeId) -> Result<(), ClientError> {
        self.client
            .delete(&format!("/service-type/delete-service-type/{id}"))
            .await
    }
}
