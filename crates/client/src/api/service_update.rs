use reqwest::Method;
use tracing::instrument;

use assetdesk_core::ServiceId;
use assetdesk_core::model::{ServiceUpdate, NewServiceUpdate};

use crate::error::ClientError;
use crate::http::ApiClient;

#[derive(Debug, Clone, Copy)]
pub struct ServiceUpdateApi<'a> {
    pub(crate) client: &'a ApiClient,
}

impl ServiceUpdateApi<'_> {
    #[instrument(skip(self), err)]
    pub async fn all(&self) -> Result<Vec<ServiceUpdate>, ClientError> {
        self.client.get("/service-updates").await
    }

    #[instrument(skip(self), err)]
    pub async fn get(&self, id: i64) -> Result<ServiceUpdate, ClientError> {
        self.client.get(&format!("/service-updates/{id}")).await
    }

    /// Release history of one service.
    #[instrument(skip(self), err)]
    pub async fn for_service(&self, service_id: ServiceId) -> Result<Vec<ServiceUpdate>, ClientError> {
        self.client
            .get(&format!("/service-updates/service/{service_id}"))
            .await
    }

    #[instrument(skip(self), err)]
    pub async fn create(&self, update: &NewServiceUpdate) -> Result<ServiceUpdate, ClientError> {
        self.client
            .send_validated(Method::POST, "/service-updates", update)
            .await
    }

    #[instrument(skip(self), err)]
    pub async fn update(&self, id: i64, update: &NewServiceUpdate) -> Result<ServiceUpdate, ClientError> {
        self.client
            .send_validated(Method::PATCH, &format!("/service-updates/{id}"), update)
            .await
    }

    #[instrument(skip(self), err)]
    pub async fn delete(&self, id: i64) -> Result<(), ClientError> {
        self.client.delete(&format!("/service-updates/{id}")).await
    }
}
