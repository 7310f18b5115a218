use reqwest::Method;
use tracing::instrument;

use assetdesk_core::{ServiceId, UserId};
use assetdesk_core::model::{ServiceUsage, NewServiceUsage};

use crate::error::ClientError;
use crate::http::ApiClient;

/// `/service-usages`: metered usage of services per user.
#[derive(Debug, Clone, Copy)]
pub struct ServiceUsageApi<'a> {
    pub(crate) client: &'a ApiClient,
}

impl ServiceUsageApi<'_> {
    #[instrument(skip(self), err)]
    pub async fn get(&self, id: i64) -> Result<ServiceUsage, ClientError> {
        self.client.get(&format!("/service-usages/{id}")).await
    }

    #[instrument(skip(self), err)]
    pub async fn for_service(&self, service_id: ServiceId) -> Result<Vec<ServiceUsage>, ClientError> {
        self.client
            .get(&format!("/service-usages/service/{service_id}"))
            .await
    }

    #[instrument(skip(self), err)]
    pub async fn for_user(&self, user_id: UserId) -> Result<Vec<ServiceUsage>, ClientError> {
        self.client
            .get(&format!("/service-usages/user/{user_id}"))
            .await
    }

    /// Every record of one metric; the metric name is free text.
    #[instrument(skip(self), err)]
    pub async fn for_metric(&self, metric: &str) -> Result<Vec<ServiceUsage>, ClientError> {
        let url = self.client.url_with_segment("/service-usages/metric", metric)?;
        self.client.get_url(url).await
    }

    #[instrument(skip(self), err)]
    pub async fn create(&self, usage: &NewServiceUsage) -> Result<ServiceUsage, ClientError> {
        self.client
            .send_validated(Method::POST, "/service-usages", usage)
            .await
    }

    #[instrument(skip(self), err)]
    pub async fn update(&self, id: i64, usage: &NewServiceUsage) -> Result<ServiceUsage, ClientError> {
        self.client
            .send_validated(Method::PATCH, &format!("/service-usages/{id}"), usage)
            .await
    }

    #[instrument(skip(self), err)]
    pub async fn delete(&self, id: i64) -> Result<(), ClientError> {
        self.client.delete(&format!("/service-usages/{id}")).await
    }
}
