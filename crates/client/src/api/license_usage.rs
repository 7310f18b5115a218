use reqwest::Method;
use tracing::instrument;

use assetdesk_core::{AssetId, LicenseId};
use assetdesk_core::model::{LicenseUsage, NewLicenseUsage};

use crate::error::ClientError;
use crate::http::ApiClient;

/// `/license-usages`: metered usage of licenses per asset.
#[derive(Debug, Clone, Copy)]
pub struct LicenseUsageApi<'a> {
    pub(crate) client: &'a ApiClient,
}

impl LicenseUsageApi<'_> {
    #[instrument(skip(self), err)]
    pub async fn get(&self, id: i64) -> Result<LicenseUsage, ClientError> {
        self.client.get(&format!("/license-usages/{id}")).await
    }

    #[instrument(skip(self), err)]
    pub async fn for_license(&self, license_id: LicenseId) -> Result<Vec<LicenseUsage>, ClientError> {
        self.client
            .get(&format!("/license-usages/license/{license_id}"))
            .await
    }

    #[instrument(skip(self), err)]
    pub async fn for_asset(&self, asset_id: AssetId) -> Result<Vec<LicenseUsage>, ClientError> {
        self.client
            .get(&format!("/license-usages/asset/{asset_id}"))
            .await
    }

    /// Every record of one metric; the metric name is free text.
    #[instrument(skip(self), err)]
    pub async fn for_metric(&self, metric: &str) -> Result<Vec<LicenseUsage>, ClientError> {
        let url = self.client.url_with_segment("/license-usages/metric", metric)?;
        self.client.get_url(url).await
    }

    #[instrument(skip(self), err)]
    pub async fn create(&self, usage: &NewLicenseUsage) -> Result<LicenseUsage, ClientError> {
        self.client
            .send_validated(Method::POST, "/license-usages", usage)
            .await
    }

    #[instrument(skip(self), err)]
    pub async fn update(&self, id: i64, usage: &NewLicenseUsage) -> Result<LicenseUsage, ClientError> {
        self.client
            .send_validated(Method::PATCH, &format!("/license-usages/{id}"), usage)
            .await
    }

    #[instrument(skip(self), err)]
    pub async fn delete(&self, id: i64) -> Result<(), ClientError> {
        self.client.delete(&format!("/license-usages/{id}")).await
    }
}
