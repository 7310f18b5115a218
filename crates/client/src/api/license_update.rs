use reqwest::Method;
use tracing::instrument;

use assetdesk_core::LicenseId;
use assetdesk_core::model::{LicenseUpdate, NewLicenseUpdate};

use crate::error::ClientError;
use crate::http::ApiClient;

#[derive(Debug, Clone, Copy)]
pub struct LicenseUpdateApi<'a> {
    pub(crate) client: &'a ApiClient,
}

impl LicenseUpdateApi<'_> {
    #[instrument(skip(self), err)]
    pub async fn all(&self) -> Result<Vec<LicenseUpdate>, ClientError> {
        self.client.get("/license-updates").await
    }

    #[instrument(skip(self), err)]
    pub async fn get(&self, id: i64) -> Result<LicenseUpdate, ClientError> {
        self.client.get(&format!("/license-updates/{id}")).await
    }

    /// Release history of one license.
    #[instrument(skip(self), err)]
    pub async fn for_license(&self, license_id: LicenseId) -> Result<Vec<LicenseUpdate>, ClientError> {
        self.client
            .get(&format!("/license-updates/license/{license_id}"))
            .await
    }

    #[instrument(skip(self), err)]
    pub async fn create(&self, update: &NewLicenseUpdate) -> Result<LicenseUpdate, ClientError> {
        self.client
            .send_validated(Method::POST, "/license-updates", update)
            .await
    }

    #[instrument(skip(self), err)]
    pub async fn update(&self, id: i64, update: &NewLicenseUpdate) -> Result<LicenseUpdate, ClientError> {
        self.client
            .send_validated(Method::PATCH, &format!("/license-updates/{id}"), update)
            .await
    }

    #[instrument(skip(self), err)]
    pub async fn delete(&self, id: i64) -> Result<(), ClientError> {
        self.client.delete(&format!("/license-updates/{id}")).await
    }
}
