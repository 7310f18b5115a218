use reqwest::Method;
use tracing::instrument;

use assetdesk_core::LicenseId;
use assetdesk_core::model::{LicenseDependency, NewLicenseDependency};

use crate::error::ClientError;
use crate::http::ApiClient;

/// `/license-dependency`: directed "depends on" edges between licenses.
#[derive(Debug, Clone, Copy)]
pub struct LicenseDependencyApi<'a> {
    pub(crate) client: &'a ApiClient,
}

impl LicenseDependencyApi<'_> {
    #[instrument(skip(self), err)]
    pub async fn all(&self) -> Result<Vec<LicenseDependency>, ClientError> {
        self.client.get("/license-dependency/all").await
    }

    #[instrument(skip(self), err)]
    pub async fn get(&self, id: i64) -> Result<LicenseDependency, ClientError> {
        self.client
            .get(&format!("/license-dependency/get-license-dependency-by-id/{id}"))
            .await
    }

    /// Edges where `license_id` is the dependent side.
    #[instrument(skip(self), err)]
    pub async fn outgoing(&self, license_id: LicenseId) -> Result<Vec<LicenseDependency>, ClientError> {
        self.client
            .get(&format!("/license-dependency/get-outgoing-by-license-id/{license_id}"))
            .await
    }

    /// Edges where `license_id` is the dependency.
    #[instrument(skip(self), err)]
    pub async fn incoming(&self, license_id: LicenseId) -> Result<Vec<LicenseDependency>, ClientError> {
        self.client
            .get(&format!("/license-dependency/get-incoming-by-license-id/{license_id}"))
            .await
    }

    #[instrument(skip(self), err)]
    pub async fn create(&self, dependency: &NewLicenseDependency) -> Result<LicenseDependency, ClientError> {
        self.client
            .send_validated(Method::POST, "/license-dependency/create-license-dependency", dependency)
            .await
    }

    #[instrument(skip(self), err)]
    pub async fn update(&self, id: i64, dependency: &NewLicenseDependency) -> Result<LicenseDependency, ClientError> {
        self.client
            .send_with_id(Method::PUT, "/license-dependency/update-license-dependency", id, dependency)
            .await
    }

    #[instrument(skip(self), err)]
    pub async fn delete(&self, id: i64) -> Result<(), ClientError> {
        self.client
            .delete(&format!("/license-dependency/delete-license-dependency/{id}"))
            .await
    }
}
