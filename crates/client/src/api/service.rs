use reqwest::Method;
use serde_json::{Value, json};
use tracing::instrument;

use assetdesk_core::ServiceId;
use assetdesk_core::model::{
    AcceptRequestService, CheckinService, CheckoutService, NewService, RequestService, Service,
    ServicePrice, ServicePriceDto, ServiceQuery, ServiceToUser, ServiceToUserQuery,
};
use assetdesk_core::validate::require_id;

use crate::error::ClientError;
use crate::http::ApiClient;

#[derive(Debug, Clone, Copy)]
pub struct ServiceApi<'a> {
    pub(crate) client: &'a ApiClient,
}

impl ServiceApi<'_> {
    /// Services matching `query`; an empty query lists everything.
    #[instrument(skip(self), err)]
    pub async fn all(&self, query: &ServiceQuery) -> Result<Vec<Service>, ClientError> {
        self.client.get_query("/service/all-services", query).await
    }

    #[instrument(skip(self), err)]
    pub async fn get(&self, id: ServiceId) -> Result<Service, ClientError> {
        self.client
            .get(&format!("/service/get-service-by-id/{id}"))
            .await
    }

    #[instrument(skip(self), err)]
    pub async fn by_category(&self, category_id: i64) -> Result<Vec<Service>, ClientError> {
        self.client
            .get_query("/service/service-by-category", &[("categoryId", category_id)])
            .await
    }

    #[instrument(skip(self, service), err)]
    pub async fn create(&self, service: &NewService) -> Result<(), ClientError> {
        self.client
            .send_validated::<Value, _>(Method::POST, "/service/create-service", service)
            .await
            .map(|_| ())
    }

    #[instrument(skip(self, service), err)]
    pub async fn update(&self, id: ServiceId, service: &NewService) -> Result<(), ClientError> {
        self.client
            .send_with_id::<Value, _>(Method::PUT, "/service/update-service", id.get(), service)
            .await
            .map(|_| ())
    }

    #[instrument(skip(self), err)]
    pub async fn delete(&self, id: ServiceId) -> Result<(), ClientError> {
        self.client
            .delete(&format!("/service/delete-service/{id}"))
            .await
    }

    /// Current and past checkouts, filtered by service and/or user.
    #[instrument(skip(self), err)]
    pub async fn assignments(&self, query: &ServiceToUserQuery) -> Result<Vec<ServiceToUser>, ClientError> {
        self.client.get_query("/service/service-to-user", query).await
    }

    #[instrument(skip(self, checkout), err)]
    pub async fn checkout(&self, checkout: &CheckoutService) -> Result<(), ClientError> {
        self.client
            .send_validated::<Value, _>(Method::POST, "/service/checkout-service", checkout)
            .await
            .map(|_| ())
    }

    #[instrument(skip(self, checkin), err)]
    pub async fn checkin(&self, checkin: &CheckinService) -> Result<(), ClientError> {
        self.client
            .send_validated::<Value, _>(Method::POST, "/service/checkin-service", checkin)
            .await
            .map(|_| ())
    }

    #[instrument(skip(self), err)]
    pub async fn prices(&self, service_id: ServiceId) -> Result<Vec<ServicePrice>, ClientError> {
        self.client
            .get(&format!("/service/get-service-prices/{service_id}"))
            .await
    }

    #[instrument(skip(self), err)]
    pub async fn price(&self, price_id: i64) -> Result<ServicePrice, ClientError> {
        self.client
            .get(&format!("/service/get-service-price-by-id/{price_id}"))
            .await
    }

    #[instrument(skip(self, price), err)]
    pub async fn create_price(&self, price: &ServicePriceDto) -> Result<ServicePrice, ClientError> {
        require_id("serviceId", price.service_id.map_or(0, |id| id.get()))?;
        self.client
            .send_validated(Method::POST, "/service/create-service-price", price)
            .await
    }

    /// The dto must carry `servicePriceId`.
    #[instrument(skip(self, price), err)]
    pub async fn update_price(&self, price: &ServicePriceDto) -> Result<ServicePrice, ClientError> {
        require_id("servicePriceId", price.service_price_id.unwrap_or(0))?;
        self.client
            .send_validated(Method::PUT, "/service/update-service-price", price)
            .await
    }

    #[instrument(skip(self), err)]
    pub async fn delete_price(&self, price_id: i64) -> Result<(), ClientError> {
        self.client
            .delete(&format!("/service/delete-service-price/{price_id}"))
            .await
    }

    #[instrument(skip(self), err)]
    pub async fn requests(&self) -> Result<Vec<RequestService>, ClientError> {
        self.client.get("/service/all-request-services").await
    }

    #[instrument(skip(self), err)]
    pub async fn accept_request(&self, accept: &AcceptRequestService) -> Result<(), ClientError> {
        self.client
            .send_validated::<Value, _>(Method::POST, "/service/accept-request", accept)
            .await
            .map(|_| ())
    }

    #[instrument(skip(self), err)]
    pub async fn reject_request(&self, request_id: i64) -> Result<(), ClientError> {
        require_id("id", request_id)?;
        self.client
            .send::<Value, _>(Method::POST, "/service/reject-request", &json!({ "id": request_id }))
            .await
            .map(|_| ())
    }
}
