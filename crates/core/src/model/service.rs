//! Software services and their checkout, pricing and request records.

use serde::{Deserialize, Serialize};

use crate::entity::Entity;
use crate::error::DomainResult;
use crate::id::{ServiceId, ServiceTypeId, StatusId, UserId};
use crate::validate::{
    Validate, non_negative, optional_date, ordered_dates, require_date, require_id, require_text,
};
use crate::wire::number_or_string;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Service {
    pub id: ServiceId,
    pub name: String,
    #[serde(default)]
    pub version: Option<String>,
    #[serde(default, deserialize_with = "number_or_string")]
    pub current_cost: f64,
    #[serde(default)]
    pub used: i64,
    #[serde(default)]
    pub unit: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub status: String,
    #[serde(rename = "statusColor", default)]
    pub status_color: String,
    #[serde(default)]
    pub service_type: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub manufacturer: String,
    #[serde(default)]
    pub supplier: String,
}

impl Entity for Service {
    type Id = ServiceId;

    fn id(&self) -> ServiceId {
        self.id
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewService {
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub unit: String,
    #[serde(rename = "statusId")]
    pub status_id: StatusId,
    #[serde(rename = "serviceTypeId")]
    pub service_type_id: ServiceTypeId,
    #[serde(rename = "categoryId")]
    pub category_id: i64,
    #[serde(rename = "manufacturerId")]
    pub manufacturer_id: i64,
    #[serde(rename = "supplierId")]
    pub supplier_id: i64,
}

impl Validate for NewService {
    fn validate(&self) -> DomainResult<()> {
        require_text("name", &self.name)?;
        require_text("unit", &self.unit)?;
        require_id("statusId", self.status_id.get())?;
        require_id("serviceTypeId", self.service_type_id.get())?;
        require_id("categoryId", self.category_id)?;
        require_id("manufacturerId", self.manufacturer_id)?;
        require_id("supplierId", self.supplier_id)
    }
}

/// Filters for the service list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceQuery {
    #[serde(rename = "statusId", skip_serializing_if = "Option::is_none")]
    pub status_id: Option<StatusId>,
    #[serde(rename = "serviceTypeId", skip_serializing_if = "Option::is_none")]
    pub service_type_id: Option<ServiceTypeId>,
    #[serde(rename = "categoryId", skip_serializing_if = "Option::is_none")]
    pub category_id: Option<i64>,
    #[serde(rename = "manufacturerId", skip_serializing_if = "Option::is_none")]
    pub manufacturer_id: Option<i64>,
    #[serde(rename = "supplierId", skip_serializing_if = "Option::is_none")]
    pub supplier_id: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckoutService {
    #[serde(rename = "serviceId")]
    pub service_id: ServiceId,
    #[serde(rename = "userId")]
    pub user_id: UserId,
    pub checkout_date: String,
    #[serde(default)]
    pub checkout_note: String,
}

impl Validate for CheckoutService {
    fn validate(&self) -> DomainResult<()> {
        require_id("serviceId", self.service_id.get())?;
        require_id("userId", self.user_id.get())?;
        require_date("checkout_date", &self.checkout_date)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckinService {
    #[serde(rename = "serviceToUserId")]
    pub service_to_user_id: i64,
    pub checkin_date: String,
    #[serde(default)]
    pub checkin_note: String,
}

impl Validate for CheckinService {
    fn validate(&self) -> DomainResult<()> {
        require_id("serviceToUserId", self.service_to_user_id)?;
        require_date("checkin_date", &self.checkin_date)
    }
}

/// A checkout of a service to a user (open while `checkin_date` is empty).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceToUser {
    pub id: i64,
    #[serde(rename = "serviceId")]
    pub service_id: ServiceId,
    #[serde(rename = "serviceName", default)]
    pub service_name: String,
    #[serde(rename = "userId")]
    pub user_id: UserId,
    #[serde(rename = "userName", default)]
    pub user_name: String,
    #[serde(default)]
    pub checkout_date: Option<String>,
    #[serde(default)]
    pub checkin_date: Option<String>,
}

impl ServiceToUser {
    pub fn is_open(&self) -> bool {
        self.checkin_date.as_deref().is_none_or(|d| d.trim().is_empty())
    }
}

impl Entity for ServiceToUser {
    type Id = i64;

    fn id(&self) -> i64 {
        self.id
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceToUserQuery {
    #[serde(rename = "serviceId", skip_serializing_if = "Option::is_none")]
    pub service_id: Option<ServiceId>,
    #[serde(rename = "userId", skip_serializing_if = "Option::is_none")]
    pub user_id: Option<UserId>,
    #[serde(rename = "withDeleted", skip_serializing_if = "Option::is_none")]
    pub with_deleted: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServicePrice {
    pub id: i64,
    pub service: Service,
    #[serde(deserialize_with = "number_or_string")]
    pub purchase_cost: f64,
    pub purchase_date: String,
    pub expiration_date: String,
    #[serde(default)]
    pub pricing_model: String,
    #[serde(default)]
    pub unit: String,
    #[serde(default, deserialize_with = "number_or_string")]
    pub unit_price: f64,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(rename = "deletedAt", default)]
    pub deleted_at: Option<String>,
}

impl Entity for ServicePrice {
    type Id = i64;

    fn id(&self) -> i64 {
        self.id
    }
}

/// Create/update payload for a service price. Every field is optional on the
/// wire; `validate` enforces what the create form requires.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ServicePriceDto {
    #[serde(rename = "servicePriceId", skip_serializing_if = "Option::is_none")]
    pub service_price_id: Option<i64>,
    #[serde(rename = "serviceId", skip_serializing_if = "Option::is_none")]
    pub service_id: Option<ServiceId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub purchase_cost: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub purchase_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expiration_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pricing_model: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit_price: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(rename = "withDeleted", skip_serializing_if = "Option::is_none")]
    pub with_deleted: Option<bool>,
}

impl Validate for ServicePriceDto {
    fn validate(&self) -> DomainResult<()> {
        non_negative("purchase_cost", self.purchase_cost.unwrap_or(-1.0))?;
        non_negative("unit_price", self.unit_price.unwrap_or(-1.0))?;
        let purchase = self.purchase_date.as_deref().unwrap_or_default();
        let expiration = self.expiration_date.as_deref().unwrap_or_default();
        require_date("purchase_date", purchase)?;
        require_date("expiration_date", expiration)?;
        ordered_dates("purchase_date", purchase, "expiration_date", expiration)?;
        require_text("pricing_model", self.pricing_model.as_deref().unwrap_or_default())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RequestStatus {
    Requested,
    Rejected,
    Accepted,
}

/// A user's request for a service in a category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequestService {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub category: String,
    #[serde(rename = "categoryId")]
    pub category_id: i64,
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub note: String,
    pub status: RequestStatus,
}

impl Entity for RequestService {
    type Id = i64;

    fn id(&self) -> i64 {
        self.id
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AcceptRequestService {
    pub id: i64,
    #[serde(rename = "serviceId")]
    pub service_id: ServiceId,
}

impl Validate for AcceptRequestService {
    fn validate(&self) -> DomainResult<()> {
        require_id("id", self.id)?;
        require_id("serviceId", self.service_id.get())
    }
}
