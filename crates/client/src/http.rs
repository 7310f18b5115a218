//! HTTP plumbing shared by every resource module.

use reqwest::{Method, RequestBuilder, Url};
use serde::Serialize;
use serde::de::DeserializeOwned;

use assetdesk_core::Validate;

use crate::config::ClientConfig;
use crate::error::ClientError;

/// Typed client for the AssetDesk REST backend.
///
/// Cheap to clone; clones share the connection pool.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    config: ClientConfig,
}

/// `{ "id": .., ...body }` as the update endpoints expect.
#[derive(Serialize)]
pub(crate) struct WithId<'a, T: ?Sized> {
    pub id: i64,
    #[serde(flatten)]
    pub body: &'a T,
}

impl ApiClient {
    pub fn new(config: ClientConfig) -> Result<Self, ClientError> {
        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()?;
        Ok(Self { http, config })
    }

    pub fn from_env() -> Result<Self, ClientError> {
        Self::new(ClientConfig::from_env())
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub(crate) fn http(&self) -> &reqwest::Client {
        &self.http
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.config.api_url.trim_end_matches('/'), path)
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        tracing::debug!(%method, path, "api request");
        self.http.request(method, self.url(path))
    }

    /// `path` with `segment` appended as one percent-encoded path segment.
    pub(crate) fn url_with_segment(&self, path: &str, segment: &str) -> Result<Url, ClientError> {
        let mut url = Url::parse(&self.url(path)).map_err(|e| ClientError::Url(e.to_string()))?;
        url.path_segments_mut()
            .map_err(|()| ClientError::Url(self.config.api_url.clone()))?
            .push(segment);
        Ok(url)
    }

    pub(crate) async fn get_url<T: DeserializeOwned>(&self, url: Url) -> Result<T, ClientError> {
        tracing::debug!(%url, "api request");
        decode(self.http.get(url)).await
    }

    pub(crate) async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ClientError> {
        decode(self.request(Method::GET, path)).await
    }

    pub(crate) async fn get_query<T, Q>(&self, path: &str, query: &Q) -> Result<T, ClientError>
    where
        T: DeserializeOwned,
        Q: Serialize + ?Sized,
    {
        decode(self.request(Method::GET, path).query(query)).await
    }

    /// Validate `body`, then send it. Nothing goes out if validation fails.
    pub(crate) async fn send_validated<T, B>(
        &self,
        method: Method,
        path: &str,
        body: &B,
    ) -> Result<T, ClientError>
    where
        T: DeserializeOwned,
        B: Serialize + Validate + ?Sized,
    {
        body.validate()?;
        self.send(method, path, body).await
    }

    /// Validate `body` and send it flattened next to `id`.
    pub(crate) async fn send_with_id<T, B>(
        &self,
        method: Method,
        path: &str,
        id: i64,
        body: &B,
    ) -> Result<T, ClientError>
    where
        T: DeserializeOwned,
        B: Serialize + Validate + ?Sized,
    {
        body.validate()?;
        self.send(method, path, &WithId { id, body }).await
    }

    pub(crate) async fn send<T, B>(&self, method: Method, path: &str, body: &B) -> Result<T, ClientError>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        decode(self.request(method, path).json(body)).await
    }

    pub(crate) async fn delete(&self, path: &str) -> Result<(), ClientError> {
        decode::<serde_json::Value>(self.request(Method::DELETE, path))
            .await
            .map(|_| ())
    }
}

/// Send and decode. Non-2xx responses become [`ClientError::Api`]; an empty
/// 2xx body decodes as JSON `null`.
pub(crate) async fn decode<T: DeserializeOwned>(request: RequestBuilder) -> Result<T, ClientError> {
    let response = request.send().await?;
    let status = response.status();
    let body = response.text().await?;

    if !status.is_success() {
        let err = ClientError::from_response(status.as_u16(), &body);
        tracing::warn!(status = status.as_u16(), error = %err, "api call rejected");
        return Err(err);
    }

    if body.trim().is_empty() {
        return Ok(serde_json::from_str("null")?);
    }
    Ok(serde_json::from_str(&body)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use assetdesk_core::model::NewServiceType;

    #[test]
    fn with_id_flattens_the_body() {
        let body = NewServiceType {
            name: "SaaS".into(),
        };
        let json = serde_json::to_value(WithId { id: 4, body: &body }).unwrap();
        assert_eq!(json, serde_json::json!({"id": 4, "name": "SaaS"}));
    }

    #[test]
    fn encodes_free_text_segments() {
        let client = ApiClient::new(ClientConfig::default()).unwrap();
        let url = client.url_with_segment("/service-usages/metric", "api calls/day").unwrap();
        assert_eq!(url.as_str(), "http://localhost:8080/service-usages/metric/api%20calls%2Fday");
    }

    #[test]
    fn joins_base_and_path() {
        let client = ApiClient::new(ClientConfig::default().with_api_url("http://host:1/api/")).unwrap();
        assert_eq!(client.url("/inventory/all"), "http://host:1/api/inventory/all");
    }
}
