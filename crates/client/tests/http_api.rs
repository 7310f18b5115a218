use assetdesk_client::{ApiClient, ClientConfig, ClientError};
use assetdesk_core::model::{NewServiceDependency, NewServiceType, ServiceQuery};
use assetdesk_core::{InventoryId, RelationshipId, ServiceId, ServiceTypeId, StatusId};
use serde_json::json;
use wiremock::matchers::{body_json, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer) -> ApiClient {
    ApiClient::new(ClientConfig::default().with_api_url(server.uri())).expect("client builds")
}

#[tokio::test]
async fn fetches_inventory_by_query_id() -> anyhow::Result<()> {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/inventory/get-inventory-by-id"))
        .and(query_param("id", "7"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": 7,
            "name": "Q2 audit",
            "start_date": "2024-04-01",
            "end_date": null,
            "department": {"id": 2, "name": "Ops"},
            "assets": 3, "remaining": 1,
            "licenses": 0, "remainingl": 0,
            "services": 2, "remainings": 2,
            "note": null,
            "done": "false"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let inventory = client_for(&server).inventories().get(InventoryId::new(7)).await?;

    assert_eq!(inventory.name, "Q2 audit");
    assert_eq!(inventory.remaining_services, 2);
    assert!(!inventory.done);
    Ok(())
}

#[tokio::test]
async fn service_filters_become_query_params() -> anyhow::Result<()> {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/service/all-services"))
        .and(query_param("statusId", "2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"id": 1, "name": "CI", "current_cost": "12.50", "status": "Active"}
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let query = ServiceQuery {
        status_id: Some(StatusId::new(2)),
        ..ServiceQuery::default()
    };
    let services = client_for(&server).services().all(&query).await?;

    assert_eq!(services.len(), 1);
    assert_eq!(services[0].current_cost, 12.5);
    Ok(())
}

#[tokio::test]
async fn updates_post_id_next_to_the_fields() -> anyhow::Result<()> {
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .and(path("/service-type/update-service-type"))
        .and(body_json(json!({"id": 3, "name": "Hosting"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"affected": 1})))
        .expect(1)
        .mount(&server)
        .await;

    client_for(&server)
        .service_types()
        .update(ServiceTypeId::new(3), &NewServiceType { name: "Hosting".into() })
        .await?;
    Ok(())
}

#[tokio::test]
async fn deletes_carry_the_id_in_the_path() -> anyhow::Result<()> {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/service-dependency/delete-service-dependency/12"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"deleted": true})))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("DELETE"))
        .and(path("/service/delete-service/4"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    client.service_dependencies().delete(12).await?;
    client.services().delete(ServiceId::new(4)).await?;
    Ok(())
}

#[tokio::test]
async fn invalid_forms_never_reach_the_network() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(201))
        .expect(0)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let self_dependency = NewServiceDependency {
        service_id: ServiceId::new(5),
        dependency_id: ServiceId::new(5),
        relationship_id: RelationshipId::new(1),
        note: None,
    };

    let err = client
        .service_dependencies()
        .create(&self_dependency)
        .await
        .unwrap_err();
    assert!(matches!(err, ClientError::Validation(_)));

    let err = client
        .service_types()
        .create(&NewServiceType { name: "  ".into() })
        .await
        .unwrap_err();
    assert!(matches!(err, ClientError::Validation(_)));
}

#[tokio::test]
async fn rejection_message_comes_from_the_body() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/relationship/all"))
        .respond_with(
            ResponseTemplate::new(403).set_body_json(json!({"statusCode": 403, "message": "Forbidden resource"})),
        )
        .mount(&server)
        .await;

    let err = client_for(&server).relationships().all().await.unwrap_err();

    assert_eq!(err.status(), Some(403));
    assert_eq!(err.to_string(), "Forbidden resource");
}

#[tokio::test]
async fn metric_names_are_path_encoded() -> anyhow::Result<()> {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/service-usages/metric/api%20calls"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(1)
        .mount(&server)
        .await;

    let usages = client_for(&server).service_usages().for_metric("api calls").await?;

    assert!(usages.is_empty());
    Ok(())
}
