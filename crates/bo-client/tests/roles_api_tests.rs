//! Roles endpoint tests
//!
//! These tests use wiremock to simulate the back-office API.

use bo_client::{Config, Error, RolesClient};
use serde_json::json;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer) -> RolesClient {
    let config = Config::new(server.uri()).with_bearer_token("test-token-123");
    RolesClient::new(config).expect("client should build")
}

#[tokio::test]
async fn test_list_roles_success() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/roles"))
        .and(header("Authorization", "Bearer test-token-123"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "isSuccess": true,
            "result": [{"id": 1, "name": "Admin"}, {"id": 2, "name": "Clerk"}]
        })))
        .mount(&server)
        .await;

    let roles = client_for(&server).list_roles().await.unwrap();
    assert_eq!(roles.len(), 2);
    assert_eq!(roles[0].id, 1);
    assert_eq!(roles[0].name, "Admin");
}

#[tokio::test]
async fn test_list_roles_application_failure_surfaces_server_message() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/roles"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "isSuccess": false,
            "errorMessage": "Session expired"
        })))
        .mount(&server)
        .await;

    let err = client_for(&server).list_roles().await.unwrap_err();
    assert_eq!(err.user_message(), Some("Session expired"));
}

#[tokio::test]
async fn test_list_roles_http_error_maps_by_status() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/roles"))
        .respond_with(ResponseTemplate::new(401))
        .mount(&server)
        .await;

    let err = client_for(&server).list_roles().await.unwrap_err();
    assert!(matches!(err, Error::Authentication(_)));
    assert!(err.user_message().is_none());
}

#[tokio::test]
async fn test_add_role_posts_role_name() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/roles/add"))
        .and(body_json(json!({"roleName": "Manager"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "isSuccess": true,
            "result": {"id": 9, "roleName": "Manager"}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let created = client_for(&server).add_role("Manager").await.unwrap();
    assert_eq!(created.role_name, "Manager");
    assert_eq!(created.id, Some(9));
}

#[tokio::test]
async fn test_add_role_without_result_is_an_error() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/roles/add"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"isSuccess": true})))
        .mount(&server)
        .await;

    let err = client_for(&server).add_role("Manager").await.unwrap_err();
    assert!(matches!(err, Error::Other(_)));
}

#[tokio::test]
async fn test_update_role_tolerates_missing_is_success() {
    let server = MockServer::start().await;

    // The update endpoint's success shape omits isSuccess entirely.
    Mock::given(method("POST"))
        .and(path("/api/roles/update"))
        .and(body_json(json!({"roleId": 3, "roleName": "Supervisor"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .expect(1)
        .mount(&server)
        .await;

    client_for(&server)
        .update_role(3, "Supervisor")
        .await
        .unwrap();
}

#[tokio::test]
async fn test_delete_role_checks_is_success() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/roles/delete"))
        .and(body_json(json!({"roleId": 4, "roleName": "Clerk"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "isSuccess": false,
            "errorMessage": "Role is in use"
        })))
        .mount(&server)
        .await;

    let err = client_for(&server).delete_role(4, "Clerk").await.unwrap_err();
    assert_eq!(err.user_message(), Some("Role is in use"));
}

#[tokio::test]
async fn test_transport_failure_is_http_error() {
    // Point at a server that is no longer listening. A builder-started
    // server is not pooled, so dropping it actually closes the port.
    let server = MockServer::builder().start().await;
    let uri = server.uri();
    drop(server);

    let client = RolesClient::new(Config::new(uri)).unwrap();
    let err = client.list_roles().await.unwrap_err();
    assert!(matches!(err, Error::Http(_)));
}
