//! Integration tests for request dispatch against a mock Upwork server.

use integrations_upwork::{
    upwork_config, EntryPoint, Graphql, Params, UpworkApi, UpworkError,
};
use serde_json::json;
use wiremock::matchers::{body_json, body_string, header, method, path, query_param};
use wiremock::{Mock, MockServer, Request, ResponseTemplate};

async fn setup() -> (MockServer, UpworkApi) {
    let server = MockServer::start().await;
    let config = upwork_config()
        .client_id("id")
        .client_secret("secret")
        .redirect_uri("https://example.com/callback")
        .access_token("access-1")
        .token_host(server.uri())
        .graphql_url(format!("{}/graphql", server.uri()))
        .build()
        .unwrap();
    let api = UpworkApi::new(config).unwrap();
    (server, api)
}

#[tokio::test]
async fn test_get_appends_json_suffix_and_query() {
    let (server, api) = setup().await;

    Mock::given(method("GET"))
        .and(path("/api/auth/v1/info.json"))
        .and(query_param("a", "1"))
        .and(header("authorization", "Bearer access-1"))
        .and(header("user-agent", "Github Upwork API Rust Client"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "auth_user": {"first_name": "Ann"}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let response = api
        .get("auth/v1/info", Params::new().with("a", 1))
        .await
        .unwrap();
    assert_eq!(response.status, 200);
    assert_eq!(response.body["auth_user"]["first_name"], "Ann");
}

#[tokio::test]
async fn test_post_sends_form_body() {
    let (server, api) = setup().await;

    Mock::given(method("POST"))
        .and(path("/api/messages/v3/rooms.json"))
        .and(header("content-type", "application/x-www-form-urlencoded"))
        .and(body_string("story=hello+world"))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({"ok": true})))
        .expect(1)
        .mount(&server)
        .await;

    let response = api
        .post("messages/v3/rooms", Params::new().with("story", "hello world"))
        .await
        .unwrap();
    assert_eq!(response.status, 201);
}

#[tokio::test]
async fn test_put_is_tunneled_through_post() {
    let (server, api) = setup().await;

    Mock::given(method("POST"))
        .and(path("/api/x.json"))
        .and(body_string("a=1&http_method=put"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("PUT"))
        .respond_with(ResponseTemplate::new(405))
        .expect(0)
        .mount(&server)
        .await;

    api.put("x", Params::new().with("a", 1)).await.unwrap();
}

#[tokio::test]
async fn test_delete_is_tunneled_through_post() {
    let (server, api) = setup().await;

    Mock::given(method("POST"))
        .and(path("/api/x/1.json"))
        .and(body_string("http_method=delete"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .expect(1)
        .mount(&server)
        .await;

    api.delete("x/1", Params::new()).await.unwrap();
}

#[tokio::test]
async fn test_gds_entry_point_has_no_suffix() {
    let (server, api) = setup().await;

    Mock::given(method("GET"))
        .and(path("/gds/finreports/v2/financial_accounts/1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"rows": []})))
        .expect(1)
        .mount(&server)
        .await;

    api.set_entry_point(EntryPoint::Gds);
    let response = api
        .get("finreports/v2/financial_accounts/1", Params::new())
        .await
        .unwrap();
    assert_eq!(response.body, json!({"rows": []}));
}

#[tokio::test]
async fn test_graphql_execute() {
    let (server, api) = setup().await;
    api.set_org_uid_header(Some("tenant-1".to_string()));

    let query = "query { user { id } }";
    Mock::given(method("POST"))
        .and(path("/graphql"))
        .and(header("content-type", "application/json"))
        .and(header("X-Upwork-API-TenantId", "tenant-1"))
        .and(header("authorization", "Bearer access-1"))
        .and(body_json(json!({"query": query})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": {"user": {"id": "42"}}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let graphql = Graphql::new(&api);
    let response = graphql
        .execute(Params::new().with("query", query))
        .await
        .unwrap();
    assert_eq!(response.body["data"]["user"]["id"], "42");
}

#[tokio::test]
async fn test_facade_execute_targets_graphql_endpoint() {
    let (server, api) = setup().await;

    let query = "query { user { id } }";
    Mock::given(method("POST"))
        .and(path("/graphql"))
        .and(header("content-type", "application/json"))
        .and(body_json(json!({"query": query})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": {"user": {"id": "7"}}
        })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(path("/api/.json"))
        .respond_with(ResponseTemplate::new(404))
        .expect(0)
        .mount(&server)
        .await;

    let response = api
        .execute(Params::new().with("query", query))
        .await
        .unwrap();
    assert_eq!(response.body["data"]["user"]["id"], "7");
    assert_eq!(api.client().dispatcher().entry_point(), None);
}

#[tokio::test]
async fn test_graphql_without_tenant_header() {
    let (server, api) = setup().await;

    Mock::given(method("POST"))
        .and(path("/graphql"))
        .respond_with(|request: &Request| {
            let has_tenant = request.headers.contains_key("x-upwork-api-tenantid");
            ResponseTemplate::new(200).set_body_json(json!({"tenant": has_tenant}))
        })
        .mount(&server)
        .await;

    api.set_org_uid_header(Some("tenant-1".to_string()));
    api.set_org_uid_header(None);
    let response = Graphql::new(&api)
        .execute(Params::new().with("query", "{ user { id } }"))
        .await
        .unwrap();
    assert_eq!(response.body, json!({"tenant": false}));
}

#[tokio::test]
async fn test_non_json_body_becomes_empty_object() {
    let (server, api) = setup().await;

    Mock::given(method("GET"))
        .and(path("/api/broken.json"))
        .respond_with(ResponseTemplate::new(503).set_body_string("<html>down</html>"))
        .mount(&server)
        .await;

    let response = api.get("broken", Params::new()).await.unwrap();
    assert_eq!(response.status, 503);
    assert_eq!(response.body, json!({}));
}

#[tokio::test]
async fn test_redirect_is_not_followed() {
    let (server, api) = setup().await;

    Mock::given(method("GET"))
        .and(path("/api/moved.json"))
        .respond_with(ResponseTemplate::new(302).insert_header("location", "/elsewhere"))
        .mount(&server)
        .await;

    let response = api.get("moved", Params::new()).await.unwrap();
    assert_eq!(response.status, 302);
}

#[tokio::test]
async fn test_connection_failure_is_transport_error() {
    let (server, api) = setup().await;
    drop(server);

    let err = api.get("auth/v1/info", Params::new()).await.unwrap_err();
    assert!(matches!(err, UpworkError::Transport(_)));
    assert_eq!(err.error_code(), "UPWORK_TRANSPORT");
}
