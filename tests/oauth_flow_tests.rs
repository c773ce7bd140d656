//! Integration tests for the token lifecycle against a mock token endpoint.

use chrono::{Duration, Utc};
use integrations_upwork::{
    upwork_config, AuthError, GrantType, TokenPair, UpworkApi, UpworkConfig, UpworkError,
};
use serde_json::json;
use wiremock::matchers::{body_string, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const TOKEN_ENDPOINT: &str = "/api/v3/oauth2/token";

fn auth_code_config(server: &MockServer) -> integrations_upwork::UpworkConfigBuilder {
    upwork_config()
        .client_id("id")
        .client_secret("secret")
        .redirect_uri("https://example.com/callback")
        .token_host(server.uri())
        .graphql_url(format!("{}/graphql", server.uri()))
}

fn api(config: UpworkConfig) -> UpworkApi {
    UpworkApi::new(config).expect("client")
}

#[tokio::test]
async fn test_authorization_code_exchange() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(TOKEN_ENDPOINT))
        .and(header("authorization", "Basic aWQ6c2VjcmV0"))
        .and(header("user-agent", "Github Upwork API Rust Client"))
        .and(header("content-type", "application/x-www-form-urlencoded"))
        .and(body_string(
            "grant_type=authorization_code&code=abc\
             &redirect_uri=https%3A%2F%2Fexample.com%2Fcallback",
        ))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "access_token": "access-1",
            "refresh_token": "refresh-1",
            "token_type": "Bearer",
            "expires_in": 86399
        })))
        .expect(1)
        .mount(&server)
        .await;

    let api = api(auth_code_config(&server).build().unwrap());
    let pair = api.get_token("abc").await.unwrap();

    assert_eq!(pair.access_token, "access-1");
    assert_eq!(pair.refresh_token.as_deref(), Some("refresh-1"));
    assert_eq!(pair.expires_in, Some(86399));
    assert!(pair.expires_at.unwrap() > Utc::now());

    // Not adopted until the caller does so.
    assert!(api.client().config().access_token.is_none());
    let adopted = api.set_new_access_token_pair(pair);
    assert_eq!(api.client().config().access_token.as_deref(), Some("access-1"));
    assert_eq!(adopted.access_token, "access-1");
}

#[tokio::test]
async fn test_authorization_url() {
    let server = MockServer::start().await;
    let api = api(auth_code_config(&server).state("xyz").build().unwrap());

    let url = api.authorization_url().unwrap();
    assert_eq!(
        url,
        format!(
            "{}/ab/account-security/oauth2/authorize?response_type=code&client_id=id\
             &redirect_uri=https%3A%2F%2Fexample.com%2Fcallback&state=xyz",
            server.uri()
        )
    );
}

#[tokio::test]
async fn test_rejected_code_is_auth_error() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(TOKEN_ENDPOINT))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({
            "error": "invalid_grant",
            "error_description": "authorization code expired"
        })))
        .mount(&server)
        .await;

    let api = api(auth_code_config(&server).build().unwrap());
    let err = api.get_token("stale").await.unwrap_err();

    match err {
        UpworkError::Auth(AuthError::InvalidGrant { message }) => {
            assert_eq!(message, "authorization code expired")
        }
        other => panic!("unexpected error: {:?}", other),
    }
}

#[tokio::test]
async fn test_malformed_token_body() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(TOKEN_ENDPOINT))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&server)
        .await;

    let api = api(auth_code_config(&server).build().unwrap());
    let err = api.get_token("abc").await.unwrap_err();
    assert!(matches!(
        err,
        UpworkError::Auth(AuthError::MalformedTokenResponse { .. })
    ));
}

#[tokio::test]
async fn test_oversized_expires_in_is_not_fatal() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(TOKEN_ENDPOINT))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "access_token": "a",
            "expires_in": 10_000_000_000_000u64
        })))
        .mount(&server)
        .await;

    let api = api(auth_code_config(&server).build().unwrap());
    let pair = api.get_token("abc").await.unwrap();

    assert_eq!(pair.access_token, "a");
    assert_eq!(pair.expires_in, Some(10_000_000_000_000));
    assert!(pair.expires_at.is_none());
    assert!(!pair.is_expired());
}

#[tokio::test]
async fn test_unreachable_token_endpoint() {
    let server = MockServer::start().await;
    let config = auth_code_config(&server).build().unwrap();
    drop(server);

    let api = api(config);
    let err = api.get_token("abc").await.unwrap_err();
    assert!(matches!(
        err,
        UpworkError::Auth(AuthError::EndpointUnreachable { .. })
    ));
}

#[tokio::test]
async fn test_expired_token_refreshes_exactly_once() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(TOKEN_ENDPOINT))
        .and(body_string("grant_type=refresh_token&refresh_token=refresh-1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "access_token": "access-2",
            "refresh_token": "refresh-2",
            "expires_in": 86399
        })))
        .expect(1)
        .mount(&server)
        .await;

    let config = auth_code_config(&server)
        .access_token("access-1")
        .refresh_token("refresh-1")
        .expires_at(Utc::now() - Duration::minutes(5))
        .build()
        .unwrap();
    let api = api(config);

    let first = api.set_access_token().await.unwrap();
    assert_eq!(first.access_token, "access-2");
    assert_eq!(first.refresh_token.as_deref(), Some("refresh-2"));

    let second = api.set_access_token().await.unwrap();
    assert_eq!(second, first);

    let config = api.client().config();
    assert_eq!(config.access_token.as_deref(), Some("access-2"));
    assert_eq!(config.refresh_token.as_deref(), Some("refresh-2"));
}

#[tokio::test]
async fn test_unexpired_token_makes_no_call() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(500))
        .expect(0)
        .mount(&server)
        .await;

    let config = auth_code_config(&server)
        .access_token("access-1")
        .refresh_token("refresh-1")
        .expires_at_str("2999-01-01")
        .build()
        .unwrap();
    let api = api(config);

    let pair = api.set_access_token().await.unwrap();
    assert_eq!(
        pair,
        TokenPair::new("access-1")
            .with_refresh_token("refresh-1")
            .with_expires_at(integrations_upwork::parse_expires_at("2999-01-01").unwrap())
    );
}

#[tokio::test]
async fn test_client_credentials_grant() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(TOKEN_ENDPOINT))
        .and(body_string("grant_type=client_credentials"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "access_token": "service-token",
            "expires_in": 86399
        })))
        .expect(1)
        .mount(&server)
        .await;

    let config = upwork_config()
        .client_id("id")
        .client_secret("secret")
        .grant_type(GrantType::ClientCredentials)
        .token_host(server.uri())
        .build()
        .unwrap();
    let api = api(config);

    assert!(matches!(
        api.authorization_url(),
        Err(UpworkError::Configuration(_))
    ));

    let pair = api.get_token("ignored").await.unwrap();
    assert_eq!(pair.access_token, "service-token");
    assert!(pair.refresh_token.is_none());
}
