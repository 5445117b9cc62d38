use std::time::Duration;

use axum::{
    body::Body,
    http::{header, HeaderMap, HeaderValue, Method, Request, StatusCode},
};
use http_body_util::BodyExt;
use messaging_auth_contracts::{Authentication, MockAuthService};
use messaging_core_contact_contracts::{ContactListError, MockContactFeatureService};
use messaging_core_health_contracts::MockHealthFeatureService;
use messaging_core_recipient_contracts::MockRecipientFeatureService;
use messaging_models::auth::AuthError;
use pretty_assertions::assert_eq;
use tower::ServiceExt;

use crate::{RestServer, RestServerConfig};


type Sut = RestServer<
    MockHealthFeatureService,
    MockContactFeatureService,
    MockRecipientFeatureService,
    MockAuthService,
>;

/// Server whose token check rejects every token, so no TTL header is added.
fn sut() -> Sut {
    let mut auth = MockAuthService::new();
    auth.expect_authenticate()
        .returning(|_| Err(AuthError::InvalidToken));
    RestServer {
        auth,
        ..Sut::default()
    }
}

struct TestResponse {
    status: StatusCode,
    headers: HeaderMap,
    body: serde_json::Value,
}

async fn send(sut: Sut, request: Request<Body>) -> TestResponse {
    let response = sut.router().oneshot(request).await.unwrap();
    let status = response.status();
    let headers = response.headers().clone();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body = if bytes.is_empty() {
        serde_json::Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };

    TestResponse {
        status,
        headers,
        body,
    }
}

fn request(method: Method, uri: &str, token: Option<&str>, body: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
    }
    match body {
        Some(body) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_owned()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    }
}

fn preflight() -> Request<Body> {
    Request::builder()
        .method(Method::OPTIONS)
        .uri("/api/v1/contact")
        .header(header::ORIGIN, "https://example.com")
        .header(header::ACCESS_CONTROL_REQUEST_METHOD, "POST")
        .body(Body::empty())
        .unwrap()
}

#[tokio::test]
async fn request_id() {
    // Arrange
    let health = MockHealthFeatureService::new().with_get_status(
        messaging_core_health_contracts::HealthStatus {
            database: true,
            queue: true,
        },
    );
    let sut = RestServer {
        health,
        ..sut()
    };

    // Act
    let response = send(sut, request(Method::GET, "/health", None, None)).await;

    // Assert
    assert!(response.headers.contains_key("X-Request-Id"));
}

#[tokio::test]
async fn token_ttl() {
    // Arrange
    let contact = MockContactFeatureService::new().with_list_messages("token", Ok(vec![]));
    let auth = MockAuthService::new().with_authenticate(
        "token",
        Ok(Authentication {
            subject: "admin".into(),
            ttl: Duration::from_secs(1337),
        }),
    );
    let sut = RestServer {
        contact,
        auth,
        ..sut()
    };

    // Act
    let response = send(
        sut,
        request(Method::GET, "/api/v1/messages", Some("token"), None),
    )
    .await;

    // Assert
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.headers["X-Token-TTL"], "1337");
}

#[tokio::test]
async fn token_ttl_invalid_token() {
    // Arrange
    let contact = MockContactFeatureService::new().with_list_messages(
        "expired",
        Err(ContactListError::Auth(AuthError::InvalidToken)),
    );
    let sut = RestServer {
        contact,
        ..sut()
    };

    // Act
    let response = send(
        sut,
        request(Method::GET, "/api/v1/messages", Some("expired"), None),
    )
    .await;

    // Assert
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert!(!response.headers.contains_key("X-Token-TTL"));
}

#[tokio::test]
async fn cors_preflight() {
    // Arrange
    let sut = RestServer {
        config: RestServerConfig {
            allowed_origins: vec![HeaderValue::from_static("https://example.com")],
        },
        ..sut()
    };

    // Act
    let response = send(sut, preflight()).await;

    // Assert
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(
        response.headers[header::ACCESS_CONTROL_ALLOW_ORIGIN],
        "https://example.com"
    );
}

#[tokio::test]
async fn cors_disabled() {
    // Arrange
    let sut = sut();

    // Act
    let response = send(sut, preflight()).await;

    // Assert
    assert!(!response
        .headers
        .contains_key(header::ACCESS_CONTROL_ALLOW_ORIGIN));
}

#[tokio::test]
async fn unknown_route() {
    // Arrange
    let sut = sut();

    // Act
    let response = send(sut, request(Method::GET, "/api/v1/unknown", None, None)).await;

    // Assert
    assert_eq!(response.status, StatusCode::NOT_FOUND);
}
