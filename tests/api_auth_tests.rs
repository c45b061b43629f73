// SPDX-License-Identifier: MIT

//! Bearer-token enforcement tests.
//!
//! Every protected endpoint must reject a missing token with 401 and a bad
//! or expired token with 403 — identically, never with partial success.

use axum::http::StatusCode;
use jsonwebtoken::{encode, Algorithm, EncodingKey, Header};
use serde::Serialize;
use std::time::{SystemTime, UNIX_EPOCH};

mod common;

/// Protected endpoints as (method, uri) pairs.
const PROTECTED: &[(&str, &str)] = &[
    ("GET", "/api/user/profile"),
    ("PUT", "/api/user/profile"),
    ("GET", "/api/user/programs"),
    ("POST", "/api/programs/yoga-101/purchase"),
    ("POST", "/api/memberships"),
];

#[derive(Serialize)]
struct Claims {
    sub: String,
    email: String,
    exp: usize,
    iat: usize,
}

/// Create a token with an arbitrary expiry offset (negative = expired).
fn make_jwt(signing_key: &[u8], exp_offset_secs: i64) -> String {
    let now = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap()
        .as_secs() as i64;

    let claims = Claims {
        sub: "user-123".to_string(),
        email: "ghost@x.com".to_string(),
        iat: now as usize,
        exp: (now + exp_offset_secs) as usize,
    };

    encode(
        &Header::new(Algorithm::HS256),
        &claims,
        &EncodingKey::from_secret(signing_key),
    )
    .unwrap()
}

async fn request(
    app: &axum::Router,
    method: &str,
    uri: &str,
    token: Option<&str>,
) -> axum::response::Response {
    match (method, token) {
        ("GET", token) => common::get(app, uri, token).await,
        ("POST", Some(t)) => common::post_json_auth(app, uri, t, serde_json::json!({})).await,
        ("PUT", Some(t)) => common::put_json_auth(app, uri, t, serde_json::json!({})).await,
        ("POST", None) => common::post_json(app, uri, serde_json::json!({})).await,
        ("PUT", None) => {
            use axum::body::Body;
            use axum::http::{header, Request};
            use tower::ServiceExt;
            app.clone()
                .oneshot(
                    Request::builder()
                        .method("PUT")
                        .uri(uri)
                        .header(header::CONTENT_TYPE, "application/json")
                        .body(Body::from("{}"))
                        .unwrap(),
                )
                .await
                .unwrap()
        }
        _ => unreachable!(),
    }
}

#[tokio::test]
async fn test_protected_routes_without_token() {
    let (app, _state) = common::create_test_app();

    for (method, uri) in PROTECTED {
        let response = request(&app, method, uri, None).await;
        assert_eq!(
            response.status(),
            StatusCode::UNAUTHORIZED,
            "{} {} should 401 without a token",
            method,
            uri
        );
        let body = common::body_json(response).await;
        assert_eq!(body["error"], "unauthorized");
    }
}

#[tokio::test]
async fn test_protected_routes_with_garbage_token() {
    let (app, _state) = common::create_test_app();

    for (method, uri) in PROTECTED {
        let response = request(&app, method, uri, Some("not-a-jwt")).await;
        assert_eq!(
            response.status(),
            StatusCode::FORBIDDEN,
            "{} {} should 403 with a garbage token",
            method,
            uri
        );
        let body = common::body_json(response).await;
        assert_eq!(body["error"], "invalid_token");
    }
}

#[tokio::test]
async fn test_protected_routes_with_expired_token() {
    let (app, state) = common::create_test_app();
    let expired = make_jwt(&state.config.jwt_secret, -3600);

    for (method, uri) in PROTECTED {
        let response = request(&app, method, uri, Some(&expired)).await;
        assert_eq!(
            response.status(),
            StatusCode::FORBIDDEN,
            "{} {} should 403 with an expired token",
            method,
            uri
        );
    }
}

#[tokio::test]
async fn test_protected_routes_with_wrong_key() {
    let (app, _state) = common::create_test_app();
    let forged = make_jwt(b"the_wrong_signing_key_material!!", 3600);

    for (method, uri) in PROTECTED {
        let response = request(&app, method, uri, Some(&forged)).await;
        assert_eq!(response.status(), StatusCode::FORBIDDEN);
    }
}

#[tokio::test]
async fn test_valid_token_for_missing_user_is_not_found() {
    let (app, state) = common::create_test_app();
    // Valid signature, but no record behind the identity.
    let token = make_jwt(&state.config.jwt_secret, 3600);

    let response = common::get(&app, "/api/user/profile", Some(&token)).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body = common::body_json(response).await;
    assert_eq!(body["error"], "not_found");
    assert_eq!(body["message"], "User not found");
}

#[tokio::test]
async fn test_public_routes_need_no_token() {
    let (app, _state) = common::create_test_app();

    let response = common::get(&app, "/api/health", None).await;
    assert_eq!(response.status(), StatusCode::OK);

    let response = common::get(&app, "/api/programs", None).await;
    assert_eq!(response.status(), StatusCode::OK);
}
