//! `POST /session` 통합 테스트

#[macro_use]
mod common;

use actix_web::test;
use serde_json::{json, Value};

use common::body_text;
use shop_service_backend::services::auth::TokenCodec;

#[actix_web::test]
async fn test_login_issues_verifiable_token() {
    let app = init_app!();
    let token = sign_up_and_login!(app, "tester@example.com", "test");

    assert_eq!(token.split('.').count(), 3);

    let req = test::TestRequest::get().uri("/users").to_request();
    let users: Value = test::call_and_read_body_json(&app, req).await;
    let user_id = users[0]["id"].as_i64().unwrap();

    assert_eq!(TokenCodec::new(common::SECRET).verify(&token).unwrap(), user_id);
}

#[actix_web::test]
async fn test_login_returns_created() {
    let app = init_app!();
    sign_up_and_login!(app, "tester@example.com", "test");

    let req = test::TestRequest::post()
        .uri("/session")
        .set_json(json!({ "email": "tester@example.com", "password": "test" }))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), 201);
    assert!(body_text(&test::read_body(resp).await).contains("accessToken"));
}

#[actix_web::test]
async fn test_login_with_unregistered_user() {
    let app = init_app!();

    let req = test::TestRequest::post()
        .uri("/session")
        .set_json(json!({ "email": "tester@example.com", "password": "test" }))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), 400);
    assert!(body_text(&test::read_body(resp).await).contains("User bad request"));
}

#[actix_web::test]
async fn test_login_with_wrong_password() {
    let app = init_app!();
    sign_up_and_login!(app, "tester@example.com", "test");

    let req = test::TestRequest::post()
        .uri("/session")
        .set_json(json!({ "email": "tester@example.com", "password": "wrong" }))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), 400);
    assert!(body_text(&test::read_body(resp).await).contains("User bad request"));
}

#[actix_web::test]
async fn test_login_with_identifier_that_is_not_an_email() {
    let app = init_app!();

    let req = test::TestRequest::post()
        .uri("/session")
        .set_json(json!({ "email": "nobody", "password": "x" }))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), 400);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "User bad request: nobody");
}
