//! HTTP 통합 테스트 공용 헬퍼
//!
//! 인메모리 저장소로 조립한 전체 앱을 띄우고, 회원가입 후 로그인해
//! 액세스 토큰을 얻는 과정을 제공합니다.

#![allow(dead_code, unused_macros)]

pub const SECRET: &str = "12345678901234567890123456789010";

/// 인메모리 저장소로 조립한 전체 앱
macro_rules! init_app {
    () => {{
        let registry = shop_service_backend::core::registry::ServiceRegistry::in_memory(
            common::SECRET,
            4,
        );

        actix_web::test::init_service(
            actix_web::App::new()
                .configure(|cfg| registry.configure(cfg))
                .configure(shop_service_backend::routes::configure_all_routes),
        )
        .await
    }};
}

/// 사용자를 등록하고 로그인해 액세스 토큰을 돌려줍니다.
macro_rules! sign_up_and_login {
    ($app:expr, $email:expr, $password:expr) => {{
        let req = actix_web::test::TestRequest::post()
            .uri("/users")
            .set_json(serde_json::json!({ "name": "tester", "email": $email, "password": $password }))
            .to_request();
        let resp = actix_web::test::call_service(&$app, req).await;
        assert_eq!(resp.status(), 201);

        let req = actix_web::test::TestRequest::post()
            .uri("/session")
            .set_json(serde_json::json!({ "email": $email, "password": $password }))
            .to_request();
        let session: serde_json::Value = actix_web::test::call_and_read_body_json(&$app, req).await;

        session["accessToken"]
            .as_str()
            .expect("accessToken 이 응답에 있어야 합니다")
            .to_string()
    }};
}

pub fn bearer(token: &str) -> (&'static str, String) {
    ("Authorization", format!("Bearer {}", token))
}

pub fn body_text(bytes: &[u8]) -> String {
    String::from_utf8_lossy(bytes).to_string()
}

/// 서명 구간 가운데 글자 하나를 바꿉니다.
pub fn tamper(token: &str) -> String {
    let signature_start = token.rfind('.').map(|i| i + 1).unwrap_or(0);
    let index = signature_start + (token.len() - signature_start) / 2;
    let replacement = if &token[index..index + 1] == "A" { "B" } else { "A" };

    let mut tampered = token.to_string();
    tampered.replace_range(index..index + 1, replacement);
    tampered
}
