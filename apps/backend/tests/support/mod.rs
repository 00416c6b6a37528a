//! Shared helpers for integration tests.

#![allow(dead_code)]

use std::sync::Arc;

use actix_http::Request;
use actix_web::body::BoxBody;
use actix_web::dev::{Service, ServiceResponse};
use actix_web::{web, HttpResponse};
use backend::services::users::{MemoryUsers, User};
use backend::state::app_state::AppState;
use backend::state::security_config::SecurityConfig;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;

pub const TEST_SECRET: &str = "test_secret_key_for_testing_purposes_only";

/// Application state seeded with one known account, with direct handles to
/// the pieces tests need to poke at.
pub struct TestState {
    pub data: web::Data<AppState>,
    pub security: SecurityConfig,
    pub users: Arc<MemoryUsers>,
    pub alice: User,
}

pub fn seeded_state() -> TestState {
    let security = SecurityConfig::new(TEST_SECRET.as_bytes());
    let users = Arc::new(MemoryUsers::new());
    let alice = users.insert("alice", "correct-pw");

    let data = web::Data::new(AppState::new(users.clone(), security.clone()));

    TestState {
        data,
        security,
        users,
        alice,
    }
}

/// Drive a request that the auth gate is expected to reject.
///
/// Middleware rejections surface as service-level errors, not as regular
/// responses; render the error the way the server would so tests can assert
/// on the wire shape.
pub async fn call_rejected<S>(app: &S, req: Request) -> HttpResponse
where
    S: Service<Request, Response = ServiceResponse<BoxBody>, Error = actix_web::Error>,
{
    let err = app.call(req).await.expect_err("expected auth rejection");
    err.as_response_error().error_response()
}

/// Corrupt the signature segment of a compact JWT by flipping its last byte.
pub fn tamper_signature(token: &str) -> String {
    let (prefix, signature) = token
        .rsplit_once('.')
        .expect("compact JWT has three segments");
    let mut sig_bytes = URL_SAFE_NO_PAD
        .decode(signature)
        .expect("signature segment is base64url");
    let last = sig_bytes.len() - 1;
    sig_bytes[last] ^= 0x01;
    format!("{prefix}.{}", URL_SAFE_NO_PAD.encode(&sig_bytes))
}

#[ctor::ctor]
fn init_test_logging() {
    backend_test_support::test_logging::init();
}
