//! API error-shape test helpers
//!
//! Assertions for the stable error contract without depending on backend
//! types. Every error response carries `{ code, message }`; rejected bearer
//! tokens additionally carry `error`/`error_description`, and every 401
//! advertises the Bearer scheme via `WWW-Authenticate`.

use actix_web::body::BoxBody;
use actix_web::dev::ServiceResponse;
use actix_web::http::header::HeaderMap;
use actix_web::http::StatusCode;
use actix_web::HttpResponse;
use serde::Deserialize;

/// Local error-body struct matching the backend's wire shape
/// but not depending on backend types.
#[derive(Debug, Deserialize)]
pub struct ApiErrorBodyLike {
    pub code: u16,
    pub message: String,
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub error_description: Option<String>,
}

/// Assert that response parts conform to the stable error contract.
///
/// Validates:
/// - HTTP status matches expected
/// - body `code` mirrors the HTTP status
/// - body `message` matches expected exactly
/// - `WWW-Authenticate: Bearer` is present on 401s and absent otherwise
///
/// Returns the parsed body so callers can make further assertions on the
/// optional `error`/`error_description` fields.
pub fn assert_api_error_from_parts(
    status: StatusCode,
    headers: &HeaderMap,
    body_bytes: &[u8],
    expected_status: StatusCode,
    expected_message: &str,
) -> ApiErrorBodyLike {
    assert_eq!(status, expected_status);

    let body_str =
        String::from_utf8(body_bytes.to_vec()).expect("Response body should be valid UTF-8");
    let body: ApiErrorBodyLike =
        serde_json::from_str(&body_str).expect("Response body should be valid error JSON");

    assert_eq!(body.code, expected_status.as_u16());
    assert_eq!(body.message, expected_message);

    let challenge = headers.get("WWW-Authenticate");
    if expected_status == StatusCode::UNAUTHORIZED {
        let value = challenge
            .expect("401 responses must carry WWW-Authenticate")
            .to_str()
            .expect("WWW-Authenticate should be valid UTF-8");
        assert_eq!(value, "Bearer");
    } else {
        assert!(
            challenge.is_none(),
            "non-401 responses must not advertise an auth scheme"
        );
    }

    body
}

/// Assert the error contract against an `HttpResponse`, e.g. one rendered
/// from a middleware rejection via `ResponseError::error_response`.
pub async fn assert_api_error_from_http_response(
    resp: HttpResponse,
    expected_status: StatusCode,
    expected_message: &str,
) -> ApiErrorBodyLike {
    let status = resp.status();
    let headers = resp.headers().clone();
    let body = actix_web::body::to_bytes(resp.into_body())
        .await
        .expect("response body should collect");

    assert_api_error_from_parts(status, &headers, &body, expected_status, expected_message)
}

/// Assert the error contract against a `ServiceResponse`, e.g. a handler
/// error that the route already rendered.
pub async fn assert_api_error(
    resp: ServiceResponse<BoxBody>,
    expected_status: StatusCode,
    expected_message: &str,
) -> ApiErrorBodyLike {
    let status = resp.status();
    let headers = resp.headers().clone();
    let body = actix_web::test::read_body(resp).await;

    assert_api_error_from_parts(status, &headers, &body, expected_status, expected_message)
}
