use actix_web::dev::Payload;
use actix_web::{FromRequest, HttpMessage, HttpRequest};
use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// Identity resolved by the auth gate for the current request.
///
/// Stored in request extensions by `AuthGate` after successful validation and
/// discarded with the request; handlers receive it through this extractor and
/// never re-validate. Requesting it on a route the gate does not wrap is a
/// wiring bug surfacing as 401.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct CurrentUser {
    pub id: i64,
    pub username: String,
}

impl FromRequest for CurrentUser {
    type Error = AppError;
    type Future = std::future::Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let result = req
            .extensions()
            .get::<CurrentUser>()
            .cloned()
            .ok_or_else(AppError::missing_token);

        std::future::ready(result)
    }
}
