use std::time::SystemTime;

use actix_web::http::header;
use actix_web::{web, HttpResponse, Result};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::auth::jwt::mint_access_token;
use crate::error::AppError;
use crate::state::app_state::AppState;

#[derive(Debug, Deserialize)]
pub struct TokenRequest {
    #[serde(default)]
    pub grant_type: String,
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
}

#[derive(Debug, Serialize)]
pub struct TokenResponse {
    pub access_token: String,
    pub token_type: String,
    pub expires_in: u64,
}

/// Exchange a username/password pair for a bearer token.
///
/// Only the `password` grant is supported. Credential verification is
/// delegated to the user directory; a miss never reveals which half of the
/// pair was wrong. The response body carries a credential, so caches are
/// told to keep out.
async fn issue_token(
    form: web::Form<TokenRequest>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    if !form.grant_type.eq_ignore_ascii_case("password") {
        return Err(AppError::bad_grant_type());
    }

    let user = app_state
        .users
        .verify_credentials(&form.username, &form.password)
        .await
        .ok_or_else(AppError::bad_credentials)?;

    let (access_token, expires_in) =
        mint_access_token(user.id, SystemTime::now(), &app_state.security)?;

    info!(user_id = user.id, expires_in, "access token issued");

    let response = TokenResponse {
        access_token,
        token_type: "Bearer".to_string(),
        expires_in,
    };

    Ok(HttpResponse::Ok()
        .insert_header((header::CACHE_CONTROL, "no-store"))
        .insert_header((header::PRAGMA, "no-cache"))
        .json(response))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("/token").route(web::post().to(issue_token)));
}
