use actix_web::{web, HttpResponse, Result};
use serde::Serialize;

use crate::error::AppError;
use crate::extractors::current_user::CurrentUser;

#[derive(Debug, Serialize)]
pub struct MeResponse {
    pub id: i64,
    pub username: String,
}

/// Protected endpoint that returns the caller's identity
async fn me(auth: CurrentUser) -> Result<HttpResponse, AppError> {
    let response = MeResponse {
        id: auth.id,
        username: auth.username,
    };

    Ok(HttpResponse::Ok().json(response))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("").route(web::get().to(me)));
}
