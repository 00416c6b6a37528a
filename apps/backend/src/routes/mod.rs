use actix_web::web;

use crate::middleware::auth_gate::AuthGate;

pub mod auth;
pub mod health;
pub mod user;

/// Configure application routes for tests and non-HttpServer contexts.
///
/// Registers the same paths `main.rs` serves, including the auth gate on the
/// protected scope; the gate is part of the contract under test, not an
/// optional wrapper.
pub fn configure(cfg: &mut web::ServiceConfig) {
    // Health check routes: /health
    cfg.service(web::scope("/health").configure(health::configure_routes));

    // Token exchange: /api/v1/oauth/token (public)
    cfg.service(web::scope("/api/v1/oauth").configure(auth::configure_routes));

    // Protected user routes: /api/v1/user
    cfg.service(
        web::scope("/api/v1/user")
            .wrap(AuthGate)
            .configure(user::configure_routes),
    );
}
