//! Bearer-token request gate
//!
//! Wraps protected routes. Extracts the bearer credential from the
//! Authorization header, runs token validation, and either forwards the
//! request with the resolved identity stored in request extensions or
//! rejects it before the inner service runs. OPTIONS requests always pass:
//! CORS preflight probes must never be asked to authenticate.

use std::rc::Rc;
use std::time::SystemTime;

use actix_web::dev::{forward_ready, Service, ServiceRequest, ServiceResponse, Transform};
use actix_web::http::{header, Method};
use actix_web::{web, Error, HttpMessage};
use futures_util::future::{ready, LocalBoxFuture, Ready};
use tracing::debug;

use crate::auth::validate::validate_token;
use crate::error::AppError;
use crate::extractors::current_user::CurrentUser;
use crate::state::app_state::AppState;

pub struct AuthGate;

impl<S, B> Transform<S, ServiceRequest> for AuthGate
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type InitError = ();
    type Transform = AuthGateMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(AuthGateMiddleware {
            service: Rc::new(service),
        }))
    }
}

pub struct AuthGateMiddleware<S> {
    service: Rc<S>,
}

impl<S, B> Service<ServiceRequest> for AuthGateMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        // Preflight probes are allowed through regardless of token state
        if req.method() == Method::OPTIONS {
            return Box::pin(self.service.call(req));
        }

        let token = match bearer_from_header(req.headers().get(header::AUTHORIZATION)) {
            Ok(token) => token,
            Err(err) => return Box::pin(async move { Err(err.into()) }),
        };

        let app_state = match req.app_data::<web::Data<AppState>>().cloned() {
            Some(state) => state,
            None => {
                return Box::pin(async {
                    Err(AppError::internal("AppState not available".to_string()).into())
                });
            }
        };

        let service = Rc::clone(&self.service);

        Box::pin(async move {
            let verdict = validate_token(
                &token,
                SystemTime::now(),
                &app_state.security,
                app_state.users.as_ref(),
            )
            .await;

            match verdict {
                Ok(user) => {
                    // Store the resolved identity BEFORE calling the service
                    req.extensions_mut().insert(CurrentUser {
                        id: user.id,
                        username: user.username,
                    });
                    service.call(req).await
                }
                Err(reason) => {
                    // The wire response is the same for every rejection
                    // reason; only the log keeps them apart.
                    debug!(path = %req.path(), %reason, "bearer token rejected");
                    Err(AppError::invalid_token().into())
                }
            }
        })
    }
}

/// Parse `Authorization: Bearer <credential>`.
///
/// - header absent, unreadable, or not a scheme+credential pair: missing token
/// - scheme other than bearer (case-insensitive): wrong scheme
fn bearer_from_header(header_value: Option<&header::HeaderValue>) -> Result<String, AppError> {
    let auth_value = header_value.ok_or_else(AppError::missing_token)?;

    let auth_str = auth_value
        .to_str()
        .map_err(|_| AppError::missing_token())?;

    let parts: Vec<&str> = auth_str.split_whitespace().collect();
    match parts.as_slice() {
        [scheme, credential] => {
            if !scheme.eq_ignore_ascii_case("bearer") {
                return Err(AppError::bad_scheme());
            }
            Ok((*credential).to_string())
        }
        _ => Err(AppError::missing_token()),
    }
}
