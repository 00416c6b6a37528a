use std::time::{SystemTime, UNIX_EPOCH};

use crate::auth::jwt::decode_claims;
use crate::auth::AuthError;
use crate::services::users::{User, UserDirectory};
use crate::state::security_config::SecurityConfig;

/// Validate a bearer token and resolve the identity it asserts.
///
/// Order matters:
/// 1. signature/structure via the codec;
/// 2. the expiry claim must be present at all (a token without one was never
///    validly issued);
/// 3. whole-second expiry comparison against `now`, no leeway window;
/// 4. fresh user lookup, so a token for a since-deleted user is rejected even
///    though it is cryptographically intact.
///
/// Pure apart from the lookup; validating the same unexpired token twice
/// resolves the same identity both times.
pub async fn validate_token(
    token: &str,
    now: SystemTime,
    security: &SecurityConfig,
    users: &dyn UserDirectory,
) -> Result<User, AuthError> {
    let claims = decode_claims(token, security)?;

    let exp = claims.exp.ok_or(AuthError::MissingExpiry)?;

    // Pre-epoch clocks read as 0 and fail the comparison like any stale exp.
    let now_secs = now
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs() as i64)
        .unwrap_or(0);
    if exp < now_secs {
        return Err(AuthError::Expired);
    }

    users
        .find_by_id(claims.sub)
        .await
        .ok_or(AuthError::UnknownSubject)
}
