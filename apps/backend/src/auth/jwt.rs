use std::time::{SystemTime, UNIX_EPOCH};

use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};

use crate::auth::claims::Claims;
use crate::auth::AuthError;
use crate::error::AppError;
use crate::state::security_config::SecurityConfig;

/// Mint a HS256 JWT access token.
///
/// Builds claims with `iat = nbf = now` and `exp = now + ttl` (TTL from the
/// security config) and signs them with the process-wide secret. Returns the
/// compact token together with its lifetime in seconds so the login response
/// can echo `expires_in`.
///
/// Fails only when the clock or the signing backend fails; both are internal
/// errors, never client errors.
pub fn mint_access_token(
    user_id: i64,
    now: SystemTime,
    security: &SecurityConfig,
) -> Result<(String, u64), AppError> {
    let iat = now
        .duration_since(UNIX_EPOCH)
        .map_err(|_| AppError::internal("Failed to get current time".to_string()))?
        .as_secs() as i64;

    let ttl = security.token_ttl_secs;
    let claims = Claims {
        sub: user_id,
        iat,
        nbf: iat,
        exp: Some(iat + ttl as i64),
    };

    let token = sign_claims(&claims, security)?;
    Ok((token, ttl))
}

/// Sign a claim set into a compact token. Side-effect free.
pub fn sign_claims(claims: &Claims, security: &SecurityConfig) -> Result<String, AppError> {
    encode(
        &Header::new(security.algorithm),
        claims,
        &EncodingKey::from_secret(&security.jwt_secret),
    )
    .map_err(|e| AppError::internal(format!("Failed to encode JWT: {e}")))
}

/// Verify signature and structure, returning the embedded claims.
///
/// Every decode failure (bad signature, malformed segments, wrong algorithm)
/// collapses to `AuthError::Signature` before any claim is inspected. Expiry
/// is deliberately not checked here; the validator owns the timing rules so
/// that a missing expiry and a stale expiry stay distinguishable.
pub fn decode_claims(token: &str, security: &SecurityConfig) -> Result<Claims, AuthError> {
    // Pin the algorithm to the configured one; disable the library's own
    // expiry handling since Claims.exp is optional and checked downstream.
    let mut validation = Validation::new(security.algorithm);
    validation.required_spec_claims.clear();
    validation.validate_exp = false;
    validation.validate_nbf = false;

    decode::<Claims>(
        token,
        &DecodingKey::from_secret(&security.jwt_secret),
        &validation,
    )
    .map(|data| data.claims)
    .map_err(|_| AuthError::Signature)
}

#[cfg(test)]
mod tests {
    use std::time::{SystemTime, UNIX_EPOCH};

    use super::{decode_claims, mint_access_token, sign_claims};
    use crate::auth::claims::Claims;
    use crate::auth::AuthError;
    use crate::state::security_config::SecurityConfig;

    #[test]
    fn test_mint_and_decode_roundtrip() {
        let security = SecurityConfig::new("test_secret_key_for_testing_purposes_only".as_bytes());

        let now = SystemTime::now();
        let (token, ttl) = mint_access_token(42, now, &security).unwrap();
        assert_eq!(ttl, 3600);

        let claims = decode_claims(&token, &security).unwrap();
        assert_eq!(claims.sub, 42);
        assert_eq!(
            claims.iat,
            now.duration_since(UNIX_EPOCH).unwrap().as_secs() as i64
        );
        assert_eq!(claims.nbf, claims.iat);
        assert_eq!(claims.exp, Some(claims.iat + 3600));
    }

    #[test]
    fn test_bad_signature() {
        // Mint with secret A, verify with secret B
        let security_a = SecurityConfig::new("secret-A".as_bytes());
        let security_b = SecurityConfig::new("secret-B".as_bytes());

        let (token, _) = mint_access_token(7, SystemTime::now(), &security_a).unwrap();

        assert_eq!(
            decode_claims(&token, &security_b),
            Err(AuthError::Signature)
        );
    }

    #[test]
    fn test_garbage_token_is_signature_error() {
        let security = SecurityConfig::new("test_secret".as_bytes());

        for garbage in ["", "not-a-jwt", "a.b", "a.b.c.d", "ö.ö.ö"] {
            assert_eq!(
                decode_claims(garbage, &security),
                Err(AuthError::Signature),
                "expected rejection for {garbage:?}"
            );
        }
    }

    #[test]
    fn test_expiry_less_claims_survive_codec() {
        // The codec itself accepts a claim set without exp; rejecting it is
        // the validator's job.
        let security = SecurityConfig::new("test_secret".as_bytes());

        let claims = Claims {
            sub: 1,
            iat: 1_700_000_000,
            nbf: 1_700_000_000,
            exp: None,
        };
        let token = sign_claims(&claims, &security).unwrap();

        let decoded = decode_claims(&token, &security).unwrap();
        assert_eq!(decoded.exp, None);
    }

    #[test]
    fn test_custom_ttl_from_config() {
        let security =
            SecurityConfig::new("test_secret".as_bytes()).with_token_ttl(60);

        let now = SystemTime::now();
        let (token, ttl) = mint_access_token(5, now, &security).unwrap();
        assert_eq!(ttl, 60);

        let claims = decode_claims(&token, &security).unwrap();
        assert_eq!(claims.exp, Some(claims.iat + 60));
    }
}
