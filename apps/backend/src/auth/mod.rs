pub mod claims;
pub mod jwt;
pub mod validate;

use thiserror::Error;

/// Why a presented token was rejected.
///
/// Internal taxonomy only: the request gate collapses every variant into the
/// same client-visible 401 so that a probing client cannot tell an expired
/// token from a forged one. Keep the variants distinct here for logs and
/// tests.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum AuthError {
    /// Signature mismatch or structurally malformed token.
    #[error("token signature or structure invalid")]
    Signature,
    /// The claim set carries no expiry; such a token was never validly issued.
    #[error("token is missing the expiry claim")]
    MissingExpiry,
    /// The expiry claim is in the past.
    #[error("token expired")]
    Expired,
    /// The subject claim does not resolve to a known user.
    #[error("token subject does not resolve to a user")]
    UnknownSubject,
}
