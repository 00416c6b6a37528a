//! Claim set carried by backend-issued access tokens.

use serde::{Deserialize, Serialize};

/// Claims included in our backend-issued access tokens.
///
/// Issued claims always satisfy `iat == nbf <= exp`. `exp` is optional in the
/// type only so that a token lacking it decodes cleanly and can be rejected
/// by the validator as a distinct failure instead of a parse error; the
/// issuer always sets it.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct Claims {
    /// User identifier (users.id)
    pub sub: i64,
    /// Issued-at (seconds since epoch)
    pub iat: i64,
    /// Not-before (seconds since epoch, equals `iat` on issuance)
    pub nbf: i64,
    /// Expiry (seconds since epoch)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exp: Option<i64>,
}
