//! Claims carried by medibook-issued access tokens once verified.

use serde::{Deserialize, Serialize};

/// Verified token claims, inserted into request extensions by the
/// `JwtExtract` access gate and consumed by the `CurrentUser` extractor.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct BackendClaims {
    /// Opaque account identifier (users.sub), never a database key
    pub sub: String,
    /// Email the token was issued against
    pub email: String,
    /// Expiry (seconds since epoch)
    pub exp: usize,
}
