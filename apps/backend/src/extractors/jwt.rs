use jsonwebtoken::{decode, DecodingKey, Validation};
use serde::{Deserialize, Serialize};

use crate::error::AppError;
use crate::state::security_config::SecurityConfig;

/// Generic JWT claims that can be validated against any claims type
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct JwtClaims<C> {
    pub claims: C,
}

impl<C> JwtClaims<C>
where
    C: for<'de> Deserialize<'de>,
{
    /// Verify and decode a JWT token into the specified claims type
    pub fn verify(token: &str, security: &SecurityConfig) -> Result<Self, AppError> {
        // Configure validation to check expiration and pin algorithm to configured algorithm.
        let mut validation = Validation::new(security.algorithm);
        validation.validate_exp = true;

        decode::<C>(
            token,
            &DecodingKey::from_secret(&security.jwt_secret),
            &validation,
        )
        .map(|data| JwtClaims {
            claims: data.claims,
        })
        .map_err(|e| match e.kind() {
            jsonwebtoken::errors::ErrorKind::ExpiredSignature => {
                AppError::unauthorized_expired_jwt()
            }
            _ => AppError::unauthorized_invalid_jwt(),
        })
    }
}
