use actix_web::{dev::Payload, http::header, FromRequest, HttpRequest};
use serde::{Deserialize, Serialize};

use crate::AppError;

/// Authentication token extracted from the Authorization header.
///
/// Distinguishes the two pre-verification failures: no Authorization
/// header at all, and a header whose token segment is missing or empty.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct AuthToken {
    pub token: String,
}

/// Parse "Bearer <token>" out of an Authorization header value.
pub fn parse_bearer(auth_value: &str) -> Result<String, AppError> {
    let mut parts = auth_value.split_whitespace();

    match parts.next() {
        Some("Bearer") => {}
        _ => return Err(AppError::unauthorized_missing_bearer()),
    }

    let token = parts.next().unwrap_or_default();
    if token.is_empty() || parts.next().is_some() {
        return Err(AppError::unauthorized_missing_token());
    }

    Ok(token.to_string())
}

impl FromRequest for AuthToken {
    type Error = AppError;
    type Future = std::pin::Pin<Box<dyn std::future::Future<Output = Result<Self, Self::Error>>>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        let req = req.clone();

        Box::pin(async move {
            let auth_header = req
                .headers()
                .get(header::AUTHORIZATION)
                .ok_or_else(AppError::unauthorized_missing_bearer)?;

            let auth_value = auth_header
                .to_str()
                .map_err(|_| AppError::unauthorized_missing_bearer())?;

            let token = parse_bearer(auth_value)?;

            Ok(AuthToken { token })
        })
    }
}

#[cfg(test)]
mod tests {
    use super::parse_bearer;
    use crate::AppError;

    #[test]
    fn parses_well_formed_bearer() {
        assert_eq!(parse_bearer("Bearer abc.def.ghi").unwrap(), "abc.def.ghi");
    }

    #[test]
    fn rejects_wrong_scheme() {
        assert!(matches!(
            parse_bearer("Basic dXNlcjpwdw=="),
            Err(AppError::UnauthorizedMissingBearer)
        ));
    }

    #[test]
    fn rejects_missing_token_segment() {
        assert!(matches!(
            parse_bearer("Bearer"),
            Err(AppError::UnauthorizedMissingToken)
        ));
        assert!(matches!(
            parse_bearer("Bearer "),
            Err(AppError::UnauthorizedMissingToken)
        ));
    }

    #[test]
    fn rejects_extra_segments() {
        assert!(matches!(
            parse_bearer("Bearer one two"),
            Err(AppError::UnauthorizedMissingToken)
        ));
    }
}
