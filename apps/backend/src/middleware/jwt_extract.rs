//! JWT extraction middleware
//!
//! Extracts JWT claims from the Authorization header and stores them in
//! request extensions. It only runs on protected scopes and rejects the
//! request with 401 before the handler sees it if no valid claims are
//! found.

use actix_web::dev::{forward_ready, Service, ServiceRequest, ServiceResponse, Transform};
use actix_web::http::header;
use actix_web::{web, Error, HttpMessage};
use futures_util::future::{ready, LocalBoxFuture, Ready};

use crate::auth::claims::BackendClaims;
use crate::error::AppError;
use crate::extractors::auth_token::parse_bearer;
use crate::extractors::jwt::JwtClaims;
use crate::state::app_state::AppState;

pub struct JwtExtract;

impl<S, B> Transform<S, ServiceRequest> for JwtExtract
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type InitError = ();
    type Transform = JwtExtractMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(JwtExtractMiddleware { service }))
    }
}

pub struct JwtExtractMiddleware<S> {
    service: S,
}

impl<S, B> Service<ServiceRequest> for JwtExtractMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        // Extract Authorization header and AppState before moving req.
        let auth_header = req.headers().get(header::AUTHORIZATION).cloned();
        let app_state = req.app_data::<web::Data<AppState>>().cloned();

        let token = match extract_bearer_from_header(auth_header.as_ref()) {
            Ok(token) => token,
            Err(err) => return Box::pin(async move { Err(err.into()) }),
        };

        let app_state = match app_state {
            Some(state) => state,
            None => {
                return Box::pin(async {
                    Err(AppError::internal("AppState not available").into())
                });
            }
        };

        match JwtClaims::<BackendClaims>::verify(&token, &app_state.security) {
            Ok(jwt_claims) => {
                // Store claims in request extensions BEFORE calling the service.
                req.extensions_mut().insert(jwt_claims.claims);

                let fut = self.service.call(req);
                Box::pin(fut)
            }
            Err(e) => Box::pin(async move { Err(e.into()) }),
        }
    }
}

fn extract_bearer_from_header(
    header_value: Option<&actix_web::http::header::HeaderValue>,
) -> Result<String, AppError> {
    let auth_value = header_value.ok_or_else(AppError::unauthorized_missing_bearer)?;

    let auth_str = auth_value
        .to_str()
        .map_err(|_| AppError::unauthorized_missing_bearer())?;

    parse_bearer(auth_str)
}

#[cfg(test)]
mod tests {
    use actix_web::http::header::HeaderValue;

    use super::extract_bearer_from_header;
    use crate::error::AppError;

    #[test]
    fn missing_header_is_missing_bearer() {
        assert!(matches!(
            extract_bearer_from_header(None),
            Err(AppError::UnauthorizedMissingBearer)
        ));
    }

    #[test]
    fn bare_scheme_is_missing_token() {
        let value = HeaderValue::from_static("Bearer");
        assert!(matches!(
            extract_bearer_from_header(Some(&value)),
            Err(AppError::UnauthorizedMissingToken)
        ));
    }

    #[test]
    fn well_formed_header_yields_token() {
        let value = HeaderValue::from_static("Bearer aaa.bbb.ccc");
        assert_eq!(
            extract_bearer_from_header(Some(&value)).unwrap(),
            "aaa.bbb.ccc"
        );
    }
}
