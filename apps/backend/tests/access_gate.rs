mod support;

use std::time::{Duration, SystemTime};

use actix_http::Request;
use actix_web::body::BoxBody;
use actix_web::dev::ServiceResponse;
use actix_web::http::StatusCode;
use actix_web::test;
use backend::{mint_access_token, AppError, ErrorCode};
use backend_test_support::problem_details::assert_problem_details_from_service_response;
use backend_test_support::unique_helpers::{unique_email, unique_str};
use serde_json::json;
use support::{build_test_state, create_test_app, test_security_config};

/// Gate rejections happen in middleware, so they surface as service errors
/// rather than rendered responses. Capture status + canonical code.
async fn call_and_capture_error<S>(
    app: &S,
    req: Request,
) -> Result<(StatusCode, ErrorCode), actix_web::Error>
where
    S: actix_web::dev::Service<
        Request,
        Response = ServiceResponse<BoxBody>,
        Error = actix_web::Error,
    >,
{
    let err = app.call(req).await.expect_err("expected error response");
    let status = err.as_response_error().status_code();
    let code = err
        .as_error::<AppError>()
        .expect("expected AppError")
        .code();
    Ok((status, code))
}

#[actix_web::test]
async fn missing_authorization_header_is_rejected() -> Result<(), Box<dyn std::error::Error>> {
    let state = build_test_state().await?;
    let app = create_test_app(state).with_prod_routes().build().await?;

    let req = test::TestRequest::get().uri("/api/appointments").to_request();

    let (status, code) = call_and_capture_error(&app, req).await?;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(code, ErrorCode::UnauthorizedMissingBearer);

    Ok(())
}

#[actix_web::test]
async fn bearer_without_token_is_rejected() -> Result<(), Box<dyn std::error::Error>> {
    let state = build_test_state().await?;
    let app = create_test_app(state).with_prod_routes().build().await?;

    let req = test::TestRequest::get()
        .uri("/api/appointments")
        .insert_header(("Authorization", "Bearer"))
        .to_request();

    let (status, code) = call_and_capture_error(&app, req).await?;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(code, ErrorCode::UnauthorizedMissingToken);

    Ok(())
}

#[actix_web::test]
async fn garbage_token_is_invalid_jwt() -> Result<(), Box<dyn std::error::Error>> {
    let state = build_test_state().await?;
    let app = create_test_app(state).with_prod_routes().build().await?;

    let req = test::TestRequest::get()
        .uri("/api/appointments")
        .insert_header(("Authorization", "Bearer not.a.jwt"))
        .to_request();

    let (status, code) = call_and_capture_error(&app, req).await?;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(code, ErrorCode::UnauthorizedInvalidJwt);

    Ok(())
}

#[actix_web::test]
async fn expired_token_is_rejected_as_expired() -> Result<(), Box<dyn std::error::Error>> {
    let state = build_test_state().await?;
    let app = create_test_app(state).with_prod_routes().build().await?;

    // 25 hours ago, past the 24-hour expiry boundary
    let twenty_five_hours_ago = SystemTime::now() - Duration::from_secs(25 * 60 * 60);
    let token = mint_access_token(
        &unique_str("sub"),
        &unique_email("expired"),
        twenty_five_hours_ago,
        &test_security_config(),
    )?;

    let req = test::TestRequest::get()
        .uri("/api/appointments")
        .insert_header(("Authorization", format!("Bearer {token}")))
        .to_request();

    let (status, code) = call_and_capture_error(&app, req).await?;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(code, ErrorCode::UnauthorizedExpiredJwt);

    Ok(())
}

#[actix_web::test]
async fn token_signed_with_other_secret_is_rejected() -> Result<(), Box<dyn std::error::Error>> {
    let state = build_test_state().await?;
    let app = create_test_app(state).with_prod_routes().build().await?;

    let other_secret =
        backend::SecurityConfig::new("a_completely_different_secret_material".as_bytes());
    let token = mint_access_token(
        &unique_str("sub"),
        &unique_email("foreign"),
        SystemTime::now(),
        &other_secret,
    )?;

    let req = test::TestRequest::get()
        .uri("/api/appointments")
        .insert_header(("Authorization", format!("Bearer {token}")))
        .to_request();

    let (status, code) = call_and_capture_error(&app, req).await?;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(code, ErrorCode::UnauthorizedInvalidJwt);

    Ok(())
}

#[actix_web::test]
async fn session_restore_requires_a_token() -> Result<(), Box<dyn std::error::Error>> {
    let state = build_test_state().await?;
    let app = create_test_app(state).with_prod_routes().build().await?;

    // /api/auth is public, but /api/auth/me carries its own gate.
    let req = test::TestRequest::get().uri("/api/auth/me").to_request();

    let (status, code) = call_and_capture_error(&app, req).await?;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(code, ErrorCode::UnauthorizedMissingBearer);

    Ok(())
}

#[actix_web::test]
async fn valid_token_for_missing_user_is_forbidden() -> Result<(), Box<dyn std::error::Error>> {
    let state = build_test_state().await?;
    let app = create_test_app(state).with_prod_routes().build().await?;

    // Syntactically valid token whose subject has no row in the database.
    // The gate lets it through; the user lookup rejects it with 403.
    let token = mint_access_token(
        &unique_str("ghost"),
        &unique_email("ghost"),
        SystemTime::now(),
        &test_security_config(),
    )?;

    let req = test::TestRequest::get()
        .uri("/api/appointments")
        .insert_header(("Authorization", format!("Bearer {token}")))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_problem_details_from_service_response(
        resp,
        "FORBIDDEN_USER_NOT_FOUND",
        StatusCode::FORBIDDEN,
        None,
    )
    .await;

    Ok(())
}

#[actix_web::test]
async fn registered_token_passes_the_gate() -> Result<(), Box<dyn std::error::Error>> {
    let state = build_test_state().await?;
    let app = create_test_app(state).with_prod_routes().build().await?;

    let register = test::TestRequest::post()
        .uri("/api/auth/register")
        .set_json(json!({
            "fullName": "Pat Doe",
            "email": unique_email("gate"),
            "password": "hunter2!"
        }))
        .to_request();
    let register_resp = test::call_service(&app, register).await;
    assert_eq!(register_resp.status(), StatusCode::CREATED);
    let body: serde_json::Value = test::read_body_json(register_resp).await;
    let token = body["token"].as_str().expect("token should be present");

    let req = test::TestRequest::get()
        .uri("/api/appointments")
        .insert_header(("Authorization", format!("Bearer {token}")))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::OK);
    let appointments: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(appointments, json!([]));

    Ok(())
}
