use actix_web::{test, web, App, HttpResponse};
use backend::middleware::RequestTrace;
use backend::{AppError, ErrorCode};

async fn test_error_handler() -> Result<HttpResponse, AppError> {
    Err(AppError::invalid(
        ErrorCode::ValidationError,
        "Example failure".to_string(),
    ))
}

#[actix_web::test]
async fn error_responses_carry_the_problem_details_contract() {
    // Minimal test app with only the trace middleware wired.
    let app = test::init_service(
        App::new()
            .wrap(RequestTrace)
            .route("/_test/error", web::get().to(test_error_handler)),
    )
    .await;

    let req = test::TestRequest::get().uri("/_test/error").to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status().as_u16(), 400);

    let headers = resp.headers().clone();
    let request_id = headers
        .get("x-request-id")
        .expect("x-request-id header present")
        .to_str()
        .unwrap();
    assert!(!request_id.is_empty());

    let content_type = headers.get("content-type").unwrap().to_str().unwrap();
    assert_eq!(content_type, "application/problem+json");

    let body = test::read_body(resp).await;
    let problem_details: serde_json::Value = serde_json::from_slice(&body).unwrap();

    for key in ["type", "title", "status", "detail", "code", "trace_id"] {
        assert!(
            problem_details.get(key).is_some(),
            "problem body missing key {key}"
        );
    }

    assert_eq!(problem_details["code"], "VALIDATION_ERROR");
    assert_eq!(problem_details["detail"], "Example failure");
    assert_eq!(problem_details["status"], 400);
    assert_eq!(problem_details["title"], "Validation Error");

    // trace_id in body equals the x-request-id header and the x-trace-id header.
    let trace_id_in_body = problem_details["trace_id"].as_str().unwrap();
    assert_eq!(trace_id_in_body, request_id);
    let trace_id_header = headers.get("x-trace-id").unwrap().to_str().unwrap();
    assert_eq!(trace_id_in_body, trace_id_header);
}
