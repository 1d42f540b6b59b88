mod support;

use actix_web::http::StatusCode;
use actix_web::test;
use backend_test_support::problem_details::assert_problem_details_from_service_response;
use serde_json::json;
use support::factory::register_user;
use support::{build_test_state, create_test_app};

async fn apply_as_doctor<S>(app: &S, token: &str) -> i64
where
    S: actix_web::dev::Service<
        actix_http::Request,
        Response = actix_web::dev::ServiceResponse<actix_web::body::BoxBody>,
        Error = actix_web::Error,
    >,
{
    let req = test::TestRequest::post()
        .uri("/api/doctors/apply")
        .insert_header(("Authorization", format!("Bearer {token}")))
        .set_json(json!({ "specialty": "Cardiology" }))
        .to_request();
    let resp = test::call_service(app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    let body: serde_json::Value = test::read_body_json(resp).await;
    body["id"].as_i64().expect("doctor id")
}

#[actix_web::test]
async fn booking_creates_pending_appointment() -> Result<(), Box<dyn std::error::Error>> {
    let state = build_test_state().await?;
    let app = create_test_app(state).with_prod_routes().build().await?;

    let doctor_user = register_user(&app, "doc").await;
    let doctor_id = apply_as_doctor(&app, &doctor_user.token).await;

    let patient = register_user(&app, "patient").await;

    let req = test::TestRequest::post()
        .uri("/api/appointments")
        .insert_header(("Authorization", format!("Bearer {}", patient.token)))
        .set_json(json!({ "doctorId": doctor_id, "date": "2026-09-15" }))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::CREATED);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["status"], "pending");
    assert_eq!(body["doctorId"], doctor_id);
    assert_eq!(body["userId"], patient.id);
    assert_eq!(body["date"], "2026-09-15");

    Ok(())
}

#[actix_web::test]
async fn booking_requires_a_date() -> Result<(), Box<dyn std::error::Error>> {
    let state = build_test_state().await?;
    let app = create_test_app(state).with_prod_routes().build().await?;

    let doctor_user = register_user(&app, "doc").await;
    let doctor_id = apply_as_doctor(&app, &doctor_user.token).await;

    let patient = register_user(&app, "patient").await;

    let req = test::TestRequest::post()
        .uri("/api/appointments")
        .insert_header(("Authorization", format!("Bearer {}", patient.token)))
        .set_json(json!({ "doctorId": doctor_id, "date": "" }))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_problem_details_from_service_response(
        resp,
        "INVALID_DATE",
        StatusCode::BAD_REQUEST,
        None,
    )
    .await;

    Ok(())
}

#[actix_web::test]
async fn booking_unknown_doctor_is_not_found() -> Result<(), Box<dyn std::error::Error>> {
    let state = build_test_state().await?;
    let app = create_test_app(state).with_prod_routes().build().await?;

    let patient = register_user(&app, "patient").await;

    let req = test::TestRequest::post()
        .uri("/api/appointments")
        .insert_header(("Authorization", format!("Bearer {}", patient.token)))
        .set_json(json!({ "doctorId": 9999, "date": "2026-09-15" }))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_problem_details_from_service_response(
        resp,
        "DOCTOR_NOT_FOUND",
        StatusCode::NOT_FOUND,
        None,
    )
    .await;

    Ok(())
}

#[actix_web::test]
async fn listing_returns_own_appointments_newest_first() -> Result<(), Box<dyn std::error::Error>>
{
    let state = build_test_state().await?;
    let app = create_test_app(state).with_prod_routes().build().await?;

    let doctor_user = register_user(&app, "doc").await;
    let doctor_id = apply_as_doctor(&app, &doctor_user.token).await;

    let patient = register_user(&app, "patient").await;
    let bystander = register_user(&app, "bystander").await;

    for date in ["2026-09-15", "2026-09-16"] {
        let req = test::TestRequest::post()
            .uri("/api/appointments")
            .insert_header(("Authorization", format!("Bearer {}", patient.token)))
            .set_json(json!({ "doctorId": doctor_id, "date": date }))
            .to_request();
        assert_eq!(
            test::call_service(&app, req).await.status(),
            StatusCode::CREATED
        );
    }

    let req = test::TestRequest::get()
        .uri("/api/appointments")
        .insert_header(("Authorization", format!("Bearer {}", patient.token)))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: serde_json::Value = test::read_body_json(resp).await;
    let listed = body.as_array().expect("array body");
    assert_eq!(listed.len(), 2);
    assert!(listed.iter().all(|a| a["userId"] == patient.id));

    // Another user's inbox is untouched: empty list, not an error.
    let req = test::TestRequest::get()
        .uri("/api/appointments")
        .insert_header(("Authorization", format!("Bearer {}", bystander.token)))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body, json!([]));

    Ok(())
}
