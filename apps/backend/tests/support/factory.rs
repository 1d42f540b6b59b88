//! Test fixture helpers: registering accounts through the public API and
//! direct-to-database setup for states that have no public endpoint
//! (admin promotion, doctor approval).

use actix_http::Request;
use actix_web::body::BoxBody;
use actix_web::dev::{Service, ServiceResponse};
use actix_web::test;
use backend::entities::{doctors, users};
use backend::AppError;
use backend_test_support::unique_helpers::unique_email;
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, IntoActiveModel, Set};
use serde_json::json;

/// A registered account, as seen by the API.
pub struct RegisteredUser {
    pub id: i64,
    pub email: String,
    pub token: String,
}

/// Register a fresh account through POST /api/auth/register.
pub async fn register_user<S>(app: &S, prefix: &str) -> RegisteredUser
where
    S: Service<Request, Response = ServiceResponse<BoxBody>, Error = actix_web::Error>,
{
    let email = unique_email(prefix);
    let req = test::TestRequest::post()
        .uri("/api/auth/register")
        .set_json(json!({
            "fullName": format!("{prefix} user"),
            "email": email,
            "password": "hunter2!"
        }))
        .to_request();

    let resp = test::call_service(app, req).await;
    assert_eq!(resp.status().as_u16(), 201, "registration should succeed");

    let body: serde_json::Value = test::read_body_json(resp).await;
    RegisteredUser {
        id: body["user"]["id"].as_i64().expect("user id"),
        email,
        token: body["token"].as_str().expect("token").to_string(),
    }
}

/// Flip the is_admin flag on an existing user.
pub async fn promote_to_admin(db: &DatabaseConnection, user_id: i64) -> Result<(), AppError> {
    let user = users::Entity::find_by_id(user_id)
        .one(db)
        .await?
        .expect("user fixture should exist");

    let mut active = user.into_active_model();
    active.is_admin = Set(true);
    active.update(db).await?;

    Ok(())
}

/// Mark a doctor profile approved.
pub async fn approve_doctor(db: &DatabaseConnection, doctor_id: i64) -> Result<(), AppError> {
    let doctor = doctors::Entity::find_by_id(doctor_id)
        .one(db)
        .await?
        .expect("doctor fixture should exist");

    let mut active = doctor.into_active_model();
    active.status = Set(doctors::DoctorStatus::Approved);
    active.update(db).await?;

    Ok(())
}
