use actix_web::{web, HttpResponse, Result};
use serde::{Deserialize, Serialize};

use crate::db::require_db;
use crate::error::AppError;
use crate::errors::ErrorCode;
use crate::extractors::current_user::CurrentUser;
use crate::extractors::validated_json::ValidatedJson;
use crate::repos::doctors::Doctor;
use crate::services::doctors;
use crate::state::app_state::AppState;

#[derive(Debug, Deserialize)]
pub struct ApplyRequest {
    #[serde(default)]
    pub specialty: String,
}

#[derive(Debug, Deserialize)]
pub struct ListQuery {
    #[serde(default)]
    pub all: bool,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DoctorResponse {
    pub id: i64,
    pub user_id: i64,
    pub full_name: String,
    pub specialty: String,
    pub status: String,
}

impl From<Doctor> for DoctorResponse {
    fn from(doctor: Doctor) -> Self {
        Self {
            id: doctor.id,
            user_id: doctor.user_id,
            full_name: doctor.full_name,
            specialty: doctor.specialty,
            status: doctor.status.as_str().to_string(),
        }
    }
}

/// File a doctor application for the calling user.
async fn apply(
    current_user: CurrentUser,
    body: ValidatedJson<ApplyRequest>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let req = body.into_inner();

    if req.specialty.trim().is_empty() {
        return Err(AppError::bad_request(
            ErrorCode::ValidationError,
            "Specialty cannot be empty".to_string(),
        ));
    }

    let db = require_db(&app_state)?;

    let doctor = doctors::apply(
        db,
        current_user.id,
        &current_user.full_name,
        req.specialty.trim(),
    )
    .await?;

    Ok(HttpResponse::Created().json(DoctorResponse::from(doctor)))
}

/// List doctor profiles. `?all=true` includes pending applications and
/// is admin-only.
async fn list(
    current_user: CurrentUser,
    query: web::Query<ListQuery>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let db = require_db(&app_state)?;

    let listed = doctors::list(db, current_user.is_admin, query.all).await?;

    let response: Vec<DoctorResponse> = listed.into_iter().map(DoctorResponse::from).collect();
    Ok(HttpResponse::Ok().json(response))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("/apply").route(web::post().to(apply)))
        .service(web::resource("").route(web::get().to(list)));
}
