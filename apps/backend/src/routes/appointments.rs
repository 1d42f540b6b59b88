use actix_web::{web, HttpResponse, Result};
use serde::{Deserialize, Serialize};

use crate::db::require_db;
use crate::error::AppError;
use crate::extractors::current_user::CurrentUser;
use crate::extractors::validated_json::ValidatedJson;
use crate::repos::appointments::Appointment;
use crate::services::appointments;
use crate::state::app_state::AppState;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookRequest {
    #[serde(default)]
    pub doctor_id: i64,
    #[serde(default)]
    pub date: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AppointmentResponse {
    pub id: i64,
    pub user_id: i64,
    pub doctor_id: i64,
    pub date: String,
    pub status: String,
}

impl From<Appointment> for AppointmentResponse {
    fn from(appointment: Appointment) -> Self {
        Self {
            id: appointment.id,
            user_id: appointment.user_id,
            doctor_id: appointment.doctor_id,
            date: appointment.date,
            status: appointment.status.as_str().to_string(),
        }
    }
}

/// Book a pending appointment with a doctor.
async fn book(
    current_user: CurrentUser,
    body: ValidatedJson<BookRequest>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let req = body.into_inner();
    let db = require_db(&app_state)?;

    let appointment =
        appointments::book(db, current_user.id, req.doctor_id, req.date.trim()).await?;

    Ok(HttpResponse::Created().json(AppointmentResponse::from(appointment)))
}

/// List the calling user's appointments, newest first.
async fn list(
    current_user: CurrentUser,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let db = require_db(&app_state)?;

    let listed = appointments::list_for_user(db, current_user.id).await?;

    let response: Vec<AppointmentResponse> =
        listed.into_iter().map(AppointmentResponse::from).collect();
    Ok(HttpResponse::Ok().json(response))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("")
            .route(web::post().to(book))
            .route(web::get().to(list)),
    );
}
