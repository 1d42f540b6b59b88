//! Appointment booking and listing.

use sea_orm::DatabaseConnection;
use tracing::info;

use crate::error::AppError;
use crate::errors::ErrorCode;
use crate::repos::appointments::{self, Appointment};
use crate::repos::doctors;

/// Book a pending appointment with a doctor.
pub async fn book(
    db: &DatabaseConnection,
    user_id: i64,
    doctor_id: i64,
    date: &str,
) -> Result<Appointment, AppError> {
    if date.trim().is_empty() {
        return Err(AppError::invalid(
            ErrorCode::InvalidDate,
            "Date is required",
        ));
    }

    let doctor = doctors::find_by_id(db, doctor_id).await?.ok_or_else(|| {
        AppError::not_found(
            ErrorCode::DoctorNotFound,
            format!("Doctor {doctor_id} not found"),
        )
    })?;

    let appointment = appointments::create_appointment(db, user_id, doctor.id, date).await?;

    info!(
        appointment_id = appointment.id,
        user_id,
        doctor_id,
        "Appointment booked"
    );

    Ok(appointment)
}

/// List the user's appointments, newest first. An empty list is not an error.
pub async fn list_for_user(
    db: &DatabaseConnection,
    user_id: i64,
) -> Result<Vec<Appointment>, AppError> {
    Ok(appointments::list_for_user(db, user_id).await?)
}
