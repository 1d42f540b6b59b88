//! Doctor application and listing.

use sea_orm::{DatabaseConnection, TransactionTrait};
use tracing::info;

use crate::error::AppError;
use crate::errors::ErrorCode;
use crate::repos::doctors::{self, Doctor, DoctorStatus};
use crate::repos::notifications;
use crate::repos::users;

pub const APPLY_DOCTOR_REQUEST: &str = "apply-doctor-request";

/// File a doctor application for the calling user.
///
/// The profile starts as `pending`, and every admin account gets an
/// inbox notification, all in one transaction.
pub async fn apply(
    db: &DatabaseConnection,
    applicant_id: i64,
    applicant_name: &str,
    specialty: &str,
) -> Result<Doctor, AppError> {
    if doctors::find_by_user_id(db, applicant_id).await?.is_some() {
        return Err(AppError::conflict(
            ErrorCode::DoctorAlreadyApplied,
            "A doctor profile already exists for this account",
        ));
    }

    let txn = db.begin().await.map_err(AppError::from)?;

    let doctor = doctors::create_doctor(&txn, applicant_id, applicant_name, specialty).await?;

    let message = format!("{applicant_name} has applied for doctor registration");
    for admin in users::find_admins(&txn).await? {
        notifications::enqueue(&txn, admin.id, APPLY_DOCTOR_REQUEST, &message).await?;
    }

    txn.commit().await.map_err(AppError::from)?;

    info!(
        doctor_id = doctor.id,
        user_id = applicant_id,
        "Doctor application filed"
    );

    Ok(doctor)
}

/// List doctor profiles. Approved profiles are visible to everyone;
/// the full list (including pending applications) is admin-only.
pub async fn list(
    db: &DatabaseConnection,
    requester_is_admin: bool,
    include_unapproved: bool,
) -> Result<Vec<Doctor>, AppError> {
    if include_unapproved {
        if !requester_is_admin {
            return Err(AppError::forbidden());
        }
        return Ok(doctors::list_all(db).await?);
    }

    Ok(doctors::list_by_status(db, DoctorStatus::Approved).await?)
}
