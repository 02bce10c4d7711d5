use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;
use tracing::{error, info};

use super::AbsenceService;
use crate::models::{
    ApiResponse, ErrorCode,
    absences::{requests::CreateAbsenceRequest, responses::AbsenceResponse},
};
use crate::services::references::{internal_error, require_reference};
use crate::storage::Storage;

/// 课次和学生都必须存在
pub(super) async fn check_absence_references(
    storage: &Arc<dyn Storage>,
    absence_data: &CreateAbsenceRequest,
) -> Result<(), HttpResponse> {
    require_reference(
        storage.get_session_by_id(absence_data.session_id),
        ErrorCode::SessionNotFound,
        &format!("Session {} not found", absence_data.session_id),
    )
    .await?;
    require_reference(
        storage.get_student_by_id(absence_data.student_id),
        ErrorCode::StudentNotFound,
        &format!("Student {} not found", absence_data.student_id),
    )
    .await?;
    Ok(())
}

pub async fn create_absence(
    service: &AbsenceService,
    absence_data: CreateAbsenceRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    if let Err(resp) = check_absence_references(&storage, &absence_data).await {
        return Ok(resp);
    }

    match storage.create_absence(absence_data).await {
        Ok(absence) => {
            info!(
                "Absence {} recorded: student {} is {} in session {}",
                absence.id, absence.student_id, absence.status, absence.session_id
            );
            Ok(HttpResponse::Created().json(ApiResponse::success(
                AbsenceResponse { absence },
                "Absence recorded successfully",
            )))
        }
        Err(e) => {
            error!("Absence creation failed: {}", e);
            Ok(internal_error("Absence creation failed", e))
        }
    }
}
