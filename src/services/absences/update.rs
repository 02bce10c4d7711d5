use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::AbsenceService;
use crate::models::{
    ApiResponse, ErrorCode,
    absences::{requests::UpdateAbsenceRequest, responses::AbsenceResponse},
};
use crate::services::references::{internal_error, not_found, require_optional_reference};

pub async fn update_absence(
    service: &AbsenceService,
    absence_id: i64,
    update_data: UpdateAbsenceRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    if let Err(resp) = require_optional_reference(
        update_data.session_id,
        |id| storage.get_session_by_id(id),
        ErrorCode::SessionNotFound,
        "Session not found",
    )
    .await
    {
        return Ok(resp);
    }
    if let Err(resp) = require_optional_reference(
        update_data.student_id,
        |id| storage.get_student_by_id(id),
        ErrorCode::StudentNotFound,
        "Student not found",
    )
    .await
    {
        return Ok(resp);
    }

    match storage.update_absence(absence_id, update_data).await {
        Ok(Some(absence)) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            AbsenceResponse { absence },
            "Absence updated successfully",
        ))),
        Ok(None) => Ok(not_found(ErrorCode::AbsenceNotFound, "Absence not found")),
        Err(e) => Ok(internal_error("Failed to update absence", e)),
    }
}
