use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::AbsenceService;
use crate::models::{ApiResponse, ErrorCode, absences::responses::AbsenceResponse};
use crate::services::references::{internal_error, not_found};

pub async fn get_absence(
    service: &AbsenceService,
    absence_id: i64,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.get_absence_by_id(absence_id).await {
        Ok(Some(absence)) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            AbsenceResponse { absence },
            "Absence retrieved successfully",
        ))),
        Ok(None) => Ok(not_found(ErrorCode::AbsenceNotFound, "Absence not found")),
        Err(e) => Ok(internal_error("Failed to get absence", e)),
    }
}
