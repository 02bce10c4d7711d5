use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::AbsenceService;
use crate::models::{ApiResponse, ErrorCode};
use crate::services::references::{internal_error, not_found};

pub async fn delete_absence(
    service: &AbsenceService,
    absence_id: i64,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.delete_absence(absence_id).await {
        Ok(true) => {
            info!("Absence {} deleted", absence_id);
            Ok(HttpResponse::Ok().json(ApiResponse::success_empty("Absence deleted successfully")))
        }
        Ok(false) => Ok(not_found(ErrorCode::AbsenceNotFound, "Absence not found")),
        Err(e) => Ok(internal_error("Absence deletion failed", e)),
    }
}
