use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::SessionService;
use crate::models::{ApiResponse, ErrorCode, absences::responses::AbsenceListResponse};
use crate::services::references::{internal_error, not_found};

pub async fn list_absences(
    service: &SessionService,
    session_id: i64,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.get_session_by_id(session_id).await {
        Ok(Some(_)) => {}
        Ok(None) => return Ok(not_found(ErrorCode::SessionNotFound, "Session not found")),
        Err(e) => return Ok(internal_error("Failed to get session", e)),
    }

    match storage.list_absences_by_session(session_id).await {
        Ok(items) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            AbsenceListResponse {
                total: items.len() as i64,
                items,
            },
            "Session absences retrieved successfully",
        ))),
        Err(e) => Ok(internal_error("Failed to list session absences", e)),
    }
}
