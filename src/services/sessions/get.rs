use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::SessionService;
use crate::models::{ApiResponse, ErrorCode, sessions::responses::SessionResponse};
use crate::services::references::{internal_error, not_found};

pub async fn get_session(
    service: &SessionService,
    session_id: i64,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.get_session_by_id(session_id).await {
        Ok(Some(session)) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            SessionResponse { session },
            "Session retrieved successfully",
        ))),
        Ok(None) => Ok(not_found(ErrorCode::SessionNotFound, "Session not found")),
        Err(e) => Ok(internal_error("Failed to get session", e)),
    }
}
