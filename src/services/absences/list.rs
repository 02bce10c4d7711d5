use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::AbsenceService;
use crate::models::{
    ApiResponse,
    absences::{requests::AbsenceListQuery, responses::AbsenceListResponse},
};
use crate::services::references::internal_error;

pub async fn list_absences(
    service: &AbsenceService,
    query: AbsenceListQuery,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.list_absences(query).await {
        Ok(items) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            AbsenceListResponse {
                total: items.len() as i64,
                items,
            },
            "Absence list retrieved successfully",
        ))),
        Err(e) => Ok(internal_error("Failed to retrieve absence list", e)),
    }
}
