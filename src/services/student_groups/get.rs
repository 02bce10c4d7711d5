use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::StudentGroupService;
use crate::models::{ApiResponse, ErrorCode, student_groups::responses::StudentGroupResponse};
use crate::services::references::{internal_error, not_found};

pub async fn get_group(
    service: &StudentGroupService,
    group_id: i64,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.get_student_group_by_id(group_id).await {
        Ok(Some(group)) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            StudentGroupResponse { group },
            "Group retrieved successfully",
        ))),
        Ok(None) => Ok(not_found(ErrorCode::StudentGroupNotFound, "Group not found")),
        Err(e) => Ok(internal_error("Failed to get group", e)),
    }
}
