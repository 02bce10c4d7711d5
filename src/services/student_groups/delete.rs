use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::StudentGroupService;
use crate::models::{ApiResponse, ErrorCode};
use crate::services::references::{internal_error, not_found};

pub async fn delete_group(
    service: &StudentGroupService,
    group_id: i64,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.delete_student_group(group_id).await {
        Ok(true) => {
            info!("Group {} deleted", group_id);
            Ok(HttpResponse::Ok().json(ApiResponse::success_empty("Group deleted successfully")))
        }
        Ok(false) => Ok(not_found(ErrorCode::StudentGroupNotFound, "Group not found")),
        Err(e) => Ok(internal_error("Group deletion failed", e)),
    }
}
