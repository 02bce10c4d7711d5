use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::StudentGroupService;
use crate::models::{
    ApiResponse,
    student_groups::{requests::StudentGroupListQuery, responses::StudentGroupListResponse},
};
use crate::services::references::internal_error;

pub async fn list_groups(
    service: &StudentGroupService,
    query: StudentGroupListQuery,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.list_student_groups(query).await {
        Ok(items) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            StudentGroupListResponse {
                total: items.len() as i64,
                items,
            },
            "Group list retrieved successfully",
        ))),
        Err(e) => Ok(internal_error("Failed to retrieve group list", e)),
    }
}
