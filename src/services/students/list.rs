use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::StudentService;
use crate::models::{
    ApiResponse,
    students::{requests::StudentListQuery, responses::StudentListResponse},
};
use crate::services::references::internal_error;

pub async fn list_students(
    service: &StudentService,
    query: StudentListQuery,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.list_students(query).await {
        Ok(items) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            StudentListResponse {
                total: items.len() as i64,
                items,
            },
            "Student list retrieved successfully",
        ))),
        Err(e) => Ok(internal_error("Failed to retrieve student list", e)),
    }
}
