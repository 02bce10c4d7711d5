use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::DepartmentService;
use crate::models::{ApiResponse, departments::responses::DepartmentListResponse};
use crate::services::references::internal_error;

pub async fn list_departments(
    service: &DepartmentService,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.list_departments().await {
        Ok(items) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            DepartmentListResponse {
                total: items.len() as i64,
                items,
            },
            "Department list retrieved successfully",
        ))),
        Err(e) => Ok(internal_error("Failed to retrieve department list", e)),
    }
}
