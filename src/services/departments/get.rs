use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::DepartmentService;
use crate::models::{ApiResponse, ErrorCode, departments::responses::DepartmentResponse};
use crate::services::references::{internal_error, not_found};

pub async fn get_department(
    service: &DepartmentService,
    department_id: i64,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.get_department_by_id(department_id).await {
        Ok(Some(department)) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            DepartmentResponse { department },
            "Department retrieved successfully",
        ))),
        Ok(None) => Ok(not_found(ErrorCode::DepartmentNotFound, "Department not found")),
        Err(e) => Ok(internal_error("Failed to get department", e)),
    }
}
