use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::DepartmentService;
use crate::models::{
    ApiResponse, ErrorCode,
    departments::{requests::UpdateDepartmentRequest, responses::DepartmentResponse},
};
use crate::services::references::{bad_request, conflict, internal_error, not_found};
use crate::utils::validate::validate_name;

pub async fn update_department(
    service: &DepartmentService,
    department_id: i64,
    update_data: UpdateDepartmentRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let _guard = service.unique_write.lock().await;

    if let Some(name) = &update_data.name {
        if let Err(msg) = validate_name("Department name", name) {
            return Ok(bad_request(ErrorCode::BadRequest, msg));
        }
        match storage.get_department_by_name(name).await {
            Ok(Some(other)) if other.id != department_id => {
                return Ok(conflict(
                    ErrorCode::DepartmentAlreadyExists,
                    "Department name already exists",
                ));
            }
            Ok(_) => {}
            Err(e) => return Ok(internal_error("Failed to check department name", e)),
        }
    }

    match storage.update_department(department_id, update_data).await {
        Ok(Some(department)) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            DepartmentResponse { department },
            "Department updated successfully",
        ))),
        Ok(None) => Ok(not_found(ErrorCode::DepartmentNotFound, "Department not found")),
        Err(e) => Ok(internal_error("Failed to update department", e)),
    }
}
