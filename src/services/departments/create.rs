use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::{error, info};

use super::DepartmentService;
use crate::models::{
    ApiResponse, ErrorCode,
    departments::{requests::CreateDepartmentRequest, responses::DepartmentResponse},
};
use crate::services::references::{bad_request, conflict, internal_error};
use crate::utils::validate::validate_name;

pub async fn create_department(
    service: &DepartmentService,
    department_data: CreateDepartmentRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    if let Err(msg) = validate_name("Department name", &department_data.name) {
        return Ok(bad_request(ErrorCode::BadRequest, msg));
    }

    let storage = service.get_storage(request);

    let _guard = service.unique_write.lock().await;
    match storage.get_department_by_name(&department_data.name).await {
        Ok(Some(_)) => {
            return Ok(conflict(
                ErrorCode::DepartmentAlreadyExists,
                "Department name already exists",
            ));
        }
        Ok(None) => {}
        Err(e) => return Ok(internal_error("Failed to check department name", e)),
    }

    match storage.create_department(department_data).await {
        Ok(department) => {
            info!("Department {} created", department.id);
            Ok(HttpResponse::Created().json(ApiResponse::success(
                DepartmentResponse { department },
                "Department created successfully",
            )))
        }
        Err(e) => {
            error!("Department creation failed: {}", e);
            Ok(internal_error("Department creation failed", e))
        }
    }
}
