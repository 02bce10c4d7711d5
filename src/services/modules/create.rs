use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::{error, info};

use super::ModuleService;
use crate::models::{
    ApiResponse, ErrorCode,
    modules::{requests::CreateModuleRequest, responses::ModuleResponse},
};
use crate::services::references::{bad_request, internal_error, require_reference};
use crate::utils::validate::{validate_code, validate_name};

pub async fn create_module(
    service: &ModuleService,
    module_data: CreateModuleRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    if let Err(msg) = validate_name("Module name", &module_data.name) {
        return Ok(bad_request(ErrorCode::BadRequest, msg));
    }
    if let Err(msg) = validate_code("Module code", &module_data.code) {
        return Ok(bad_request(ErrorCode::BadRequest, msg));
    }

    let storage = service.get_storage(request);

    if let Err(resp) = require_reference(
        storage.get_course_by_id(module_data.course_id),
        ErrorCode::CourseNotFound,
        "Course not found",
    )
    .await
    {
        return Ok(resp);
    }

    match storage.create_module(module_data).await {
        Ok(module) => {
            info!("Module {} created in course {}", module.id, module.course_id);
            Ok(HttpResponse::Created().json(ApiResponse::success(
                ModuleResponse { module },
                "Module created successfully",
            )))
        }
        Err(e) => {
            error!("Module creation failed: {}", e);
            Ok(internal_error("Module creation failed", e))
        }
    }
}
