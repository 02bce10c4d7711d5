use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::ModuleService;
use crate::models::{
    ApiResponse, ErrorCode,
    modules::{requests::UpdateModuleRequest, responses::ModuleResponse},
};
use crate::services::references::{
    bad_request, internal_error, not_found, require_optional_reference,
};
use crate::utils::validate::{validate_code, validate_name};

pub async fn update_module(
    service: &ModuleService,
    module_id: i64,
    update_data: UpdateModuleRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    if let Some(name) = &update_data.name
        && let Err(msg) = validate_name("Module name", name)
    {
        return Ok(bad_request(ErrorCode::BadRequest, msg));
    }
    if let Some(code) = &update_data.code
        && let Err(msg) = validate_code("Module code", code)
    {
        return Ok(bad_request(ErrorCode::BadRequest, msg));
    }

    let storage = service.get_storage(request);

    if let Err(resp) = require_optional_reference(
        update_data.course_id,
        |id| storage.get_course_by_id(id),
        ErrorCode::CourseNotFound,
        "Course not found",
    )
    .await
    {
        return Ok(resp);
    }

    match storage.update_module(module_id, update_data).await {
        Ok(Some(module)) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            ModuleResponse { module },
            "Module updated successfully",
        ))),
        Ok(None) => Ok(not_found(ErrorCode::ModuleNotFound, "Module not found")),
        Err(e) => Ok(internal_error("Failed to update module", e)),
    }
}
