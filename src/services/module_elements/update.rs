use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::ModuleElementService;
use crate::models::{
    ApiResponse, ErrorCode,
    module_elements::{requests::UpdateModuleElementRequest, responses::ModuleElementResponse},
};
use crate::services::references::{
    bad_request, internal_error, not_found, require_optional_reference,
};
use crate::utils::validate::{validate_code, validate_name};

pub async fn update_module_element(
    service: &ModuleElementService,
    element_id: i64,
    update_data: UpdateModuleElementRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    if let Some(name) = &update_data.name
        && let Err(msg) = validate_name("Module element name", name)
    {
        return Ok(bad_request(ErrorCode::BadRequest, msg));
    }
    if let Some(code) = &update_data.code
        && let Err(msg) = validate_code("Module element code", code)
    {
        return Ok(bad_request(ErrorCode::BadRequest, msg));
    }

    let storage = service.get_storage(request);

    if let Err(resp) = require_optional_reference(
        update_data.module_id,
        |id| storage.get_module_by_id(id),
        ErrorCode::ModuleNotFound,
        "Module not found",
    )
    .await
    {
        return Ok(resp);
    }

    match storage.update_module_element(element_id, update_data).await {
        Ok(Some(module_element)) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            ModuleElementResponse { module_element },
            "Module element updated successfully",
        ))),
        Ok(None) => Ok(not_found(
            ErrorCode::ModuleElementNotFound,
            "Module element not found",
        )),
        Err(e) => Ok(internal_error("Failed to update module element", e)),
    }
}
