use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::{error, info};

use super::ModuleElementService;
use crate::models::{
    ApiResponse, ErrorCode,
    module_elements::{requests::CreateModuleElementRequest, responses::ModuleElementResponse},
};
use crate::services::references::{bad_request, internal_error, require_reference};
use crate::utils::validate::{validate_code, validate_name};

pub async fn create_module_element(
    service: &ModuleElementService,
    element_data: CreateModuleElementRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    if let Err(msg) = validate_name("Module element name", &element_data.name) {
        return Ok(bad_request(ErrorCode::BadRequest, msg));
    }
    if let Err(msg) = validate_code("Module element code", &element_data.code) {
        return Ok(bad_request(ErrorCode::BadRequest, msg));
    }

    let storage = service.get_storage(request);

    if let Err(resp) = require_reference(
        storage.get_module_by_id(element_data.module_id),
        ErrorCode::ModuleNotFound,
        "Module not found",
    )
    .await
    {
        return Ok(resp);
    }

    match storage.create_module_element(element_data).await {
        Ok(module_element) => {
            info!(
                "Module element {} created in module {}",
                module_element.id, module_element.module_id
            );
            Ok(HttpResponse::Created().json(ApiResponse::success(
                ModuleElementResponse { module_element },
                "Module element created successfully",
            )))
        }
        Err(e) => {
            error!("Module element creation failed: {}", e);
            Ok(internal_error("Module element creation failed", e))
        }
    }
}
