use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::ModuleElementService;
use crate::models::{ApiResponse, ErrorCode, module_elements::responses::ModuleElementResponse};
use crate::services::references::{internal_error, not_found};

pub async fn get_module_element(
    service: &ModuleElementService,
    element_id: i64,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.get_module_element_by_id(element_id).await {
        Ok(Some(module_element)) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            ModuleElementResponse { module_element },
            "Module element retrieved successfully",
        ))),
        Ok(None) => Ok(not_found(
            ErrorCode::ModuleElementNotFound,
            "Module element not found",
        )),
        Err(e) => Ok(internal_error("Failed to get module element", e)),
    }
}
