use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::ModuleService;
use crate::models::{ApiResponse, ErrorCode, modules::responses::ModuleResponse};
use crate::services::references::{internal_error, not_found};

pub async fn get_module(
    service: &ModuleService,
    module_id: i64,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.get_module_by_id(module_id).await {
        Ok(Some(module)) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            ModuleResponse { module },
            "Module retrieved successfully",
        ))),
        Ok(None) => Ok(not_found(ErrorCode::ModuleNotFound, "Module not found")),
        Err(e) => Ok(internal_error("Failed to get module", e)),
    }
}
