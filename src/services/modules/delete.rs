use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::ModuleService;
use crate::models::{ApiResponse, ErrorCode};
use crate::services::references::{internal_error, not_found};

pub async fn delete_module(
    service: &ModuleService,
    module_id: i64,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.delete_module(module_id).await {
        Ok(true) => {
            info!("Module {} deleted", module_id);
            Ok(HttpResponse::Ok().json(ApiResponse::success_empty("Module deleted successfully")))
        }
        Ok(false) => Ok(not_found(ErrorCode::ModuleNotFound, "Module not found")),
        Err(e) => Ok(internal_error("Module deletion failed", e)),
    }
}
