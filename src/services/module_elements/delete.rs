use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::ModuleElementService;
use crate::models::{ApiResponse, ErrorCode};
use crate::services::references::{internal_error, not_found};

pub async fn delete_module_element(
    service: &ModuleElementService,
    element_id: i64,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.delete_module_element(element_id).await {
        Ok(true) => {
            info!("Module element {} deleted", element_id);
            Ok(HttpResponse::Ok()
                .json(ApiResponse::success_empty("Module element deleted successfully")))
        }
        Ok(false) => Ok(not_found(
            ErrorCode::ModuleElementNotFound,
            "Module element not found",
        )),
        Err(e) => Ok(internal_error("Module element deletion failed", e)),
    }
}
