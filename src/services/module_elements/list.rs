use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::ModuleElementService;
use crate::models::{
    ApiResponse,
    module_elements::{requests::ModuleElementListQuery, responses::ModuleElementListResponse},
};
use crate::services::references::internal_error;

pub async fn list_module_elements(
    service: &ModuleElementService,
    query: ModuleElementListQuery,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.list_module_elements(query).await {
        Ok(items) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            ModuleElementListResponse {
                total: items.len() as i64,
                items,
            },
            "Module element list retrieved successfully",
        ))),
        Err(e) => Ok(internal_error("Failed to retrieve module element list", e)),
    }
}
