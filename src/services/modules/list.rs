use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::ModuleService;
use crate::models::{
    ApiResponse,
    modules::{requests::ModuleListQuery, responses::ModuleListResponse},
};
use crate::services::references::internal_error;

pub async fn list_modules(
    service: &ModuleService,
    query: ModuleListQuery,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.list_modules(query).await {
        Ok(items) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            ModuleListResponse {
                total: items.len() as i64,
                items,
            },
            "Module list retrieved successfully",
        ))),
        Err(e) => Ok(internal_error("Failed to retrieve module list", e)),
    }
}
