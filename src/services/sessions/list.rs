use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::SessionService;
use crate::models::{
    ApiResponse,
    sessions::{requests::SessionListQuery, responses::SessionListResponse},
};
use crate::services::references::internal_error;

pub async fn list_sessions(
    service: &SessionService,
    query: SessionListQuery,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.list_sessions(query).await {
        Ok(items) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            SessionListResponse {
                total: items.len() as i64,
                items,
            },
            "Session list retrieved successfully",
        ))),
        Err(e) => Ok(internal_error("Failed to retrieve session list", e)),
    }
}
