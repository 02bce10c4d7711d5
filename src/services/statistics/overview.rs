use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::{StatisticsService, collect_overview};
use crate::models::ApiResponse;

pub async fn get_overview(
    service: &StatisticsService,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match collect_overview(storage.as_ref()).await {
        Ok(overview) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            overview,
            "Statistics retrieved successfully",
        ))),
        Err(e) => {
            error!("Failed to collect statistics: {}", e);
            Ok(HttpResponse::InternalServerError()
                .json(ApiResponse::internal_error("Failed to collect statistics", e)))
        }
    }
}
