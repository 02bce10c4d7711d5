use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::{StatisticsService, collect_top_absentees};
use crate::models::{
    ApiResponse,
    statistics::{requests::LimitQuery, responses::TopAbsenteesResponse},
};

pub async fn get_top_absentees(
    service: &StatisticsService,
    query: LimitQuery,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);
    let limit = query
        .limit
        .unwrap_or(service.get_config().reporting.top_absentees_limit);

    match collect_top_absentees(storage.as_ref(), limit).await {
        Ok(items) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            TopAbsenteesResponse { items },
            "Top absentees retrieved successfully",
        ))),
        Err(e) => {
            error!("Failed to rank absentees: {}", e);
            Ok(HttpResponse::InternalServerError()
                .json(ApiResponse::internal_error("Failed to rank absentees", e)))
        }
    }
}
