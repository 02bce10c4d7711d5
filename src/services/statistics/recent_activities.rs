use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::{StatisticsService, collect_recent_activities};
use crate::models::{
    ApiResponse,
    statistics::{requests::LimitQuery, responses::RecentActivitiesResponse},
};

pub async fn get_recent_activities(
    service: &StatisticsService,
    query: LimitQuery,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);
    let limit = query
        .limit
        .unwrap_or(service.get_config().reporting.recent_activities_limit);

    match collect_recent_activities(storage.as_ref(), limit).await {
        Ok(items) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            RecentActivitiesResponse { items },
            "Recent activities retrieved successfully",
        ))),
        Err(e) => {
            error!("Failed to collect recent activities: {}", e);
            Ok(HttpResponse::InternalServerError().json(ApiResponse::internal_error(
                "Failed to collect recent activities",
                e,
            )))
        }
    }
}
