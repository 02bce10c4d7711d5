use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::statistics::requests::LimitQuery;
use crate::services::StatisticsService;

// 懒加载的全局 StatisticsService 实例
static STATISTICS_SERVICE: Lazy<StatisticsService> = Lazy::new(StatisticsService::new_lazy);

pub async fn get_overview(req: HttpRequest) -> ActixResult<HttpResponse> {
    STATISTICS_SERVICE.get_overview(&req).await
}

pub async fn get_top_absentees(
    req: HttpRequest,
    query: web::Query<LimitQuery>,
) -> ActixResult<HttpResponse> {
    STATISTICS_SERVICE
        .get_top_absentees(query.into_inner(), &req)
        .await
}

pub async fn get_recent_activities(
    req: HttpRequest,
    query: web::Query<LimitQuery>,
) -> ActixResult<HttpResponse> {
    STATISTICS_SERVICE
        .get_recent_activities(query.into_inner(), &req)
        .await
}

// 配置路由
pub fn configure_statistics_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/statistics")
            .wrap(middlewares::RequireJWT)
            .route("", web::get().to(get_overview))
            .route("/top-absentees", web::get().to(get_top_absentees))
            .route("/recent-activities", web::get().to(get_recent_activities)),
    );
}
