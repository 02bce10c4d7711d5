use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::absences::requests::{
    AbsenceListQuery, BatchCreateAbsencesRequest, CreateAbsenceRequest, UpdateAbsenceRequest,
};
use crate::services::AbsenceService;
use crate::utils::SafeIDI64;

// 懒加载的全局 AbsenceService 实例
static ABSENCE_SERVICE: Lazy<AbsenceService> = Lazy::new(AbsenceService::new_lazy);

pub async fn list_absences(
    req: HttpRequest,
    query: web::Query<AbsenceListQuery>,
) -> ActixResult<HttpResponse> {
    ABSENCE_SERVICE.list_absences(query.into_inner(), &req).await
}

pub async fn create_absence(
    req: HttpRequest,
    absence_data: web::Json<CreateAbsenceRequest>,
) -> ActixResult<HttpResponse> {
    ABSENCE_SERVICE
        .create_absence(absence_data.into_inner(), &req)
        .await
}

// 批量录入考勤
pub async fn batch_create_absences(
    req: HttpRequest,
    batch_data: web::Json<BatchCreateAbsencesRequest>,
) -> ActixResult<HttpResponse> {
    ABSENCE_SERVICE
        .batch_create_absences(batch_data.into_inner(), &req)
        .await
}

pub async fn get_absence(req: HttpRequest, path: SafeIDI64) -> ActixResult<HttpResponse> {
    ABSENCE_SERVICE.get_absence(path.0, &req).await
}

pub async fn update_absence(
    req: HttpRequest,
    path: SafeIDI64,
    update_data: web::Json<UpdateAbsenceRequest>,
) -> ActixResult<HttpResponse> {
    ABSENCE_SERVICE
        .update_absence(path.0, update_data.into_inner(), &req)
        .await
}

pub async fn delete_absence(req: HttpRequest, path: SafeIDI64) -> ActixResult<HttpResponse> {
    ABSENCE_SERVICE.delete_absence(path.0, &req).await
}

// 配置路由
pub fn configure_absences_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/absences")
            .wrap(middlewares::RequireJWT)
            .route("", web::get().to(list_absences))
            .route("", web::post().to(create_absence))
            // 必须在 /{id} 之前注册
            .route("/batch", web::post().to(batch_create_absences))
            .route("/{id}", web::get().to(get_absence))
            .route("/{id}", web::put().to(update_absence))
            .route("/{id}", web::delete().to(delete_absence)),
    );
}
