use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::sessions::requests::{
    CreateSessionRequest, SessionListQuery, UpdateSessionRequest,
};
use crate::services::SessionService;
use crate::utils::SafeIDI64;

// 懒加载的全局 SessionService 实例
static SESSION_SERVICE: Lazy<SessionService> = Lazy::new(SessionService::new_lazy);

pub async fn list_sessions(
    req: HttpRequest,
    query: web::Query<SessionListQuery>,
) -> ActixResult<HttpResponse> {
    SESSION_SERVICE.list_sessions(query.into_inner(), &req).await
}

pub async fn create_session(
    req: HttpRequest,
    session_data: web::Json<CreateSessionRequest>,
) -> ActixResult<HttpResponse> {
    SESSION_SERVICE
        .create_session(session_data.into_inner(), &req)
        .await
}

pub async fn get_session(req: HttpRequest, path: SafeIDI64) -> ActixResult<HttpResponse> {
    SESSION_SERVICE.get_session(path.0, &req).await
}

pub async fn update_session(
    req: HttpRequest,
    path: SafeIDI64,
    update_data: web::Json<UpdateSessionRequest>,
) -> ActixResult<HttpResponse> {
    SESSION_SERVICE
        .update_session(path.0, update_data.into_inner(), &req)
        .await
}

pub async fn delete_session(req: HttpRequest, path: SafeIDI64) -> ActixResult<HttpResponse> {
    SESSION_SERVICE.delete_session(path.0, &req).await
}

pub async fn list_session_absences(
    req: HttpRequest,
    path: SafeIDI64,
) -> ActixResult<HttpResponse> {
    SESSION_SERVICE.list_absences(path.0, &req).await
}

// 配置路由：所有登录用户都可以记录课次
pub fn configure_sessions_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/sessions")
            .wrap(middlewares::RequireJWT)
            .route("", web::get().to(list_sessions))
            .route("", web::post().to(create_session))
            .route("/{id}", web::get().to(get_session))
            .route("/{id}", web::put().to(update_session))
            .route("/{id}", web::delete().to(delete_session))
            .route("/{id}/absences", web::get().to(list_session_absences)),
    );
}
