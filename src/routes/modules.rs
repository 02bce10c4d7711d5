use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::modules::requests::{
    CreateModuleRequest, ModuleListQuery, UpdateModuleRequest,
};
use crate::models::users::entities::UserRole;
use crate::services::ModuleService;
use crate::utils::SafeIDI64;

// 懒加载的全局 ModuleService 实例
static MODULE_SERVICE: Lazy<ModuleService> = Lazy::new(ModuleService::new_lazy);

pub async fn list_modules(
    req: HttpRequest,
    query: web::Query<ModuleListQuery>,
) -> ActixResult<HttpResponse> {
    MODULE_SERVICE.list_modules(query.into_inner(), &req).await
}

pub async fn create_module(
    req: HttpRequest,
    module_data: web::Json<CreateModuleRequest>,
) -> ActixResult<HttpResponse> {
    MODULE_SERVICE
        .create_module(module_data.into_inner(), &req)
        .await
}

pub async fn get_module(req: HttpRequest, path: SafeIDI64) -> ActixResult<HttpResponse> {
    MODULE_SERVICE.get_module(path.0, &req).await
}

pub async fn update_module(
    req: HttpRequest,
    path: SafeIDI64,
    update_data: web::Json<UpdateModuleRequest>,
) -> ActixResult<HttpResponse> {
    MODULE_SERVICE
        .update_module(path.0, update_data.into_inner(), &req)
        .await
}

pub async fn delete_module(req: HttpRequest, path: SafeIDI64) -> ActixResult<HttpResponse> {
    MODULE_SERVICE.delete_module(path.0, &req).await
}

// 配置路由
pub fn configure_modules_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/modules")
            .wrap(middlewares::RequireJWT)
            .service(
                web::resource("").route(web::get().to(list_modules)).route(
                    web::post()
                        .to(create_module)
                        .wrap(middlewares::RequireRole::new_any(UserRole::management_roles())),
                ),
            )
            .service(
                web::resource("/{id}")
                    .route(web::get().to(get_module))
                    .route(
                        web::put()
                            .to(update_module)
                            .wrap(middlewares::RequireRole::new_any(UserRole::management_roles())),
                    )
                    .route(
                        web::delete()
                            .to(delete_module)
                            .wrap(middlewares::RequireRole::new_any(UserRole::management_roles())),
                    ),
            ),
    );
}
