use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::module_elements::requests::{
    AssignTeacherRequest, CreateModuleElementRequest, ModuleElementListQuery,
    UpdateModuleElementRequest,
};
use crate::models::users::entities::UserRole;
use crate::services::ModuleElementService;
use crate::utils::{SafeIDI64, SafeTeacherIdI64};

// 懒加载的全局 ModuleElementService 实例
static MODULE_ELEMENT_SERVICE: Lazy<ModuleElementService> =
    Lazy::new(ModuleElementService::new_lazy);

pub async fn list_module_elements(
    req: HttpRequest,
    query: web::Query<ModuleElementListQuery>,
) -> ActixResult<HttpResponse> {
    MODULE_ELEMENT_SERVICE
        .list_module_elements(query.into_inner(), &req)
        .await
}

pub async fn create_module_element(
    req: HttpRequest,
    element_data: web::Json<CreateModuleElementRequest>,
) -> ActixResult<HttpResponse> {
    MODULE_ELEMENT_SERVICE
        .create_module_element(element_data.into_inner(), &req)
        .await
}

pub async fn get_module_element(req: HttpRequest, path: SafeIDI64) -> ActixResult<HttpResponse> {
    MODULE_ELEMENT_SERVICE.get_module_element(path.0, &req).await
}

pub async fn update_module_element(
    req: HttpRequest,
    path: SafeIDI64,
    update_data: web::Json<UpdateModuleElementRequest>,
) -> ActixResult<HttpResponse> {
    MODULE_ELEMENT_SERVICE
        .update_module_element(path.0, update_data.into_inner(), &req)
        .await
}

pub async fn delete_module_element(
    req: HttpRequest,
    path: SafeIDI64,
) -> ActixResult<HttpResponse> {
    MODULE_ELEMENT_SERVICE
        .delete_module_element(path.0, &req)
        .await
}

// 模块单元的授课教师
pub async fn list_teachers(req: HttpRequest, path: SafeIDI64) -> ActixResult<HttpResponse> {
    MODULE_ELEMENT_SERVICE.list_teachers(path.0, &req).await
}

pub async fn assign_teacher(
    req: HttpRequest,
    path: SafeIDI64,
    assign_data: web::Json<AssignTeacherRequest>,
) -> ActixResult<HttpResponse> {
    MODULE_ELEMENT_SERVICE
        .assign_teacher(path.0, assign_data.into_inner(), &req)
        .await
}

pub async fn remove_teacher(
    req: HttpRequest,
    path: SafeIDI64,
    teacher_id: SafeTeacherIdI64,
) -> ActixResult<HttpResponse> {
    MODULE_ELEMENT_SERVICE
        .remove_teacher(path.0, teacher_id.0, &req)
        .await
}

// 教师负责的模块单元
pub async fn list_by_teacher(
    req: HttpRequest,
    teacher_id: SafeTeacherIdI64,
) -> ActixResult<HttpResponse> {
    MODULE_ELEMENT_SERVICE
        .list_by_teacher(teacher_id.0, &req)
        .await
}

// 配置路由
pub fn configure_module_elements_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/module-elements")
            .wrap(middlewares::RequireJWT)
            .service(
                web::resource("")
                    .route(web::get().to(list_module_elements))
                    .route(
                        web::post()
                            .to(create_module_element)
                            .wrap(middlewares::RequireRole::new_any(UserRole::management_roles())),
                    ),
            )
            .service(
                web::resource("/{id}")
                    .route(web::get().to(get_module_element))
                    .route(
                        web::put()
                            .to(update_module_element)
                            .wrap(middlewares::RequireRole::new_any(UserRole::management_roles())),
                    )
                    .route(
                        web::delete()
                            .to(delete_module_element)
                            .wrap(middlewares::RequireRole::new_any(UserRole::management_roles())),
                    ),
            )
            .service(
                web::resource("/{id}/teachers")
                    .route(web::get().to(list_teachers))
                    .route(
                        web::post()
                            .to(assign_teacher)
                            .wrap(middlewares::RequireRole::new_any(UserRole::management_roles())),
                    ),
            )
            .service(
                web::resource("/{id}/teachers/{teacher_id}").route(
                    web::delete()
                        .to(remove_teacher)
                        .wrap(middlewares::RequireRole::new_any(UserRole::management_roles())),
                ),
            ),
    );
    cfg.service(
        web::scope("/api/v1/teachers")
            .wrap(middlewares::RequireJWT)
            .route("/{teacher_id}/module-elements", web::get().to(list_by_teacher)),
    );
}
