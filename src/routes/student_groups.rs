use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::student_groups::requests::{
    AssignStudentRequest, CreateStudentGroupRequest, StudentGroupListQuery,
    UpdateStudentGroupRequest,
};
use crate::models::users::entities::UserRole;
use crate::services::StudentGroupService;
use crate::utils::{SafeIDI64, SafeStudentIdI64};

// 懒加载的全局 StudentGroupService 实例
static STUDENT_GROUP_SERVICE: Lazy<StudentGroupService> =
    Lazy::new(StudentGroupService::new_lazy);

pub async fn list_groups(
    req: HttpRequest,
    query: web::Query<StudentGroupListQuery>,
) -> ActixResult<HttpResponse> {
    STUDENT_GROUP_SERVICE
        .list_groups(query.into_inner(), &req)
        .await
}

pub async fn create_group(
    req: HttpRequest,
    group_data: web::Json<CreateStudentGroupRequest>,
) -> ActixResult<HttpResponse> {
    STUDENT_GROUP_SERVICE
        .create_group(group_data.into_inner(), &req)
        .await
}

pub async fn get_group(req: HttpRequest, path: SafeIDI64) -> ActixResult<HttpResponse> {
    STUDENT_GROUP_SERVICE.get_group(path.0, &req).await
}

pub async fn update_group(
    req: HttpRequest,
    path: SafeIDI64,
    update_data: web::Json<UpdateStudentGroupRequest>,
) -> ActixResult<HttpResponse> {
    STUDENT_GROUP_SERVICE
        .update_group(path.0, update_data.into_inner(), &req)
        .await
}

pub async fn delete_group(req: HttpRequest, path: SafeIDI64) -> ActixResult<HttpResponse> {
    STUDENT_GROUP_SERVICE.delete_group(path.0, &req).await
}

pub async fn list_group_students(req: HttpRequest, path: SafeIDI64) -> ActixResult<HttpResponse> {
    STUDENT_GROUP_SERVICE.list_students(path.0, &req).await
}

pub async fn assign_student(
    req: HttpRequest,
    path: SafeIDI64,
    assign_data: web::Json<AssignStudentRequest>,
) -> ActixResult<HttpResponse> {
    STUDENT_GROUP_SERVICE
        .assign_student(path.0, assign_data.into_inner(), &req)
        .await
}

pub async fn remove_student(
    req: HttpRequest,
    path: SafeIDI64,
    student_id: SafeStudentIdI64,
) -> ActixResult<HttpResponse> {
    STUDENT_GROUP_SERVICE
        .remove_student(path.0, student_id.0, &req)
        .await
}

// 配置路由
pub fn configure_student_groups_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/groups")
            .wrap(middlewares::RequireJWT)
            .service(
                web::resource("").route(web::get().to(list_groups)).route(
                    web::post()
                        .to(create_group)
                        .wrap(middlewares::RequireRole::new_any(UserRole::management_roles())),
                ),
            )
            .service(
                web::resource("/{id}")
                    .route(web::get().to(get_group))
                    .route(
                        web::put()
                            .to(update_group)
                            .wrap(middlewares::RequireRole::new_any(UserRole::management_roles())),
                    )
                    .route(
                        web::delete()
                            .to(delete_group)
                            .wrap(middlewares::RequireRole::new_any(UserRole::management_roles())),
                    ),
            )
            .service(
                web::resource("/{id}/students")
                    .route(web::get().to(list_group_students))
                    .route(
                        web::post()
                            .to(assign_student)
                            .wrap(middlewares::RequireRole::new_any(UserRole::management_roles())),
                    ),
            )
            .service(
                web::resource("/{id}/students/{student_id}").route(
                    web::delete()
                        .to(remove_student)
                        .wrap(middlewares::RequireRole::new_any(UserRole::management_roles())),
                ),
            ),
    );
}
