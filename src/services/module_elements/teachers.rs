//! 教师与模块单元的分配关系

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::ModuleElementService;
use crate::models::{
    ApiResponse, ErrorCode,
    module_elements::{
        requests::AssignTeacherRequest,
        responses::{
            ModuleElementListResponse, ModuleElementTeachersResponse, TeacherAssignmentResponse,
        },
    },
};
use crate::services::references::{internal_error, not_found, require_teacher};

pub async fn list_teachers(
    service: &ModuleElementService,
    element_id: i64,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.get_module_element_by_id(element_id).await {
        Ok(Some(_)) => {}
        Ok(None) => {
            return Ok(not_found(
                ErrorCode::ModuleElementNotFound,
                "Module element not found",
            ));
        }
        Err(e) => return Ok(internal_error("Failed to get module element", e)),
    }

    match storage.list_teachers_by_module_element(element_id).await {
        Ok(items) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            ModuleElementTeachersResponse {
                module_element_id: element_id,
                items,
            },
            "Teachers retrieved successfully",
        ))),
        Err(e) => Ok(internal_error("Failed to list teachers", e)),
    }
}

pub async fn assign_teacher(
    service: &ModuleElementService,
    element_id: i64,
    assign_data: AssignTeacherRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.get_module_element_by_id(element_id).await {
        Ok(Some(_)) => {}
        Ok(None) => {
            return Ok(not_found(
                ErrorCode::ModuleElementNotFound,
                "Module element not found",
            ));
        }
        Err(e) => return Ok(internal_error("Failed to get module element", e)),
    }

    if let Err(resp) = require_teacher(storage.as_ref(), assign_data.teacher_id).await {
        return Ok(resp);
    }

    // 重复分配不去重，与存储层保持一致
    match storage
        .assign_teacher_to_module_element(assign_data.teacher_id, element_id)
        .await
    {
        Ok(assignment) => {
            info!(
                "Teacher {} assigned to module element {}",
                assignment.teacher_id, assignment.module_element_id
            );
            Ok(HttpResponse::Created().json(ApiResponse::success(
                TeacherAssignmentResponse { assignment },
                "Teacher assigned successfully",
            )))
        }
        Err(e) => Ok(internal_error("Failed to assign teacher", e)),
    }
}

pub async fn remove_teacher(
    service: &ModuleElementService,
    element_id: i64,
    teacher_id: i64,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage
        .remove_teacher_from_module_element(teacher_id, element_id)
        .await
    {
        Ok(true) => {
            info!(
                "Teacher {} removed from module element {}",
                teacher_id, element_id
            );
            Ok(HttpResponse::Ok().json(ApiResponse::success_empty("Teacher removed successfully")))
        }
        Ok(false) => Ok(not_found(
            ErrorCode::TeacherAssignmentNotFound,
            "Teacher assignment not found",
        )),
        Err(e) => Ok(internal_error("Failed to remove teacher", e)),
    }
}

pub async fn list_by_teacher(
    service: &ModuleElementService,
    teacher_id: i64,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.list_module_elements_by_teacher(teacher_id).await {
        Ok(items) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            ModuleElementListResponse {
                total: items.len() as i64,
                items,
            },
            "Module elements retrieved successfully",
        ))),
        Err(e) => Ok(internal_error("Failed to list module elements", e)),
    }
}
