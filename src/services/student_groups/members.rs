//! 分组成员管理

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::StudentGroupService;
use crate::models::{
    ApiResponse, ErrorCode,
    student_groups::{
        requests::AssignStudentRequest,
        responses::{GroupAssignmentResponse, GroupStudentsResponse},
    },
};
use crate::services::references::{internal_error, not_found, require_reference};

pub async fn list_students(
    service: &StudentGroupService,
    group_id: i64,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.get_student_group_by_id(group_id).await {
        Ok(Some(_)) => {}
        Ok(None) => return Ok(not_found(ErrorCode::StudentGroupNotFound, "Group not found")),
        Err(e) => return Ok(internal_error("Failed to get group", e)),
    }

    match storage.list_students_in_group(group_id).await {
        Ok(items) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            GroupStudentsResponse { group_id, items },
            "Group students retrieved successfully",
        ))),
        Err(e) => Ok(internal_error("Failed to list group students", e)),
    }
}

pub async fn assign_student(
    service: &StudentGroupService,
    group_id: i64,
    assign_data: AssignStudentRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.get_student_group_by_id(group_id).await {
        Ok(Some(_)) => {}
        Ok(None) => return Ok(not_found(ErrorCode::StudentGroupNotFound, "Group not found")),
        Err(e) => return Ok(internal_error("Failed to get group", e)),
    }

    if let Err(resp) = require_reference(
        storage.get_student_by_id(assign_data.student_id),
        ErrorCode::StudentNotFound,
        "Student not found",
    )
    .await
    {
        return Ok(resp);
    }

    match storage
        .assign_student_to_group(assign_data.student_id, group_id)
        .await
    {
        Ok(assignment) => {
            info!(
                "Student {} added to group {}",
                assignment.student_id, assignment.group_id
            );
            Ok(HttpResponse::Created().json(ApiResponse::success(
                GroupAssignmentResponse { assignment },
                "Student added to group successfully",
            )))
        }
        Err(e) => Ok(internal_error("Failed to add student to group", e)),
    }
}

pub async fn remove_student(
    service: &StudentGroupService,
    group_id: i64,
    student_id: i64,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.remove_student_from_group(student_id, group_id).await {
        Ok(true) => {
            info!("Student {} removed from group {}", student_id, group_id);
            Ok(HttpResponse::Ok().json(ApiResponse::success_empty(
                "Student removed from group successfully",
            )))
        }
        Ok(false) => Ok(not_found(
            ErrorCode::GroupAssignmentNotFound,
            "Group assignment not found",
        )),
        Err(e) => Ok(internal_error("Failed to remove student from group", e)),
    }
}
