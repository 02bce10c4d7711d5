use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::StudentGroupService;
use crate::models::{
    ApiResponse, ErrorCode,
    student_groups::{requests::UpdateStudentGroupRequest, responses::StudentGroupResponse},
};
use crate::services::references::{
    bad_request, internal_error, not_found, require_optional_reference,
};
use crate::utils::validate::validate_name;

pub async fn update_group(
    service: &StudentGroupService,
    group_id: i64,
    update_data: UpdateStudentGroupRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    if let Some(name) = &update_data.name
        && let Err(msg) = validate_name("Group name", name)
    {
        return Ok(bad_request(ErrorCode::BadRequest, msg));
    }

    let storage = service.get_storage(request);

    if let Err(resp) = require_optional_reference(
        update_data.course_id,
        |id| storage.get_course_by_id(id),
        ErrorCode::CourseNotFound,
        "Course not found",
    )
    .await
    {
        return Ok(resp);
    }

    match storage.update_student_group(group_id, update_data).await {
        Ok(Some(group)) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            StudentGroupResponse { group },
            "Group updated successfully",
        ))),
        Ok(None) => Ok(not_found(ErrorCode::StudentGroupNotFound, "Group not found")),
        Err(e) => Ok(internal_error("Failed to update group", e)),
    }
}
