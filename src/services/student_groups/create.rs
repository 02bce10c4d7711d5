use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::{error, info};

use super::StudentGroupService;
use crate::models::{
    ApiResponse, ErrorCode,
    student_groups::{requests::CreateStudentGroupRequest, responses::StudentGroupResponse},
};
use crate::services::references::{bad_request, internal_error, require_reference};
use crate::utils::validate::validate_name;

pub async fn create_group(
    service: &StudentGroupService,
    group_data: CreateStudentGroupRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    if let Err(msg) = validate_name("Group name", &group_data.name) {
        return Ok(bad_request(ErrorCode::BadRequest, msg));
    }

    let storage = service.get_storage(request);

    if let Err(resp) = require_reference(
        storage.get_course_by_id(group_data.course_id),
        ErrorCode::CourseNotFound,
        "Course not found",
    )
    .await
    {
        return Ok(resp);
    }

    match storage.create_student_group(group_data).await {
        Ok(group) => {
            info!("{} group {} created", group.group_type, group.id);
            Ok(HttpResponse::Created().json(ApiResponse::success(
                StudentGroupResponse { group },
                "Group created successfully",
            )))
        }
        Err(e) => {
            error!("Group creation failed: {}", e);
            Ok(internal_error("Group creation failed", e))
        }
    }
}
