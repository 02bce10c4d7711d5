use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::CourseService;
use crate::models::{
    ApiResponse, ErrorCode,
    courses::{requests::UpdateCourseRequest, responses::CourseResponse},
};
use crate::services::references::{
    bad_request, conflict, internal_error, not_found, require_optional_reference,
};
use crate::utils::validate::{validate_absence_threshold, validate_code, validate_name};

pub async fn update_course(
    service: &CourseService,
    course_id: i64,
    update_data: UpdateCourseRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    if let Some(name) = &update_data.name
        && let Err(msg) = validate_name("Course name", name)
    {
        return Ok(bad_request(ErrorCode::BadRequest, msg));
    }
    if let Some(code) = &update_data.code
        && let Err(msg) = validate_code("Course code", code)
    {
        return Ok(bad_request(ErrorCode::BadRequest, msg));
    }
    if let Some(threshold) = update_data.absence_threshold
        && let Err(msg) = validate_absence_threshold(threshold)
    {
        return Ok(bad_request(ErrorCode::BadRequest, msg));
    }

    let storage = service.get_storage(request);

    if let Err(resp) = require_optional_reference(
        update_data.department_id,
        |id| storage.get_department_by_id(id),
        ErrorCode::DepartmentNotFound,
        "Department not found",
    )
    .await
    {
        return Ok(resp);
    }

    let _guard = service.unique_write.lock().await;
    if let Some(code) = &update_data.code {
        match storage.get_course_by_code(code).await {
            Ok(Some(other)) if other.id != course_id => {
                return Ok(conflict(
                    ErrorCode::CourseAlreadyExists,
                    "Course code already exists",
                ));
            }
            Ok(_) => {}
            Err(e) => return Ok(internal_error("Failed to check course code", e)),
        }
    }

    match storage.update_course(course_id, update_data).await {
        Ok(Some(course)) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            CourseResponse { course },
            "Course updated successfully",
        ))),
        Ok(None) => Ok(not_found(ErrorCode::CourseNotFound, "Course not found")),
        Err(e) => Ok(internal_error("Failed to update course", e)),
    }
}
