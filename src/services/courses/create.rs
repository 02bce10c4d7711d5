use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::{error, info};

use super::CourseService;
use crate::models::{
    ApiResponse, ErrorCode,
    courses::{requests::CreateCourseRequest, responses::CourseResponse},
};
use crate::services::references::{bad_request, conflict, internal_error, require_reference};
use crate::utils::validate::{validate_absence_threshold, validate_code, validate_name};

pub async fn create_course(
    service: &CourseService,
    course_data: CreateCourseRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    if let Err(msg) = validate_name("Course name", &course_data.name) {
        return Ok(bad_request(ErrorCode::BadRequest, msg));
    }
    if let Err(msg) = validate_code("Course code", &course_data.code) {
        return Ok(bad_request(ErrorCode::BadRequest, msg));
    }
    if let Err(msg) = validate_absence_threshold(course_data.absence_threshold) {
        return Ok(bad_request(ErrorCode::BadRequest, msg));
    }

    let storage = service.get_storage(request);

    if let Err(resp) = require_reference(
        storage.get_department_by_id(course_data.department_id),
        ErrorCode::DepartmentNotFound,
        "Department not found",
    )
    .await
    {
        return Ok(resp);
    }

    let _guard = service.unique_write.lock().await;
    match storage.get_course_by_code(&course_data.code).await {
        Ok(Some(_)) => {
            return Ok(conflict(
                ErrorCode::CourseAlreadyExists,
                "Course code already exists",
            ));
        }
        Ok(None) => {}
        Err(e) => return Ok(internal_error("Failed to check course code", e)),
    }

    match storage.create_course(course_data).await {
        Ok(course) => {
            info!("Course {} ({}) created", course.id, course.code);
            Ok(HttpResponse::Created().json(ApiResponse::success(
                CourseResponse { course },
                "Course created successfully",
            )))
        }
        Err(e) => {
            error!("Course creation failed: {}", e);
            Ok(internal_error("Course creation failed", e))
        }
    }
}
