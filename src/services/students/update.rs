use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::StudentService;
use crate::models::{
    ApiResponse, ErrorCode,
    students::{requests::UpdateStudentRequest, responses::StudentResponse},
};
use crate::services::references::{
    bad_request, conflict, internal_error, not_found, require_optional_reference,
};
use crate::utils::validate::{validate_code, validate_email, validate_name};

pub async fn update_student(
    service: &StudentService,
    student_id: i64,
    update_data: UpdateStudentRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    if let Some(code) = &update_data.student_id
        && let Err(msg) = validate_code("Student ID", code)
    {
        return Ok(bad_request(ErrorCode::BadRequest, msg));
    }
    if let Some(first_name) = &update_data.first_name
        && let Err(msg) = validate_name("First name", first_name)
    {
        return Ok(bad_request(ErrorCode::BadRequest, msg));
    }
    if let Some(last_name) = &update_data.last_name
        && let Err(msg) = validate_name("Last name", last_name)
    {
        return Ok(bad_request(ErrorCode::BadRequest, msg));
    }
    if let Some(email) = &update_data.email
        && let Err(msg) = validate_email(email)
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

    let _guard = service.unique_write.lock().await;
    if let Some(code) = &update_data.student_id {
        match storage.get_student_by_student_id(code).await {
            Ok(Some(other)) if other.id != student_id => {
                return Ok(conflict(
                    ErrorCode::StudentAlreadyExists,
                    "Student ID already exists",
                ));
            }
            Ok(_) => {}
            Err(e) => return Ok(internal_error("Failed to check student ID", e)),
        }
    }
    if let Some(email) = &update_data.email {
        match storage.get_student_by_email(email).await {
            Ok(Some(other)) if other.id != student_id => {
                return Ok(conflict(
                    ErrorCode::StudentAlreadyExists,
                    "Student email already exists",
                ));
            }
            Ok(_) => {}
            Err(e) => return Ok(internal_error("Failed to check student email", e)),
        }
    }

    match storage.update_student(student_id, update_data).await {
        Ok(Some(student)) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            StudentResponse { student },
            "Student updated successfully",
        ))),
        Ok(None) => Ok(not_found(ErrorCode::StudentNotFound, "Student not found")),
        Err(e) => Ok(internal_error("Failed to update student", e)),
    }
}
