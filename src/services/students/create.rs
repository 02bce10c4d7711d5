use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::{error, info};

use super::StudentService;
use crate::models::{
    ApiResponse, ErrorCode,
    students::{requests::CreateStudentRequest, responses::StudentResponse},
};
use crate::services::references::{bad_request, conflict, internal_error, require_reference};
use crate::utils::validate::{validate_code, validate_email, validate_name};

pub async fn create_student(
    service: &StudentService,
    student_data: CreateStudentRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    if let Err(msg) = validate_code("Student ID", &student_data.student_id) {
        return Ok(bad_request(ErrorCode::BadRequest, msg));
    }
    if let Err(msg) = validate_name("First name", &student_data.first_name) {
        return Ok(bad_request(ErrorCode::BadRequest, msg));
    }
    if let Err(msg) = validate_name("Last name", &student_data.last_name) {
        return Ok(bad_request(ErrorCode::BadRequest, msg));
    }
    if let Err(msg) = validate_email(&student_data.email) {
        return Ok(bad_request(ErrorCode::BadRequest, msg));
    }

    let storage = service.get_storage(request);

    if let Err(resp) = require_reference(
        storage.get_course_by_id(student_data.course_id),
        ErrorCode::CourseNotFound,
        "Course not found",
    )
    .await
    {
        return Ok(resp);
    }

    let _guard = service.unique_write.lock().await;
    // 学号和邮箱都必须唯一
    match storage.get_student_by_student_id(&student_data.student_id).await {
        Ok(Some(_)) => {
            return Ok(conflict(
                ErrorCode::StudentAlreadyExists,
                "Student ID already exists",
            ));
        }
        Ok(None) => {}
        Err(e) => return Ok(internal_error("Failed to check student ID", e)),
    }
    match storage.get_student_by_email(&student_data.email).await {
        Ok(Some(_)) => {
            return Ok(conflict(
                ErrorCode::StudentAlreadyExists,
                "Student email already exists",
            ));
        }
        Ok(None) => {}
        Err(e) => return Ok(internal_error("Failed to check student email", e)),
    }

    match storage.create_student(student_data).await {
        Ok(student) => {
            info!("Student {} ({}) created", student.id, student.student_id);
            Ok(HttpResponse::Created().json(ApiResponse::success(
                StudentResponse { student },
                "Student created successfully",
            )))
        }
        Err(e) => {
            error!("Student creation failed: {}", e);
            Ok(internal_error("Student creation failed", e))
        }
    }
}
