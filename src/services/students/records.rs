//! 学生维度的关联查询：所在分组、考勤记录、考勤汇总

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::StudentService;
use crate::models::{
    ApiResponse, ErrorCode, absences::responses::AbsenceListResponse,
    student_groups::responses::StudentGroupListResponse,
};
use crate::services::references::{internal_error, not_found};
use crate::services::statistics::collect_student_absence_summary;

async fn ensure_student(
    service: &StudentService,
    student_id: i64,
    request: &HttpRequest,
) -> Option<HttpResponse> {
    let storage = service.get_storage(request);
    match storage.get_student_by_id(student_id).await {
        Ok(Some(_)) => None,
        Ok(None) => Some(not_found(ErrorCode::StudentNotFound, "Student not found")),
        Err(e) => Some(internal_error("Failed to get student", e)),
    }
}

pub async fn list_groups(
    service: &StudentService,
    student_id: i64,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    if let Some(resp) = ensure_student(service, student_id, request).await {
        return Ok(resp);
    }

    let storage = service.get_storage(request);
    match storage.list_groups_of_student(student_id).await {
        Ok(items) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            StudentGroupListResponse {
                total: items.len() as i64,
                items,
            },
            "Student groups retrieved successfully",
        ))),
        Err(e) => Ok(internal_error("Failed to list student groups", e)),
    }
}

pub async fn list_absences(
    service: &StudentService,
    student_id: i64,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    if let Some(resp) = ensure_student(service, student_id, request).await {
        return Ok(resp);
    }

    let storage = service.get_storage(request);
    match storage.list_absences_by_student(student_id).await {
        Ok(items) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            AbsenceListResponse {
                total: items.len() as i64,
                items,
            },
            "Student absences retrieved successfully",
        ))),
        Err(e) => Ok(internal_error("Failed to list student absences", e)),
    }
}

pub async fn get_absence_summary(
    service: &StudentService,
    student_id: i64,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match collect_student_absence_summary(storage.as_ref(), student_id).await {
        Ok(Some(summary)) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            summary,
            "Absence summary retrieved successfully",
        ))),
        Ok(None) => Ok(not_found(ErrorCode::StudentNotFound, "Student not found")),
        Err(e) => Ok(internal_error("Failed to summarize absences", e)),
    }
}
