use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::CourseService;
use crate::models::{ApiResponse, ErrorCode};
use crate::services::references::{internal_error, not_found};
use crate::services::statistics::collect_threshold_report;

pub async fn get_threshold_report(
    service: &CourseService,
    course_id: i64,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match collect_threshold_report(storage.as_ref(), course_id).await {
        Ok(Some(report)) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            report,
            "Threshold report retrieved successfully",
        ))),
        Ok(None) => Ok(not_found(ErrorCode::CourseNotFound, "Course not found")),
        Err(e) => {
            error!("Failed to build threshold report for course {}: {}", course_id, e);
            Ok(internal_error("Failed to build threshold report", e))
        }
    }
}
