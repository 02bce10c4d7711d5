use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::{error, info};

use super::AbsenceService;
use super::create::check_absence_references;
use crate::models::{
    ApiResponse, ErrorCode,
    absences::{requests::BatchCreateAbsencesRequest, responses::AbsenceListResponse},
};
use crate::services::references::{bad_request, internal_error};

pub async fn batch_create_absences(
    service: &AbsenceService,
    batch_data: BatchCreateAbsencesRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    if batch_data.absences.is_empty() {
        return Ok(bad_request(ErrorCode::BadRequest, "No absences provided"));
    }

    let storage = service.get_storage(request);

    // 先校验全部引用，任何一条不合法都不写入
    for absence_data in &batch_data.absences {
        if let Err(resp) = check_absence_references(&storage, absence_data).await {
            return Ok(resp);
        }
    }

    match storage.batch_create_absences(batch_data.absences).await {
        Ok(items) => {
            info!("Batch recorded {} absences", items.len());
            Ok(HttpResponse::Created().json(ApiResponse::success(
                AbsenceListResponse {
                    total: items.len() as i64,
                    items,
                },
                "Absences recorded successfully",
            )))
        }
        Err(e) => {
            error!("Batch absence creation failed: {}", e);
            Ok(internal_error("Batch absence creation failed", e))
        }
    }
}
