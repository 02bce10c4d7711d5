use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::{error, info};

use super::SessionService;
use crate::models::{
    ApiResponse, ErrorCode,
    sessions::{requests::CreateSessionRequest, responses::SessionResponse},
};
use crate::services::references::{
    internal_error, require_optional_reference, require_reference, require_teacher,
};

pub async fn create_session(
    service: &SessionService,
    session_data: CreateSessionRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    if let Err(resp) = require_reference(
        storage.get_module_element_by_id(session_data.module_element_id),
        ErrorCode::ModuleElementNotFound,
        "Module element not found",
    )
    .await
    {
        return Ok(resp);
    }
    if let Err(resp) = require_teacher(storage.as_ref(), session_data.teacher_id).await {
        return Ok(resp);
    }
    if let Err(resp) = require_optional_reference(
        session_data.group_id,
        |id| storage.get_student_group_by_id(id),
        ErrorCode::StudentGroupNotFound,
        "Group not found",
    )
    .await
    {
        return Ok(resp);
    }

    match storage.create_session(session_data).await {
        Ok(session) => {
            info!(
                "Session {} created for module element {} on {}",
                session.id,
                session.module_element_id,
                session.date.format("%Y-%m-%d %H:%M")
            );
            Ok(HttpResponse::Created().json(ApiResponse::success(
                SessionResponse { session },
                "Session created successfully",
            )))
        }
        Err(e) => {
            error!("Session creation failed: {}", e);
            Ok(internal_error("Session creation failed", e))
        }
    }
}
