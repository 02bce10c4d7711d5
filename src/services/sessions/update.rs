use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::SessionService;
use crate::models::{
    ApiResponse, ErrorCode,
    sessions::{requests::UpdateSessionRequest, responses::SessionResponse},
};
use crate::services::references::{
    internal_error, not_found, require_optional_reference, require_teacher,
};

pub async fn update_session(
    service: &SessionService,
    session_id: i64,
    update_data: UpdateSessionRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    if let Err(resp) = require_optional_reference(
        update_data.module_element_id,
        |id| storage.get_module_element_by_id(id),
        ErrorCode::ModuleElementNotFound,
        "Module element not found",
    )
    .await
    {
        return Ok(resp);
    }
    if let Some(teacher_id) = update_data.teacher_id
        && let Err(resp) = require_teacher(storage.as_ref(), teacher_id).await
    {
        return Ok(resp);
    }
    // Some(None) 表示清除分组，不需要检查
    if let Err(resp) = require_optional_reference(
        update_data.group_id.flatten(),
        |id| storage.get_student_group_by_id(id),
        ErrorCode::StudentGroupNotFound,
        "Group not found",
    )
    .await
    {
        return Ok(resp);
    }

    match storage.update_session(session_id, update_data).await {
        Ok(Some(session)) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            SessionResponse { session },
            "Session updated successfully",
        ))),
        Ok(None) => Ok(not_found(ErrorCode::SessionNotFound, "Session not found")),
        Err(e) => Ok(internal_error("Failed to update session", e)),
    }
}
