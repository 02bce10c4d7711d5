use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::UserService;
use crate::models::{
    ApiResponse, ErrorCode,
    users::{requests::UpdateUserRequest, responses::UserResponse},
};
use crate::services::references::{
    bad_request, conflict, internal_error, not_found, require_optional_reference,
};
use crate::utils::validate::{validate_email, validate_name, validate_password, validate_username};

pub async fn update_user(
    service: &UserService,
    user_id: i64,
    mut update_data: UpdateUserRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    if let Some(username) = &update_data.username
        && let Err(msg) = validate_username(username)
    {
        return Ok(bad_request(ErrorCode::UserNameInvalid, msg));
    }
    if let Some(email) = &update_data.email
        && let Err(msg) = validate_email(email)
    {
        return Ok(bad_request(ErrorCode::UserEmailInvalid, msg));
    }
    if let Some(full_name) = &update_data.full_name
        && let Err(msg) = validate_name("Full name", full_name)
    {
        return Ok(bad_request(ErrorCode::BadRequest, msg));
    }

    let storage = service.get_storage(request);

    if let Err(resp) = require_optional_reference(
        update_data.department_id.flatten(),
        |id| storage.get_department_by_id(id),
        ErrorCode::DepartmentNotFound,
        "Department not found",
    )
    .await
    {
        return Ok(resp);
    }

    if let Some(password) = update_data.password {
        if let Err(msg) = validate_password(&password) {
            return Ok(bad_request(ErrorCode::UserPasswordInvalid, msg));
        }
        match crate::utils::password::hash_password(&password) {
            Ok(hash) => update_data.password = Some(hash),
            Err(e) => return Ok(internal_error("Password hashing failed", e)),
        }
    }

    let _guard = service.unique_write.lock().await;
    // 改名或改邮箱时不能与其他用户重复
    if let Some(username) = &update_data.username {
        match storage.get_user_by_username(username).await {
            Ok(Some(other)) if other.id != user_id => {
                return Ok(conflict(
                    ErrorCode::UserAlreadyExists,
                    "Username already exists",
                ));
            }
            Ok(_) => {}
            Err(e) => return Ok(internal_error("Failed to check username", e)),
        }
    }
    if let Some(email) = &update_data.email {
        match storage.get_user_by_email(email).await {
            Ok(Some(other)) if other.id != user_id => {
                return Ok(conflict(ErrorCode::UserAlreadyExists, "Email already exists"));
            }
            Ok(_) => {}
            Err(e) => return Ok(internal_error("Failed to check email", e)),
        }
    }

    match storage.update_user(user_id, update_data).await {
        Ok(Some(user)) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            UserResponse { user },
            "User information updated successfully",
        ))),
        Ok(None) => Ok(not_found(ErrorCode::UserNotFound, "User not found")),
        Err(e) => Ok(internal_error("Failed to update user information", e)),
    }
}
