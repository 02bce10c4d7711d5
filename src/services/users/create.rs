use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::{error, info};

use super::UserService;
use crate::models::{
    ApiResponse, ErrorCode,
    users::{requests::CreateUserRequest, responses::UserResponse},
};
use crate::services::references::{
    bad_request, conflict, internal_error, require_optional_reference,
};
use crate::utils::password::hash_password;
use crate::utils::validate::{validate_email, validate_name, validate_password, validate_username};

pub async fn create_user(
    service: &UserService,
    mut user_data: CreateUserRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    // 验证用户名
    if let Err(msg) = validate_username(&user_data.username) {
        return Ok(bad_request(ErrorCode::UserNameInvalid, msg));
    }

    // 验证邮箱
    if let Err(msg) = validate_email(&user_data.email) {
        return Ok(bad_request(ErrorCode::UserEmailInvalid, msg));
    }

    if let Err(msg) = validate_password(&user_data.password) {
        return Ok(bad_request(ErrorCode::UserPasswordInvalid, msg));
    }

    if let Err(msg) = validate_name("Full name", &user_data.full_name) {
        return Ok(bad_request(ErrorCode::BadRequest, msg));
    }

    let storage = service.get_storage(request);

    if let Err(resp) = require_optional_reference(
        user_data.department_id,
        |id| storage.get_department_by_id(id),
        ErrorCode::DepartmentNotFound,
        "Department not found",
    )
    .await
    {
        return Ok(resp);
    }

    user_data.password = match hash_password(&user_data.password) {
        Ok(hash) => hash,
        Err(e) => {
            error!("Password hashing failed: {}", e);
            return Ok(internal_error("Password hashing failed", e));
        }
    };

    let _guard = service.unique_write.lock().await;
    // 用户名和邮箱都必须唯一
    match storage.get_user_by_username(&user_data.username).await {
        Ok(Some(_)) => {
            return Ok(conflict(
                ErrorCode::UserAlreadyExists,
                "Username already exists",
            ));
        }
        Ok(None) => {}
        Err(e) => return Ok(internal_error("Failed to check username", e)),
    }
    match storage.get_user_by_email(&user_data.email).await {
        Ok(Some(_)) => {
            return Ok(conflict(ErrorCode::UserAlreadyExists, "Email already exists"));
        }
        Ok(None) => {}
        Err(e) => return Ok(internal_error("Failed to check email", e)),
    }

    match storage.create_user(user_data).await {
        Ok(user) => {
            info!("User {} created with role {}", user.username, user.role);
            Ok(HttpResponse::Created()
                .json(ApiResponse::success(UserResponse { user }, "用户创建成功")))
        }
        Err(e) => {
            error!("User creation failed: {}", e);
            Ok(internal_error("User creation failed", e))
        }
    }
}
