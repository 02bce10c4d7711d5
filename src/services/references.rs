//! 请求中外键字段的存在性校验
//!
//! 存储层不检查外键，写入前由服务层确认被引用的记录存在。

use actix_web::HttpResponse;
use std::future::Future;

use crate::errors::Result;
use crate::models::{ApiResponse, ErrorCode, users::entities::User};
use crate::storage::Storage;

/// 被引用的记录不存在时返回 400，存储出错时返回 500
pub(crate) async fn require_reference<T>(
    lookup: impl Future<Output = Result<Option<T>>>,
    code: ErrorCode,
    message: &str,
) -> std::result::Result<T, HttpResponse> {
    match lookup.await {
        Ok(Some(value)) => Ok(value),
        Ok(None) => Err(HttpResponse::BadRequest().json(ApiResponse::error_empty(code, message))),
        Err(e) => Err(HttpResponse::InternalServerError()
            .json(ApiResponse::internal_error("Failed to check reference", e))),
    }
}

/// 可选外键：为 None 时直接通过
pub(crate) async fn require_optional_reference<T, F, Fut>(
    id: Option<i64>,
    lookup: F,
    code: ErrorCode,
    message: &str,
) -> std::result::Result<(), HttpResponse>
where
    F: FnOnce(i64) -> Fut,
    Fut: Future<Output = Result<Option<T>>>,
{
    match id {
        Some(id) => require_reference(lookup(id), code, message).await.map(|_| ()),
        None => Ok(()),
    }
}

/// 授课教师字段：用户必须存在且角色为 teacher
pub(crate) async fn require_teacher(
    storage: &dyn Storage,
    teacher_id: i64,
) -> std::result::Result<User, HttpResponse> {
    let user = require_reference(
        storage.get_user_by_id(teacher_id),
        ErrorCode::UserNotFound,
        "Teacher not found",
    )
    .await?;
    if !user.is_teacher() {
        return Err(bad_request(
            ErrorCode::UserNotTeacher,
            format!("User {teacher_id} is not a teacher"),
        ));
    }
    Ok(user)
}

pub(crate) fn bad_request(code: ErrorCode, message: impl Into<String>) -> HttpResponse {
    HttpResponse::BadRequest().json(ApiResponse::error_empty(code, message))
}

pub(crate) fn conflict(code: ErrorCode, message: impl Into<String>) -> HttpResponse {
    HttpResponse::Conflict().json(ApiResponse::error_empty(code, message))
}

pub(crate) fn not_found(code: ErrorCode, message: impl Into<String>) -> HttpResponse {
    HttpResponse::NotFound().json(ApiResponse::error_empty(code, message))
}

pub(crate) fn internal_error(context: &str, err: impl std::fmt::Display) -> HttpResponse {
    HttpResponse::InternalServerError().json(ApiResponse::internal_error(context, err))
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::http::StatusCode;

    #[tokio::test]
    async fn test_missing_reference_is_bad_request() {
        let resp = require_reference(async { Ok(None::<i64>) }, ErrorCode::CourseNotFound, "nope")
            .await
            .unwrap_err();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_optional_reference_skips_none() {
        let checked = require_optional_reference(
            None,
            |_| async { Ok(None::<i64>) },
            ErrorCode::DepartmentNotFound,
            "nope",
        )
        .await;
        assert!(checked.is_ok());
    }

    #[tokio::test]
    async fn test_teacher_reference_checks_role() {
        use crate::models::users::{entities::UserRole, requests::CreateUserRequest};
        use crate::storage::MemoryStorage;

        let storage = MemoryStorage::new();
        let mut ids = Vec::new();
        for (username, role) in [("root", UserRole::Admin), ("prof", UserRole::Teacher)] {
            let user = storage
                .create_user(CreateUserRequest {
                    username: username.into(),
                    password: "hashed".into(),
                    full_name: username.into(),
                    email: format!("{username}@example.edu"),
                    role,
                    department_id: None,
                })
                .await
                .unwrap();
            ids.push(user.id);
        }

        let resp = require_teacher(&storage, ids[0]).await.unwrap_err();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let resp = require_teacher(&storage, 99).await.unwrap_err();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        assert_eq!(require_teacher(&storage, ids[1]).await.unwrap().username, "prof");
    }

    #[tokio::test]
    async fn test_storage_failure_is_internal_error() {
        let resp = require_reference(
            async { Err::<Option<i64>, _>(crate::errors::AttendanceError::storage_operation("boom")) },
            ErrorCode::CourseNotFound,
            "nope",
        )
        .await
        .unwrap_err();
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
