use super::entities::UserRole;
use crate::models::deserialize_some;
use serde::Deserialize;
use ts_rs::TS;

// 用户列表查询参数（同时用于 HTTP 查询与存储层过滤）
#[derive(Debug, Clone, Default, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/user.ts")]
pub struct UserListQuery {
    pub role: Option<UserRole>,
    pub department_id: Option<i64>,
}

// 用户创建请求
//
// 服务层在写入存储前会把 password 替换为 Argon2 哈希
#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/user.ts")]
pub struct CreateUserRequest {
    pub username: String,
    pub password: String,
    pub full_name: String,
    pub email: String,
    pub role: UserRole,
    #[serde(default)]
    pub department_id: Option<i64>,
}

// 用户更新请求
#[derive(Debug, Clone, Default, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/user.ts")]
pub struct UpdateUserRequest {
    pub username: Option<String>,
    pub password: Option<String>,
    pub full_name: Option<String>,
    pub email: Option<String>,
    pub role: Option<UserRole>,
    #[serde(default, deserialize_with = "deserialize_some")]
    pub department_id: Option<Option<i64>>,
}
