use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::UserService;
use crate::models::{
    ApiResponse,
    users::{requests::UserListQuery, responses::UserListResponse},
};
use crate::services::references::internal_error;

pub async fn list_users(
    service: &UserService,
    query: UserListQuery,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.list_users(query).await {
        Ok(items) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            UserListResponse {
                total: items.len() as i64,
                items,
            },
            "User list retrieved successfully",
        ))),
        Err(e) => Ok(internal_error("Failed to retrieve user list", e)),
    }
}
