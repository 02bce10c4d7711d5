pub mod absences;
pub mod create;
pub mod delete;
pub mod get;
pub mod list;
pub mod update;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::sessions::requests::{
    CreateSessionRequest, SessionListQuery, UpdateSessionRequest,
};
use crate::storage::Storage;

pub struct SessionService {
    storage: Option<Arc<dyn Storage>>,
}

impl SessionService {
    pub fn new_lazy() -> Self {
        Self { storage: None }
    }

    pub(crate) fn get_storage(&self, request: &HttpRequest) -> Arc<dyn Storage> {
        if let Some(storage) = &self.storage {
            storage.clone()
        } else {
            request
                .app_data::<actix_web::web::Data<Arc<dyn Storage>>>()
                .expect("Storage not found in app data")
                .get_ref()
                .clone()
        }
    }

    pub async fn list_sessions(
        &self,
        query: SessionListQuery,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        list::list_sessions(self, query, request).await
    }

    pub async fn create_session(
        &self,
        session_data: CreateSessionRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        create::create_session(self, session_data, request).await
    }

    pub async fn get_session(
        &self,
        session_id: i64,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        get::get_session(self, session_id, request).await
    }

    pub async fn update_session(
        &self,
        session_id: i64,
        update_data: UpdateSessionRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        update::update_session(self, session_id, update_data, request).await
    }

    pub async fn delete_session(
        &self,
        session_id: i64,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        delete::delete_session(self, session_id, request).await
    }

    // 课次的考勤记录
    pub async fn list_absences(
        &self,
        session_id: i64,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        absences::list_absences(self, session_id, request).await
    }
}
