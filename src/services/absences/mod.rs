pub mod batch;
pub mod create;
pub mod delete;
pub mod get;
pub mod list;
pub mod update;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::absences::requests::{
    AbsenceListQuery, BatchCreateAbsencesRequest, CreateAbsenceRequest, UpdateAbsenceRequest,
};
use crate::storage::Storage;

pub struct AbsenceService {
    storage: Option<Arc<dyn Storage>>,
}

impl AbsenceService {
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

    pub async fn list_absences(
        &self,
        query: AbsenceListQuery,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        list::list_absences(self, query, request).await
    }

    pub async fn create_absence(
        &self,
        absence_data: CreateAbsenceRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        create::create_absence(self, absence_data, request).await
    }

    pub async fn batch_create_absences(
        &self,
        batch_data: BatchCreateAbsencesRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        batch::batch_create_absences(self, batch_data, request).await
    }

    pub async fn get_absence(
        &self,
        absence_id: i64,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        get::get_absence(self, absence_id, request).await
    }

    pub async fn update_absence(
        &self,
        absence_id: i64,
        update_data: UpdateAbsenceRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        update::update_absence(self, absence_id, update_data, request).await
    }

    pub async fn delete_absence(
        &self,
        absence_id: i64,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        delete::delete_absence(self, absence_id, request).await
    }
}
