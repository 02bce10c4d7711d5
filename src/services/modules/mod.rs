pub mod create;
pub mod delete;
pub mod get;
pub mod list;
pub mod update;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::modules::requests::{CreateModuleRequest, ModuleListQuery, UpdateModuleRequest};
use crate::storage::Storage;

pub struct ModuleService {
    storage: Option<Arc<dyn Storage>>,
}

impl ModuleService {
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

    pub async fn list_modules(
        &self,
        query: ModuleListQuery,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        list::list_modules(self, query, request).await
    }

    pub async fn create_module(
        &self,
        module_data: CreateModuleRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        create::create_module(self, module_data, request).await
    }

    pub async fn get_module(&self, module_id: i64, request: &HttpRequest) -> ActixResult<HttpResponse> {
        get::get_module(self, module_id, request).await
    }

    pub async fn update_module(
        &self,
        module_id: i64,
        update_data: UpdateModuleRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        update::update_module(self, module_id, update_data, request).await
    }

    pub async fn delete_module(
        &self,
        module_id: i64,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        delete::delete_module(self, module_id, request).await
    }
}
