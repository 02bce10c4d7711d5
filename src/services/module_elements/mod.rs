pub mod create;
pub mod delete;
pub mod get;
pub mod list;
pub mod teachers;
pub mod update;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::module_elements::requests::{
    AssignTeacherRequest, CreateModuleElementRequest, ModuleElementListQuery,
    UpdateModuleElementRequest,
};
use crate::storage::Storage;

pub struct ModuleElementService {
    storage: Option<Arc<dyn Storage>>,
}

impl ModuleElementService {
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

    pub async fn list_module_elements(
        &self,
        query: ModuleElementListQuery,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        list::list_module_elements(self, query, request).await
    }

    pub async fn create_module_element(
        &self,
        element_data: CreateModuleElementRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        create::create_module_element(self, element_data, request).await
    }

    pub async fn get_module_element(
        &self,
        element_id: i64,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        get::get_module_element(self, element_id, request).await
    }

    pub async fn update_module_element(
        &self,
        element_id: i64,
        update_data: UpdateModuleElementRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        update::update_module_element(self, element_id, update_data, request).await
    }

    pub async fn delete_module_element(
        &self,
        element_id: i64,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        delete::delete_module_element(self, element_id, request).await
    }

    // 模块单元的授课教师
    pub async fn list_teachers(
        &self,
        element_id: i64,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        teachers::list_teachers(self, element_id, request).await
    }

    // 分配教师
    pub async fn assign_teacher(
        &self,
        element_id: i64,
        assign_data: AssignTeacherRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        teachers::assign_teacher(self, element_id, assign_data, request).await
    }

    // 取消分配
    pub async fn remove_teacher(
        &self,
        element_id: i64,
        teacher_id: i64,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        teachers::remove_teacher(self, element_id, teacher_id, request).await
    }

    // 某位教师负责的模块单元
    pub async fn list_by_teacher(
        &self,
        teacher_id: i64,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        teachers::list_by_teacher(self, teacher_id, request).await
    }
}
