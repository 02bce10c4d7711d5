pub mod create;
pub mod delete;
pub mod get;
pub mod list;
pub mod update;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;
use tokio::sync::Mutex;

use crate::models::departments::requests::{CreateDepartmentRequest, UpdateDepartmentRequest};
use crate::storage::Storage;

pub struct DepartmentService {
    storage: Option<Arc<dyn Storage>>,
    // 唯一性检查与写入在同一把锁内完成
    unique_write: Mutex<()>,
}

impl DepartmentService {
    pub fn new_lazy() -> Self {
        Self {
            storage: None,
            unique_write: Mutex::new(()),
        }
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

    pub async fn list_departments(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        list::list_departments(self, request).await
    }

    pub async fn create_department(
        &self,
        department_data: CreateDepartmentRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        create::create_department(self, department_data, request).await
    }

    pub async fn get_department(
        &self,
        department_id: i64,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        get::get_department(self, department_id, request).await
    }

    pub async fn update_department(
        &self,
        department_id: i64,
        update_data: UpdateDepartmentRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        update::update_department(self, department_id, update_data, request).await
    }

    // 删除院系不会级联删除其下的课程
    pub async fn delete_department(
        &self,
        department_id: i64,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        delete::delete_department(self, department_id, request).await
    }
}
