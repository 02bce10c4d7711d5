pub mod create;
pub mod delete;
pub mod get;
pub mod list;
pub mod members;
pub mod update;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::student_groups::requests::{
    AssignStudentRequest, CreateStudentGroupRequest, StudentGroupListQuery,
    UpdateStudentGroupRequest,
};
use crate::storage::Storage;

pub struct StudentGroupService {
    storage: Option<Arc<dyn Storage>>,
}

impl StudentGroupService {
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

    pub async fn list_groups(
        &self,
        query: StudentGroupListQuery,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        list::list_groups(self, query, request).await
    }

    pub async fn create_group(
        &self,
        group_data: CreateStudentGroupRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        create::create_group(self, group_data, request).await
    }

    pub async fn get_group(&self, group_id: i64, request: &HttpRequest) -> ActixResult<HttpResponse> {
        get::get_group(self, group_id, request).await
    }

    pub async fn update_group(
        &self,
        group_id: i64,
        update_data: UpdateStudentGroupRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        update::update_group(self, group_id, update_data, request).await
    }

    pub async fn delete_group(
        &self,
        group_id: i64,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        delete::delete_group(self, group_id, request).await
    }

    // 分组内的学生
    pub async fn list_students(
        &self,
        group_id: i64,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        members::list_students(self, group_id, request).await
    }

    // 把学生加入分组
    pub async fn assign_student(
        &self,
        group_id: i64,
        assign_data: AssignStudentRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        members::assign_student(self, group_id, assign_data, request).await
    }

    // 把学生移出分组
    pub async fn remove_student(
        &self,
        group_id: i64,
        student_id: i64,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        members::remove_student(self, group_id, student_id, request).await
    }
}
