//! 院系存储操作

use super::MemoryStorage;
use crate::errors::Result;
use crate::models::departments::{
    entities::Department,
    requests::{CreateDepartmentRequest, UpdateDepartmentRequest},
};
use tracing::debug;

impl MemoryStorage {
    pub async fn create_department_impl(&self, req: CreateDepartmentRequest) -> Result<Department> {
        let department = self
            .departments
            .write()
            .await
            .insert_with(|id| Department {
                id,
                name: req.name,
                description: req.description,
            });
        debug!("Created department {}", department.id);
        Ok(department)
    }

    pub async fn get_department_by_id_impl(&self, id: i64) -> Result<Option<Department>> {
        Ok(self.departments.read().await.get(id))
    }

    pub async fn get_department_by_name_impl(&self, name: &str) -> Result<Option<Department>> {
        Ok(self.departments.read().await.find_first(|d| d.name == name))
    }

    pub async fn list_departments_impl(&self) -> Result<Vec<Department>> {
        Ok(self.departments.read().await.list())
    }

    pub async fn update_department_impl(
        &self,
        id: i64,
        update: UpdateDepartmentRequest,
    ) -> Result<Option<Department>> {
        Ok(self.departments.write().await.update_with(id, |dept| {
            if let Some(name) = update.name {
                dept.name = name;
            }
            if let Some(description) = update.description {
                dept.description = description;
            }
        }))
    }

    /// 删除院系，不会级联删除课程
    pub async fn delete_department_impl(&self, id: i64) -> Result<bool> {
        let removed = self.departments.write().await.remove(id);
        debug!("Delete department {}: {}", id, removed);
        Ok(removed)
    }
}
