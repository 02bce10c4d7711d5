//! 模块存储操作

use super::MemoryStorage;
use crate::errors::Result;
use crate::models::modules::{
    entities::Module,
    requests::{CreateModuleRequest, ModuleListQuery, UpdateModuleRequest},
};
use tracing::debug;

impl MemoryStorage {
    pub async fn create_module_impl(&self, req: CreateModuleRequest) -> Result<Module> {
        let module = self.modules.write().await.insert_with(|id| Module {
            id,
            name: req.name,
            code: req.code,
            description: req.description,
            course_id: req.course_id,
        });
        debug!("Created module {}", module.id);
        Ok(module)
    }

    pub async fn get_module_by_id_impl(&self, id: i64) -> Result<Option<Module>> {
        Ok(self.modules.read().await.get(id))
    }

    pub async fn list_modules_impl(&self, query: ModuleListQuery) -> Result<Vec<Module>> {
        Ok(self
            .modules
            .read()
            .await
            .filter(|m| query.course_id.is_none_or(|course| m.course_id == course)))
    }

    pub async fn update_module_impl(
        &self,
        id: i64,
        update: UpdateModuleRequest,
    ) -> Result<Option<Module>> {
        Ok(self.modules.write().await.update_with(id, |module| {
            if let Some(name) = update.name {
                module.name = name;
            }
            if let Some(code) = update.code {
                module.code = code;
            }
            if let Some(description) = update.description {
                module.description = description;
            }
            if let Some(course_id) = update.course_id {
                module.course_id = course_id;
            }
        }))
    }

    pub async fn delete_module_impl(&self, id: i64) -> Result<bool> {
        let removed = self.modules.write().await.remove(id);
        debug!("Delete module {}: {}", id, removed);
        Ok(removed)
    }
}
