//! 模块单元与教师分配存储操作

use std::collections::HashSet;

use super::MemoryStorage;
use crate::errors::Result;
use crate::models::{
    module_elements::{
        entities::{ModuleElement, TeacherModuleElement},
        requests::{
            CreateModuleElementRequest, ModuleElementListQuery, TeacherModuleElementQuery,
            UpdateModuleElementRequest,
        },
    },
    users::entities::User,
};
use tracing::debug;

impl MemoryStorage {
    pub async fn create_module_element_impl(
        &self,
        req: CreateModuleElementRequest,
    ) -> Result<ModuleElement> {
        let element = self
            .module_elements
            .write()
            .await
            .insert_with(|id| ModuleElement {
                id,
                name: req.name,
                code: req.code,
                description: req.description,
                module_id: req.module_id,
            });
        debug!("Created module element {}", element.id);
        Ok(element)
    }

    pub async fn get_module_element_by_id_impl(&self, id: i64) -> Result<Option<ModuleElement>> {
        Ok(self.module_elements.read().await.get(id))
    }

    pub async fn list_module_elements_impl(
        &self,
        query: ModuleElementListQuery,
    ) -> Result<Vec<ModuleElement>> {
        Ok(self
            .module_elements
            .read()
            .await
            .filter(|e| query.module_id.is_none_or(|module| e.module_id == module)))
    }

    pub async fn update_module_element_impl(
        &self,
        id: i64,
        update: UpdateModuleElementRequest,
    ) -> Result<Option<ModuleElement>> {
        Ok(self.module_elements.write().await.update_with(id, |element| {
            if let Some(name) = update.name {
                element.name = name;
            }
            if let Some(code) = update.code {
                element.code = code;
            }
            if let Some(description) = update.description {
                element.description = description;
            }
            if let Some(module_id) = update.module_id {
                element.module_id = module_id;
            }
        }))
    }

    pub async fn delete_module_element_impl(&self, id: i64) -> Result<bool> {
        let removed = self.module_elements.write().await.remove(id);
        debug!("Delete module element {}: {}", id, removed);
        Ok(removed)
    }

    /// 分配教师，不检查重复
    pub async fn assign_teacher_to_module_element_impl(
        &self,
        teacher_id: i64,
        module_element_id: i64,
    ) -> Result<TeacherModuleElement> {
        let assignment = self
            .teacher_module_elements
            .write()
            .await
            .insert_with(|id| TeacherModuleElement {
                id,
                teacher_id,
                module_element_id,
            });
        debug!(
            "Assigned teacher {} to module element {}",
            teacher_id, module_element_id
        );
        Ok(assignment)
    }

    pub async fn remove_teacher_from_module_element_impl(
        &self,
        teacher_id: i64,
        module_element_id: i64,
    ) -> Result<bool> {
        Ok(self
            .teacher_module_elements
            .write()
            .await
            .remove_first(|a| {
                a.teacher_id == teacher_id && a.module_element_id == module_element_id
            }))
    }

    pub async fn list_teacher_module_elements_impl(
        &self,
        query: TeacherModuleElementQuery,
    ) -> Result<Vec<TeacherModuleElement>> {
        Ok(self.teacher_module_elements.read().await.filter(|a| {
            query.teacher_id.is_none_or(|t| a.teacher_id == t)
                && query
                    .module_element_id
                    .is_none_or(|e| a.module_element_id == e)
        }))
    }

    pub async fn list_module_elements_by_teacher_impl(
        &self,
        teacher_id: i64,
    ) -> Result<Vec<ModuleElement>> {
        let element_ids: HashSet<i64> = self
            .teacher_module_elements
            .read()
            .await
            .filter(|a| a.teacher_id == teacher_id)
            .into_iter()
            .map(|a| a.module_element_id)
            .collect();

        Ok(self
            .module_elements
            .read()
            .await
            .filter(|e| element_ids.contains(&e.id)))
    }

    pub async fn list_teachers_by_module_element_impl(
        &self,
        module_element_id: i64,
    ) -> Result<Vec<User>> {
        let teacher_ids: HashSet<i64> = self
            .teacher_module_elements
            .read()
            .await
            .filter(|a| a.module_element_id == module_element_id)
            .into_iter()
            .map(|a| a.teacher_id)
            .collect();

        Ok(self
            .users
            .read()
            .await
            .filter(|u| teacher_ids.contains(&u.id)))
    }
}

#[cfg(test)]
mod tests {
    use crate::models::module_elements::requests::{
        CreateModuleElementRequest, TeacherModuleElementQuery,
    };
    use crate::storage::{MemoryStorage, Storage};

    async fn seed_elements(storage: &MemoryStorage, count: usize) -> Vec<i64> {
        let mut ids = Vec::new();
        for i in 0..count {
            let element = storage
                .create_module_element(CreateModuleElementRequest {
                    name: format!("Element {i}"),
                    code: format!("E{i}"),
                    description: None,
                    module_id: 1,
                })
                .await
                .unwrap();
            ids.push(element.id);
        }
        ids
    }

    #[tokio::test]
    async fn test_elements_assigned_to_teacher_follow_element_order() {
        let storage = MemoryStorage::new();
        let ids = seed_elements(&storage, 4).await;

        // 分配顺序与模块单元顺序相反
        storage
            .assign_teacher_to_module_element(7, ids[3])
            .await
            .unwrap();
        storage
            .assign_teacher_to_module_element(7, ids[1])
            .await
            .unwrap();
        storage
            .assign_teacher_to_module_element(8, ids[2])
            .await
            .unwrap();

        let elements = storage.list_module_elements_by_teacher(7).await.unwrap();
        let got: Vec<i64> = elements.iter().map(|e| e.id).collect();
        assert_eq!(got, vec![ids[1], ids[3]]);
    }

    #[tokio::test]
    async fn test_duplicate_assignment_removed_one_at_a_time() {
        let storage = MemoryStorage::new();
        let ids = seed_elements(&storage, 1).await;

        storage
            .assign_teacher_to_module_element(3, ids[0])
            .await
            .unwrap();
        storage
            .assign_teacher_to_module_element(3, ids[0])
            .await
            .unwrap();

        assert!(
            storage
                .remove_teacher_from_module_element(3, ids[0])
                .await
                .unwrap()
        );
        let remaining = storage
            .list_teacher_module_elements(TeacherModuleElementQuery {
                teacher_id: Some(3),
                module_element_id: None,
            })
            .await
            .unwrap();
        assert_eq!(remaining.len(), 1);
        // 仍有一条分配，所以关联查询结果不变
        assert_eq!(
            storage.list_module_elements_by_teacher(3).await.unwrap().len(),
            1
        );

        assert!(
            storage
                .remove_teacher_from_module_element(3, ids[0])
                .await
                .unwrap()
        );
        assert!(
            !storage
                .remove_teacher_from_module_element(3, ids[0])
                .await
                .unwrap()
        );
        assert!(
            storage
                .list_module_elements_by_teacher(3)
                .await
                .unwrap()
                .is_empty()
        );
    }
}
