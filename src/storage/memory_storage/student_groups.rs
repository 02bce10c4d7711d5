//! 学生分组与分组成员存储操作

use std::collections::HashSet;

use super::MemoryStorage;
use crate::errors::Result;
use crate::models::{
    student_groups::{
        entities::{StudentGroup, StudentGroupAssignment},
        requests::{
            CreateStudentGroupRequest, GroupAssignmentQuery, StudentGroupListQuery,
            UpdateStudentGroupRequest,
        },
    },
    students::entities::Student,
};
use tracing::debug;

impl MemoryStorage {
    pub async fn create_student_group_impl(
        &self,
        req: CreateStudentGroupRequest,
    ) -> Result<StudentGroup> {
        let group = self
            .student_groups
            .write()
            .await
            .insert_with(|id| StudentGroup {
                id,
                name: req.name,
                group_type: req.group_type,
                course_id: req.course_id,
            });
        debug!("Created student group {} ({})", group.id, group.group_type);
        Ok(group)
    }

    pub async fn get_student_group_by_id_impl(&self, id: i64) -> Result<Option<StudentGroup>> {
        Ok(self.student_groups.read().await.get(id))
    }

    pub async fn list_student_groups_impl(
        &self,
        query: StudentGroupListQuery,
    ) -> Result<Vec<StudentGroup>> {
        Ok(self.student_groups.read().await.filter(|g| {
            query.course_id.is_none_or(|course| g.course_id == course)
                && query.group_type.is_none_or(|t| g.group_type == t)
        }))
    }

    pub async fn update_student_group_impl(
        &self,
        id: i64,
        update: UpdateStudentGroupRequest,
    ) -> Result<Option<StudentGroup>> {
        Ok(self.student_groups.write().await.update_with(id, |group| {
            if let Some(name) = update.name {
                group.name = name;
            }
            if let Some(group_type) = update.group_type {
                group.group_type = group_type;
            }
            if let Some(course_id) = update.course_id {
                group.course_id = course_id;
            }
        }))
    }

    pub async fn delete_student_group_impl(&self, id: i64) -> Result<bool> {
        let removed = self.student_groups.write().await.remove(id);
        debug!("Delete student group {}: {}", id, removed);
        Ok(removed)
    }

    /// 把学生加入分组，不检查重复
    pub async fn assign_student_to_group_impl(
        &self,
        student_id: i64,
        group_id: i64,
    ) -> Result<StudentGroupAssignment> {
        let assignment = self
            .student_group_assignments
            .write()
            .await
            .insert_with(|id| StudentGroupAssignment {
                id,
                student_id,
                group_id,
            });
        debug!("Assigned student {} to group {}", student_id, group_id);
        Ok(assignment)
    }

    pub async fn remove_student_from_group_impl(
        &self,
        student_id: i64,
        group_id: i64,
    ) -> Result<bool> {
        Ok(self
            .student_group_assignments
            .write()
            .await
            .remove_first(|a| a.student_id == student_id && a.group_id == group_id))
    }

    pub async fn list_group_assignments_impl(
        &self,
        query: GroupAssignmentQuery,
    ) -> Result<Vec<StudentGroupAssignment>> {
        Ok(self.student_group_assignments.read().await.filter(|a| {
            query.student_id.is_none_or(|s| a.student_id == s)
                && query.group_id.is_none_or(|g| a.group_id == g)
        }))
    }

    /// 分组内的学生，顺序跟随学生列表而非分配顺序
    pub async fn list_students_in_group_impl(&self, group_id: i64) -> Result<Vec<Student>> {
        let student_ids: HashSet<i64> = self
            .student_group_assignments
            .read()
            .await
            .filter(|a| a.group_id == group_id)
            .into_iter()
            .map(|a| a.student_id)
            .collect();

        Ok(self
            .students
            .read()
            .await
            .filter(|s| student_ids.contains(&s.id)))
    }

    pub async fn list_groups_of_student_impl(&self, student_id: i64) -> Result<Vec<StudentGroup>> {
        let group_ids: HashSet<i64> = self
            .student_group_assignments
            .read()
            .await
            .filter(|a| a.student_id == student_id)
            .into_iter()
            .map(|a| a.group_id)
            .collect();

        Ok(self
            .student_groups
            .read()
            .await
            .filter(|g| group_ids.contains(&g.id)))
    }
}

#[cfg(test)]
mod tests {
    use crate::models::student_groups::entities::GroupType;
    use crate::models::student_groups::requests::{
        CreateStudentGroupRequest, StudentGroupListQuery,
    };
    use crate::models::students::requests::CreateStudentRequest;
    use crate::storage::{MemoryStorage, Storage};

    async fn seed_students(storage: &MemoryStorage, count: usize) -> Vec<i64> {
        let mut ids = Vec::new();
        for i in 1..=count {
            let student = storage
                .create_student(CreateStudentRequest {
                    student_id: format!("S{i}"),
                    first_name: format!("Student{i}"),
                    last_name: "Test".into(),
                    email: format!("s{i}@example.edu"),
                    course_id: 1,
                })
                .await
                .unwrap();
            ids.push(student.id);
        }
        ids
    }

    async fn new_group(storage: &MemoryStorage, name: &str, group_type: GroupType) -> i64 {
        storage
            .create_student_group(CreateStudentGroupRequest {
                name: name.to_string(),
                group_type,
                course_id: 1,
            })
            .await
            .unwrap()
            .id
    }

    #[tokio::test]
    async fn test_students_in_group_join() {
        let storage = MemoryStorage::new();
        seed_students(&storage, 5).await;
        let group = new_group(&storage, "TD-A", GroupType::Td).await;
        let other = new_group(&storage, "TD-B", GroupType::Td).await;

        for student in [5, 1, 3] {
            storage.assign_student_to_group(student, group).await.unwrap();
        }
        storage.assign_student_to_group(2, other).await.unwrap();

        let members = storage.list_students_in_group(group).await.unwrap();
        let ids: Vec<i64> = members.iter().map(|s| s.id).collect();
        assert_eq!(ids, vec![1, 3, 5]);

        // 新增和移除立即可见
        storage.assign_student_to_group(4, group).await.unwrap();
        assert!(storage.remove_student_from_group(1, group).await.unwrap());
        let ids: Vec<i64> = storage
            .list_students_in_group(group)
            .await
            .unwrap()
            .iter()
            .map(|s| s.id)
            .collect();
        assert_eq!(ids, vec![3, 4, 5]);
    }

    #[tokio::test]
    async fn test_remove_missing_assignment_returns_false() {
        let storage = MemoryStorage::new();
        seed_students(&storage, 1).await;
        let group = new_group(&storage, "TP-1", GroupType::Tp).await;

        assert!(!storage.remove_student_from_group(1, group).await.unwrap());
    }

    #[tokio::test]
    async fn test_groups_of_student_and_type_filter() {
        let storage = MemoryStorage::new();
        seed_students(&storage, 1).await;
        let td = new_group(&storage, "TD-1", GroupType::Td).await;
        let tp = new_group(&storage, "TP-1", GroupType::Tp).await;
        storage.assign_student_to_group(1, tp).await.unwrap();
        storage.assign_student_to_group(1, td).await.unwrap();

        let groups = storage.list_groups_of_student(1).await.unwrap();
        let ids: Vec<i64> = groups.iter().map(|g| g.id).collect();
        assert_eq!(ids, vec![td, tp]);

        let tp_only = storage
            .list_student_groups(StudentGroupListQuery {
                course_id: Some(1),
                group_type: Some(GroupType::Tp),
            })
            .await
            .unwrap();
        assert_eq!(tp_only.len(), 1);
        assert_eq!(tp_only[0].id, tp);
    }
}
