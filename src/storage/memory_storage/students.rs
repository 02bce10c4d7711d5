//! 学生存储操作

use super::MemoryStorage;
use crate::errors::Result;
use crate::models::students::{
    entities::Student,
    requests::{CreateStudentRequest, StudentListQuery, UpdateStudentRequest},
};
use tracing::debug;

impl MemoryStorage {
    pub async fn create_student_impl(&self, req: CreateStudentRequest) -> Result<Student> {
        let student = self.students.write().await.insert_with(|id| Student {
            id,
            student_id: req.student_id,
            first_name: req.first_name,
            last_name: req.last_name,
            email: req.email,
            course_id: req.course_id,
        });
        debug!("Created student {} ({})", student.id, student.student_id);
        Ok(student)
    }

    pub async fn get_student_by_id_impl(&self, id: i64) -> Result<Option<Student>> {
        Ok(self.students.read().await.get(id))
    }

    pub async fn get_student_by_student_id_impl(&self, student_id: &str) -> Result<Option<Student>> {
        Ok(self
            .students
            .read()
            .await
            .find_first(|s| s.student_id == student_id))
    }

    pub async fn get_student_by_email_impl(&self, email: &str) -> Result<Option<Student>> {
        Ok(self.students.read().await.find_first(|s| s.email == email))
    }

    pub async fn list_students_impl(&self, query: StudentListQuery) -> Result<Vec<Student>> {
        Ok(self
            .students
            .read()
            .await
            .filter(|s| query.course_id.is_none_or(|course| s.course_id == course)))
    }

    pub async fn update_student_impl(
        &self,
        id: i64,
        update: UpdateStudentRequest,
    ) -> Result<Option<Student>> {
        Ok(self.students.write().await.update_with(id, |student| {
            if let Some(student_id) = update.student_id {
                student.student_id = student_id;
            }
            if let Some(first_name) = update.first_name {
                student.first_name = first_name;
            }
            if let Some(last_name) = update.last_name {
                student.last_name = last_name;
            }
            if let Some(email) = update.email {
                student.email = email;
            }
            if let Some(course_id) = update.course_id {
                student.course_id = course_id;
            }
        }))
    }

    /// 删除学生；分组关系与考勤记录保留
    pub async fn delete_student_impl(&self, id: i64) -> Result<bool> {
        let removed = self.students.write().await.remove(id);
        debug!("Delete student {}: {}", id, removed);
        Ok(removed)
    }
}

#[cfg(test)]
mod tests {
    use crate::models::students::requests::{CreateStudentRequest, StudentListQuery};
    use crate::storage::{MemoryStorage, Storage};

    fn new_student(code: &str, course_id: i64) -> CreateStudentRequest {
        CreateStudentRequest {
            student_id: code.to_string(),
            first_name: "First".into(),
            last_name: code.to_string(),
            email: format!("{code}@students.example.edu"),
            course_id,
        }
    }

    #[tokio::test]
    async fn test_ids_strictly_increase_with_interleaved_deletes() {
        let storage = MemoryStorage::new();
        let mut last_id = 0;
        for i in 0..6 {
            let student = storage
                .create_student(new_student(&format!("S{i}"), 1))
                .await
                .unwrap();
            assert!(student.id > last_id);
            last_id = student.id;
            if i % 2 == 0 {
                assert!(storage.delete_student(student.id).await.unwrap());
            }
        }
        assert_eq!(last_id, 6);
        assert_eq!(
            storage
                .list_students(StudentListQuery::default())
                .await
                .unwrap()
                .len(),
            3
        );
    }

    #[tokio::test]
    async fn test_delete_missing_student_leaves_others_untouched() {
        let storage = MemoryStorage::new();
        let kept = storage.create_student(new_student("S1", 1)).await.unwrap();

        assert!(!storage.delete_student(99).await.unwrap());
        assert!(storage.delete_student(kept.id).await.unwrap());
        assert!(!storage.delete_student(kept.id).await.unwrap());

        let other = storage.create_student(new_student("S2", 1)).await.unwrap();
        assert!(!storage.delete_student(kept.id).await.unwrap());
        assert_eq!(
            storage.get_student_by_id(other.id).await.unwrap(),
            Some(other)
        );
    }

    #[tokio::test]
    async fn test_lookup_by_external_id() {
        let storage = MemoryStorage::new();
        storage.create_student(new_student("2024-001", 1)).await.unwrap();

        let found = storage
            .get_student_by_student_id("2024-001")
            .await
            .unwrap()
            .unwrap();
        assert_eq!(found.email, "2024-001@students.example.edu");
        assert!(
            storage
                .get_student_by_student_id("2024-002")
                .await
                .unwrap()
                .is_none()
        );
    }
}
