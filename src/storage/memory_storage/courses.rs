//! 课程存储操作

use super::MemoryStorage;
use crate::errors::Result;
use crate::models::courses::{
    entities::Course,
    requests::{CourseListQuery, CreateCourseRequest, UpdateCourseRequest},
};
use tracing::debug;

impl MemoryStorage {
    pub async fn create_course_impl(&self, req: CreateCourseRequest) -> Result<Course> {
        let course = self.courses.write().await.insert_with(|id| Course {
            id,
            name: req.name,
            code: req.code,
            description: req.description,
            department_id: req.department_id,
            absence_threshold: req.absence_threshold,
        });
        debug!("Created course {} ({})", course.id, course.code);
        Ok(course)
    }

    pub async fn get_course_by_id_impl(&self, id: i64) -> Result<Option<Course>> {
        Ok(self.courses.read().await.get(id))
    }

    pub async fn get_course_by_code_impl(&self, code: &str) -> Result<Option<Course>> {
        Ok(self.courses.read().await.find_first(|c| c.code == code))
    }

    pub async fn list_courses_impl(&self, query: CourseListQuery) -> Result<Vec<Course>> {
        Ok(self
            .courses
            .read()
            .await
            .filter(|c| query.department_id.is_none_or(|dept| c.department_id == dept)))
    }

    pub async fn update_course_impl(
        &self,
        id: i64,
        update: UpdateCourseRequest,
    ) -> Result<Option<Course>> {
        Ok(self.courses.write().await.update_with(id, |course| {
            if let Some(name) = update.name {
                course.name = name;
            }
            if let Some(code) = update.code {
                course.code = code;
            }
            if let Some(description) = update.description {
                course.description = description;
            }
            if let Some(department_id) = update.department_id {
                course.department_id = department_id;
            }
            if let Some(threshold) = update.absence_threshold {
                course.absence_threshold = threshold;
            }
        }))
    }

    /// 删除课程；模块、学生、分组中的 course_id 会变成悬空引用
    pub async fn delete_course_impl(&self, id: i64) -> Result<bool> {
        let removed = self.courses.write().await.remove(id);
        debug!("Delete course {}: {}", id, removed);
        Ok(removed)
    }
}

#[cfg(test)]
mod tests {
    use crate::models::courses::requests::{
        CourseListQuery, CreateCourseRequest, UpdateCourseRequest,
    };
    use crate::models::modules::requests::{CreateModuleRequest, ModuleListQuery};
    use crate::storage::{MemoryStorage, Storage};

    fn new_course(code: &str, department_id: i64) -> CreateCourseRequest {
        CreateCourseRequest {
            name: format!("Course {code}"),
            code: code.to_string(),
            description: None,
            department_id,
            absence_threshold: 3,
        }
    }

    #[tokio::test]
    async fn test_list_courses_by_department_is_exact_subset() {
        let storage = MemoryStorage::new();
        for (code, dept) in [("A1", 1), ("B1", 2), ("A2", 1), ("C1", 3), ("A3", 1)] {
            storage.create_course(new_course(code, dept)).await.unwrap();
        }

        let all = storage.list_courses(CourseListQuery::default()).await.unwrap();
        let filtered = storage
            .list_courses(CourseListQuery {
                department_id: Some(1),
            })
            .await
            .unwrap();

        let expected: Vec<_> = all.into_iter().filter(|c| c.department_id == 1).collect();
        assert_eq!(filtered, expected);
        let codes: Vec<_> = filtered.iter().map(|c| c.code.as_str()).collect();
        assert_eq!(codes, vec!["A1", "A2", "A3"]);
    }

    #[tokio::test]
    async fn test_threshold_update_keeps_other_fields() {
        let storage = MemoryStorage::new();
        let course = storage.create_course(new_course("CS101", 1)).await.unwrap();

        let updated = storage
            .update_course(
                course.id,
                UpdateCourseRequest {
                    absence_threshold: Some(5),
                    ..Default::default()
                },
            )
            .await
            .unwrap()
            .unwrap();

        assert_eq!(updated.absence_threshold, 5);
        assert_eq!(updated.code, course.code);
        assert_eq!(updated.name, course.name);
        assert_eq!(updated.department_id, course.department_id);
    }

    #[tokio::test]
    async fn test_delete_course_does_not_cascade() {
        let storage = MemoryStorage::new();
        let course = storage.create_course(new_course("CS102", 1)).await.unwrap();
        storage
            .create_module(CreateModuleRequest {
                name: "Graphs".into(),
                code: "M1".into(),
                description: None,
                course_id: course.id,
            })
            .await
            .unwrap();

        assert!(storage.delete_course(course.id).await.unwrap());
        assert!(!storage.delete_course(course.id).await.unwrap());

        let modules = storage
            .list_modules(ModuleListQuery {
                course_id: Some(course.id),
            })
            .await
            .unwrap();
        assert_eq!(modules.len(), 1);
    }
}
