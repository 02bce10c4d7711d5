//! 数据存储层
//!
//! `Storage` 是服务层唯一依赖的仓储接口：负责各实体集合的增删改查、
//! 外键过滤，以及跨集合的关联查询。存储层不做字段格式、唯一性或外键
//! 存在性校验，这些由服务层在调用前完成。
//!
//! 约定：
//! - 记录不存在时返回 `Ok(None)` / `Ok(false)`，而不是错误
//! - 列表按插入顺序返回，过滤只会剔除不匹配的记录
//! - 删除不会级联到子记录

use std::sync::Arc;

use crate::config::AppConfig;
use crate::errors::{AttendanceError, Result};
use crate::models::{
    absences::{
        entities::Absence,
        requests::{AbsenceListQuery, CreateAbsenceRequest, UpdateAbsenceRequest},
    },
    courses::{
        entities::Course,
        requests::{CourseListQuery, CreateCourseRequest, UpdateCourseRequest},
    },
    departments::{
        entities::Department,
        requests::{CreateDepartmentRequest, UpdateDepartmentRequest},
    },
    module_elements::{
        entities::{ModuleElement, TeacherModuleElement},
        requests::{
            CreateModuleElementRequest, ModuleElementListQuery, TeacherModuleElementQuery,
            UpdateModuleElementRequest,
        },
    },
    modules::{
        entities::Module,
        requests::{CreateModuleRequest, ModuleListQuery, UpdateModuleRequest},
    },
    sessions::{
        entities::Session,
        requests::{CreateSessionRequest, SessionListQuery, UpdateSessionRequest},
    },
    student_groups::{
        entities::{StudentGroup, StudentGroupAssignment},
        requests::{
            CreateStudentGroupRequest, GroupAssignmentQuery, StudentGroupListQuery,
            UpdateStudentGroupRequest,
        },
    },
    students::{
        entities::Student,
        requests::{CreateStudentRequest, StudentListQuery, UpdateStudentRequest},
    },
    users::{
        entities::User,
        requests::{CreateUserRequest, UpdateUserRequest, UserListQuery},
    },
};

pub mod memory_storage;

pub use memory_storage::MemoryStorage;

#[async_trait::async_trait]
pub trait Storage: Send + Sync {
    /// 用户管理方法
    // 创建用户（password 字段此时应已是哈希）
    async fn create_user(&self, user: CreateUserRequest) -> Result<User>;
    // 通过ID获取用户信息
    async fn get_user_by_id(&self, id: i64) -> Result<Option<User>>;
    // 通过用户名获取用户信息
    async fn get_user_by_username(&self, username: &str) -> Result<Option<User>>;
    // 通过邮箱获取用户信息
    async fn get_user_by_email(&self, email: &str) -> Result<Option<User>>;
    // 通过用户名或邮箱获取用户信息
    async fn get_user_by_username_or_email(&self, identifier: &str) -> Result<Option<User>>;
    // 列出用户
    async fn list_users(&self, query: UserListQuery) -> Result<Vec<User>>;
    // 更新用户信息
    async fn update_user(&self, id: i64, update: UpdateUserRequest) -> Result<Option<User>>;
    // 删除用户
    async fn delete_user(&self, id: i64) -> Result<bool>;
    // 用户总数
    async fn count_users(&self) -> Result<i64>;

    /// 院系管理方法
    async fn create_department(&self, department: CreateDepartmentRequest) -> Result<Department>;
    async fn get_department_by_id(&self, id: i64) -> Result<Option<Department>>;
    async fn get_department_by_name(&self, name: &str) -> Result<Option<Department>>;
    async fn list_departments(&self) -> Result<Vec<Department>>;
    async fn update_department(
        &self,
        id: i64,
        update: UpdateDepartmentRequest,
    ) -> Result<Option<Department>>;
    async fn delete_department(&self, id: i64) -> Result<bool>;

    /// 课程管理方法
    async fn create_course(&self, course: CreateCourseRequest) -> Result<Course>;
    async fn get_course_by_id(&self, id: i64) -> Result<Option<Course>>;
    // 通过课程代码获取课程
    async fn get_course_by_code(&self, code: &str) -> Result<Option<Course>>;
    async fn list_courses(&self, query: CourseListQuery) -> Result<Vec<Course>>;
    async fn update_course(&self, id: i64, update: UpdateCourseRequest)
    -> Result<Option<Course>>;
    async fn delete_course(&self, id: i64) -> Result<bool>;

    /// 模块管理方法
    async fn create_module(&self, module: CreateModuleRequest) -> Result<Module>;
    async fn get_module_by_id(&self, id: i64) -> Result<Option<Module>>;
    async fn list_modules(&self, query: ModuleListQuery) -> Result<Vec<Module>>;
    async fn update_module(&self, id: i64, update: UpdateModuleRequest)
    -> Result<Option<Module>>;
    async fn delete_module(&self, id: i64) -> Result<bool>;

    /// 模块单元管理方法
    async fn create_module_element(
        &self,
        element: CreateModuleElementRequest,
    ) -> Result<ModuleElement>;
    async fn get_module_element_by_id(&self, id: i64) -> Result<Option<ModuleElement>>;
    async fn list_module_elements(
        &self,
        query: ModuleElementListQuery,
    ) -> Result<Vec<ModuleElement>>;
    async fn update_module_element(
        &self,
        id: i64,
        update: UpdateModuleElementRequest,
    ) -> Result<Option<ModuleElement>>;
    async fn delete_module_element(&self, id: i64) -> Result<bool>;

    /// 教师分配方法
    // 分配教师到模块单元（不去重）
    async fn assign_teacher_to_module_element(
        &self,
        teacher_id: i64,
        module_element_id: i64,
    ) -> Result<TeacherModuleElement>;
    // 移除第一条匹配的分配记录
    async fn remove_teacher_from_module_element(
        &self,
        teacher_id: i64,
        module_element_id: i64,
    ) -> Result<bool>;
    async fn list_teacher_module_elements(
        &self,
        query: TeacherModuleElementQuery,
    ) -> Result<Vec<TeacherModuleElement>>;
    // 教师负责的模块单元（按模块单元列表顺序）
    async fn list_module_elements_by_teacher(&self, teacher_id: i64)
    -> Result<Vec<ModuleElement>>;
    // 模块单元的授课教师（按用户列表顺序）
    async fn list_teachers_by_module_element(&self, module_element_id: i64) -> Result<Vec<User>>;

    /// 学生管理方法
    async fn create_student(&self, student: CreateStudentRequest) -> Result<Student>;
    async fn get_student_by_id(&self, id: i64) -> Result<Option<Student>>;
    // 通过外部学号获取学生
    async fn get_student_by_student_id(&self, student_id: &str) -> Result<Option<Student>>;
    async fn get_student_by_email(&self, email: &str) -> Result<Option<Student>>;
    async fn list_students(&self, query: StudentListQuery) -> Result<Vec<Student>>;
    async fn update_student(
        &self,
        id: i64,
        update: UpdateStudentRequest,
    ) -> Result<Option<Student>>;
    async fn delete_student(&self, id: i64) -> Result<bool>;

    /// 学生分组管理方法
    async fn create_student_group(&self, group: CreateStudentGroupRequest)
    -> Result<StudentGroup>;
    async fn get_student_group_by_id(&self, id: i64) -> Result<Option<StudentGroup>>;
    async fn list_student_groups(&self, query: StudentGroupListQuery)
    -> Result<Vec<StudentGroup>>;
    async fn update_student_group(
        &self,
        id: i64,
        update: UpdateStudentGroupRequest,
    ) -> Result<Option<StudentGroup>>;
    async fn delete_student_group(&self, id: i64) -> Result<bool>;

    /// 分组成员方法
    // 把学生加入分组（不去重）
    async fn assign_student_to_group(
        &self,
        student_id: i64,
        group_id: i64,
    ) -> Result<StudentGroupAssignment>;
    // 移除第一条匹配的分组记录
    async fn remove_student_from_group(&self, student_id: i64, group_id: i64) -> Result<bool>;
    async fn list_group_assignments(
        &self,
        query: GroupAssignmentQuery,
    ) -> Result<Vec<StudentGroupAssignment>>;
    // 分组内的学生（按学生列表顺序）
    async fn list_students_in_group(&self, group_id: i64) -> Result<Vec<Student>>;
    // 学生所在的分组（按分组列表顺序）
    async fn list_groups_of_student(&self, student_id: i64) -> Result<Vec<StudentGroup>>;

    /// 课次管理方法
    async fn create_session(&self, session: CreateSessionRequest) -> Result<Session>;
    async fn get_session_by_id(&self, id: i64) -> Result<Option<Session>>;
    async fn list_sessions(&self, query: SessionListQuery) -> Result<Vec<Session>>;
    async fn update_session(
        &self,
        id: i64,
        update: UpdateSessionRequest,
    ) -> Result<Option<Session>>;
    async fn delete_session(&self, id: i64) -> Result<bool>;

    /// 考勤记录方法
    async fn create_absence(&self, absence: CreateAbsenceRequest) -> Result<Absence>;
    // 按输入顺序逐条创建，非原子操作
    async fn batch_create_absences(&self, absences: Vec<CreateAbsenceRequest>)
    -> Result<Vec<Absence>>;
    async fn get_absence_by_id(&self, id: i64) -> Result<Option<Absence>>;
    async fn list_absences(&self, query: AbsenceListQuery) -> Result<Vec<Absence>>;
    async fn update_absence(
        &self,
        id: i64,
        update: UpdateAbsenceRequest,
    ) -> Result<Option<Absence>>;
    async fn delete_absence(&self, id: i64) -> Result<bool>;

    // 某个课次的全部考勤记录
    async fn list_absences_by_session(&self, session_id: i64) -> Result<Vec<Absence>> {
        self.list_absences(AbsenceListQuery {
            session_id: Some(session_id),
            ..Default::default()
        })
        .await
    }

    // 某个学生的全部考勤记录
    async fn list_absences_by_student(&self, student_id: i64) -> Result<Vec<Absence>> {
        self.list_absences(AbsenceListQuery {
            student_id: Some(student_id),
            ..Default::default()
        })
        .await
    }
}

/// 根据配置创建存储后端
pub async fn create_storage() -> Result<Arc<dyn Storage>> {
    let config = AppConfig::get();
    create_storage_with_backend(&config.storage.backend)
}

pub fn create_storage_with_backend(backend: &str) -> Result<Arc<dyn Storage>> {
    match backend {
        "memory" => Ok(Arc::new(MemoryStorage::new())),
        other => Err(AttendanceError::storage_plugin_not_found(format!(
            "未知的存储后端: '{other}'. 支持: memory"
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_backend_is_available() {
        assert!(create_storage_with_backend("memory").is_ok());
    }

    #[test]
    fn test_unknown_backend_is_rejected() {
        let err = create_storage_with_backend("postgres").err().unwrap();
        assert_eq!(err.code(), "E003");
    }
}
