//! 内存存储实现
//!
//! 每个实体集合各自持有一把 `RwLock`，同一集合上的读写互斥，
//! 不同集合之间不保证顺序。关联查询依次获取读锁，任何操作都不会在持有
//! 写锁的同时等待另一把锁。数据只存在于进程内，重启即丢失。

mod absences;
mod courses;
mod departments;
mod module_elements;
mod modules;
mod sessions;
mod student_groups;
mod students;
mod table;
mod users;

use tokio::sync::RwLock;

use table::Table;

use crate::errors::Result;
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
use crate::storage::Storage;

/// 内存存储实现
#[derive(Debug, Default)]
pub struct MemoryStorage {
    users: RwLock<Table<User>>,
    departments: RwLock<Table<Department>>,
    courses: RwLock<Table<Course>>,
    modules: RwLock<Table<Module>>,
    module_elements: RwLock<Table<ModuleElement>>,
    teacher_module_elements: RwLock<Table<TeacherModuleElement>>,
    students: RwLock<Table<Student>>,
    student_groups: RwLock<Table<StudentGroup>>,
    student_group_assignments: RwLock<Table<StudentGroupAssignment>>,
    sessions: RwLock<Table<Session>>,
    absences: RwLock<Table<Absence>>,
}

impl MemoryStorage {
    /// 创建空的存储实例，所有集合的编号都从 1 开始
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait::async_trait]
impl Storage for MemoryStorage {
    // 用户
    async fn create_user(&self, user: CreateUserRequest) -> Result<User> {
        self.create_user_impl(user).await
    }

    async fn get_user_by_id(&self, id: i64) -> Result<Option<User>> {
        self.get_user_by_id_impl(id).await
    }

    async fn get_user_by_username(&self, username: &str) -> Result<Option<User>> {
        self.get_user_by_username_impl(username).await
    }

    async fn get_user_by_email(&self, email: &str) -> Result<Option<User>> {
        self.get_user_by_email_impl(email).await
    }

    async fn get_user_by_username_or_email(&self, identifier: &str) -> Result<Option<User>> {
        self.get_user_by_username_or_email_impl(identifier).await
    }

    async fn list_users(&self, query: UserListQuery) -> Result<Vec<User>> {
        self.list_users_impl(query).await
    }

    async fn update_user(&self, id: i64, update: UpdateUserRequest) -> Result<Option<User>> {
        self.update_user_impl(id, update).await
    }

    async fn delete_user(&self, id: i64) -> Result<bool> {
        self.delete_user_impl(id).await
    }

    async fn count_users(&self) -> Result<i64> {
        self.count_users_impl().await
    }

    // 院系
    async fn create_department(&self, department: CreateDepartmentRequest) -> Result<Department> {
        self.create_department_impl(department).await
    }

    async fn get_department_by_id(&self, id: i64) -> Result<Option<Department>> {
        self.get_department_by_id_impl(id).await
    }

    async fn get_department_by_name(&self, name: &str) -> Result<Option<Department>> {
        self.get_department_by_name_impl(name).await
    }

    async fn list_departments(&self) -> Result<Vec<Department>> {
        self.list_departments_impl().await
    }

    async fn update_department(
        &self,
        id: i64,
        update: UpdateDepartmentRequest,
    ) -> Result<Option<Department>> {
        self.update_department_impl(id, update).await
    }

    async fn delete_department(&self, id: i64) -> Result<bool> {
        self.delete_department_impl(id).await
    }

    // 课程
    async fn create_course(&self, course: CreateCourseRequest) -> Result<Course> {
        self.create_course_impl(course).await
    }

    async fn get_course_by_id(&self, id: i64) -> Result<Option<Course>> {
        self.get_course_by_id_impl(id).await
    }

    async fn get_course_by_code(&self, code: &str) -> Result<Option<Course>> {
        self.get_course_by_code_impl(code).await
    }

    async fn list_courses(&self, query: CourseListQuery) -> Result<Vec<Course>> {
        self.list_courses_impl(query).await
    }

    async fn update_course(
        &self,
        id: i64,
        update: UpdateCourseRequest,
    ) -> Result<Option<Course>> {
        self.update_course_impl(id, update).await
    }

    async fn delete_course(&self, id: i64) -> Result<bool> {
        self.delete_course_impl(id).await
    }

    // 模块
    async fn create_module(&self, module: CreateModuleRequest) -> Result<Module> {
        self.create_module_impl(module).await
    }

    async fn get_module_by_id(&self, id: i64) -> Result<Option<Module>> {
        self.get_module_by_id_impl(id).await
    }

    async fn list_modules(&self, query: ModuleListQuery) -> Result<Vec<Module>> {
        self.list_modules_impl(query).await
    }

    async fn update_module(
        &self,
        id: i64,
        update: UpdateModuleRequest,
    ) -> Result<Option<Module>> {
        self.update_module_impl(id, update).await
    }

    async fn delete_module(&self, id: i64) -> Result<bool> {
        self.delete_module_impl(id).await
    }

    // 模块单元与教师分配
    async fn create_module_element(
        &self,
        element: CreateModuleElementRequest,
    ) -> Result<ModuleElement> {
        self.create_module_element_impl(element).await
    }

    async fn get_module_element_by_id(&self, id: i64) -> Result<Option<ModuleElement>> {
        self.get_module_element_by_id_impl(id).await
    }

    async fn list_module_elements(
        &self,
        query: ModuleElementListQuery,
    ) -> Result<Vec<ModuleElement>> {
        self.list_module_elements_impl(query).await
    }

    async fn update_module_element(
        &self,
        id: i64,
        update: UpdateModuleElementRequest,
    ) -> Result<Option<ModuleElement>> {
        self.update_module_element_impl(id, update).await
    }

    async fn delete_module_element(&self, id: i64) -> Result<bool> {
        self.delete_module_element_impl(id).await
    }

    async fn assign_teacher_to_module_element(
        &self,
        teacher_id: i64,
        module_element_id: i64,
    ) -> Result<TeacherModuleElement> {
        self.assign_teacher_to_module_element_impl(teacher_id, module_element_id)
            .await
    }

    async fn remove_teacher_from_module_element(
        &self,
        teacher_id: i64,
        module_element_id: i64,
    ) -> Result<bool> {
        self.remove_teacher_from_module_element_impl(teacher_id, module_element_id)
            .await
    }

    async fn list_teacher_module_elements(
        &self,
        query: TeacherModuleElementQuery,
    ) -> Result<Vec<TeacherModuleElement>> {
        self.list_teacher_module_elements_impl(query).await
    }

    async fn list_module_elements_by_teacher(
        &self,
        teacher_id: i64,
    ) -> Result<Vec<ModuleElement>> {
        self.list_module_elements_by_teacher_impl(teacher_id).await
    }

    async fn list_teachers_by_module_element(&self, module_element_id: i64) -> Result<Vec<User>> {
        self.list_teachers_by_module_element_impl(module_element_id)
            .await
    }

    // 学生
    async fn create_student(&self, student: CreateStudentRequest) -> Result<Student> {
        self.create_student_impl(student).await
    }

    async fn get_student_by_id(&self, id: i64) -> Result<Option<Student>> {
        self.get_student_by_id_impl(id).await
    }

    async fn get_student_by_student_id(&self, student_id: &str) -> Result<Option<Student>> {
        self.get_student_by_student_id_impl(student_id).await
    }

    async fn get_student_by_email(&self, email: &str) -> Result<Option<Student>> {
        self.get_student_by_email_impl(email).await
    }

    async fn list_students(&self, query: StudentListQuery) -> Result<Vec<Student>> {
        self.list_students_impl(query).await
    }

    async fn update_student(
        &self,
        id: i64,
        update: UpdateStudentRequest,
    ) -> Result<Option<Student>> {
        self.update_student_impl(id, update).await
    }

    async fn delete_student(&self, id: i64) -> Result<bool> {
        self.delete_student_impl(id).await
    }

    // 学生分组
    async fn create_student_group(
        &self,
        group: CreateStudentGroupRequest,
    ) -> Result<StudentGroup> {
        self.create_student_group_impl(group).await
    }

    async fn get_student_group_by_id(&self, id: i64) -> Result<Option<StudentGroup>> {
        self.get_student_group_by_id_impl(id).await
    }

    async fn list_student_groups(
        &self,
        query: StudentGroupListQuery,
    ) -> Result<Vec<StudentGroup>> {
        self.list_student_groups_impl(query).await
    }

    async fn update_student_group(
        &self,
        id: i64,
        update: UpdateStudentGroupRequest,
    ) -> Result<Option<StudentGroup>> {
        self.update_student_group_impl(id, update).await
    }

    async fn delete_student_group(&self, id: i64) -> Result<bool> {
        self.delete_student_group_impl(id).await
    }

    async fn assign_student_to_group(
        &self,
        student_id: i64,
        group_id: i64,
    ) -> Result<StudentGroupAssignment> {
        self.assign_student_to_group_impl(student_id, group_id)
            .await
    }

    async fn remove_student_from_group(&self, student_id: i64, group_id: i64) -> Result<bool> {
        self.remove_student_from_group_impl(student_id, group_id)
            .await
    }

    async fn list_group_assignments(
        &self,
        query: GroupAssignmentQuery,
    ) -> Result<Vec<StudentGroupAssignment>> {
        self.list_group_assignments_impl(query).await
    }

    async fn list_students_in_group(&self, group_id: i64) -> Result<Vec<Student>> {
        self.list_students_in_group_impl(group_id).await
    }

    async fn list_groups_of_student(&self, student_id: i64) -> Result<Vec<StudentGroup>> {
        self.list_groups_of_student_impl(student_id).await
    }

    // 课次
    async fn create_session(&self, session: CreateSessionRequest) -> Result<Session> {
        self.create_session_impl(session).await
    }

    async fn get_session_by_id(&self, id: i64) -> Result<Option<Session>> {
        self.get_session_by_id_impl(id).await
    }

    async fn list_sessions(&self, query: SessionListQuery) -> Result<Vec<Session>> {
        self.list_sessions_impl(query).await
    }

    async fn update_session(
        &self,
        id: i64,
        update: UpdateSessionRequest,
    ) -> Result<Option<Session>> {
        self.update_session_impl(id, update).await
    }

    async fn delete_session(&self, id: i64) -> Result<bool> {
        self.delete_session_impl(id).await
    }

    // 考勤记录
    async fn create_absence(&self, absence: CreateAbsenceRequest) -> Result<Absence> {
        self.create_absence_impl(absence).await
    }

    async fn batch_create_absences(
        &self,
        absences: Vec<CreateAbsenceRequest>,
    ) -> Result<Vec<Absence>> {
        self.batch_create_absences_impl(absences).await
    }

    async fn get_absence_by_id(&self, id: i64) -> Result<Option<Absence>> {
        self.get_absence_by_id_impl(id).await
    }

    async fn list_absences(&self, query: AbsenceListQuery) -> Result<Vec<Absence>> {
        self.list_absences_impl(query).await
    }

    async fn update_absence(
        &self,
        id: i64,
        update: UpdateAbsenceRequest,
    ) -> Result<Option<Absence>> {
        self.update_absence_impl(id, update).await
    }

    async fn delete_absence(&self, id: i64) -> Result<bool> {
        self.delete_absence_impl(id).await
    }
}
