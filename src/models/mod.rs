pub mod absences;
pub mod auth;
pub mod common;
pub mod courses;
pub mod departments;
pub mod module_elements;
pub mod modules;
pub mod sessions;
pub mod statistics;
pub mod student_groups;
pub mod students;
pub mod users;

pub use common::{ApiResponse, deserialize_some};

use serde::Serialize;

// 程序启动时间
#[derive(Debug, Clone, Serialize)]
pub struct AppStartTime {
    pub start_datetime: chrono::DateTime<chrono::Utc>,
}

// 业务错误码，随 ApiResponse.code 返回给前端
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    Success = 0,

    // 通用错误
    BadRequest = 1000,
    Unauthorized = 1001,
    Forbidden = 1002,
    NotFound = 1003,
    InternalServerError = 1004,
    RateLimitExceeded = 1005,

    // 认证
    AuthFailed = 2000,

    // 用户
    UserNotFound = 3000,
    UserAlreadyExists = 3001,
    UserNameInvalid = 3002,
    UserEmailInvalid = 3003,
    UserPasswordInvalid = 3004,
    CanNotDeleteCurrentUser = 3005,
    UserNotTeacher = 3006,

    // 组织结构（院系、课程、模块、模块单元）
    DepartmentNotFound = 4000,
    DepartmentAlreadyExists = 4001,
    CourseNotFound = 4100,
    CourseAlreadyExists = 4101,
    ModuleNotFound = 4200,
    ModuleElementNotFound = 4300,
    TeacherAssignmentNotFound = 4301,

    // 学生与分组
    StudentNotFound = 5000,
    StudentAlreadyExists = 5001,
    StudentGroupNotFound = 5100,
    GroupAssignmentNotFound = 5101,

    // 课次与考勤
    SessionNotFound = 6000,
    AbsenceNotFound = 6100,
}
